
use std::sync::atomic::{AtomicUsize, Ordering,};

/// The index of the sentinel [`Node`] in every `ForwardList`.
pub const SENTINEL: usize = 0;
/// The stamp carried by the null cursor; no [`Node`] is ever given it.
pub const NO_STAMP: usize = 0;

/// The source of [`Node`] stamps, unique across every list in the process.
static STAMPS: AtomicUsize = AtomicUsize::new(NO_STAMP + 1,);

/// Returns a stamp no other [`Node`] has been given.
#[inline]
pub fn next_stamp() -> usize { STAMPS.fetch_add(1, Ordering::Relaxed,) }

/// The contents of a [`Node`].
#[derive(Debug,)]
pub enum Slot<T,> {
  /// The before-begin node; it never holds a value.
  Sentinel,
  /// A live element of the list.
  Value(T),
  /// A destroyed node waiting to be reused.
  Vacant,
}

/// A node in a singly linked list.
#[derive(Debug,)]
pub struct Node<T,> {
  /// The contents of this [`Node`].
  pub slot: Slot<T,>,
  /// The index of the next [`Node`].
  ///
  /// For a vacant [`Node`] this is the next entry of the vacant stack instead.
  pub next: Option<usize>,
  /// Identifies this occupant of the slot; cursors must present it to use the [`Node`].
  pub stamp: usize,
}

impl<T,> Node<T,> {
  /// Create the sentinel [`Node`].
  #[inline]
  pub fn sentinel() -> Self {
    Self { slot: Slot::Sentinel, next: None, stamp: next_stamp(), }
  }
  /// Create a new, populated [`Node`].
  ///
  /// # Params
  ///
  /// value --- The value to populate the [`Node`] with.
  /// next --- The [`Node`] following the new one.
  #[inline]
  pub fn new(value: T, next: Option<usize>,) -> Self {
    Self { slot: Slot::Value(value), next, stamp: next_stamp(), }
  }
  /// `true` if this [`Node`] may be linked from, i.e. it is the sentinel or holds a value.
  #[inline]
  pub fn is_linked(&self,) -> bool {
    !matches!(self.slot, Slot::Vacant)
  }
  /// `true` if this [`Node`] is linked and is the occupant a cursor stamped `stamp` saw.
  #[inline]
  pub fn is_stamped(&self, stamp: usize,) -> bool {
    self.is_linked() && self.stamp == stamp
  }
  /// Returns the value of this [`Node`].
  #[inline]
  pub fn value(&self,) -> Option<&T> {
    match &self.slot {
      Slot::Value(value) => Some(value),
      _ => None,
    }
  }
  /// Returns the value of this [`Node`] mutably.
  #[inline]
  pub fn value_mut(&mut self,) -> Option<&mut T> {
    match &mut self.slot {
      Slot::Value(value) => Some(value),
      _ => None,
    }
  }
  /// Empties this [`Node`] and pushes it onto the vacant stack headed by `empty`.
  ///
  /// The value is returned.
  ///
  /// # Params
  ///
  /// empty --- The current head of the vacant stack.
  pub fn vacate(&mut self, empty: Option<usize>,) -> Option<T> {
    debug_assert!(matches!(self.slot, Slot::Value(_)), "only value nodes can be vacated",);

    self.next = empty;
    self.stamp = NO_STAMP;
    match std::mem::replace(&mut self.slot, Slot::Vacant,) {
      Slot::Value(value) => Some(value),
      _ => None,
    }
  }
  /// Pops this [`Node`] off the head of the vacant stack, filling it with `value`.
  ///
  /// Returns the new head of the vacant stack.
  ///
  /// # Params
  ///
  /// value --- The value to populate the [`Node`] with.
  /// next --- The [`Node`] following this one once it is linked.
  pub fn occupy(&mut self, value: T, next: Option<usize>,) -> Option<usize> {
    debug_assert!(matches!(self.slot, Slot::Vacant), "vacant stack holds a live node",);

    self.slot = Slot::Value(value);
    self.stamp = next_stamp();
    std::mem::replace(&mut self.next, next,)
  }
}
