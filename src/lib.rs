//! [`forward-list`] is an implementation of a Singly-Linked-List using an underlying [`Vec`]
//! to store the nodes, which are linked by index behind a permanent sentinel node.
//!
//! Positions in a list are [`Cursor`]s: plain tokens handed back to the list to read,
//! advance, or splice after. Misusing a cursor panics; every panicking operation has a
//! `try_` form returning a [`CursorError`].
//!
//! ```
//! use forward_list::flist;
//!
//! let mut list = flist![1, 2, 3];
//! let pos = list.before_begin_mut();
//! list.insert_after(pos, 0);
//! assert_eq!(list, flist![0, 1, 2, 3]);
//! ```
//!
//! Author --- daniel.bechaz@gmail.com
//! Last Modified --- 2026-10-19

use std::{
    cmp::{PartialEq, PartialOrd, Ord, Ordering,},
    hash::{Hash, Hasher,},
    iter::{FromIterator, Extend,},
    fmt::{self, Debug,},
    mem,
};
use log::{debug, trace,};

mod nodes;
mod iters;
mod cursors;
mod error;
#[cfg(feature = "serde")]
mod serde_impls;

use self::nodes::{Node, SENTINEL, NO_STAMP,};
use self::cursors::new_cursor;
pub use self::cursors::{Access, Cursor, CursorRef, CursorMut, Shared, Exclusive,};
pub use self::iters::{Iter, IterMut, IntoIter,};
pub use self::error::CursorError;

/// Creates a [`ForwardList`] holding the passed values in order.
///
/// ```
/// use forward_list::flist;
///
/// let list = flist![1, 2, 3];
/// assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
/// ```
#[macro_export]
macro_rules! flist {
    () => ($crate::ForwardList::new());
    ($($value:expr),+ $(,)?) => ($crate::ForwardList::from([$($value),+]));
}

/// Unwraps the result of a cursor operation, panicking at the caller's location.
#[inline]
#[track_caller]
pub(crate) fn expect_cursor<R,>(result: Result<R, CursorError,>,) -> R {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}

/// Logs a rejected checked operation and passes the error on.
#[inline]
fn rejected(op: &'static str, e: CursorError,) -> CursorError {
    debug!("`ForwardList::{}` rejected: {}", op, e,);

    e
}

/// An implementation of a singly-linked-list backed by a `Vec` of index linked nodes.
pub struct ForwardList<T,> {
    /// The [`Node`]s of the [`ForwardList`]; the sentinel is always at [`SENTINEL`].
    nodes: Vec<Node<T,>,>,
    /// The number of values in the [`ForwardList`].
    len: usize,
    /// The head of the stack of vacant [`Node`]s.
    empty: Option<usize,>,
}

impl<T,> ForwardList<T,> {
    /// Creates a new [`Node`] and returns its index.
    ///
    /// # Params
    ///
    /// value --- The value to populate the [`Node`] with.
    /// next --- The [`Node`] which will follow the new one.
    fn new_node(&mut self, value: T, next: Option<usize>,) -> usize {
        //Increase the length.
        self.len += 1;

        match self.empty {
            //There is a vacant `Node`.
            Some(new) => {
                //Pop and populate the vacant `Node`.
                self.empty = self.nodes[new].occupy(value, next,);

                new
            },
            //There is no vacant `Node`.
            None => {
                let new = self.nodes.len();

                self.nodes.push(Node::new(value, next,),);

                new
            },
        }
    }
    /// Empties the passed [`Node`] and places it on the vacant stack.
    ///
    /// The [`Node`] must already be unlinked from the chain. Once the last value is
    /// removed the vacant [`Node`]s are released.
    ///
    /// # Params
    ///
    /// node --- The [`Node`] to remove.
    fn remove_node(&mut self, node: usize,) -> Option<T> {
        //Decrement the length.
        self.len -= 1;

        let value = self.nodes[node].vacate(self.empty,);
        //Push the `Node` onto the vacant stack.
        self.empty = Some(node);

        if self.len == 0 {
            //Nothing is linked but the sentinel.
            self.nodes.truncate(SENTINEL + 1,);
            self.nodes.shrink_to_fit();
            self.empty = None;
        }

        value
    }
    /// Splices a new [`Node`] in after `at` and returns its index.
    ///
    /// # Params
    ///
    /// at --- The index of a linked [`Node`].
    /// value --- The value to insert.
    fn link_after(&mut self, at: usize, value: T,) -> usize {
        debug_assert!(self.nodes[at].is_linked(), "linking after a vacant `Node`: {}", at,);

        let new = self.new_node(value, self.nodes[at].next,);

        self.nodes[at].next = Some(new);
        new
    }
    /// Unlinks and empties the [`Node`] after `at`, returning its value.
    ///
    /// # Params
    ///
    /// at --- The index of a linked [`Node`].
    fn unlink_after(&mut self, at: usize,) -> Option<T> {
        debug_assert!(self.nodes[at].is_linked(), "unlinking after a vacant `Node`: {}", at,);

        let node = self.nodes[at].next?;

        //Relink around `node`.
        self.nodes[at].next = self.nodes[node].next;
        self.remove_node(node,)
    }
    /// Returns the index of the last linked [`Node`] (the sentinel if empty).
    fn last(&self,) -> usize {
        let mut node = SENTINEL;

        while let Some(next) = self.nodes[node].next { node = next }

        node
    }
    /// Returns a cursor to the [`Node`] at `index`, the null cursor for `None`.
    #[inline]
    pub(crate) fn cursor<A: Access,>(&self, index: Option<usize>,) -> Cursor<T, A,> {
        new_cursor(index, index.map_or(NO_STAMP, |index| self.nodes[index].stamp),)
    }
    /// Returns the index of the [`Node`] `pos` references.
    ///
    /// The [`Node`] must still be the one the cursor was taken from; cursors from other
    /// lists and cursors to destroyed [`Node`]s never match its stamp.
    ///
    /// # Params
    ///
    /// pos --- A cursor to the sentinel or a value of this list.
    pub(crate) fn anchor<A: Access,>(&self, pos: Cursor<T, A,>,) -> Result<usize, CursorError,> {
        let index = pos.index().ok_or(CursorError::End)?;

        match self.nodes.get(index,) {
            Some(node) if node.is_stamped(pos.stamp(),) => Ok(index),
            _ => Err(CursorError::Dangling),
        }
    }
    /// Returns the value of the linked [`Node`] at `index`.
    #[inline]
    pub(crate) fn value(&self, index: usize,) -> Result<&T, CursorError,> {
        self.nodes[index].value().ok_or(CursorError::BeforeBegin)
    }
    /// Returns the value of the linked [`Node`] at `index` mutably.
    #[inline]
    pub(crate) fn value_mut(&mut self, index: usize,) -> Result<&mut T, CursorError,> {
        self.nodes[index].value_mut().ok_or(CursorError::BeforeBegin)
    }
}

impl<T,> ForwardList<T,> {
    /// Returns a new empty [`ForwardList`].
    #[inline]
    pub fn new() -> Self {
        Self { nodes: vec![Node::sentinel()], len: 0, empty: None, }
    }
    /// Returns the number of values in this [`ForwardList`].
    #[inline]
    pub const fn len(&self) -> usize { self.len }
    /// `true` if this [`ForwardList`] is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.len() == 0 }
    /// Returns the first value.
    #[inline]
    pub fn front(&self) -> Option<&T,> {
        self.nodes[SENTINEL].next.and_then(|head| self.nodes[head].value())
    }
    /// Returns the first value.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T,> {
        let head = self.nodes[SENTINEL].next?;

        self.nodes[head].value_mut()
    }
    /// Pushes a value onto the front of the [`ForwardList`].
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    #[inline]
    pub fn push_front(&mut self, value: T,) { self.link_after(SENTINEL, value,); }
    /// Checked form of [`pop_front`](#method.pop_front).
    pub fn try_pop_front(&mut self,) -> Result<T, CursorError,> {
        self.unlink_after(SENTINEL,)
            .ok_or_else(|| rejected("pop_front", CursorError::Empty,))
    }
    /// Pops the first value off the front of the [`ForwardList`].
    ///
    /// # Panics
    ///
    /// * If the [`ForwardList`] is empty.
    #[inline]
    #[track_caller]
    pub fn pop_front(&mut self,) -> T { expect_cursor(self.try_pop_front(),) }
    /// Drops every value front to back.
    ///
    /// Storage for removed values is kept for reuse until the list becomes empty, at
    /// which point all but the sentinel [`Node`] is released; `clear` always ends there.
    pub fn clear(&mut self) {
        if self.len > 0 { trace!("clearing {} nodes", self.len,) }

        //Drop the values in order.
        while self.unlink_after(SENTINEL,).is_some() {}
        debug_assert_eq!(self.nodes.len(), SENTINEL + 1, "`ForwardList` kept vacant nodes after clearing",);
    }
    /// Exchanges the contents of two [`ForwardList`]s without moving any values.
    ///
    /// Cursors follow their nodes: a cursor taken from `self` is afterwards valid for
    /// `other`, and the reverse.
    ///
    /// # Params
    ///
    /// other --- The [`ForwardList`] to swap with.
    #[inline]
    pub fn swap(&mut self, other: &mut Self,) { mem::swap(self, other,) }
    /// Returns a cursor to the position before the first value.
    #[inline]
    pub fn before_begin(&self) -> CursorRef<T,> { self.cursor(Some(SENTINEL),) }
    /// Returns a mutable cursor to the position before the first value.
    #[inline]
    pub fn before_begin_mut(&mut self) -> CursorMut<T,> { self.cursor(Some(SENTINEL),) }
    /// Returns a cursor to the first value, or the null cursor if empty.
    #[inline]
    pub fn begin(&self) -> CursorRef<T,> { self.cursor(self.nodes[SENTINEL].next,) }
    /// Returns a mutable cursor to the first value, or the null cursor if empty.
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<T,> { self.cursor(self.nodes[SENTINEL].next,) }
    /// Returns the null cursor.
    #[inline]
    pub fn end(&self) -> CursorRef<T,> { self.cursor(None,) }
    /// Returns the mutable null cursor.
    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<T,> { self.cursor(None,) }
    /// Checked form of [`insert_after`](#method.insert_after); on failure `value` is dropped.
    pub fn try_insert_after<A: Access,>(&mut self, pos: Cursor<T, A,>, value: T,) -> Result<CursorMut<T,>, CursorError,> {
        let at = self.anchor(pos,).map_err(|e| rejected("insert_after", e,),)?;
        let new = self.link_after(at, value,);

        Ok(self.cursor(Some(new),))
    }
    /// Inserts `value` directly after `pos` and returns a cursor to it.
    ///
    /// # Params
    ///
    /// pos --- The cursor to insert after; the before-begin cursor inserts at the front.
    /// value --- The value to insert.
    ///
    /// # Panics
    ///
    /// * If `pos` is the null cursor.
    /// * If `pos` references a destroyed node or a node of another list.
    #[inline]
    #[track_caller]
    pub fn insert_after<A: Access,>(&mut self, pos: Cursor<T, A,>, value: T,) -> CursorMut<T,> {
        expect_cursor(self.try_insert_after(pos, value,),)
    }
    /// Checked form of [`erase_after`](#method.erase_after).
    pub fn try_erase_after<A: Access,>(&mut self, pos: Cursor<T, A,>,) -> Result<CursorMut<T,>, CursorError,> {
        let at = self.anchor(pos,).map_err(|e| rejected("erase_after", e,),)?;

        match self.unlink_after(at,) {
            None => Err(rejected("erase_after", CursorError::NothingAfter,)),
            Some(_) => Ok(self.cursor(self.nodes[at].next,)),
        }
    }
    /// Drops the value directly after `pos` and returns a cursor to the value now
    /// following `pos` (the null cursor if there is none).
    ///
    /// # Params
    ///
    /// pos --- The cursor to erase after; the before-begin cursor erases the front.
    ///
    /// # Panics
    ///
    /// * If `pos` is the null cursor.
    /// * If `pos` references a destroyed node or a node of another list.
    /// * If no value follows `pos`.
    #[inline]
    #[track_caller]
    pub fn erase_after<A: Access,>(&mut self, pos: Cursor<T, A,>,) -> CursorMut<T,> {
        expect_cursor(self.try_erase_after(pos,),)
    }
    /// Removes the value directly after `pos` and returns it, `None` if `pos` is the last
    /// position.
    ///
    /// # Panics
    ///
    /// * If `pos` is the null cursor.
    /// * If `pos` references a destroyed node or a node of another list.
    #[track_caller]
    pub fn remove_after<A: Access,>(&mut self, pos: Cursor<T, A,>,) -> Option<T,> {
        let at = expect_cursor(self.anchor(pos,).map_err(|e| rejected("remove_after", e,),),);

        self.unlink_after(at,)
    }
    /// Returns an iterator over all values in the [`ForwardList`].
    #[inline]
    pub fn iter(&self) -> Iter<'_, T,> { iters::new_iter(self,) }
    /// Returns a mutable iterator over all values in the [`ForwardList`].
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T,> { iters::new_iter_mut(self,) }
}

impl<T: PartialEq,> ForwardList<T,> {
    /// Returns `true` if `x` is found in the [`ForwardList`].
    ///
    /// # Params
    ///
    /// x --- The value to search for.
    pub fn contains(&self, x: &T,) -> bool {
        self.iter().any(|y| x == y)
    }
}

/// Exchanges the contents of two [`ForwardList`]s.
///
/// # Params
///
/// lhs --- The first [`ForwardList`].
/// rhs --- The second [`ForwardList`].
#[inline]
pub fn swap<T,>(lhs: &mut ForwardList<T,>, rhs: &mut ForwardList<T,>,) { lhs.swap(rhs,) }

impl<T,> Default for ForwardList<T,> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl<T: Clone,> Clone for ForwardList<T,> {
    #[inline]
    fn clone(&self) -> Self { self.iter().cloned().collect() }
    fn clone_from(&mut self, source: &Self,) {
        //Copy first so that `self` is untouched if a clone panics.
        let mut copy = source.clone();

        self.swap(&mut copy,);
    }
}

impl<T,> Extend<T,> for ForwardList<T,> {
    fn extend<I,>(&mut self, iter: I)
        where I: IntoIterator<Item = T>, {
        let mut tail = self.last();

        for value in iter { tail = self.link_after(tail, value,) }
    }
}

impl<'a, T: 'a + Copy,> Extend<&'a T,> for ForwardList<T,> {
    #[inline]
    fn extend<I,>(&mut self, iter: I)
        where I: IntoIterator<Item = &'a T>, {
        self.extend(iter.into_iter().copied(),)
    }
}

impl<T,> FromIterator<T,> for ForwardList<T,> {
    fn from_iter<I,>(iter: I) -> Self
        where I: IntoIterator<Item = T>, {
        let mut list = ForwardList::new();

        list.extend(iter,); list
    }
}

impl<T, const N: usize,> From<[T; N]> for ForwardList<T,> {
    #[inline]
    fn from(from: [T; N],) -> Self { from.into_iter().collect() }
}

impl<T,> From<Vec<T,>> for ForwardList<T,> {
    #[inline]
    fn from(from: Vec<T,>,) -> Self { from.into_iter().collect() }
}

impl<T: Clone,> From<&[T]> for ForwardList<T,> {
    #[inline]
    fn from(from: &[T],) -> Self { from.iter().cloned().collect() }
}

impl<T,> IntoIterator for ForwardList<T,> {
    type Item = T;
    type IntoIter = IntoIter<T,>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { iters::new_into_iter(self,) }
}

impl<'t, T: 't,> IntoIterator for &'t ForwardList<T,> {
    type Item = &'t T;
    type IntoIter = Iter<'t, T,>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'t, T: 't,> IntoIterator for &'t mut ForwardList<T,> {
    type Item = &'t mut T;
    type IntoIter = IterMut<'t, T,>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T: PartialEq,> PartialEq for ForwardList<T,> {
    fn eq(&self, rhs: &Self) -> bool {
        self.len() == rhs.len() && self.iter().eq(rhs.iter(),)
    }
}

impl<T: Eq,> Eq for ForwardList<T,> {}

impl<T: PartialOrd,> PartialOrd for ForwardList<T,> {
    #[inline]
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering,> {
        self.iter().partial_cmp(rhs.iter(),)
    }
}

impl<T: Ord,> Ord for ForwardList<T,> {
    #[inline]
    fn cmp(&self, rhs: &Self) -> Ordering {
        self.iter().cmp(rhs.iter(),)
    }
}

impl<T: Hash,> Hash for ForwardList<T,> {
    fn hash<H: Hasher,>(&self, state: &mut H,) {
        self.len().hash(state,);
        for value in self { value.hash(state,) }
    }
}

impl<T: Debug,> Debug for ForwardList<T,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<T,> Drop for ForwardList<T,> {
    #[inline]
    fn drop(&mut self,) { self.clear() }
}
