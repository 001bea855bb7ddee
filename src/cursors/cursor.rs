
use crate::{ForwardList, CursorError, nodes, expect_cursor,};
use std::{
    cmp::{PartialEq, Eq,},
    hash::{Hash, Hasher,},
    marker::PhantomData,
    fmt::{self, Debug,},
};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Shared {}
    impl Sealed for super::Exclusive {}
}

/// The kind of access a [`Cursor`] grants to the value it references.
pub trait Access: sealed::Sealed {}

/// Read-only access.
#[derive(Debug,)]
pub enum Shared {}

/// Mutable access.
#[derive(Debug,)]
pub enum Exclusive {}

impl Access for Shared {}

impl Access for Exclusive {}

/// A read-only [`Cursor`].
pub type CursorRef<T,> = Cursor<T, Shared,>;
/// A mutable [`Cursor`].
pub type CursorMut<T,> = Cursor<T, Exclusive,>;

#[inline]
pub(crate) const fn new_cursor<T, A: Access,>(node: Option<usize>, stamp: usize,) -> Cursor<T, A,> {
    Cursor { node, stamp, marker: PhantomData, }
}

/// A position in a [`ForwardList`].
///
/// A `Cursor` is a plain token; it neither owns nor borrows the list it came from and
/// must be handed back to that list to be dereferenced or advanced. It stays valid while
/// the node it references is in the list, and follows that node through a `swap`.
/// Cursors to destroyed nodes or to nodes of another list are rejected with
/// [`CursorError::Dangling`].
///
/// The null cursor (see [`Cursor::is_end`]) is one past the last value.
pub struct Cursor<T, A: Access = Shared,> {
    /// The index of the referenced node, `None` for the null cursor.
    node: Option<usize>,
    /// The stamp of the node when this cursor was taken.
    stamp: usize,
    marker: PhantomData<fn() -> (T, A,)>,
}

impl<T, A: Access,> Cursor<T, A,> {
    /// The index of the referenced node.
    #[inline]
    pub(crate) const fn index(&self,) -> Option<usize> { self.node }
    /// The stamp of the referenced node.
    #[inline]
    pub(crate) const fn stamp(&self,) -> usize { self.stamp }
    /// `true` if this is the null cursor.
    #[inline]
    pub const fn is_end(&self,) -> bool { self.node.is_none() }
    /// `true` if this cursor references the before-begin position.
    #[inline]
    pub fn is_before_begin(&self,) -> bool { self.node == Some(nodes::SENTINEL) }
    /// Checked form of [`next`](#method.next).
    pub fn try_next(self, list: &ForwardList<T,>,) -> Result<Self, CursorError,> {
        let at = list.anchor(self,)?;

        Ok(list.cursor(list.nodes[at].next,))
    }
    /// Returns a cursor to the node after this one.
    ///
    /// # Params
    ///
    /// list --- The [`ForwardList`] this cursor came from.
    ///
    /// # Panics
    ///
    /// * If this is the null cursor.
    /// * If the referenced node has been destroyed or is not in `list`.
    #[inline]
    #[track_caller]
    pub fn next(self, list: &ForwardList<T,>,) -> Self {
        expect_cursor(self.try_next(list,),)
    }
    /// Checked form of [`get`](#method.get).
    pub fn try_get<'l,>(&self, list: &'l ForwardList<T,>,) -> Result<&'l T, CursorError,> {
        list.value(list.anchor(*self,)?,)
    }
    /// Returns the value this cursor references.
    ///
    /// # Params
    ///
    /// list --- The [`ForwardList`] this cursor came from.
    ///
    /// # Panics
    ///
    /// * If this is the null or the before-begin cursor.
    /// * If the referenced node has been destroyed or is not in `list`.
    #[inline]
    #[track_caller]
    pub fn get<'l,>(&self, list: &'l ForwardList<T,>,) -> &'l T {
        expect_cursor(self.try_get(list,),)
    }
}

impl<T,> Cursor<T, Exclusive,> {
    /// Checked form of [`get_mut`](#method.get_mut).
    pub fn try_get_mut<'l,>(&self, list: &'l mut ForwardList<T,>,) -> Result<&'l mut T, CursorError,> {
        let at = list.anchor(*self,)?;

        list.value_mut(at,)
    }
    /// Returns the value this cursor references mutably.
    ///
    /// # Params
    ///
    /// list --- The [`ForwardList`] this cursor came from.
    ///
    /// # Panics
    ///
    /// * If this is the null or the before-begin cursor.
    /// * If the referenced node has been destroyed or is not in `list`.
    #[inline]
    #[track_caller]
    pub fn get_mut<'l,>(&self, list: &'l mut ForwardList<T,>,) -> &'l mut T {
        expect_cursor(self.try_get_mut(list,),)
    }
}

impl<T,> From<CursorMut<T,>> for CursorRef<T,> {
    #[inline]
    fn from(from: CursorMut<T,>,) -> Self { new_cursor(from.node, from.stamp,) }
}

impl<T, A: Access,> Clone for Cursor<T, A,> {
    #[inline]
    fn clone(&self,) -> Self { *self }
}

impl<T, A: Access,> Copy for Cursor<T, A,> {}

impl<T, A: Access, B: Access,> PartialEq<Cursor<T, B,>> for Cursor<T, A,> {
    #[inline]
    fn eq(&self, rhs: &Cursor<T, B,>,) -> bool { self.node == rhs.node && self.stamp == rhs.stamp }
}

impl<T, A: Access,> Eq for Cursor<T, A,> {}

impl<T, A: Access,> Hash for Cursor<T, A,> {
    #[inline]
    fn hash<H: Hasher,>(&self, state: &mut H,) {
        self.node.hash(state,);
        self.stamp.hash(state,);
    }
}

impl<T, A: Access,> Debug for Cursor<T, A,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        match self.node {
            None => fmt.write_str("Cursor(end)",),
            Some(nodes::SENTINEL) => fmt.write_str("Cursor(before_begin)",),
            Some(node) => fmt.debug_tuple("Cursor",).field(&node,).finish(),
        }
    }
}
