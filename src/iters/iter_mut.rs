
use crate::{ForwardList, nodes::{Node, SENTINEL,},};
use std::{
    iter::*,
    marker::PhantomData,
};

/// Creates a new `IterMut` over `list`.
///
/// # Params
///
/// list --- The `ForwardList` to iterate over.
#[inline]
pub fn new_iter_mut<'t, T: 't,>(list: &'t mut ForwardList<T,>,) -> IterMut<'t, T,> {
    IterMut {
        next: list.nodes[SENTINEL].next,
        len: list.len,
        bound: list.nodes.len(),
        nodes: list.nodes.as_mut_ptr(),
        marker: PhantomData,
    }
}

/// A mutable iterator over the values of a [`ForwardList`], front to back.
pub struct IterMut<'t, T: 't,> {
    /// The arena of the `ForwardList` being iterated.
    nodes: *mut Node<T,>,
    /// The number of `Node`s in the arena.
    bound: usize,
    /// The next `Node` to yield.
    next: Option<usize>,
    /// The number of values left to yield.
    len: usize,
    marker: PhantomData<&'t mut Node<T,>>,
}

impl<'t, T: 't,> Iterator for IterMut<'t, T,> {
    type Item = &'t mut T;

    fn next(&mut self) -> Option<Self::Item,> {
        let index = self.next?;

        assert!(index < self.bound, "`ForwardList` link out of bounds: {}", index,);
        debug_assert!(self.len > 0, "`ForwardList` length out of sync with its nodes",);
        //SAFETY: `index` is inside the arena, which is mutably borrowed for `'t`, and the
        //  chain from the sentinel is acyclic so every `Node` is yielded at most once.
        let node = unsafe { &mut *self.nodes.add(index) };

        //Advance before handing out the value.
        self.next = node.next;
        self.len -= 1;

        node.value_mut()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize,>,) { (self.len, Some(self.len),) }
}

impl<'t, T: 't,> ExactSizeIterator for IterMut<'t, T,> {}

impl<'t, T: 't,> FusedIterator for IterMut<'t, T,> {}

unsafe impl<'t, T: 't + Send,> Send for IterMut<'t, T,> {}

unsafe impl<'t, T: 't + Sync,> Sync for IterMut<'t, T,> {}
