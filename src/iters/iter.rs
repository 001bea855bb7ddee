
use crate::{ForwardList, nodes::{Node, SENTINEL,},};
use std::{
    iter::*,
    fmt::{self, Debug,},
};

#[inline]
pub fn new_iter<'t, T: 't,>(list: &'t ForwardList<T,>,) -> Iter<'t, T,> {
    Iter { nodes: &list.nodes, next: list.nodes[SENTINEL].next, len: list.len, }
}

/// An iterator over the values of a [`ForwardList`], front to back.
pub struct Iter<'t, T: 't,> {
    nodes: &'t [Node<T,>],
    next: Option<usize>,
    /// The number of values left to yield.
    len: usize,
}

impl<'t, T: 't,> Iterator for Iter<'t, T,> {
    type Item = &'t T;

    fn next(&mut self) -> Option<Self::Item,> {
        let nodes = self.nodes;
        let node = &nodes[self.next?];

        debug_assert!(self.len > 0, "`ForwardList` length out of sync with its nodes",);
        self.next = node.next;
        self.len -= 1;

        node.value()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize,>,) { (self.len, Some(self.len),) }
}

impl<'t, T: 't,> ExactSizeIterator for Iter<'t, T,> {}

impl<'t, T: 't,> FusedIterator for Iter<'t, T,> {}

impl<'t, T: 't,> Clone for Iter<'t, T,> {
    #[inline]
    fn clone(&self) -> Self { Iter { nodes: self.nodes, next: self.next, len: self.len, } }
}

impl<'t, T: 't + Debug,> Debug for Iter<'t, T,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.debug_tuple("Iter",).field(&self.len,).finish()
    }
}
