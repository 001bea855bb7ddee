
use crate::ForwardList;
use std::iter::*;

/// Creates a new `IntoIter` which takes ownership of `list`.
#[inline]
pub const fn new_into_iter<T,>(list: ForwardList<T,>,) -> IntoIter<T,> {
    IntoIter { list, }
}

/// An owning iterator which pops the values of a [`ForwardList`] off its front.
///
/// Values not yielded are dropped with the iterator.
#[derive(Clone, Debug,)]
pub struct IntoIter<T,> {
    list: ForwardList<T,>,
}

impl<T,> Iterator for IntoIter<T,> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item,> {
        if self.list.is_empty() { None }
        else { Some(self.list.pop_front()) }
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize,>,) { (self.list.len(), Some(self.list.len()),) }
}

impl<T,> ExactSizeIterator for IntoIter<T,> {}

impl<T,> FusedIterator for IntoIter<T,> {}
