use crate::{CoreCol, MemoryState, Node, NodeIdx, node::ROOT, references::CollectionKey};
use core::iter::FusedIterator;
use orx_pinned_vec::PinnedVec;
use orx_split_vec::{Recursive, SplitVec};

/// Double-ended iterator over references to the elements of a linked list, from front to back.
pub struct Iter<'a, T, P = SplitVec<Node<T>, Recursive>>
where
    P: PinnedVec<Node<T>>,
{
    core: &'a CoreCol<T, P>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T, P> Iter<'a, T, P>
where
    P: PinnedVec<Node<T>>,
{
    pub(crate) fn new(core: &'a CoreCol<T, P>) -> Self {
        Self {
            core,
            front: core.next_of(ROOT),
            back: core.prev_of(ROOT),
            remaining: core.len(),
        }
    }

    fn next_pos(&mut self) -> Option<usize> {
        match self.remaining {
            0 => None,
            _ => {
                self.remaining -= 1;
                let pos = self.front;
                self.front = self.core.next_of(pos);
                Some(pos)
            }
        }
    }

    fn next_back_pos(&mut self) -> Option<usize> {
        match self.remaining {
            0 => None,
            _ => {
                self.remaining -= 1;
                let pos = self.back;
                self.back = self.core.prev_of(pos);
                Some(pos)
            }
        }
    }
}

impl<T, P> Clone for Iter<'_, T, P>
where
    P: PinnedVec<Node<T>>,
{
    fn clone(&self) -> Self {
        Self {
            core: self.core,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, P> Iterator for Iter<'a, T, P>
where
    P: PinnedVec<Node<T>>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let core = self.core;
        self.next_pos().and_then(|pos| core.data(pos))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, P> DoubleEndedIterator for Iter<'_, T, P>
where
    P: PinnedVec<Node<T>>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let core = self.core;
        self.next_back_pos().and_then(|pos| core.data(pos))
    }
}

impl<T, P> ExactSizeIterator for Iter<'_, T, P> where P: PinnedVec<Node<T>> {}

impl<T, P> FusedIterator for Iter<'_, T, P> where P: PinnedVec<Node<T>> {}

/// A stoppable iterator over references to the elements of a linked list, from front to back.
///
/// Elements are produced lazily, one per call to `next`.
/// The consumer may abandon the traversal early in two ways:
/// * by simply dropping the iterator, which releases the borrow of the list and nothing else, or
/// * by calling [`stop`], after which `next` always returns None.
///
/// `stop` is idempotent and it can be called after the iterator is exhausted.
/// A new traversal is started by calling `iterate` on the list again.
///
/// [`stop`]: Iterate::stop
///
/// # Examples
///
/// ```
/// use orx_ordered_map::*;
///
/// let list: LinkedList<u32> = [1, 2, 3, 4].into();
///
/// let mut iterate = list.iterate();
/// assert_eq!(iterate.next(), Some(&1));
/// assert_eq!(iterate.next(), Some(&2));
///
/// iterate.stop();
/// iterate.stop();
/// assert!(iterate.is_stopped());
/// assert_eq!(iterate.next(), None);
///
/// assert_eq!(list.iterate().count(), 4);
/// ```
pub struct Iterate<'a, T, P = SplitVec<Node<T>, Recursive>>
where
    P: PinnedVec<Node<T>>,
{
    iter: Iter<'a, T, P>,
    stopped: bool,
}

impl<'a, T, P> Iterate<'a, T, P>
where
    P: PinnedVec<Node<T>>,
{
    pub(crate) fn new(iter: Iter<'a, T, P>) -> Self {
        Self {
            iter,
            stopped: false,
        }
    }

    /// Stops the traversal; all subsequent calls to `next` return None.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Returns true if `stop` has been called.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl<'a, T, P> Iterator for Iterate<'a, T, P>
where
    P: PinnedVec<Node<T>>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stopped {
            true => None,
            false => self.iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.stopped {
            true => (0, Some(0)),
            false => self.iter.size_hint(),
        }
    }
}

impl<T, P> FusedIterator for Iterate<'_, T, P> where P: PinnedVec<Node<T>> {}

/// Iterator over the indices and references of the elements of a linked list, from front to back.
pub struct IterIdx<'a, T, P = SplitVec<Node<T>, Recursive>>
where
    P: PinnedVec<Node<T>>,
{
    iter: Iter<'a, T, P>,
    key: CollectionKey,
    state: MemoryState,
}

impl<'a, T, P> IterIdx<'a, T, P>
where
    P: PinnedVec<Node<T>>,
{
    pub(crate) fn new(iter: Iter<'a, T, P>, key: CollectionKey, state: MemoryState) -> Self {
        Self { iter, key, state }
    }
}

impl<'a, T, P> Iterator for IterIdx<'a, T, P>
where
    P: PinnedVec<Node<T>>,
{
    type Item = (NodeIdx<T>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let core = self.iter.core;
        let pos = self.iter.next_pos()?;
        core.data(pos)
            .map(|data| (NodeIdx::new(self.key, self.state, pos), data))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T, P> ExactSizeIterator for IterIdx<'_, T, P> where P: PinnedVec<Node<T>> {}
