use super::CollectionKey;
use crate::{LinkedList, MemoryPolicy, MemoryState, Node};
use core::{fmt::Debug, marker::PhantomData};
use orx_pinned_vec::PinnedVec;

/// A node index providing safe and constant time access to elements of a linked list.
///
/// The index is a plain value; it does not borrow the list and it is never dangling.
/// Instead, every access through the index is validated against the list:
/// the index must have been created by the same list, the list must not have been
/// reorganized since, and the node must still be active.
/// See [`NodeIdxError`] for the failure cases.
///
/// [`NodeIdxError`]: crate::NodeIdxError
pub struct NodeIdx<T> {
    collection: CollectionKey,
    state: MemoryState,
    pos: usize,
    phantom: PhantomData<fn() -> T>,
}

impl<T> core::hash::Hash for NodeIdx<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.collection.hash(state);
        self.state.hash(state);
        self.pos.hash(state);
    }
}

// Only the position and identities are copied, so "T" does not need to be copy itself.
impl<T> Copy for NodeIdx<T> {}

impl<T> Clone for NodeIdx<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Debug for NodeIdx<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeIdx")
            .field("collection", &self.collection)
            .field("state", &self.state)
            .field("pos", &self.pos)
            .finish()
    }
}

impl<T> PartialEq for NodeIdx<T> {
    fn eq(&self, other: &Self) -> bool {
        self.collection == other.collection && self.state == other.state && self.pos == other.pos
    }
}

impl<T> Eq for NodeIdx<T> {}

impl<T> NodeIdx<T> {
    #[inline(always)]
    pub(crate) fn new(collection: CollectionKey, state: MemoryState, pos: usize) -> Self {
        Self {
            collection,
            state,
            pos,
            phantom: PhantomData,
        }
    }

    #[inline(always)]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    pub(crate) fn collection(&self) -> CollectionKey {
        self.collection
    }

    /// Checks whether or not the `state` of the index matches that of this index.
    #[inline(always)]
    pub fn is_in_state(&self, state: MemoryState) -> bool {
        self.state == state
    }

    /// Returns true only if this index is valid for the given `list`.
    ///
    /// A node index is valid iff it satisfies the following conditions:
    ///
    /// * It is created from the given `list`.
    /// * Memory state of the `list` has not changed since this index was created.
    /// * The node it refers to has not been removed from the `list`.
    #[inline(always)]
    pub fn is_valid_for<M, P>(&self, list: &LinkedList<T, M, P>) -> bool
    where
        M: MemoryPolicy,
        P: PinnedVec<Node<T>>,
    {
        list.idx_err(*self).is_none()
    }
}
