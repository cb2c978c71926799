use crate::{LinkedList, MemoryPolicy, Node, OrderedMap};
use core::hash::{BuildHasher, Hash};
use orx_pinned_vec::PinnedVec;

/// Clones the elements into a new list with its own identity;
/// hence, indices of this list are not valid for the clone.
impl<T, M, P> Clone for LinkedList<T, M, P>
where
    T: Clone,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>> + Default,
{
    fn clone(&self) -> Self {
        let mut list = Self::new();
        list.concat_back(self);
        list
    }
}

/// Equivalent to [`OrderedMap::copy`].
impl<K, V, S, M> Clone for OrderedMap<K, V, S, M>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: Clone + BuildHasher,
    M: MemoryPolicy,
{
    fn clone(&self) -> Self {
        self.copy()
    }
}
