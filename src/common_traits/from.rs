use crate::{LinkedList, MemoryPolicy, Node, OrderedMap};
use core::hash::{BuildHasher, Hash};
use orx_pinned_vec::PinnedVec;

impl<const N: usize, T, M, P> From<[T; N]> for LinkedList<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>> + Default,
{
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

/// Creates the map by setting the pairs in order; a repeated key keeps its first position and its last value.
impl<const N: usize, K, V, S, M> From<[(K, V); N]> for OrderedMap<K, V, S, M>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
    M: MemoryPolicy,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
