use crate::{LinkedList, MemoryPolicy, Node, OrderedMap};
use orx_pinned_vec::PinnedVec;

/// Two lists are equal if they hold equal elements in the same order.
impl<T, M, P, M2, P2> PartialEq<LinkedList<T, M2, P2>> for LinkedList<T, M, P>
where
    T: PartialEq,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
    M2: MemoryPolicy,
    P2: PinnedVec<Node<T>>,
{
    fn eq(&self, other: &LinkedList<T, M2, P2>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, M, P> Eq for LinkedList<T, M, P>
where
    T: Eq,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
}

/// Two maps are equal if they hold equal pairs in the same insertion order.
impl<K, V, S, M, S2, M2> PartialEq<OrderedMap<K, V, S2, M2>> for OrderedMap<K, V, S, M>
where
    K: PartialEq,
    V: PartialEq,
    M: MemoryPolicy,
    M2: MemoryPolicy,
{
    fn eq(&self, other: &OrderedMap<K, V, S2, M2>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, S, M> Eq for OrderedMap<K, V, S, M>
where
    K: Eq,
    V: Eq,
    M: MemoryPolicy,
{
}
