use crate::{LinkedList, MemoryReclaimNever, MemoryReclaimOnThreshold, Node, OrderedMap};
use orx_pinned_vec::PinnedVec;

impl<const D: usize, T, P> From<LinkedList<T, MemoryReclaimNever, P>>
    for LinkedList<T, MemoryReclaimOnThreshold<D>, P>
where
    P: PinnedVec<Node<T>>,
{
    fn from(value: LinkedList<T, MemoryReclaimNever, P>) -> Self {
        value.into_policy()
    }
}

impl<const D: usize, T, P> From<LinkedList<T, MemoryReclaimOnThreshold<D>, P>>
    for LinkedList<T, MemoryReclaimNever, P>
where
    P: PinnedVec<Node<T>>,
{
    fn from(value: LinkedList<T, MemoryReclaimOnThreshold<D>, P>) -> Self {
        value.into_policy()
    }
}

impl<const D: usize, K, V, S> From<OrderedMap<K, V, S, MemoryReclaimNever>>
    for OrderedMap<K, V, S, MemoryReclaimOnThreshold<D>>
{
    fn from(value: OrderedMap<K, V, S, MemoryReclaimNever>) -> Self {
        value.into_policy()
    }
}

impl<const D: usize, K, V, S> From<OrderedMap<K, V, S, MemoryReclaimOnThreshold<D>>>
    for OrderedMap<K, V, S, MemoryReclaimNever>
{
    fn from(value: OrderedMap<K, V, S, MemoryReclaimOnThreshold<D>>) -> Self {
        value.into_policy()
    }
}
