use crate::{LinkedList, MemoryPolicy, Node, OrderedMap};
use core::fmt::Debug;
use orx_pinned_vec::PinnedVec;

impl<T, M, P> Debug for LinkedList<T, M, P>
where
    T: Debug,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let utilization = self.utilization();
        let storage_len = utilization.num_active_nodes + utilization.num_closed_nodes;
        let values: Vec<_> = self.iter().collect();
        f.debug_struct("LinkedList")
            .field("len", &self.len())
            .field("storage_len", &storage_len)
            .field("values", &values)
            .finish()
    }
}

impl<K, V, S, M> Debug for OrderedMap<K, V, S, M>
where
    K: Debug,
    V: Debug,
    M: MemoryPolicy,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn debug_list() {
        let mut list: LinkedList<String, MemoryReclaimNever> = LinkedList::new();
        list.push_back(String::from("a"));
        let b = list.push_back(String::from("b"));

        let debug_str = format!("{:?}", list);
        assert_eq!(
            debug_str,
            "LinkedList { len: 2, storage_len: 2, values: [\"a\", \"b\"] }"
        );

        list.remove(b);
        let debug_str = format!("{:?}", list);
        assert_eq!(
            debug_str,
            "LinkedList { len: 1, storage_len: 2, values: [\"a\"] }"
        );
    }

    #[test]
    fn debug_map() {
        let mut map = OrderedMap::new();
        map.set("z", 1);
        map.set("a", 2);

        assert_eq!(format!("{:?}", map), "{\"z\": 1, \"a\": 2}");
    }
}
