use crate::{LinkedList, MemoryPolicy, Node, OrderedMap};
use core::hash::{BuildHasher, Hash};
use orx_pinned_vec::PinnedVec;

impl<T, M, P> FromIterator<T> for LinkedList<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, M, P> Extend<T> for LinkedList<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<K, V, S, M> FromIterator<(K, V)> for OrderedMap<K, V, S, M>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
    M: MemoryPolicy,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S, M> Extend<(K, V)> for OrderedMap<K, V, S, M>
where
    K: Hash + Eq,
    S: BuildHasher,
    M: MemoryPolicy,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn from_iter() {
        let list: LinkedList<String> = (0..6).map(|x| x.to_string()).collect();

        assert_eq!(6, list.len());
        assert_eq!(list.utilization().num_closed_nodes, 0);
        for (i, x) in list.iter().enumerate() {
            assert_eq!(x, &i.to_string());
        }
    }

    #[test]
    fn extend_keeps_existing_positions() {
        let mut map: OrderedMap<u32, char> = (0..3).zip(['a', 'b', 'c']).collect();
        map.extend([(1, 'x'), (7, 'y')]);

        assert!(map.keys().eq(&[0, 1, 2, 7]));
        assert_eq!(map.get(&1), Some(&'x'));
    }
}
