use crate::{LinkedList, MemoryPolicy, NodeIdx};
use core::borrow::Borrow;

/// Entry of an ordered map stored in the nodes of its order list.
///
/// The hash of the key is cached so that the index can be rebuilt without rehashing the keys.
#[derive(Clone, Debug)]
pub(crate) struct MapEntry<K, V> {
    pub(crate) hash: u64,
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> MapEntry<K, V> {
    pub(crate) fn new(hash: u64, key: K, value: V) -> Self {
        Self { hash, key, value }
    }

    pub(crate) fn pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Cached hash of the entry at `idx`; the index only holds valid indices of the `list`.
    pub(crate) fn hash_at<M: MemoryPolicy>(list: &LinkedList<Self, M>, idx: NodeIdx<Self>) -> u64 {
        list.get(idx).map(|entry| entry.hash).unwrap_or_default()
    }

    pub(crate) fn matches_at<M, Q>(
        list: &LinkedList<Self, M>,
        idx: NodeIdx<Self>,
        hash: u64,
        key: &Q,
    ) -> bool
    where
        M: MemoryPolicy,
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        list.get(idx)
            .is_some_and(|entry| entry.hash == hash && entry.key.borrow() == key)
    }
}
