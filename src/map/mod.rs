mod entry;
mod iter;

pub use iter::{Iter, Keys, Snapshot, Values};

pub(crate) use entry::MapEntry;

use crate::{LinkedList, MemoryPolicy, MemoryReclaimOnThreshold, NodeIdx};
use core::{
    borrow::Borrow,
    hash::{BuildHasher, Hash},
};
use hashbrown::{DefaultHashBuilder, HashTable};

type Idx<K, V> = NodeIdx<MapEntry<K, V>>;

/// A hash map which remembers the insertion order of its keys.
///
/// The map is composed of
/// * a [`LinkedList`] of entries, which is the backbone of the order: new keys are pushed to
///   its back, and a removal only unlinks the node of the removed key, and
/// * a hash table of the [`NodeIdx`] of every entry, providing constant time access to the nodes.
///
/// Updating the value of an existing key takes place in the node itself and never changes the order.
///
/// # Examples
///
/// ```
/// use orx_ordered_map::*;
///
/// let mut map = OrderedMap::new();
///
/// assert!(map.set("one", 1));
/// assert!(map.set("two", 2));
/// assert!(map.set("three", 3));
/// assert!(!map.set("one", 11));
///
/// assert_eq!(map.get("one"), Some(&11));
/// assert!(map.keys().eq(["one", "two", "three"].iter()));
///
/// assert!(map.delete("two"));
/// assert!(!map.delete("two"));
/// assert_eq!(map.to_vec(), vec![11, 3]);
/// ```
pub struct OrderedMap<K, V, S = DefaultHashBuilder, M = MemoryReclaimOnThreshold<2>>
where
    M: MemoryPolicy,
{
    index: HashTable<Idx<K, V>>,
    list: LinkedList<MapEntry<K, V>, M>,
    hasher: S,
}

impl<K, V, S, M> Default for OrderedMap<K, V, S, M>
where
    S: Default,
    M: MemoryPolicy,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Creates a new empty map with the default hasher and memory policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty map whose index has room for at least `capacity` keys without reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, V, S, M> OrderedMap<K, V, S, M>
where
    M: MemoryPolicy,
{
    /// Creates a new empty map which will use the given `hasher` to hash the keys.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates a new empty map which will use the given `hasher` to hash the keys,
    /// and whose index has room for at least `capacity` keys without reallocation.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            index: HashTable::with_capacity(capacity),
            list: LinkedList::new(),
            hasher,
        }
    }

    /// Converts the map into a map with the same entries, index and hasher,
    /// but whose order list applies the memory policy `M2` from now on.
    pub(crate) fn into_policy<M2: MemoryPolicy>(self) -> OrderedMap<K, V, S, M2> {
        OrderedMap {
            index: self.index,
            list: self.list.into_policy(),
            hasher: self.hasher,
        }
    }

    /// Returns a reference to the hasher of the map.
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Returns the number of keys in the map.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns whether or not the map is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Removes all keys from the map.
    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
    }

    /// Returns the first inserted key value pair which is still in the map; None if the map is empty.
    pub fn front(&self) -> Option<(&K, &V)> {
        self.list.front().map(MapEntry::pair)
    }

    /// Returns the last inserted key value pair; None if the map is empty.
    pub fn back(&self) -> Option<(&K, &V)> {
        self.list.back().map(MapEntry::pair)
    }

    /// Returns an iterator over references to the key value pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.list.iter())
    }

    /// Returns an iterator over references to the keys in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Returns an iterator over references to the values in insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Returns the values of the map in insertion order, cloned at the time of the call.
    pub fn to_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values().cloned().collect()
    }

    /// Returns an iterator over the key value pairs of the map in insertion order,
    /// captured at the time of the call.
    ///
    /// The snapshot owns its pairs; hence, the map can be freely mutated while the snapshot is
    /// being consumed, and such mutations are never observed by the snapshot.
    /// Dropping the snapshot before consuming all pairs is always safe.
    ///
    /// # Examples
    ///
    /// ```
    /// use orx_ordered_map::*;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set('a', 1);
    /// map.set('b', 2);
    ///
    /// let snapshot = map.iterate();
    /// map.set('c', 3);
    /// map.delete(&'a');
    ///
    /// assert_eq!(snapshot.collect::<Vec<_>>(), vec![('a', 1), ('b', 2)]);
    /// ```
    pub fn iterate(&self) -> Snapshot<K, V>
    where
        K: Clone,
        V: Clone,
    {
        let pairs: Vec<_> = self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        Snapshot::new(pairs)
    }
}

impl<K, V, S, M> OrderedMap<K, V, S, M>
where
    K: Hash + Eq,
    S: BuildHasher,
    M: MemoryPolicy,
{
    /// Returns a reference to the value of the `key`; None if the key is absent.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_idx(key)
            .and_then(|idx| self.list.get(idx))
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value of the `key`; None if the key is absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.find_idx(key)?;
        self.list.get_mut(idx).map(|entry| &mut entry.value)
    }

    /// Returns references to the stored key and the value of the `key`; None if the key is absent.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_idx(key)
            .and_then(|idx| self.list.get(idx))
            .map(MapEntry::pair)
    }

    /// Returns true if the map contains the `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_idx(key).is_some()
    }

    /// Sets the `value` of the `key`.
    ///
    /// * If the key already exists, its value is replaced in place and its position in the order
    ///   is unchanged; returns false.
    /// * Otherwise, the pair is appended to the back of the order; returns true.
    pub fn set(&mut self, key: K, value: V) -> bool {
        let hash = self.hasher.hash_one(&key);
        match self.find_hashed(hash, &key) {
            Some(idx) => {
                if let Some(entry) = self.list.get_mut(idx) {
                    entry.value = value;
                }
                false
            }
            None => {
                let idx = self.list.push_back(MapEntry::new(hash, key, value));
                let list = &self.list;
                self.index
                    .insert_unique(hash, idx, |idx| MapEntry::hash_at(list, *idx));
                true
            }
        }
    }

    /// Removes the `key` from the map; returns whether or not the key existed.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).is_some()
    }

    /// Removes the `key` from the map and returns its value; None if the key is absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the `key` from the map and returns the stored key and its value; None if the key is absent.
    ///
    /// Order of the remaining keys is unchanged.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hasher.hash_one(key);
        let list = &self.list;
        let occupied = self
            .index
            .find_entry(hash, |idx| MapEntry::matches_at(list, *idx, hash, key))
            .ok()?;
        let (idx, _) = occupied.remove();

        let state = self.list.memory_state();
        let entry = self.list.remove(idx);
        if self.list.memory_state() != state {
            self.rebuild_index();
        }

        entry.map(MapEntry::into_pair)
    }

    /// Creates an independent copy of the map by setting every pair of this map, in order,
    /// into a new map with a clone of the hasher.
    pub fn copy(&self) -> Self
    where
        K: Clone,
        V: Clone,
        S: Clone,
    {
        let mut map = Self::with_capacity_and_hasher(self.len(), self.hasher.clone());
        for (key, value) in self.iter() {
            map.set(key.clone(), value.clone());
        }
        map
    }

    fn find_idx<Q>(&self, key: &Q) -> Option<Idx<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_hashed(self.hasher.hash_one(key), key)
    }

    fn find_hashed<Q>(&self, hash: u64, key: &Q) -> Option<Idx<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.index
            .find(hash, |idx| MapEntry::matches_at(&self.list, *idx, hash, key))
            .copied()
    }

    /// Re-creates all indices from the list, which is required once the list is reorganized.
    fn rebuild_index(&mut self) {
        self.index.clear();
        let list = &self.list;
        for (idx, entry) in list.iter_idx() {
            self.index
                .insert_unique(entry.hash, idx, |idx| MapEntry::hash_at(list, *idx));
        }
        log::trace!("ordered map rebuilt its index of {} keys", self.index.len());
    }
}
