mod iter;

pub use iter::{Iter, IterIdx, Iterate};

use crate::{
    CoreCol, MemoryPolicy, MemoryReclaimNever, MemoryState, Node, NodeIdx, NodeIdxError,
    Utilization, node::ROOT, references::CollectionKey,
};
use core::marker::PhantomData;
use orx_pinned_vec::PinnedVec;
use orx_split_vec::{Recursive, SplitVec};

/// A doubly linked list with a permanent sentinel root node, whose nodes live in a pinned
/// node storage `P` and whose removed positions are reclaimed according to the memory policy `M`.
///
/// Insertions return a [`NodeIdx`] which provides constant time access to the element,
/// and constant time insertions, removals and moves around it.
/// An index is validated on every use; an index of another list, of a removed node or of
/// an earlier memory state is rejected without any change to the list.
///
/// The default memory policy is [`MemoryReclaimNever`]: removals leave holes in the storage,
/// and an index stays valid as long as its node is in the list, until
/// [`reclaim_closed_nodes`](Self::reclaim_closed_nodes) or [`clear`](Self::clear) is called.
/// With [`MemoryReclaimOnThreshold`](crate::MemoryReclaimOnThreshold), a removal might as well
/// compact the storage and invalidate all indices.
///
/// # Examples
///
/// ```
/// use orx_ordered_map::*;
///
/// let mut list: LinkedList<char> = LinkedList::new();
///
/// let b = list.push_back('b');
/// list.push_back('c');
/// list.push_front('a');
/// assert!(list.iter().eq(&['a', 'b', 'c']));
///
/// list.move_to_back(b);
/// assert!(list.iter().eq(&['a', 'c', 'b']));
///
/// assert_eq!(list.remove(b), Some('b'));
/// assert_eq!(list.remove(b), None);
/// assert_eq!(list.idx_err(b), Some(NodeIdxError::RemovedNode));
/// ```
pub struct LinkedList<T, M = MemoryReclaimNever, P = SplitVec<Node<T>, Recursive>>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    core: CoreCol<T, P>,
    state: MemoryState,
    key: CollectionKey,
    phantom: PhantomData<M>,
}

impl<T, M, P> Default for LinkedList<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M, P> LinkedList<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    /// Creates a new empty list.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self {
            core: CoreCol::new(),
            state: MemoryState::default(),
            key: CollectionKey::fresh(),
            phantom: PhantomData,
        }
    }

    /// Converts the list into a list with the same elements, state and identity,
    /// but applying the memory policy `M2` from now on.
    pub(crate) fn into_policy<M2: MemoryPolicy>(self) -> LinkedList<T, M2, P> {
        LinkedList {
            core: self.core,
            state: self.state,
            key: self.key,
            phantom: PhantomData,
        }
    }

    // get

    /// Returns the number of elements in the list.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Returns whether or not the list is empty.
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Returns the current memory state of the list.
    /// Indices created in a different state are not valid for the list.
    pub fn memory_state(&self) -> MemoryState {
        self.state
    }

    /// Returns current node utilization of the list.
    pub fn utilization(&self) -> Utilization {
        self.core.utilization()
    }

    /// Returns a reference to the first element; None if the list is empty.
    pub fn front(&self) -> Option<&T> {
        self.core.front().and_then(|pos| self.core.data(pos))
    }

    /// Returns a reference to the last element; None if the list is empty.
    pub fn back(&self) -> Option<&T> {
        self.core.back().and_then(|pos| self.core.data(pos))
    }

    /// Returns a mutable reference to the first element; None if the list is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.core.front().and_then(|pos| self.core.data_mut(pos))
    }

    /// Returns a mutable reference to the last element; None if the list is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.core.back().and_then(|pos| self.core.data_mut(pos))
    }

    /// Returns the index of the first element; None if the list is empty.
    pub fn front_idx(&self) -> Option<NodeIdx<T>> {
        self.core.front().map(|pos| self.idx_at(pos))
    }

    /// Returns the index of the last element; None if the list is empty.
    pub fn back_idx(&self) -> Option<NodeIdx<T>> {
        self.core.back().map(|pos| self.idx_at(pos))
    }

    /// Returns a reference to the element at the given `idx`; None if the index is not valid for the list.
    pub fn get(&self, idx: NodeIdx<T>) -> Option<&T> {
        self.valid_pos(idx).and_then(|pos| self.core.data(pos))
    }

    /// Returns a mutable reference to the element at the given `idx`; None if the index is not valid for the list.
    pub fn get_mut(&mut self, idx: NodeIdx<T>) -> Option<&mut T> {
        self.valid_pos(idx).and_then(|pos| self.core.data_mut(pos))
    }

    /// Returns the index of the element following the element at `idx`.
    ///
    /// Returns None if `idx` is the back of the list or if it is not valid for the list.
    pub fn next_idx(&self, idx: NodeIdx<T>) -> Option<NodeIdx<T>> {
        let pos = self.valid_pos(idx)?;
        let next = self.core.next_of(pos);
        (next != ROOT).then(|| self.idx_at(next))
    }

    /// Returns the index of the element preceding the element at `idx`.
    ///
    /// Returns None if `idx` is the front of the list or if it is not valid for the list.
    pub fn prev_idx(&self, idx: NodeIdx<T>) -> Option<NodeIdx<T>> {
        let pos = self.valid_pos(idx)?;
        let prev = self.core.prev_of(pos);
        (prev != ROOT).then(|| self.idx_at(prev))
    }

    /// Returns the reason why the `idx` is not valid for the list; None if it is valid.
    pub fn idx_err(&self, idx: NodeIdx<T>) -> Option<NodeIdxError> {
        let pos = idx.pos();
        if idx.collection() != self.key {
            Some(NodeIdxError::ForeignCollection)
        } else if !idx.is_in_state(self.state) {
            Some(NodeIdxError::ReorganizedCollection)
        } else if pos == ROOT || pos >= self.core.nodes().len() {
            Some(NodeIdxError::OutOfBounds)
        } else if !self.core.is_active(pos) {
            Some(NodeIdxError::RemovedNode)
        } else {
            None
        }
    }

    /// Returns true if the `idx` is valid for the list.
    #[inline(always)]
    pub fn is_valid(&self, idx: NodeIdx<T>) -> bool {
        self.idx_err(idx).is_none()
    }

    /// Returns a double-ended iterator over references to the elements from front to back.
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter::new(&self.core)
    }

    /// Returns a stoppable iterator over references to the elements from front to back.
    ///
    /// See [`Iterate`] for details.
    pub fn iterate(&self) -> Iterate<'_, T, P> {
        Iterate::new(self.iter())
    }

    /// Returns an iterator over the indices and references of the elements from front to back.
    pub fn iter_idx(&self) -> IterIdx<'_, T, P> {
        IterIdx::new(self.iter(), self.key, self.state)
    }

    // mut

    /// Pushes the `value` to the front of the list and returns its index.
    pub fn push_front(&mut self, value: T) -> NodeIdx<T> {
        self.insert_linked_after(value, ROOT)
    }

    /// Pushes the `value` to the back of the list and returns its index.
    pub fn push_back(&mut self, value: T) -> NodeIdx<T> {
        let back = self.core.prev_of(ROOT);
        self.insert_linked_after(value, back)
    }

    /// Inserts the `value` right before the element at `mark` and returns its index.
    ///
    /// Returns None and leaves the list unchanged if `mark` is not valid for the list.
    pub fn insert_before(&mut self, value: T, mark: NodeIdx<T>) -> Option<NodeIdx<T>> {
        let mark = self.valid_pos(mark)?;
        let at = self.core.prev_of(mark);
        Some(self.insert_linked_after(value, at))
    }

    /// Inserts the `value` right after the element at `mark` and returns its index.
    ///
    /// Returns None and leaves the list unchanged if `mark` is not valid for the list.
    pub fn insert_after(&mut self, value: T, mark: NodeIdx<T>) -> Option<NodeIdx<T>> {
        let mark = self.valid_pos(mark)?;
        Some(self.insert_linked_after(value, mark))
    }

    /// Removes the element at `idx` and returns it.
    ///
    /// Returns None and leaves the list unchanged if `idx` is not valid for the list.
    ///
    /// The memory policy `M` is applied after the removal, which might reorganize the list
    /// and invalidate all previously created indices.
    pub fn remove(&mut self, idx: NodeIdx<T>) -> Option<T> {
        let pos = self.valid_pos(idx)?;
        Some(self.close(pos))
    }

    /// Removes and returns the first element; None if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let pos = self.core.front()?;
        Some(self.close(pos))
    }

    /// Removes and returns the last element; None if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let pos = self.core.back()?;
        Some(self.close(pos))
    }

    /// Moves the element at `idx` to the front of the list.
    /// Does nothing if `idx` is not valid for the list.
    pub fn move_to_front(&mut self, idx: NodeIdx<T>) {
        if let Some(pos) = self.valid_pos(idx) {
            if self.core.prev_of(pos) != ROOT {
                self.core.relink_after(pos, ROOT);
            }
        }
    }

    /// Moves the element at `idx` to the back of the list.
    /// Does nothing if `idx` is not valid for the list.
    pub fn move_to_back(&mut self, idx: NodeIdx<T>) {
        if let Some(pos) = self.valid_pos(idx) {
            let back = self.core.prev_of(ROOT);
            if back != pos {
                self.core.relink_after(pos, back);
            }
        }
    }

    /// Moves the element at `idx` right before the element at `mark`.
    /// Does nothing if either of the indices is not valid for the list, or if they are equal.
    pub fn move_before(&mut self, idx: NodeIdx<T>, mark: NodeIdx<T>) {
        if let Some((pos, mark)) = self.valid_pair(idx, mark) {
            if self.core.next_of(pos) != mark {
                let at = self.core.prev_of(mark);
                self.core.relink_after(pos, at);
            }
        }
    }

    /// Moves the element at `idx` right after the element at `mark`.
    /// Does nothing if either of the indices is not valid for the list, or if they are equal.
    pub fn move_after(&mut self, idx: NodeIdx<T>, mark: NodeIdx<T>) {
        if let Some((pos, mark)) = self.valid_pair(idx, mark) {
            if self.core.prev_of(pos) != mark {
                self.core.relink_after(pos, mark);
            }
        }
    }

    /// Appends clones of the elements of `other` to the back of this list, preserving their order.
    pub fn concat_back<M2, P2>(&mut self, other: &LinkedList<T, M2, P2>)
    where
        T: Clone,
        M2: MemoryPolicy,
        P2: PinnedVec<Node<T>>,
    {
        for value in other.iter() {
            self.push_back(value.clone());
        }
    }

    /// Prepends clones of the elements of `other` to the front of this list, preserving their order.
    pub fn concat_front<M2, P2>(&mut self, other: &LinkedList<T, M2, P2>)
    where
        T: Clone,
        M2: MemoryPolicy,
        P2: PinnedVec<Node<T>>,
    {
        for value in other.iter().rev() {
            self.push_front(value.clone());
        }
    }

    /// Appends clones of all elements of the list to its own back, such that
    /// `[a, b, c]` becomes `[a, b, c, a, b, c]`.
    pub fn concat_self_back(&mut self)
    where
        T: Clone,
    {
        let len = self.len();
        let mut pos = self.core.next_of(ROOT);
        for _ in 0..len {
            let value = match self.core.data(pos) {
                Some(value) => value.clone(),
                None => break,
            };
            let next = self.core.next_of(pos);
            self.push_back(value);
            pos = next;
        }
    }

    /// Prepends clones of all elements of the list to its own front, such that
    /// `[a, b, c]` becomes `[a, b, c, a, b, c]`.
    pub fn concat_self_front(&mut self)
    where
        T: Clone,
    {
        let len = self.len();
        let mut pos = self.core.prev_of(ROOT);
        for _ in 0..len {
            let value = match self.core.data(pos) {
                Some(value) => value.clone(),
                None => break,
            };
            let prev = self.core.prev_of(pos);
            self.push_front(value);
            pos = prev;
        }
    }

    /// Removes all elements from the list.
    ///
    /// The memory state advances; hence, all previously created indices become invalid.
    pub fn clear(&mut self) {
        self.core.clear();
        self.state = self.state.successor_state();
    }

    /// Reclaims the positions of all closed nodes regardless of the memory policy,
    /// bringing the node utilization to 100%.
    ///
    /// Returns whether or not the list is reorganized; if so, the memory state advances and
    /// all previously created indices become invalid.
    pub fn reclaim_closed_nodes(&mut self) -> bool {
        let reorganized = self.core.reclaim_closed_nodes();
        if reorganized {
            self.on_reorganized();
        }
        reorganized
    }

    // helpers

    fn idx_at(&self, pos: usize) -> NodeIdx<T> {
        NodeIdx::new(self.key, self.state, pos)
    }

    fn valid_pos(&self, idx: NodeIdx<T>) -> Option<usize> {
        self.is_valid(idx).then(|| idx.pos())
    }

    fn valid_pair(&self, idx: NodeIdx<T>, mark: NodeIdx<T>) -> Option<(usize, usize)> {
        let pos = self.valid_pos(idx)?;
        let mark = self.valid_pos(mark)?;
        (pos != mark).then_some((pos, mark))
    }

    fn insert_linked_after(&mut self, value: T, at: usize) -> NodeIdx<T> {
        let pos = self.core.push_detached(value);
        self.core.link_after(pos, at);
        self.idx_at(pos)
    }

    fn close(&mut self, pos: usize) -> T {
        let value = self.core.close(pos);
        if M::should_reclaim(&self.core.utilization()) && self.core.reclaim_closed_nodes() {
            self.on_reorganized();
        }
        value
    }

    fn on_reorganized(&mut self) {
        self.state = self.state.successor_state();
        log::trace!(
            "linked list reorganized its storage: {} active nodes, memory state {}",
            self.core.len(),
            self.state.id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryReclaimOnThreshold;

    #[test]
    fn removed_position_is_not_reused_after_truncation() {
        let mut list: LinkedList<char, MemoryReclaimNever> = LinkedList::new();
        list.push_back('a');
        let b = list.push_back('b');

        assert_eq!(list.remove(b), Some('b'));
        assert!(list.reclaim_closed_nodes());

        let c = list.push_back('c');
        assert_eq!(c.pos(), b.pos());
        assert_eq!(list.get(b), None);
        assert_eq!(list.get(c), Some(&'c'));
        assert_eq!(list.idx_err(b), Some(NodeIdxError::ReorganizedCollection));
    }

    #[test]
    fn removals_keep_other_indices_valid_by_default() {
        let mut list: LinkedList<char> = LinkedList::new();
        let a = list.push_back('a');
        let b = list.push_back('b');
        let c = list.push_back('c');

        assert_eq!(list.remove(b), Some('b'));
        assert_eq!(list.idx_err(a), None);
        assert_eq!(list.idx_err(c), None);
        assert_eq!(list.utilization().num_closed_nodes, 1);
    }

    #[test]
    fn sentinel_is_never_addressable() {
        let list: LinkedList<char> = LinkedList::new();
        let root = NodeIdx::new(list.key, list.state, ROOT);
        assert_eq!(list.idx_err(root), Some(NodeIdxError::OutOfBounds));

        let beyond = NodeIdx::new(list.key, list.state, 42);
        assert_eq!(list.idx_err(beyond), Some(NodeIdxError::OutOfBounds));
    }

    #[test]
    fn threshold_policy_reorganizes_on_low_utilization() {
        let mut list: LinkedList<usize, MemoryReclaimOnThreshold<1>> = LinkedList::new();
        let indices: Vec<_> = (0..4).map(|x| list.push_back(x)).collect();
        let state = list.memory_state();

        list.remove(indices[0]);
        list.remove(indices[1]);
        assert_eq!(list.memory_state(), state);

        list.remove(indices[2]);
        assert_ne!(list.memory_state(), state);
        assert_eq!(list.utilization().num_closed_nodes, 0);
        assert!(list.iter().eq(&[3]));
        assert_eq!(
            list.idx_err(indices[3]),
            Some(NodeIdxError::ReorganizedCollection)
        );
    }
}
