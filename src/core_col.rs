use crate::{
    Utilization,
    node::{Node, ROOT},
};
use core::marker::PhantomData;
use orx_pinned_vec::PinnedVec;
use orx_split_vec::{Recursive, SplitVec};

/// Core node storage of a linked list.
///
/// The storage always starts with the sentinel root node at position 0, followed by the active
/// and closed nodes in their order of creation.
/// Every insertion or removal is a four-link relink around the sentinel; there is no shifting
/// of elements and no special case for the ends of the list.
pub struct CoreCol<T, P = SplitVec<Node<T>, Recursive>>
where
    P: PinnedVec<Node<T>>,
{
    nodes: P,
    len: usize,
    phantom: PhantomData<T>,
}

impl<T, P> Default for CoreCol<T, P>
where
    P: PinnedVec<Node<T>> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> CoreCol<T, P>
where
    P: PinnedVec<Node<T>>,
{
    /// Creates a new empty collection holding only the sentinel node.
    pub fn new() -> Self
    where
        P: Default,
    {
        let mut nodes = P::default();
        nodes.push(Node::new_sentinel());
        Self {
            nodes,
            len: 0,
            phantom: PhantomData,
        }
    }

    // get

    /// Returns current node utilization of the collection.
    pub fn utilization(&self) -> Utilization {
        Utilization {
            capacity: self.nodes.capacity(),
            num_active_nodes: self.len,
            num_closed_nodes: self.nodes.len() - 1 - self.len,
        }
    }

    /// Returns the number of active nodes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether or not there exists any active node.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the underlying nodes storage, including the sentinel node at position 0.
    #[inline(always)]
    pub fn nodes(&self) -> &P {
        &self.nodes
    }

    /// Returns true if `position` is in bounds, is not the sentinel and holds an active node.
    pub(crate) fn is_active(&self, position: usize) -> bool {
        position != ROOT && self.nodes.get(position).is_some_and(Node::is_active)
    }

    pub(crate) fn data(&self, position: usize) -> Option<&T> {
        self.nodes.get(position).and_then(Node::data)
    }

    pub(crate) fn data_mut(&mut self, position: usize) -> Option<&mut T> {
        self.nodes.get_mut(position).and_then(Node::data_mut)
    }

    /// # Panics
    ///
    /// Panics if the node at `position` is not linked.
    pub(crate) fn next_of(&self, position: usize) -> usize {
        self.nodes[position].next().expect("active nodes and the sentinel are linked")
    }

    /// # Panics
    ///
    /// Panics if the node at `position` is not linked.
    pub(crate) fn prev_of(&self, position: usize) -> usize {
        self.nodes[position].prev().expect("active nodes and the sentinel are linked")
    }

    pub(crate) fn front(&self) -> Option<usize> {
        match self.len {
            0 => None,
            _ => Some(self.next_of(ROOT)),
        }
    }

    pub(crate) fn back(&self) -> Option<usize> {
        match self.len {
            0 => None,
            _ => Some(self.prev_of(ROOT)),
        }
    }

    // mut

    /// Pushes a new active node without any links and returns its position.
    /// The node must be linked by `link_after` right after.
    pub(crate) fn push_detached(&mut self, data: T) -> usize {
        self.len += 1;
        self.nodes.push(Node::new_free_node(data));
        self.nodes.len() - 1
    }

    /// Links the detached node at `position` right after the linked node at `at`.
    pub(crate) fn link_after(&mut self, position: usize, at: usize) {
        let next = self.next_of(at);

        let node = &mut self.nodes[position];
        node.set_prev(at);
        node.set_next(next);

        self.nodes[at].set_next(position);
        self.nodes[next].set_prev(position);
    }

    /// Connects the neighbors of the node at `position` to each other.
    /// Links of the node itself are left as they are.
    pub(crate) fn unlink(&mut self, position: usize) {
        let prev = self.prev_of(position);
        let next = self.next_of(position);
        self.nodes[prev].set_next(next);
        self.nodes[next].set_prev(prev);
    }

    /// Moves the linked node at `position` right after the linked node at `at`.
    pub(crate) fn relink_after(&mut self, position: usize, at: usize) {
        if position != at {
            self.unlink(position);
            self.link_after(position, at);
        }
    }

    /// Unlinks and closes the active node at `position`, and returns its data.
    ///
    /// # Panics
    ///
    /// Panics if the node is not active.
    pub(crate) fn close(&mut self, position: usize) -> T {
        self.unlink(position);
        self.len -= 1;
        self.nodes[position].close()
    }

    /// Removes all nodes except for the sentinel, which is linked back to itself.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::new_sentinel());
        self.len = 0;
    }

    /// Moves active nodes from the tail of the storage into the positions of closed nodes,
    /// and truncates the storage so that it holds exactly the sentinel and the active nodes.
    ///
    /// Returns whether or not the storage is reorganized, which is the case whenever there existed
    /// at least one closed node. Then, active nodes might have moved and positions beyond the new
    /// length will be reused by later pushes; hence, previously observed positions are no longer valid.
    pub(crate) fn reclaim_closed_nodes(&mut self) -> bool {
        let reorganized = self.nodes.len() != self.len + 1;
        let mut right_bound = self.nodes.len();
        let mut vacant = ROOT + 1;

        while vacant < right_bound {
            if self.nodes[vacant].is_closed() {
                let occupied = (vacant + 1..right_bound)
                    .rev()
                    .find(|&position| self.nodes[position].is_active());

                match occupied {
                    Some(occupied) => {
                        self.move_node(occupied, vacant);
                        right_bound = occupied;
                    }
                    None => break,
                }
            }
            vacant += 1;
        }

        self.nodes.truncate(self.len + 1);
        reorganized
    }

    /// Swaps the active node at `from` with the closed node at `to`, redirecting the neighbors.
    fn move_node(&mut self, from: usize, to: usize) {
        debug_assert!(self.nodes[from].is_active());
        debug_assert!(self.nodes[to].is_closed());

        let prev = self.prev_of(from);
        let next = self.next_of(from);
        self.nodes[prev].set_next(to);
        self.nodes[next].set_prev(to);

        self.nodes.swap(from, to);
    }
}
