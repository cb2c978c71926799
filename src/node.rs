use core::fmt::Debug;

/// Position of the sentinel root node in the storage of every list.
pub(crate) const ROOT: usize = 0;

/// Node of a linked list.
///
/// A node is either
/// * **active**: it holds an element and is linked to its neighbors,
/// * **closed**: its element is removed and its links are cleared, or
/// * the **sentinel**: the permanent root of the list which never holds an element;
///   its `next` and `prev` are the front and back of the list, or itself when the list is empty.
///
/// Links are positions of the neighbor nodes in the storage of the list.
pub struct Node<T> {
    data: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
}

impl<T> Node<T> {
    /// Creates the sentinel node linked to itself.
    pub(crate) fn new_sentinel() -> Self {
        Self {
            data: None,
            prev: Some(ROOT),
            next: Some(ROOT),
        }
    }

    /// Creates a new active node with the given `data` but with no connections.
    pub(crate) fn new_free_node(data: T) -> Self {
        Self {
            data: Some(data),
            prev: None,
            next: None,
        }
    }

    // ref

    /// Returns a reference to the data of the node; None if the node is closed or is the sentinel.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Returns the position of the previous node, if linked.
    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    /// Returns the position of the next node, if linked.
    pub fn next(&self) -> Option<usize> {
        self.next
    }

    /// Returns true if the node holds an element.
    #[inline(always)]
    pub fn is_active(&self) -> bool {
        self.data.is_some()
    }

    /// Returns true if the node does not hold an element.
    #[inline(always)]
    pub fn is_closed(&self) -> bool {
        self.data.is_none()
    }

    // mut

    pub(crate) fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    pub(crate) fn set_prev(&mut self, prev: usize) {
        self.prev = Some(prev);
    }

    pub(crate) fn set_next(&mut self, next: usize) {
        self.next = Some(next);
    }

    /// Closes the node and returns its data, and clears its connections.
    ///
    /// # Panics
    ///
    /// Panics if the node was already closed.
    pub(crate) fn close(&mut self) -> T {
        self.prev = None;
        self.next = None;
        self.data.take().expect("must be an open node")
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            prev: self.prev,
            next: self.next,
        }
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_self_linked() {
        let root = Node::<char>::new_sentinel();
        assert!(root.is_closed());
        assert_eq!(root.prev(), Some(ROOT));
        assert_eq!(root.next(), Some(ROOT));
    }

    #[test]
    fn close_clears_links() {
        let mut node = Node::new_free_node('a');
        node.set_prev(3);
        node.set_next(7);
        assert!(node.is_active());

        assert_eq!(node.close(), 'a');
        assert!(node.is_closed());
        assert_eq!(node.prev(), None);
        assert_eq!(node.next(), None);
    }
}
