/// Node utilization of the storage of a linked list.
///
/// * `capacity`: number of node positions already allocated by the pinned storage.
/// * `num_active_nodes`: number of nodes currently holding an element.
/// * `num_closed_nodes`: number of nodes whose elements were removed, but whose positions are not yet reclaimed.
///
/// The permanent sentinel node of the list is counted in neither of the node counts;
/// hence, `num_active_nodes + num_closed_nodes + 1` is the length of the underlying pinned vector.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Utilization {
    /// Number of positions that is already allocated.
    pub capacity: usize,
    /// Number of active nodes holding data.
    pub num_active_nodes: usize,
    /// Number of nodes which had been removed; however, not yet reclaimed.
    pub num_closed_nodes: usize,
}
