use crate::Utilization;

/// Policy which determines when the positions of removed, or closed, nodes will be reclaimed.
///
/// Assume that **A** below stands for active nodes and **x** designates a closed node.
/// If the underlying storage has the following layout at a certain stage:
/// * `[ x, x, A, x, A, A, A, x, A, x ]`
///
/// the reclaim operation first moves active nodes from the tail into the holes so that we have:
/// * `[ A, A, A, A, A, x, x, x, x, x ]`
///
/// and next trims the storage:
/// * `[ A, A, A, A, A ]`
///
/// The order of the **A**s in the storage might change, which is not relevant for a linked list
/// since its order is defined by the links among the nodes.
/// The sentinel node at the front of the storage never moves.
///
/// Two implementors are provided:
/// * [`MemoryReclaimOnThreshold::<D>`] reclaims the holes whenever the utilization falls below a constant threshold determined by `D`.
/// * [`MemoryReclaimNever`] never reclaims the holes automatically.
///   A [`NodeIdx`] is then never invalidated by a reorganization, unless
///   [`LinkedList::reclaim_closed_nodes`] is called manually.
///
/// The policy only decides; the list performs the reclaim itself and advances its memory state.
///
/// [`MemoryReclaimOnThreshold::<D>`]: crate::MemoryReclaimOnThreshold
/// [`MemoryReclaimNever`]: crate::MemoryReclaimNever
/// [`NodeIdx`]: crate::NodeIdx
/// [`LinkedList::reclaim_closed_nodes`]: crate::LinkedList::reclaim_closed_nodes
pub trait MemoryPolicy: Clone + Default {
    /// Returns whether or not the closed nodes of a storage with the given `utilization`
    /// must be reclaimed right after a removal.
    fn should_reclaim(utilization: &Utilization) -> bool;
}
