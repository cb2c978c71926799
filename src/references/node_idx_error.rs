use core::fmt::{Debug, Display};

/// Error cases of an invalid node index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeIdxError {
    /// ForeignCollection => Node index is created by a different list.
    /// This includes the indices of the list that a list is cloned from.
    ForeignCollection,
    /// ReorganizedCollection => Nodes of the list are re-organized in order to reclaim memory of closed nodes,
    /// or the list is cleared, after the index was created.
    /// Such a reorganization happens:
    /// * after a removal if the utilization level drops below the threshold of `MemoryReclaimOnThreshold`,
    /// * only if the `reclaim_closed_nodes()` is manually called when `MemoryReclaimNever` is used,
    ///   * note that in this case indices are never implicitly invalidated.
    ReorganizedCollection,
    /// OutOfBounds => Node index does not point to a position holding a node that an index can refer to.
    OutOfBounds,
    /// RemovedNode => Referenced node is removed from the list.
    /// Node index can only be used if the corresponding node still belongs to the list.
    RemovedNode,
}

impl Display for NodeIdxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        <NodeIdxError as Debug>::fmt(self, f)
    }
}

impl std::error::Error for NodeIdxError {}
