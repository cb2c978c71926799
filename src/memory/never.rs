use super::policy::MemoryPolicy;
use crate::Utilization;

/// A do-nothing `MemoryPolicy` which never reclaims the positions of the closed nodes, leaving them as holes in the underlying storage.
///
/// This approach has the advantage that a `NodeIdx` is never invalidated due to an automatic memory reorganization.
///
/// Node utilization can still be maximized by manually calling `reclaim_closed_nodes` on the list.
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimNever;

impl MemoryPolicy for MemoryReclaimNever {
    #[inline(always)]
    fn should_reclaim(_utilization: &Utilization) -> bool {
        false
    }
}
