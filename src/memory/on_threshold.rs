use super::policy::MemoryPolicy;
use crate::Utilization;

/// Memory reclaim policy which triggers the reclaim operation whenever the node utilization
/// falls below a certain threshold.
///
/// Specifically, positions of closed nodes are reclaimed whenever the ratio of closed nodes to all used nodes exceeds one over `2^D`.
/// * when `D = 0`: memory will be reclaimed when utilization is below 0.00% (equivalent to never).
/// * when `D = 1`: memory will be reclaimed when utilization is below 50.00%.
/// * when `D = 2`: memory will be reclaimed when utilization is below 75.00%.
/// * when `D = 3`: memory will be reclaimed when utilization is below 87.50%.
/// * when `D = 4`: memory will be reclaimed when utilization is below 93.75%.
///
/// Since a reclaim requires the number of closed nodes to grow proportionally to the size of
/// the collection, its linear cost is amortized over the removals that caused it.
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimOnThreshold<const D: usize>;

impl<const D: usize> MemoryPolicy for MemoryReclaimOnThreshold<D> {
    fn should_reclaim(utilization: &Utilization) -> bool {
        let used = utilization.num_active_nodes + utilization.num_closed_nodes;
        let allowed_vacant = used.checked_shr(D as u32).unwrap_or(0);
        utilization.num_closed_nodes > allowed_vacant
    }
}
