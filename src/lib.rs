#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]

pub mod json;
/// Node references.
pub mod references;

mod common_traits;
mod core_col;
mod list;
mod map;
mod memory;
mod node;

pub use core_col::CoreCol;
pub use list::{Iter, IterIdx, Iterate, LinkedList};
pub use map::{OrderedMap, Snapshot};
pub use memory::{
    MemoryPolicy, MemoryReclaimNever, MemoryReclaimOnThreshold, MemoryState, Utilization,
};
pub use node::Node;
pub use references::{CollectionKey, NodeIdx, NodeIdxError};

/// Iterators of the ordered map.
pub mod map_iter {
    pub use crate::map::{Iter, Keys, Snapshot, Values};
}
