mod collection_key;
mod node_idx;
mod node_idx_error;

pub use collection_key::CollectionKey;
pub use node_idx::NodeIdx;
pub use node_idx_error::NodeIdxError;
