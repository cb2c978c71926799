use core::sync::atomic::{AtomicUsize, Ordering};

static NEXT_KEY: AtomicUsize = AtomicUsize::new(0);

/// Identity of a linked list instance.
///
/// Every list, including every clone of a list, receives a distinct key on construction.
/// A [`NodeIdx`] carries the key of the list which created it, so that it is rejected
/// by all other lists even when they happen to have a node at the same position.
///
/// [`NodeIdx`]: crate::NodeIdx
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CollectionKey(usize);

impl CollectionKey {
    pub(crate) fn fresh() -> Self {
        Self(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }
}
