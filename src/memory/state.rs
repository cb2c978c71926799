/// Memory state, or generation, of a linked list.
///
/// Every [`NodeIdx`] remembers the state of the list at the moment it was created.
/// The state advances whenever positions of the nodes might have changed, namely,
/// when closed nodes are reclaimed or when the list is cleared.
/// An index created in an earlier state is therefore never confused with a node
/// that happens to live at the same position now.
///
/// [`NodeIdx`]: crate::NodeIdx
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct MemoryState {
    pub(crate) id: usize,
}

impl MemoryState {
    pub(crate) const fn successor_state(&self) -> Self {
        Self {
            id: self.id.wrapping_add(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_differs() {
        let state = MemoryState::default();
        let next = state.successor_state();

        assert_ne!(state, next);
        assert_eq!(next, MemoryState { id: 1 });
        assert_ne!(next.successor_state(), next);
    }
}
