//! Selection commands emitted by the input layer.

use crate::scene::{BoneId, EntityId};
use crate::selection::SelectionStore;

/// A change to selection state.
///
/// The input processor never mutates selection state itself; hosts apply
/// commands to their [`SelectionStore`] in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionCommand {
    /// Select an entity.
    SelectEntity {
        /// Entity to select.
        id: EntityId,
        /// Toggle membership instead of replacing the selection.
        toggle: bool,
    },
    /// Clear the entity selection.
    ClearSelection,
    /// Replace the bone selection.
    SelectBone(Option<BoneId>),
}

impl SelectionCommand {
    /// Apply this command to `store`.
    pub fn apply(self, store: &mut dyn SelectionStore) {
        match self {
            Self::SelectEntity { id, toggle: true } => {
                store.toggle_selection(id);
            }
            Self::SelectEntity { id, toggle: false } => {
                store.set_selection(Some(id));
            }
            Self::ClearSelection => store.set_selection(None),
            Self::SelectBone(bone) => store.set_bone_selection(bone),
        }
    }
}

/// Apply `commands` to `store` in order.
pub fn apply_all(
    commands: impl IntoIterator<Item = SelectionCommand>,
    store: &mut dyn SelectionStore,
) {
    for command in commands {
        command.apply(store);
    }
}
