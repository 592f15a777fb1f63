//! Selection state store.
//!
//! The selector and input processor never own selection state; they emit
//! commands against a [`SelectionStore`]. [`Selection`] is the in-memory
//! store.

use serde::{Deserialize, Serialize};

use crate::scene::{BoneId, EntityId};

/// Mutable selection state owned by the host.
pub trait SelectionStore {
    /// Currently selected entities, in selection order.
    fn selections(&self) -> &[EntityId];

    /// Currently selected bone, if any.
    fn selected_bone(&self) -> Option<&BoneId>;

    /// Replace the selection with `id`, or clear it with `None`.
    fn set_selection(&mut self, id: Option<EntityId>);

    /// Add `id` to the selection, or remove it if already selected.
    fn toggle_selection(&mut self, id: EntityId);

    /// Replace the bone selection.
    fn set_bone_selection(&mut self, bone: Option<BoneId>);
}

/// Ordered set of selected entity ids plus at most one selected bone.
///
/// The first id is the primary selection, the one whose skeleton drives
/// bone-level picking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    ids: Vec<EntityId>,
    bone: Option<BoneId>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The primary selection.
    #[must_use]
    pub fn primary(&self) -> Option<&EntityId> {
        self.ids.first()
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &EntityId) -> bool {
        self.ids.contains(id)
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl SelectionStore for Selection {
    fn selections(&self) -> &[EntityId] {
        &self.ids
    }

    fn selected_bone(&self) -> Option<&BoneId> {
        self.bone.as_ref()
    }

    fn set_selection(&mut self, id: Option<EntityId>) {
        self.ids.clear();
        self.ids.extend(id);
    }

    fn toggle_selection(&mut self, id: EntityId) {
        if let Some(idx) = self.ids.iter().position(|s| *s == id) {
            let _ = self.ids.remove(idx);
        } else {
            self.ids.push(id);
        }
    }

    fn set_bone_selection(&mut self, bone: Option<BoneId>) {
        self.bone = bone;
    }
}
