use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::picking::PickMode;

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Opaque identifier of a selectable scene entity.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Wrap a raw identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Opaque identifier of a skeleton bone (the engine's bone uuid).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BoneId(String);

impl BoneId {
    /// Wrap a raw bone identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BoneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Reference to a piece of intersectable geometry owned by the rendering
/// layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// Kind of a selectable scene entity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Prop or other model object.
    #[default]
    Object,
    /// Posable skinned character.
    Character,
    /// Light source.
    Light,
    /// Volumetric effect.
    Volume,
    /// Camera represented by an icon.
    CameraIcon,
}

/// A selectable scene object and the geometry it can be picked through.
///
/// Shapes are references only; the geometry itself lives in whatever
/// [`IntersectionProvider`](crate::picking::IntersectionProvider) the host
/// hands to the selector.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// What this entity is.
    pub kind: EntityKind,
    /// World-space anchor, used for ground-distance tie-breaking.
    pub position: Vec3,
    /// Hidden entities are skipped in icon mode.
    pub visible: bool,
    /// Billboard proxy used in icon mode.
    pub icon: Option<ShapeId>,
    /// Mesh or hit-proxy geometry used in direct mode.
    pub hit_shapes: Vec<ShapeId>,
    /// Per-bone hit proxies (characters only).
    pub bone_shapes: Vec<ShapeId>,
}

impl Entity {
    /// Create a visible entity with no geometry attached.
    #[must_use]
    pub fn new(
        id: impl Into<EntityId>,
        kind: EntityKind,
        position: Vec3,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            position,
            visible: true,
            icon: None,
            hit_shapes: Vec::new(),
            bone_shapes: Vec::new(),
        }
    }

    /// Whether this entity is a character.
    #[must_use]
    pub fn is_character(&self) -> bool {
        self.kind == EntityKind::Character
    }

    /// The shapes a ray is tested against for this entity in `mode`.
    ///
    /// Icon mode tests the icon of visible entities; objects without an icon
    /// are pickable through their mesh. Direct mode tests the hit geometry of
    /// objects, characters and lights. Volumes and cameras have no direct
    /// geometry.
    pub fn pick_shapes(
        &self,
        mode: PickMode,
    ) -> impl Iterator<Item = ShapeId> + '_ {
        let shapes: &[ShapeId] = match mode {
            PickMode::Icon if !self.visible => &[],
            PickMode::Icon => match (&self.icon, self.kind) {
                (Some(icon), _) => std::slice::from_ref(icon),
                (None, EntityKind::Object) => &self.hit_shapes,
                (None, _) => &[],
            },
            PickMode::Direct => match self.kind {
                EntityKind::Object
                | EntityKind::Character
                | EntityKind::Light => &self.hit_shapes,
                EntityKind::Volume | EntityKind::CameraIcon => &[],
            },
        };
        shapes.iter().copied()
    }
}
