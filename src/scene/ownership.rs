//! Mapping from hit geometry back to the logical entity that owns it.

use rustc_hash::FxHashMap;

use super::{BoneId, EntityId, ShapeId};

/// How a piece of hit geometry links to its owning entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeLink {
    /// Billboard icon linked to the entity it represents.
    Icon {
        /// The represented entity.
        linked: EntityId,
    },
    /// Light hit-proxy parented under its light.
    LightProxy {
        /// The owning light.
        parent: EntityId,
    },
    /// Character hit-proxy parented under its character.
    CharacterProxy {
        /// The owning character.
        parent: EntityId,
    },
    /// Model mesh under its nearest object-tagged ancestor.
    Mesh {
        /// The nearest ancestor tagged as an object.
        object: EntityId,
    },
    /// Bone hit-proxy of a character skeleton.
    Bone {
        /// The owning character.
        character: EntityId,
        /// The bone the proxy stands for.
        bone: BoneId,
    },
}

impl ShapeLink {
    /// The logical entity that owns the shape.
    #[must_use]
    pub fn owner(&self) -> &EntityId {
        match self {
            Self::Icon { linked } => linked,
            Self::LightProxy { parent } | Self::CharacterProxy { parent } => {
                parent
            }
            Self::Mesh { object } => object,
            Self::Bone { character, .. } => character,
        }
    }

    /// The bone, for bone hit-proxies.
    #[must_use]
    pub fn bone(&self) -> Option<&BoneId> {
        match self {
            Self::Bone { bone, .. } => Some(bone),
            _ => None,
        }
    }
}

/// Resolves a hit shape to the entity that owns it.
///
/// Implemented by the scene model; the selector never walks engine object
/// graphs itself.
pub trait OwnershipResolver {
    /// Look up how `shape` links to its owner. `None` for unknown shapes.
    fn resolve(&self, shape: ShapeId) -> Option<ShapeLink>;
}

/// Hash-map backed [`OwnershipResolver`].
#[derive(Debug, Clone, Default)]
pub struct OwnershipTable {
    links: FxHashMap<ShapeId, ShapeLink>,
}

impl OwnershipTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the link for `shape`.
    pub fn link(&mut self, shape: ShapeId, link: ShapeLink) {
        let _ = self.links.insert(shape, link);
    }

    /// Drop the link for `shape`, returning it if present.
    pub fn unlink(&mut self, shape: ShapeId) -> Option<ShapeLink> {
        self.links.remove(&shape)
    }

    /// Drop every link owned by `entity`.
    pub fn unlink_entity(&mut self, entity: &EntityId) {
        self.links.retain(|_, link| link.owner() != entity);
    }

    /// Number of registered shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether no shapes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl OwnershipResolver for OwnershipTable {
    fn resolve(&self, shape: ShapeId) -> Option<ShapeLink> {
        self.links.get(&shape).cloned()
    }
}
