//! Selectable scene entities and the links from hit geometry back to them.
//!
//! [`Scene`] is a self-contained scene model for hosts that keep analytic hit
//! proxies outside their renderer: it owns the entities, their shapes in a
//! [`ShapeSet`], and the [`OwnershipTable`] that maps each shape back to its
//! entity. Engine-backed hosts implement
//! [`IntersectionProvider`](crate::picking::IntersectionProvider) and
//! [`OwnershipResolver`] themselves and only use [`Entity`].

mod entity;
mod ownership;

pub use entity::{BoneId, Entity, EntityId, EntityKind, ShapeId};
use glam::Vec3;
pub use ownership::{OwnershipResolver, OwnershipTable, ShapeLink};

use crate::picking::{Selector, Shape, ShapeSet};

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Flat entity list plus the hit geometry and ownership links behind it.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Entities in insertion order.
    entities: Vec<Entity>,
    shapes: ShapeSet,
    owners: OwnershipTable,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Entity management --

    /// Add an entity with no geometry. Replaces any entity with the same id.
    pub fn add_entity(
        &mut self,
        id: impl Into<EntityId>,
        kind: EntityKind,
        position: Vec3,
    ) -> EntityId {
        let entity = Entity::new(id, kind, position);
        let id = entity.id.clone();
        let _ = self.remove_entity(&id);
        self.entities.push(entity);
        id
    }

    /// Remove an entity and all of its shapes.
    pub fn remove_entity(&mut self, id: &EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| &e.id == id)?;
        let entity = self.entities.remove(idx);
        let owned = entity
            .icon
            .iter()
            .chain(&entity.hit_shapes)
            .chain(&entity.bone_shapes);
        for &shape in owned {
            let _ = self.shapes.remove(shape);
        }
        self.owners.unlink_entity(id);
        Some(entity)
    }

    /// Read access to an entity.
    #[must_use]
    pub fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| &e.id == id)
    }

    /// Show or hide an entity. Returns `false` if it does not exist.
    pub fn set_visible(&mut self, id: &EntityId, visible: bool) -> bool {
        match self.entity_mut(id) {
            Some(entity) => {
                entity.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Read access to all entities (insertion order).
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    fn entity_mut(&mut self, id: &EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| &e.id == id)
    }

    // -- Geometry --

    /// Attach the icon-mode billboard proxy, replacing any previous icon.
    pub fn attach_icon(
        &mut self,
        id: &EntityId,
        shape: Shape,
    ) -> Option<ShapeId> {
        let previous = self.entity(id)?.icon;
        if let Some(old) = previous {
            let _ = self.shapes.remove(old);
            let _ = self.owners.unlink(old);
        }
        let shape = self.shapes.insert(shape);
        self.owners.link(shape, ShapeLink::Icon { linked: id.clone() });
        self.entity_mut(id)?.icon = Some(shape);
        Some(shape)
    }

    /// Attach direct-mode hit geometry. The link type follows the entity
    /// kind: light and character proxies link to their parent, anything else
    /// is treated as an object mesh.
    pub fn attach_hit_shape(
        &mut self,
        id: &EntityId,
        shape: Shape,
    ) -> Option<ShapeId> {
        let kind = self.entity(id)?.kind;
        let link = match kind {
            EntityKind::Light => ShapeLink::LightProxy { parent: id.clone() },
            EntityKind::Character => {
                ShapeLink::CharacterProxy { parent: id.clone() }
            }
            EntityKind::Object | EntityKind::Volume | EntityKind::CameraIcon => {
                ShapeLink::Mesh { object: id.clone() }
            }
        };
        let shape = self.shapes.insert(shape);
        self.owners.link(shape, link);
        self.entity_mut(id)?.hit_shapes.push(shape);
        Some(shape)
    }

    /// Attach a bone hit-proxy to a character. `None` for non-characters.
    pub fn attach_bone(
        &mut self,
        id: &EntityId,
        bone: impl Into<BoneId>,
        shape: Shape,
    ) -> Option<ShapeId> {
        if !self.entity(id)?.is_character() {
            return None;
        }
        let shape = self.shapes.insert(shape);
        self.owners.link(shape, ShapeLink::Bone {
            character: id.clone(),
            bone: bone.into(),
        });
        self.entity_mut(id)?.bone_shapes.push(shape);
        Some(shape)
    }

    /// Move an entity's anchor and translate all of its shapes with it.
    pub fn move_entity(&mut self, id: &EntityId, position: Vec3) -> bool {
        let Some(entity) = self.entities.iter_mut().find(|e| &e.id == id)
        else {
            return false;
        };
        let delta = position - entity.position;
        entity.position = position;
        let owned = entity
            .icon
            .iter()
            .chain(&entity.hit_shapes)
            .chain(&entity.bone_shapes);
        for &shape in owned {
            if let Some(&current) = self.shapes.get(shape) {
                let _ = self.shapes.update(shape, translate(current, delta));
            }
        }
        true
    }

    /// The shape geometry provider.
    #[must_use]
    pub fn shapes(&self) -> &ShapeSet {
        &self.shapes
    }

    /// The shape ownership table.
    #[must_use]
    pub fn owners(&self) -> &OwnershipTable {
        &self.owners
    }

    /// A selector over this scene's geometry.
    #[must_use]
    pub fn selector(&self) -> Selector<'_> {
        Selector::new(&self.shapes, &self.owners)
    }
}

fn translate(shape: Shape, delta: Vec3) -> Shape {
    match shape {
        Shape::Sphere { center, radius } => Shape::Sphere {
            center: center + delta,
            radius,
        },
        Shape::Aabb { min, max } => Shape::Aabb {
            min: min + delta,
            max: max + delta,
        },
    }
}
