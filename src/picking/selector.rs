//! Ray-based entity and bone picking with overlap disambiguation.
//!
//! The selector is stateless: every call casts one ray against the shapes of
//! the supplied candidates, resolves hits back to entities through the
//! injected [`OwnershipResolver`], and picks one according to the interaction
//! mode's [`Disambiguation`] policy.

use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::geometry::IntersectionProvider;
use super::ray::Ray;
use crate::scene::{BoneId, Entity, EntityId, OwnershipResolver, ShapeId};
use crate::StagehandError;

/// Which geometry a pick is tested against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PickMode {
    /// Billboard icons stand in for entities (top-down / overview cameras).
    Icon,
    /// Actual meshes and hit-proxies are tested.
    #[default]
    Direct,
}

/// A ray hit resolved to its owning entity.
#[derive(Debug, Clone, PartialEq)]
pub struct RaycastHit {
    /// The owning entity.
    pub entity_id: EntityId,
    /// Distance from the ray origin.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
    /// Bone hit on an already selected character.
    pub subpart: Option<BoneId>,
}

/// How one hit is chosen among several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disambiguation {
    /// First hit along the ray.
    NearestOnRay,
    /// Among multiple character hits, the one whose hit point is closest to
    /// the character's anchor on the ground plane.
    NearestOnGround {
        /// With exactly one character hit, take it over nearer non-character
        /// hits.
        prefer_single_character: bool,
    },
}

impl Disambiguation {
    /// Policy for an interaction mode.
    #[must_use]
    pub fn for_mode(mode: PickMode, prefer_single_character: bool) -> Self {
        match mode {
            PickMode::Icon => Self::NearestOnGround {
                prefer_single_character,
            },
            PickMode::Direct => Self::NearestOnRay,
        }
    }

    /// Choose one of `hits`, which must be sorted nearest first.
    fn choose<'h, 'e>(
        self,
        hits: &'h [CandidateHit<'e>],
    ) -> Option<&'h CandidateHit<'e>> {
        let first = hits.first()?;
        let Self::NearestOnGround {
            prefer_single_character,
        } = self
        else {
            return Some(first);
        };

        let mut characters = hits.iter().filter(|h| h.entity.is_character());
        let Some(first_character) = characters.next() else {
            return Some(first);
        };
        let mut best = first_character;
        let mut best_distance = best.ground_distance();
        let mut count = 1;
        for hit in characters {
            count += 1;
            let d = hit.ground_distance();
            if d < best_distance {
                best = hit;
                best_distance = d;
            }
        }

        match count {
            1 if !prefer_single_character => Some(first),
            _ => Some(best),
        }
    }
}

/// A shape hit whose owner was found among the candidates.
#[derive(Debug, Clone, Copy)]
struct CandidateHit<'e> {
    entity: &'e Entity,
    distance: f32,
    point: Vec3,
}

impl CandidateHit<'_> {
    fn ground_distance(&self) -> f32 {
        let anchor = self.entity.position.with_y(0.0);
        anchor.distance(self.point.with_y(0.0))
    }

    fn to_raycast_hit(self) -> RaycastHit {
        RaycastHit {
            entity_id: self.entity.id.clone(),
            distance: self.distance,
            point: self.point,
            subpart: None,
        }
    }
}

/// Resolves pointer or controller rays to entities and bones.
#[derive(Clone, Copy)]
pub struct Selector<'a> {
    geometry: &'a dyn IntersectionProvider,
    owners: &'a dyn OwnershipResolver,
    prefer_single_character: bool,
}

impl<'a> Selector<'a> {
    /// Create a selector over a geometry provider and an ownership resolver.
    #[must_use]
    pub fn new(
        geometry: &'a dyn IntersectionProvider,
        owners: &'a dyn OwnershipResolver,
    ) -> Self {
        Self {
            geometry,
            owners,
            prefer_single_character: false,
        }
    }

    /// In icon mode, take a lone character hit over nearer non-character
    /// hits.
    #[must_use]
    pub fn prefer_single_character(mut self, prefer: bool) -> Self {
        self.prefer_single_character = prefer;
        self
    }

    /// Pick the entity under `ray`, or `None` if nothing is hit.
    #[must_use]
    pub fn pick_entity(
        &self,
        ray: &Ray,
        candidates: &[Entity],
        mode: PickMode,
    ) -> Option<EntityId> {
        self.pick_hit(ray, candidates, mode).map(|hit| hit.entity_id)
    }

    /// Like [`pick_entity`](Self::pick_entity) but returns the full hit.
    #[must_use]
    pub fn pick_hit(
        &self,
        ray: &Ray,
        candidates: &[Entity],
        mode: PickMode,
    ) -> Option<RaycastHit> {
        self.choose_hit(ray, candidates, mode, &|_: &Entity| true)
    }

    /// Like [`pick_entity`](Self::pick_entity), considering only the
    /// candidates for which `keep` holds.
    #[must_use]
    pub fn pick_entity_where(
        &self,
        ray: &Ray,
        candidates: &[Entity],
        mode: PickMode,
        keep: impl Fn(&Entity) -> bool,
    ) -> Option<EntityId> {
        self.choose_hit(ray, candidates, mode, &keep)
            .map(|hit| hit.entity_id)
    }

    fn choose_hit(
        &self,
        ray: &Ray,
        candidates: &[Entity],
        mode: PickMode,
        keep: &dyn Fn(&Entity) -> bool,
    ) -> Option<RaycastHit> {
        let hits = self.candidate_hits(ray, candidates, mode, keep);
        let policy =
            Disambiguation::for_mode(mode, self.prefer_single_character);
        let chosen = policy.choose(&hits)?;
        log::debug!(
            "picked '{}' at distance {:.3} ({} hits, {:?})",
            chosen.entity.id,
            chosen.distance,
            hits.len(),
            mode
        );
        Some(chosen.to_raycast_hit())
    }

    /// Pick an entity and, when it is a character already in `selection`,
    /// the bone under the ray as the hit's subpart.
    #[must_use]
    pub fn pick_with_bone(
        &self,
        ray: &Ray,
        candidates: &[Entity],
        mode: PickMode,
        selection: &[EntityId],
    ) -> Option<RaycastHit> {
        let mut hit = self.pick_hit(ray, candidates, mode)?;
        if let Some(entity) = candidates.iter().find(|e| e.id == hit.entity_id)
        {
            hit.subpart = self.pick_bone(ray, entity, selection);
        }
        Some(hit)
    }

    /// Every resolved hit along `ray`, nearest first.
    #[must_use]
    pub fn intersect_all(
        &self,
        ray: &Ray,
        candidates: &[Entity],
        mode: PickMode,
    ) -> Vec<RaycastHit> {
        self.candidate_hits(ray, candidates, mode, &|_: &Entity| true)
            .into_iter()
            .map(CandidateHit::to_raycast_hit)
            .collect()
    }

    /// Pick a bone of `entity`, which must be a character already in
    /// `selection`. Only that character's bone proxies are tested.
    #[must_use]
    pub fn pick_bone(
        &self,
        ray: &Ray,
        entity: &Entity,
        selection: &[EntityId],
    ) -> Option<BoneId> {
        if !entity.is_character() || !selection.contains(&entity.id) {
            return None;
        }
        let mut hits = self.geometry.intersect(ray, &entity.bone_shapes);
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        hits.into_iter().find_map(|hit| {
            let link = self.owners.resolve(hit.shape);
            match link.as_ref().and_then(|l| l.bone()) {
                Some(bone) => Some(bone.clone()),
                None => {
                    log::warn!(
                        "{} (bone of '{}'); skipped",
                        StagehandError::UnresolvedIntersection(hit.shape),
                        entity.id
                    );
                    None
                }
            }
        })
    }

    fn candidate_hits<'e>(
        &self,
        ray: &Ray,
        candidates: &'e [Entity],
        mode: PickMode,
        keep: &dyn Fn(&Entity) -> bool,
    ) -> Vec<CandidateHit<'e>> {
        let kept: Vec<&Entity> =
            candidates.iter().filter(|e| keep(e)).collect();
        if kept.is_empty() {
            return Vec::new();
        }
        let shapes: Vec<ShapeId> =
            kept.iter().flat_map(|&e| e.pick_shapes(mode)).collect();
        let by_id: FxHashMap<&EntityId, &Entity> =
            kept.iter().map(|&e| (&e.id, e)).collect();

        let mut hits = self.geometry.intersect(ray, &shapes);
        // Nearest first is a contract downstream rules depend on
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        hits.into_iter()
            .filter_map(|hit| {
                let entity = self
                    .owners
                    .resolve(hit.shape)
                    .and_then(|link| by_id.get(link.owner()).copied());
                if entity.is_none() {
                    log::warn!(
                        "{}; skipped",
                        StagehandError::UnresolvedIntersection(hit.shape)
                    );
                }
                Some(CandidateHit {
                    entity: entity?,
                    distance: hit.distance,
                    point: hit.point,
                })
            })
            .collect()
    }
}
