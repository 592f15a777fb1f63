//! Ray intersection against hit geometry.
//!
//! [`IntersectionProvider`] is the seam to the rendering layer. [`ShapeSet`]
//! is an analytic provider over spheres and axis-aligned boxes for hosts that
//! keep simple hit proxies outside the engine.

use glam::Vec3;
use rustc_hash::FxHashMap;

use super::ray::Ray;
use crate::scene::ShapeId;

/// One ray/shape intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeHit {
    /// The shape that was hit.
    pub shape: ShapeId,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Casts rays against shapes owned by the rendering layer.
///
/// Implementations should return hits nearest first; the selector re-sorts
/// regardless.
pub trait IntersectionProvider {
    /// Intersect `ray` with each of `shapes`, returning every hit.
    fn intersect(&self, ray: &Ray, shapes: &[ShapeId]) -> Vec<ShapeHit>;
}

/// Analytic hit geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Sphere, used for billboard icons and bone proxies.
    Sphere {
        /// Sphere center.
        center: Vec3,
        /// Sphere radius.
        radius: f32,
    },
    /// Axis-aligned box, used for meshes and body proxies.
    Aabb {
        /// Minimum corner.
        min: Vec3,
        /// Maximum corner.
        max: Vec3,
    },
}

impl Shape {
    /// Axis-aligned box centered on `center` with full extents `size`.
    #[must_use]
    pub fn cuboid(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self::Aabb {
            min: center - half,
            max: center + half,
        }
    }

    /// Distance along `ray` to the first intersection in front of the origin.
    #[must_use]
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        match *self {
            Self::Sphere { center, radius } => {
                intersect_sphere(ray, center, radius)
            }
            Self::Aabb { min, max } => intersect_aabb(ray, min, max),
        }
    }
}

fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let near = -b - sqrt_d;
    if near >= 0.0 {
        return Some(near);
    }
    // Origin inside the sphere
    let far = -b + sqrt_d;
    (far >= 0.0).then_some(far)
}

fn intersect_aabb(ray: &Ray, min: Vec3, max: Vec3) -> Option<f32> {
    // Slab test; axis-parallel rays produce infinities absorbed by min/max.
    let inv = ray.direction.recip();
    let t0 = (min - ray.origin) * inv;
    let t1 = (max - ray.origin) * inv;
    let t_near = t0.min(t1).max_element();
    let t_far = t0.max(t1).min_element();
    if t_near.is_nan() || t_far.is_nan() || t_far < t_near.max(0.0) {
        return None;
    }
    Some(t_near.max(0.0))
}

/// Owned collection of analytic shapes keyed by [`ShapeId`].
#[derive(Debug, Clone, Default)]
pub struct ShapeSet {
    shapes: FxHashMap<ShapeId, Shape>,
    next_id: u64,
}

impl ShapeSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape under a fresh id.
    pub fn insert(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        let _ = self.shapes.insert(id, shape);
        id
    }

    /// Replace the geometry behind an existing id (e.g. after a move).
    pub fn update(&mut self, id: ShapeId, shape: Shape) -> bool {
        match self.shapes.get_mut(&id) {
            Some(slot) => {
                *slot = shape;
                true
            }
            None => false,
        }
    }

    /// Remove a shape.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        self.shapes.remove(&id)
    }

    /// Look up a shape.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Number of shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl IntersectionProvider for ShapeSet {
    fn intersect(&self, ray: &Ray, shapes: &[ShapeId]) -> Vec<ShapeHit> {
        let mut hits: Vec<ShapeHit> = shapes
            .iter()
            .filter_map(|&id| {
                let distance = self.shapes.get(&id)?.intersect_ray(ray)?;
                Some(ShapeHit {
                    shape: id,
                    distance,
                    point: ray.at(distance),
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
