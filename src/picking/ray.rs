//! World-space rays and pointer-to-ray conversion.

use glam::{Mat4, Vec2, Vec3};

/// A ray in world space with a unit-length direction, so parameters along it
/// are distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Unit direction (zero if constructed from a zero vector).
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Unproject a normalized device coordinate through the inverse
    /// view-projection matrix.
    ///
    /// Uses the [0,1] depth range of `Mat4::perspective_rh`: the ray starts on
    /// the near plane and points toward the far plane.
    #[must_use]
    pub fn from_ndc(ndc: Vec2, inverse_view_proj: Mat4) -> Self {
        let near = inverse_view_proj.project_point3(ndc.extend(0.0));
        let far = inverse_view_proj.project_point3(ndc.extend(1.0));
        Self::new(near, far - near)
    }

    /// Ray from a controller pose: origin at the controller, pointing down its
    /// local -Z axis.
    #[must_use]
    pub fn from_pose(position: Vec3, rotation: glam::Quat) -> Self {
        Self::new(position, rotation * Vec3::NEG_Z)
    }
}

/// Convert a client-space pointer position inside an element's bounding rect
/// to normalized device coordinates (x right, y up, both in [-1, 1]).
#[must_use]
pub fn pointer_to_ndc(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Vec2 {
    let local = (client - rect_origin) / rect_size;
    Vec2::new(local.x * 2.0 - 1.0, -(local.y * 2.0) + 1.0)
}
