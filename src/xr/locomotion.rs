//! Rig movement: snap turns, stepped moves and teleports.
//!
//! The tracked head moves freely inside a virtual parent, the [`Rig`].
//! Locomotion never touches the head pose; it repositions the rig so the
//! head ends up where it should be in world space. Only yaw is tracked, the
//! rig always stays level.

use glam::{Quat, Vec2, Vec3};

use crate::options::LocomotionOptions;
use crate::picking::Ray;

/// Tracked head pose, relative to the rig.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadPose {
    /// Position in rig space.
    pub position: Vec3,
    /// Rotation about the vertical axis, in radians.
    pub yaw: f32,
}

/// One locomotion action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Locomotion {
    /// Step along the head's facing; positive distances move backward.
    Move(f32),
    /// Rotate around the head by this many radians.
    Turn(f32),
}

// ---------------------------------------------------------------------------
// Rig
// ---------------------------------------------------------------------------

/// Virtual parent of the tracked head.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rig {
    /// World position of the rig origin.
    pub position: Vec3,
    /// World yaw of the rig, in radians.
    pub yaw: f32,
}

impl Rig {
    /// Initial placement one unit behind a scene camera, on the floor.
    ///
    /// `x` and `y` are the camera's floor-plan coordinates (world x and z)
    /// and `rotation` its yaw.
    #[must_use]
    pub fn behind_camera(x: f32, y: f32, rotation: f32) -> Self {
        let (sin, cos) = rotation.sin_cos();
        Self {
            position: Vec3::new(x + sin, 0.0, y + cos),
            yaw: rotation,
        }
    }

    fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// World position of the head.
    #[must_use]
    pub fn head_position(&self, head: &HeadPose) -> Vec3 {
        self.position + self.rotation() * head.position
    }

    /// World yaw of the head.
    #[must_use]
    pub fn head_yaw(&self, head: &HeadPose) -> f32 {
        self.yaw + head.yaw
    }

    /// Move so the head steps `distance` along its facing on the ground
    /// plane. Positive distances move backward.
    pub fn move_by_distance(&mut self, head: &HeadPose, distance: f32) {
        let center = self.head_position(head);
        let offset = Vec3::new(0.0, 0.0, distance);
        let facing = Quat::from_rotation_y(self.head_yaw(head));
        let target = center + facing * offset;
        self.place_head(head, Some(Vec2::new(target.x, target.z)), None);
    }

    /// Turn around the head by `radians`, keeping the head in place.
    pub fn rotate_by(&mut self, head: &HeadPose, radians: f32) {
        let yaw = self.head_yaw(head) + radians;
        self.place_head(head, None, Some(yaw));
    }

    /// Move so the head lands on `target`'s x and z. Height is unchanged.
    pub fn teleport(&mut self, head: &HeadPose, target: Vec3) {
        self.place_head(head, Some(Vec2::new(target.x, target.z)), None);
    }

    /// Apply a thumbstick action.
    pub fn apply(&mut self, head: &HeadPose, step: Locomotion) {
        match step {
            Locomotion::Move(distance) => self.move_by_distance(head, distance),
            Locomotion::Turn(radians) => self.rotate_by(head, radians),
        }
    }

    /// Reposition the rig so the head reaches floor-plan position `xz`
    /// and world yaw `yaw`. `None` keeps the current value.
    fn place_head(
        &mut self,
        head: &HeadPose,
        xz: Option<Vec2>,
        yaw: Option<f32>,
    ) {
        if let Some(yaw) = yaw {
            let anchor = self.head_position(head);
            self.yaw = yaw - head.yaw;
            self.position = anchor - self.rotation() * head.position;
        }
        if let Some(xz) = xz {
            let current = self.head_position(head);
            self.position.x += xz.x - current.x;
            self.position.z += xz.y - current.z;
        }
    }
}

// ---------------------------------------------------------------------------
// Thumbstick
// ---------------------------------------------------------------------------

/// Thumbstick latch: one action per flick.
///
/// An axis fires when it leaves the dead zone while it is the dominant axis,
/// then stays latched until it reads exactly zero again.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Thumbstick {
    moved: Option<f32>,
    turned: Option<f32>,
}

impl Thumbstick {
    /// Create an unlatched thumbstick.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed new axis values (x right, y down) and return the actions they
    /// trigger, moves first.
    pub fn update(
        &mut self,
        axes: Vec2,
        options: &LocomotionOptions,
    ) -> Vec<Locomotion> {
        let mut steps = Vec::new();
        let dz = options.deadzone;

        if self.moved.is_some() {
            if axes.y == 0.0 {
                self.moved = None;
            }
        } else if axes.y.abs() >= axes.x.abs() {
            let distance = if axes.y > dz {
                Some(options.move_step)
            } else if axes.y < -dz {
                Some(-options.move_step)
            } else {
                None
            };
            if let Some(distance) = distance {
                self.moved = Some(distance);
                steps.push(Locomotion::Move(distance));
            }
        }

        if self.turned.is_some() {
            if axes.x == 0.0 {
                self.turned = None;
            }
        } else if axes.x.abs() >= axes.y.abs() {
            let snap = options.snap_turn_degrees.to_radians();
            let radians = if axes.x > dz {
                Some(-snap)
            } else if axes.x < -dz {
                Some(snap)
            } else {
                None
            };
            if let Some(radians) = radians {
                self.turned = Some(radians);
                steps.push(Locomotion::Turn(radians));
            }
        }

        steps
    }
}

// ---------------------------------------------------------------------------
// Teleport aim
// ---------------------------------------------------------------------------

/// Where a teleport would land.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TeleportAim {
    /// Last ground point aimed at.
    pub target: Vec3,
    /// Whether `target` is in range and current.
    pub valid: bool,
}

impl TeleportAim {
    /// Aim along `ray` at the floor (y = 0).
    ///
    /// A ray that misses the floor leaves the aim unchanged; a hit farther
    /// than the teleport range invalidates it.
    pub fn update(&mut self, ray: &Ray, options: &LocomotionOptions) {
        let Some(distance) = ground_distance(ray) else {
            return;
        };
        if distance < options.teleport_max_distance {
            self.target = ray.at(distance);
            self.valid = true;
        } else {
            self.valid = false;
        }
    }

    /// The target, if valid.
    #[must_use]
    pub fn valid_target(&self) -> Option<Vec3> {
        self.valid.then_some(self.target)
    }
}

/// Distance along `ray` to the floor plane, if it is hit in front.
fn ground_distance(ray: &Ray) -> Option<f32> {
    if ray.direction.y.abs() < f32::EPSILON {
        return None;
    }
    let t = -ray.origin.y / ray.direction.y;
    (t >= 0.0).then_some(t)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn behind_camera_is_one_unit_back_on_the_floor() {
        let rig = Rig::behind_camera(2.0, 3.0, 0.0);
        assert!(close(rig.position, Vec3::new(2.0, 0.0, 4.0)));
        assert_eq!(rig.yaw, 0.0);

        let rig = Rig::behind_camera(0.0, 0.0, FRAC_PI_2);
        assert!(close(rig.position, Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn negative_move_steps_forward() {
        let mut rig = Rig::default();
        let head = HeadPose {
            position: Vec3::new(0.0, 1.6, 0.0),
            yaw: 0.0,
        };
        rig.move_by_distance(&head, -1.0);
        assert!(close(rig.head_position(&head), Vec3::new(0.0, 1.6, -1.0)));
    }

    #[test]
    fn move_follows_head_yaw() {
        let mut rig = Rig {
            position: Vec3::ZERO,
            yaw: FRAC_PI_2,
        };
        // Rig turned left 90 degrees, so the head faces -X
        let head = HeadPose::default();
        rig.move_by_distance(&head, -2.0);
        assert!(close(rig.head_position(&head), Vec3::new(-2.0, 0.0, 0.0)));
    }

    #[test]
    fn rotate_keeps_head_in_place() {
        let mut rig = Rig::default();
        let head = HeadPose {
            position: Vec3::new(0.5, 1.6, 0.3),
            yaw: 0.2,
        };
        let before = rig.head_position(&head);
        rig.rotate_by(&head, 45f32.to_radians());
        assert!(close(rig.head_position(&head), before));
        assert!((rig.head_yaw(&head) - (0.2 + 45f32.to_radians())).abs() < 1e-5);
    }

    #[test]
    fn teleport_moves_head_to_target() {
        let mut rig = Rig::behind_camera(0.0, 0.0, 1.0);
        let head = HeadPose {
            position: Vec3::new(0.3, 1.7, -0.2),
            yaw: 0.4,
        };
        rig.teleport(&head, Vec3::new(4.0, 0.0, -3.0));
        let landed = rig.head_position(&head);
        assert!((landed.x - 4.0).abs() < 1e-4);
        assert!((landed.z + 3.0).abs() < 1e-4);
        assert!((landed.y - 1.7).abs() < 1e-4);
    }

    #[test]
    fn thumbstick_fires_once_per_flick() {
        let options = LocomotionOptions::default();
        let mut stick = Thumbstick::new();

        let steps = stick.update(Vec2::new(0.0, 0.5), &options);
        assert_eq!(steps, vec![Locomotion::Move(1.0)]);
        // Held: no repeat
        assert!(stick.update(Vec2::new(0.0, 0.9), &options).is_empty());
        // Back near the center but not at zero: still latched
        assert!(stick.update(Vec2::new(0.0, 0.01), &options).is_empty());
        assert!(stick.update(Vec2::ZERO, &options).is_empty());
        let steps = stick.update(Vec2::new(0.0, -0.5), &options);
        assert_eq!(steps, vec![Locomotion::Move(-1.0)]);
    }

    #[test]
    fn thumbstick_turns_opposite_to_axis() {
        let options = LocomotionOptions::default();
        let mut stick = Thumbstick::new();
        let steps = stick.update(Vec2::new(0.8, 0.1), &options);
        assert_eq!(steps, vec![Locomotion::Turn(-45f32.to_radians())]);

        let mut stick = Thumbstick::new();
        let steps = stick.update(Vec2::new(-0.8, 0.0), &options);
        assert_eq!(steps, vec![Locomotion::Turn(45f32.to_radians())]);
    }

    #[test]
    fn thumbstick_ignores_dead_zone() {
        let options = LocomotionOptions::default();
        let mut stick = Thumbstick::new();
        assert!(stick.update(Vec2::new(0.05, -0.07), &options).is_empty());
    }

    #[test]
    fn teleport_aim_checks_range() {
        let options = LocomotionOptions::default();
        let mut aim = TeleportAim::default();

        let near = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, -1.0));
        aim.update(&near, &options);
        let target = aim.valid_target().unwrap();
        assert!(close(target, Vec3::new(0.0, 0.0, -1.0)));

        let far = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -0.05, -1.0));
        aim.update(&far, &options);
        assert_eq!(aim.valid_target(), None);

        // Pointing at the sky leaves the aim as it was
        let sky = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        aim.valid = true;
        aim.update(&sky, &options);
        assert!(aim.valid);
    }
}
