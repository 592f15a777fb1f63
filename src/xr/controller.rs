//! Tracked-controller trigger and grip handling.
//!
//! The trigger selects scene objects (characters are not selectable this
//! way) or, in teleport mode, confirms a teleport. Holding one grip enters
//! teleport mode; holding both grips, or releasing one, leaves it.

use glam::Vec3;
use rustc_hash::FxHashSet;

use super::locomotion::{HeadPose, Rig, TeleportAim};
use crate::input::SelectionCommand;
use crate::options::LocomotionOptions;
use crate::picking::{PickMode, Ray, Selector};
use crate::scene::Entity;

/// Identity of a tracked controller (e.g. its gamepad index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControllerId(pub usize);

/// Trigger and grip state of all controllers, plus teleport mode.
#[derive(Debug, Clone, Default)]
pub struct ControllerSelector {
    pressed: FxHashSet<ControllerId>,
    gripped: FxHashSet<ControllerId>,
    teleport_mode: bool,
    aim: TeleportAim,
    options: LocomotionOptions,
}

impl ControllerSelector {
    /// Create a selector with default locomotion options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selector with custom locomotion options.
    #[must_use]
    pub fn with_options(options: LocomotionOptions) -> Self {
        Self {
            options,
            ..Self::new()
        }
    }

    /// Whether teleport mode is active.
    #[must_use]
    pub fn teleport_mode(&self) -> bool {
        self.teleport_mode
    }

    /// Where a teleport would land, if the aim is valid. Hosts show the
    /// teleport marker only while this is `Some` in teleport mode.
    #[must_use]
    pub fn teleport_target(&self) -> Option<Vec3> {
        self.aim.valid_target()
    }

    /// Whether `controller`'s trigger is held.
    #[must_use]
    pub fn is_pressed(&self, controller: ControllerId) -> bool {
        self.pressed.contains(&controller)
    }

    /// Whether `controller`'s grip is held.
    #[must_use]
    pub fn is_gripped(&self, controller: ControllerId) -> bool {
        self.gripped.contains(&controller)
    }

    /// Trigger pressed.
    ///
    /// In teleport mode a valid aim teleports the rig and leaves teleport
    /// mode; selection is untouched either way. Otherwise the nearest
    /// non-character entity under `ray` is selected, and a miss clears the
    /// selection.
    pub fn select_start(
        &mut self,
        controller: ControllerId,
        ray: &Ray,
        selector: &Selector<'_>,
        candidates: &[Entity],
        rig: &mut Rig,
        head: &HeadPose,
    ) -> Vec<SelectionCommand> {
        let _ = self.pressed.insert(controller);

        if self.teleport_mode {
            if let Some(target) = self.aim.valid_target() {
                log::debug!("teleporting to {target}");
                rig.teleport(head, target);
                self.teleport_mode = false;
            }
            return Vec::new();
        }

        let picked = selector.pick_entity_where(
            ray,
            candidates,
            PickMode::Direct,
            |e| !e.is_character(),
        );
        let first = match picked {
            Some(id) => SelectionCommand::SelectEntity { id, toggle: false },
            None => SelectionCommand::ClearSelection,
        };
        vec![first, SelectionCommand::SelectBone(None)]
    }

    /// Trigger released.
    pub fn select_end(&mut self, controller: ControllerId) {
        let _ = self.pressed.remove(&controller);
    }

    /// Grip pressed.
    pub fn grip_down(&mut self, controller: ControllerId) {
        let other_gripped = self.gripped.iter().any(|&c| c != controller);
        let _ = self.gripped.insert(controller);
        if other_gripped {
            self.teleport_mode = false;
            return;
        }
        // The aim is stale until the next aim update
        self.aim.valid = false;
        self.teleport_mode = true;
    }

    /// Grip released.
    pub fn grip_up(&mut self, controller: ControllerId) {
        let _ = self.gripped.remove(&controller);
        self.teleport_mode = false;
    }

    /// Per-frame aim update for a gripped controller in teleport mode.
    pub fn aim(&mut self, controller: ControllerId, ray: &Ray) {
        if self.teleport_mode && self.is_gripped(controller) {
            self.aim.update(ray, &self.options);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picking::Shape;
    use crate::scene::{EntityId, EntityKind, Scene};

    const LEFT: ControllerId = ControllerId(0);
    const RIGHT: ControllerId = ControllerId(1);

    /// A character standing in front of a prop, both on the ray's path.
    fn scene() -> Scene {
        let mut scene = Scene::new();
        let hero = scene.add_entity(
            "hero",
            EntityKind::Character,
            Vec3::new(0.0, 0.0, -2.0),
        );
        let _ = scene.attach_hit_shape(
            &hero,
            Shape::cuboid(Vec3::new(0.0, 1.0, -2.0), Vec3::ONE),
        );
        let prop =
            scene.add_entity("prop", EntityKind::Object, Vec3::new(0.0, 0.0, -5.0));
        let _ = scene.attach_hit_shape(
            &prop,
            Shape::cuboid(Vec3::new(0.0, 1.0, -5.0), Vec3::ONE),
        );
        scene
    }

    fn forward() -> Ray {
        Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Z)
    }

    #[test]
    fn trigger_skips_characters() {
        let scene = scene();
        let mut controllers = ControllerSelector::new();
        let mut rig = Rig::default();
        let commands = controllers.select_start(
            RIGHT,
            &forward(),
            &scene.selector(),
            scene.entities(),
            &mut rig,
            &HeadPose::default(),
        );
        assert_eq!(commands[0], SelectionCommand::SelectEntity {
            id: EntityId::new("prop"),
            toggle: false,
        });
        assert!(controllers.is_pressed(RIGHT));
        controllers.select_end(RIGHT);
        assert!(!controllers.is_pressed(RIGHT));
    }

    #[test]
    fn trigger_on_nothing_clears() {
        let scene = scene();
        let mut controllers = ControllerSelector::new();
        let up = Ray::new(Vec3::ZERO, Vec3::Y);
        let commands = controllers.select_start(
            LEFT,
            &up,
            &scene.selector(),
            scene.entities(),
            &mut Rig::default(),
            &HeadPose::default(),
        );
        assert_eq!(commands[0], SelectionCommand::ClearSelection);
    }

    #[test]
    fn single_grip_enters_teleport_mode_and_both_grips_leave_it() {
        let mut controllers = ControllerSelector::new();
        controllers.grip_down(LEFT);
        assert!(controllers.teleport_mode());
        assert_eq!(controllers.teleport_target(), None);

        controllers.grip_down(RIGHT);
        assert!(!controllers.teleport_mode());

        controllers.grip_up(RIGHT);
        assert!(!controllers.teleport_mode());
        assert!(controllers.is_gripped(LEFT));
    }

    #[test]
    fn trigger_in_teleport_mode_teleports_without_selecting() {
        let scene = scene();
        let mut controllers = ControllerSelector::new();
        let mut rig = Rig::default();
        let head = HeadPose {
            position: Vec3::new(0.0, 1.6, 0.0),
            yaw: 0.0,
        };

        controllers.grip_down(LEFT);
        let down = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        controllers.aim(LEFT, &down);
        // Aim from an ungripped controller is ignored
        controllers.aim(RIGHT, &forward());
        let target = controllers.teleport_target().unwrap();
        assert!((target - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-4);

        let commands = controllers.select_start(
            RIGHT,
            &forward(),
            &scene.selector(),
            scene.entities(),
            &mut rig,
            &head,
        );
        assert!(commands.is_empty());
        assert!(!controllers.teleport_mode());
        let landed = rig.head_position(&head);
        assert!((landed.x - 1.0).abs() < 1e-4);
        assert!(landed.z.abs() < 1e-4);
    }

    #[test]
    fn invalid_aim_keeps_teleport_mode() {
        let scene = scene();
        let mut controllers = ControllerSelector::new();
        let mut rig = Rig::default();
        controllers.grip_down(LEFT);

        let commands = controllers.select_start(
            LEFT,
            &forward(),
            &scene.selector(),
            scene.entities(),
            &mut rig,
            &HeadPose::default(),
        );
        assert!(commands.is_empty());
        assert!(controllers.teleport_mode());
        assert_eq!(rig, Rig::default());
    }
}
