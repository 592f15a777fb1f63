use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Locomotion", inline)]
#[serde(default)]
/// VR thumbstick movement and teleport parameters.
pub struct LocomotionOptions {
    /// Thumbstick axis magnitude below which input is ignored.
    #[schemars(title = "Dead Zone", range(min = 0.0, max = 0.5), extend("step" = 0.005))]
    pub deadzone: f32,
    /// Distance moved per thumbstick flick, in meters.
    #[schemars(title = "Move Step", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub move_step: f32,
    /// Rotation per snap turn, in degrees.
    #[schemars(title = "Snap Turn", range(min = 5.0, max = 90.0), extend("step" = 5.0))]
    pub snap_turn_degrees: f32,
    /// Farthest valid teleport target, in meters.
    #[schemars(title = "Teleport Range", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub teleport_max_distance: f32,
}

impl Default for LocomotionOptions {
    fn default() -> Self {
        Self {
            deadzone: 0.075,
            move_step: 1.0,
            snap_turn_degrees: 45.0,
            teleport_max_distance: 10.0,
        }
    }
}
