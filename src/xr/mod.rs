//! VR interaction: controller trigger selection, grip-driven teleport, and
//! thumbstick locomotion of the virtual rig around the tracked head.

mod controller;
mod locomotion;

pub use controller::{ControllerId, ControllerSelector};
pub use locomotion::{HeadPose, Locomotion, Rig, TeleportAim, Thumbstick};
