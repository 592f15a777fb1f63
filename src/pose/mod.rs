//! Hand joint poses: mirroring between hands and reusable presets.
//!
//! A [`JointPose`] maps joint names to local Euler rotations. Joint names
//! carry their handedness as a `LeftHand` / `RightHand` substring, and a
//! pose holds joints of one hand only.

mod fuzzy;
mod mirror;
mod preset;

use std::collections::BTreeMap;
use std::fmt;

pub use fuzzy::score as fuzzy_score;
use glam::{EulerRot, Quat};
pub use mirror::{apply_to_hands, mirror};
pub use preset::{
    default_preset_name, search_presets, user_presets, HandPosePreset,
    PresetState,
};
use serde::{Deserialize, Serialize};

use crate::error::StagehandError;

/// Joint name to local rotation. Ordered so serialized output is stable.
pub type JointPose = BTreeMap<String, JointRotation>;

// ---------------------------------------------------------------------------
// Rotations
// ---------------------------------------------------------------------------

/// Euler angles in radians, applied in XYZ order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Euler {
    /// Rotation about x.
    pub x: f32,
    /// Rotation about y.
    pub y: f32,
    /// Rotation about z.
    pub z: f32,
}

impl Euler {
    /// Construct from angles in radians.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Equivalent quaternion.
    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.x, self.y, self.z)
    }

    /// Euler angles of a quaternion.
    #[must_use]
    pub fn from_quat(q: Quat) -> Self {
        let (x, y, z) = q.to_euler(EulerRot::XYZ);
        Self { x, y, z }
    }
}

/// One joint's entry in a [`JointPose`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointRotation {
    /// Local rotation of the joint.
    pub rotation: Euler,
}

impl JointRotation {
    /// Construct from angles in radians.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            rotation: Euler::new(x, y, z),
        }
    }
}

// ---------------------------------------------------------------------------
// Hands
// ---------------------------------------------------------------------------

/// One hand. Serialized as the joint-name token.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Hand {
    /// Left hand.
    LeftHand,
    /// Right hand.
    RightHand,
}

impl Hand {
    /// Substring identifying this hand's joints.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::LeftHand => "LeftHand",
            Self::RightHand => "RightHand",
        }
    }

    /// The other hand.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::LeftHand => Self::RightHand,
            Self::RightHand => Self::LeftHand,
        }
    }

    /// Hand a single joint name belongs to.
    #[must_use]
    pub fn of_joint(name: &str) -> Option<Self> {
        if name.contains(Self::RightHand.token()) {
            Some(Self::RightHand)
        } else if name.contains(Self::LeftHand.token()) {
            Some(Self::LeftHand)
        } else {
            None
        }
    }

    /// Hand of a pose, detected from its first joint name.
    pub fn detect(pose: &JointPose) -> Result<Self, StagehandError> {
        let first = pose.keys().next().map_or("", String::as_str);
        Self::of_joint(first)
            .ok_or_else(|| StagehandError::InvalidHandToken(first.to_owned()))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Which hand(s) a pose is applied to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum HandSelection {
    /// Left hand only.
    #[default]
    LeftHand,
    /// Right hand only.
    RightHand,
    /// Both hands.
    BothHands,
}

impl From<Hand> for HandSelection {
    fn from(hand: Hand) -> Self {
        match hand {
            Hand::LeftHand => Self::LeftHand,
            Hand::RightHand => Self::RightHand,
        }
    }
}

/// Parse a pose from its JSON form.
pub fn pose_from_json(json: &str) -> Result<JointPose, StagehandError> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a pose to pretty-printed JSON.
pub fn pose_to_json(pose: &JointPose) -> Result<String, StagehandError> {
    Ok(serde_json::to_string_pretty(pose)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_hand_from_first_joint() {
        let mut pose = JointPose::new();
        let _ = pose.insert("RightHandIndex1".into(), JointRotation::default());
        assert_eq!(Hand::detect(&pose).unwrap(), Hand::RightHand);

        let mut pose = JointPose::new();
        let _ = pose.insert("LeftHandThumb2".into(), JointRotation::default());
        assert_eq!(Hand::detect(&pose).unwrap(), Hand::LeftHand);
    }

    #[test]
    fn unknown_token_is_an_error() {
        let mut pose = JointPose::new();
        let _ = pose.insert("Spine".into(), JointRotation::default());
        match Hand::detect(&pose) {
            Err(StagehandError::InvalidHandToken(joint)) => {
                assert_eq!(joint, "Spine");
            }
            other => panic!("expected InvalidHandToken, got {other:?}"),
        }
    }

    #[test]
    fn parses_nested_rotation_json() {
        let json = r#"{
            "LeftHandIndex1": { "rotation": { "x": 0.5, "y": -0.25, "z": 0 } }
        }"#;
        let pose = pose_from_json(json).unwrap();
        let joint = pose["LeftHandIndex1"].rotation;
        assert_eq!(joint, Euler::new(0.5, -0.25, 0.0));

        let back = pose_from_json(&pose_to_json(&pose).unwrap()).unwrap();
        assert_eq!(back, pose);
    }

    #[test]
    fn malformed_json_is_a_pose_error() {
        assert!(matches!(
            pose_from_json("{\"LeftHand1\": {}}"),
            Err(StagehandError::PoseParse(_))
        ));
    }

    #[test]
    fn hand_serializes_as_token() {
        let json = serde_json::to_string(&HandSelection::BothHands).unwrap();
        assert_eq!(json, "\"BothHands\"");
        let hand: Hand = serde_json::from_str("\"RightHand\"").unwrap();
        assert_eq!(hand, Hand::RightHand);
        assert_eq!(hand.opposite().to_string(), "LeftHand");
    }
}
