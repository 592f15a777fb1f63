use glam::Quat;

use super::{Euler, Hand, HandSelection, JointPose, JointRotation};
use crate::error::StagehandError;

/// Mirror a pose onto the opposite hand.
///
/// Each joint name has its first occurrence of the source hand's token
/// replaced by the opposite token, and each rotation is reflected across the
/// body's sagittal plane. When `source` is `None` the hand is detected from
/// the first joint name. An empty pose mirrors to an empty pose.
pub fn mirror(
    pose: &JointPose,
    source: Option<Hand>,
) -> Result<JointPose, StagehandError> {
    if pose.is_empty() {
        return Ok(JointPose::new());
    }
    let source = match source {
        Some(hand) => hand,
        None => Hand::detect(pose)?,
    };
    let (from, to) = (source.token(), source.opposite().token());

    Ok(pose
        .iter()
        .map(|(name, joint)| {
            let renamed = name.replacen(from, to, 1);
            (renamed, mirror_rotation(*joint))
        })
        .collect())
}

/// Apply a pose to the selected hand(s).
///
/// Targeting the pose's own hand returns it unchanged, the opposite hand
/// returns its mirror, and both hands returns the union of the two. On a
/// name collision in the union the original joint wins.
pub fn apply_to_hands(
    pose: &JointPose,
    source: Option<Hand>,
    target: HandSelection,
) -> Result<JointPose, StagehandError> {
    if pose.is_empty() {
        return Ok(JointPose::new());
    }
    let source = match source {
        Some(hand) => hand,
        None => Hand::detect(pose)?,
    };

    match target {
        HandSelection::BothHands => {
            let mut both = mirror(pose, Some(source))?;
            both.extend(pose.iter().map(|(k, v)| (k.clone(), *v)));
            Ok(both)
        }
        single if single == HandSelection::from(source) => Ok(pose.clone()),
        _ => mirror(pose, Some(source)),
    }
}

/// Reflect a rotation: negate the quaternion's x and w components.
fn mirror_rotation(joint: JointRotation) -> JointRotation {
    let q = joint.rotation.to_quat();
    let mirrored = Quat::from_xyzw(-q.x, q.y, q.z, -q.w);
    JointRotation {
        rotation: Euler::from_quat(mirrored),
    }
}
