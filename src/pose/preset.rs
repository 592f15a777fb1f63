use std::cmp::Reverse;
use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::fuzzy;
use super::mirror::apply_to_hands;
use super::{Hand, HandSelection, JointPose};
use crate::error::StagehandError;
use crate::options::PresetOptions;

/// Saved state of a hand pose preset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PresetState {
    /// Finger joint rotations of one hand.
    #[serde(rename = "handSkeleton", default)]
    pub hand_skeleton: JointPose,
}

/// A named, searchable hand pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandPosePreset {
    /// Unique id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Extra search text. Empty when unset.
    #[serde(default)]
    pub keywords: String,
    /// The captured pose.
    pub state: PresetState,
    /// Higher priorities sort first in search results.
    #[serde(default)]
    pub priority: i32,
}

impl HandPosePreset {
    /// Capture one hand of a character skeleton as a new preset.
    ///
    /// Keeps every joint whose name contains the hand's token except the
    /// hand root joint itself. Returns `None` for a blank name.
    #[must_use]
    pub fn capture(
        name: &str,
        skeleton: &JointPose,
        hand: Hand,
    ) -> Option<Self> {
        if name.trim().is_empty() {
            return None;
        }
        let token = hand.token();
        let hand_skeleton: JointPose = skeleton
            .iter()
            .filter(|(joint, _)| {
                joint.contains(token) && joint.as_str() != token
            })
            .map(|(joint, rotation)| (joint.clone(), *rotation))
            .collect();
        log::info!(
            "captured preset '{name}' with {} {hand} joints",
            hand_skeleton.len()
        );

        Some(Self {
            id: generate_id(),
            name: name.to_owned(),
            keywords: name.to_owned(),
            state: PresetState { hand_skeleton },
            priority: 0,
        })
    }

    /// The hand skeleton a character receives when this preset is applied
    /// to `target`.
    pub fn apply(
        &self,
        target: HandSelection,
    ) -> Result<JointPose, StagehandError> {
        apply_to_hands(&self.state.hand_skeleton, None, target)
    }
}

/// Suggested name for a new preset: the configured prefix followed by a
/// short random id.
#[must_use]
pub fn default_preset_name(options: &PresetOptions) -> String {
    format!("{} {}", options.default_name_prefix, short_id(&generate_id()))
}

/// Presets matching `terms`, highest priority first.
///
/// Within a priority, presets keep case-insensitive name order. A preset
/// matches when the abbreviation score of `terms` against its name or its
/// keywords exceeds `threshold`. Empty `terms` match everything.
#[must_use]
pub fn search_presets<'a>(
    presets: &'a [HandPosePreset],
    terms: &str,
    threshold: f32,
) -> Vec<&'a HandPosePreset> {
    let mut sorted: Vec<&HandPosePreset> = presets.iter().collect();
    sorted.sort_by_cached_key(|p| p.name.to_uppercase());

    let match_all = terms.is_empty();
    let mut found: Vec<&HandPosePreset> = sorted
        .into_iter()
        .filter(|p| {
            match_all
                || fuzzy::score(&p.name, terms) > threshold
                || (!p.keywords.is_empty()
                    && fuzzy::score(&p.keywords, terms) > threshold)
        })
        .collect();
    found.sort_by_key(|p| Reverse(p.priority));
    found
}

/// User-created presets from `library`, keyed by id, ready to persist.
/// Built-in presets (by id) are left out.
#[must_use]
pub fn user_presets(
    library: &[HandPosePreset],
    default_ids: &[&str],
) -> BTreeMap<String, HandPosePreset> {
    let builtin: FxHashSet<&str> = default_ids.iter().copied().collect();
    library
        .iter()
        .filter(|p| !builtin.contains(p.id.as_str()))
        .map(|p| (p.id.clone(), p.clone()))
        .collect()
}

/// Random uppercase hex id in 8-4-4-4-12 groups.
fn generate_id() -> String {
    let hex = format!("{:032X}", rand::random::<u128>());
    format!(
        "{}-{}-{}-{}-{}",
        &hex[..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..]
    )
}

fn short_id(id: &str) -> String {
    id.chars().take(7).collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::JointRotation;

    fn preset(name: &str, keywords: &str, priority: i32) -> HandPosePreset {
        HandPosePreset {
            id: name.to_lowercase(),
            name: name.to_owned(),
            keywords: keywords.to_owned(),
            state: PresetState::default(),
            priority,
        }
    }

    fn skeleton() -> JointPose {
        let mut pose = JointPose::new();
        for name in [
            "Hips",
            "LeftHand",
            "LeftHandIndex1",
            "LeftHandIndex2",
            "RightHandThumb1",
        ] {
            let _ = pose.insert(name.into(), JointRotation::new(0.1, 0.2, 0.3));
        }
        pose
    }

    #[test]
    fn capture_keeps_finger_joints_of_one_hand() {
        let preset =
            HandPosePreset::capture("Point", &skeleton(), Hand::LeftHand).unwrap();
        let joints: Vec<&str> =
            preset.state.hand_skeleton.keys().map(String::as_str).collect();
        assert_eq!(joints, ["LeftHandIndex1", "LeftHandIndex2"]);
        assert_eq!(preset.keywords, "Point");
        assert_eq!(preset.priority, 0);
        assert_eq!(preset.id.len(), 36);
    }

    #[test]
    fn capture_rejects_blank_names() {
        assert!(HandPosePreset::capture(" ", &skeleton(), Hand::LeftHand).is_none());
        assert!(HandPosePreset::capture("", &skeleton(), Hand::LeftHand).is_none());
    }

    #[test]
    fn default_name_has_prefix_and_short_id() {
        let name = default_preset_name(&PresetOptions::default());
        let (prefix, id) = name.split_once(' ').unwrap();
        assert_eq!(prefix, "HandPose");
        assert_eq!(id.len(), 7);
        assert_eq!(id, id.to_lowercase());
    }

    #[test]
    fn applying_a_left_preset_to_the_right_hand_mirrors_it() {
        let preset =
            HandPosePreset::capture("Point", &skeleton(), Hand::LeftHand).unwrap();
        let right = preset.apply(HandSelection::RightHand).unwrap();
        assert!(right.contains_key("RightHandIndex1"));
        assert!(!right.contains_key("LeftHandIndex1"));
        let both = preset.apply(HandSelection::BothHands).unwrap();
        assert_eq!(both.len(), 4);
    }

    #[test]
    fn search_sorts_by_priority_then_name() {
        let presets = vec![
            preset("relaxed", "", 0),
            preset("Fist", "", 0),
            preset("point", "", 5),
            preset("Open", "", 0),
        ];
        let names: Vec<&str> = search_presets(&presets, "", 0.8)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["point", "Fist", "Open", "relaxed"]);
    }

    #[test]
    fn search_filters_on_name_or_keywords() {
        let presets = vec![
            preset("Fist", "grab hold", 0),
            preset("Open Palm", "", 0),
            preset("Point", "index", 0),
        ];
        let by_name: Vec<&str> = search_presets(&presets, "fi", 0.8)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(by_name, ["Fist"]);

        let by_keyword: Vec<&str> = search_presets(&presets, "grab", 0.8)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(by_keyword, ["Fist"]);

        assert!(search_presets(&presets, "zzz", 0.8).is_empty());
    }

    #[test]
    fn user_presets_exclude_builtins() {
        let presets = vec![preset("Fist", "", 0), preset("Mine", "", 0)];
        let saved = user_presets(&presets, &["fist"]);
        assert_eq!(saved.keys().collect::<Vec<_>>(), ["mine"]);
    }

    #[test]
    fn preset_json_uses_hand_skeleton_key() {
        let json = r#"{
            "id": "abc",
            "name": "Fist",
            "state": { "handSkeleton": {
                "RightHandIndex1": { "rotation": { "x": 1, "y": 0, "z": 0 } }
            } }
        }"#;
        let preset: HandPosePreset = serde_json::from_str(json).unwrap();
        assert_eq!(preset.priority, 0);
        assert!(preset.keywords.is_empty());
        assert_eq!(preset.state.hand_skeleton.len(), 1);

        let value = serde_json::to_value(&preset).unwrap();
        assert!(value["state"]["handSkeleton"].is_object());
    }
}
