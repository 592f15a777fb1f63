use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Hand pose preset browsing and creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Presets", inline)]
#[serde(default)]
pub struct PresetOptions {
    /// Minimum fuzzy score for a preset to match a search.
    #[schemars(title = "Match Threshold", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub match_threshold: f32,
    /// Prefix of generated preset names.
    #[schemars(skip)]
    pub default_name_prefix: String,
}

impl Default for PresetOptions {
    fn default() -> Self {
        Self {
            match_threshold: 0.8,
            default_name_prefix: "HandPose".to_owned(),
        }
    }
}
