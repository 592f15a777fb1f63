//! Centralized interaction options with TOML preset support.
//!
//! Selection, VR locomotion and hand-pose preset settings are consolidated
//! here. Options serialize to/from TOML so hosts can keep per-user or
//! per-project presets on disk.

mod locomotion;
mod presets;
mod selection;

use std::path::Path;

pub use locomotion::LocomotionOptions;
pub use presets::PresetOptions;
use schemars::JsonSchema;
pub use selection::SelectionOptions;
use serde::{Deserialize, Serialize};

use crate::error::StagehandError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[selection]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Pointer selection behavior.
    pub selection: SelectionOptions,
    /// VR thumbstick movement and teleport.
    pub locomotion: LocomotionOptions,
    /// Hand pose preset browsing.
    pub presets: PresetOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, StagehandError> {
        let content =
            std::fs::read_to_string(path).map_err(StagehandError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| StagehandError::OptionsParse(e.to_string()))?;
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), StagehandError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StagehandError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StagehandError::Io)?;
        }
        std::fs::write(path, content).map_err(StagehandError::Io)?;
        log::info!("Saved options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picking::PickMode;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[selection]
use_icons = true
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.selection.pick_mode(), PickMode::Icon);
        // Everything else should be default
        assert!(opts.selection.select_on_press);
        assert_eq!(opts.locomotion.deadzone, 0.075);
        assert_eq!(opts.presets.match_threshold, 0.8);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("stagehand-options-{}", std::process::id()));
        let path = dir.join("vr.toml");
        let mut opts = Options::default();
        opts.locomotion.snap_turn_degrees = 30.0;
        opts.save(&path).unwrap();

        assert_eq!(Options::load(&path).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["vr".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let dir = std::env::temp_dir()
            .join(format!("stagehand-bad-options-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[selection\nuse_icons = ").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(StagehandError::OptionsParse(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("selection"));
        assert!(props.contains_key("locomotion"));
        assert!(props.contains_key("presets"));

        // Skipped fields should be absent
        let presets = &props["presets"]["properties"];
        assert!(presets.get("match_threshold").is_some());
        assert!(presets.get("default_name_prefix").is_none());
    }
}
