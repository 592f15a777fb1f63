use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::picking::PickMode;

/// Pointer selection behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Selection", inline)]
#[serde(default)]
pub struct SelectionOptions {
    /// Commit selection on pointer press. When off, a press only remembers
    /// a candidate that the matching release must confirm.
    #[schemars(title = "Select on Press")]
    pub select_on_press: bool,
    /// Pick through billboard icons instead of meshes.
    #[schemars(title = "Use Icons")]
    pub use_icons: bool,
    /// In icon mode, take a lone character hit over nearer non-character
    /// hits.
    #[schemars(title = "Prefer Single Character")]
    pub prefer_single_character: bool,
}

impl SelectionOptions {
    /// Pick mode implied by [`use_icons`](Self::use_icons).
    #[must_use]
    pub fn pick_mode(&self) -> PickMode {
        if self.use_icons {
            PickMode::Icon
        } else {
            PickMode::Direct
        }
    }
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            select_on_press: true,
            use_icons: false,
            prefer_single_character: false,
        }
    }
}
