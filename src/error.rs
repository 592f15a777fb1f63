//! Crate-level error types.

use std::fmt;

use crate::scene::ShapeId;

/// Errors produced by the stagehand crate.
#[derive(Debug)]
pub enum StagehandError {
    /// A joint pose's handedness could not be detected from its joint names
    /// and no source hand was supplied.
    InvalidHandToken(String),
    /// A ray hit resolved to no candidate entity, or a bone proxy to no bone.
    ///
    /// Picking never propagates this; it is logged and the hit skipped.
    UnresolvedIntersection(ShapeId),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Joint pose or preset JSON parsing/serialization failure.
    PoseParse(serde_json::Error),
}

impl fmt::Display for StagehandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHandToken(joint) => write!(
                f,
                "cannot detect hand from joint '{joint}': expected \
                 'LeftHand' or 'RightHand' in the name"
            ),
            Self::UnresolvedIntersection(shape) => {
                write!(f, "hit on shape {shape} resolves to no known owner")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::PoseParse(e) => write!(f, "pose parse error: {e}"),
        }
    }
}

impl std::error::Error for StagehandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::PoseParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StagehandError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StagehandError {
    fn from(e: serde_json::Error) -> Self {
        Self::PoseParse(e)
    }
}
