// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Ray picking, pointer selection and hand-pose tools for 3D scene editors.
//!
//! Stagehand resolves pointer and VR controller rays to scene entities (and
//! to bones of selected characters), turns press/release gestures into
//! selection commands, mirrors hand poses between left and right, and moves
//! a VR rig around with thumbstick and teleport input.
//!
//! # Key entry points
//!
//! - [`picking::Selector`] - stateless ray-to-entity resolution
//! - [`input::InputProcessor`] - press/release gestures to selection commands
//! - [`pose::mirror`] / [`pose::apply_to_hands`] - hand pose mirroring
//! - [`xr::ControllerSelector`] / [`xr::Rig`] - VR selection and locomotion
//! - [`options::Options`] - runtime configuration (selection, locomotion,
//!   presets)
//!
//! # Architecture
//!
//! Geometry and ownership stay with the host: the selector only calls into an
//! [`picking::IntersectionProvider`] and an [`scene::OwnershipResolver`], and
//! emits [`input::SelectionCommand`]s that the host applies to its
//! [`selection::SelectionStore`]. [`scene::Scene`] bundles analytic
//! implementations of all three for hosts without an engine of their own.

mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod pose;
pub mod scene;
pub mod selection;
pub mod xr;

pub use error::StagehandError;
