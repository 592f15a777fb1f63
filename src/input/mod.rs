//! Input handling: event types, the press/release state machine, and the
//! input processor that converts pointer events into selection commands.

/// Selection commands emitted by the processor.
pub mod command;
/// Platform-agnostic input events.
pub mod event;
/// Press/release confirmation state machine.
pub(crate) mod mouse;
/// Converts pointer events into selection commands.
pub mod processor;

pub use command::{apply_all, SelectionCommand};
pub use event::{InputEvent, TargetId};
pub use processor::InputProcessor;
