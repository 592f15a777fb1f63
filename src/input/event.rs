use crate::picking::Ray;

/// Identity of the UI element a pointer event was delivered to.
///
/// A release only confirms a selection when it lands on the same element the
/// press started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub u64);

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`SelectionCommand`](super::SelectionCommand) values.
///
/// # Example
///
/// ```ignore
/// let commands = input_processor.handle_event(
///     InputEvent::PointerDown { ray, target: TargetId(1) },
///     &scene.selector(),
///     scene.entities(),
///     selection.selections(),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary pointer (mouse button, touch, controller trigger) pressed.
    PointerDown {
        /// World-space ray under the pointer.
        ray: Ray,
        /// Element the press was delivered to.
        target: TargetId,
    },
    /// Primary pointer released.
    PointerUp {
        /// World-space ray under the pointer.
        ray: Ray,
        /// Element the release was delivered to.
        target: TargetId,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
}
