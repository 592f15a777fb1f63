//! Converts pointer events into selection commands.
//!
//! The `InputProcessor` owns all transient input state (the provisional
//! press candidate, the press target, modifier keys) and the selection
//! options. It sits between raw pointer events and the host's
//! [`SelectionStore`].

use super::command::{apply_all, SelectionCommand};
use super::event::{InputEvent, TargetId};
use super::mouse::{InputState, ReleaseResult};
use crate::options::SelectionOptions;
use crate::picking::{Ray, Selector};
use crate::scene::{Entity, EntityId};
use crate::selection::SelectionStore;

// ---------------------------------------------------------------------------
// InputProcessor
// ---------------------------------------------------------------------------

/// Converts pointer events into [`SelectionCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// let selector = scene.selector();
/// input_processor.dispatch(
///     event,
///     &selector,
///     scene.entities(),
///     &mut selection,
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Press/release state machine.
    state: InputState,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Selection behavior.
    options: SelectionOptions,
}

impl InputProcessor {
    /// Create a new processor with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom selection options.
    #[must_use]
    pub fn with_options(options: SelectionOptions) -> Self {
        Self {
            options,
            ..Self::new()
        }
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Read-only access to the selection options.
    #[must_use]
    pub fn options(&self) -> &SelectionOptions {
        &self.options
    }

    /// Replace the selection options. Any pending press is dropped.
    pub fn set_options(&mut self, options: SelectionOptions) {
        self.options = options;
        self.state = InputState::new();
    }

    /// Process an input event and return the selection commands it
    /// produces, in the order they must be applied.
    ///
    /// `selection` is the current entity selection; bone picking only
    /// considers characters already in it.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        selector: &Selector<'_>,
        candidates: &[Entity],
        selection: &[EntityId],
    ) -> Vec<SelectionCommand> {
        let selector = selector
            .prefer_single_character(self.options.prefer_single_character);
        match event {
            InputEvent::PointerDown { ray, target } => {
                self.handle_press(&ray, target, &selector, candidates, selection)
            }
            InputEvent::PointerUp { ray, target } => {
                self.handle_release(&ray, target, &selector, candidates)
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                Vec::new()
            }
        }
    }

    /// Process an event and apply the resulting commands to `store`.
    pub fn dispatch(
        &mut self,
        event: InputEvent,
        selector: &Selector<'_>,
        candidates: &[Entity],
        store: &mut dyn SelectionStore,
    ) {
        let commands =
            self.handle_event(event, selector, candidates, store.selections());
        apply_all(commands, store);
    }

    /// Pointer press: commit, remember a candidate, or clear.
    fn handle_press(
        &mut self,
        ray: &Ray,
        target: TargetId,
        selector: &Selector<'_>,
        candidates: &[Entity],
        selection: &[EntityId],
    ) -> Vec<SelectionCommand> {
        let mode = self.options.pick_mode();
        let Some(hit) =
            selector.pick_with_bone(ray, candidates, mode, selection)
        else {
            self.state.handle_press(None, target);
            return vec![
                SelectionCommand::ClearSelection,
                SelectionCommand::SelectBone(None),
            ];
        };

        // Bone hits select immediately and consume the press
        if let Some(bone) = hit.subpart {
            log::debug!("bone '{bone}' of '{}' selected", hit.entity_id);
            self.state.handle_press(None, target);
            return vec![
                SelectionCommand::SelectEntity {
                    id: hit.entity_id,
                    toggle: false,
                },
                SelectionCommand::SelectBone(Some(bone)),
            ];
        }

        let mut commands = vec![SelectionCommand::SelectBone(None)];
        if self.options.select_on_press {
            self.state.handle_press(None, target);
            commands.push(SelectionCommand::SelectEntity {
                id: hit.entity_id,
                toggle: self.shift_pressed,
            });
        } else {
            self.state.handle_press(Some(hit.entity_id), target);
        }
        commands
    }

    /// Pointer release: confirm the provisional candidate if the release
    /// resolves to the same entity on the same target.
    fn handle_release(
        &mut self,
        ray: &Ray,
        target: TargetId,
        selector: &Selector<'_>,
        candidates: &[Entity],
    ) -> Vec<SelectionCommand> {
        if self.options.select_on_press || !self.state.awaits_release_on(target)
        {
            let _ = self.state.process_release(None, target);
            return Vec::new();
        }

        let resolved =
            selector.pick_entity(ray, candidates, self.options.pick_mode());
        match self.state.process_release(resolved, target) {
            ReleaseResult::Commit(id) => vec![
                SelectionCommand::SelectEntity {
                    id,
                    toggle: self.shift_pressed,
                },
                SelectionCommand::SelectBone(None),
            ],
            ReleaseResult::NoAction => Vec::new(),
        }
    }
}
