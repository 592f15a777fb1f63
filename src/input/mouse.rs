use super::event::TargetId;
use crate::scene::EntityId;

/// Result of processing a pointer-up through the press/release state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseResult {
    /// No selection action (drag to elsewhere, mismatched press/release,
    /// press already committed or consumed).
    NoAction,
    /// Release confirmed the provisional candidate from the press.
    Commit(EntityId),
}

/// Tracks the provisional candidate between a press and its release.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Entity resolved at press time, awaiting confirmation on release.
    provisional: Option<EntityId>,
    /// Element the press was delivered to.
    press_target: Option<TargetId>,
}

impl InputState {
    /// Create a new input state with no active gesture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press. `candidate` is `None` when the press already committed
    /// (select-on-press), was consumed by a bone hit, or hit nothing.
    pub fn handle_press(
        &mut self,
        candidate: Option<EntityId>,
        target: TargetId,
    ) {
        self.provisional = candidate;
        self.press_target = Some(target);
    }

    /// Whether a release on `target` could confirm a pending candidate.
    #[must_use]
    pub fn awaits_release_on(&self, target: TargetId) -> bool {
        self.provisional.is_some() && self.press_target == Some(target)
    }

    /// Process a release and reset the gesture.
    ///
    /// `resolved` is the entity under the pointer at release time. Both the
    /// press and the release must have resolved to the same entity, on the
    /// same target element.
    pub fn process_release(
        &mut self,
        resolved: Option<EntityId>,
        target: TargetId,
    ) -> ReleaseResult {
        let provisional = self.provisional.take();
        let press_target = self.press_target.take();

        match (provisional, resolved) {
            (Some(down), Some(up))
                if down == up && press_target == Some(target) =>
            {
                ReleaseResult::Commit(up)
            }
            _ => ReleaseResult::NoAction,
        }
    }
}
