//! Per-call views of the brain handed to actions and decisions.

use brain_core::{BrainId, FrameTime, Position};

use crate::collab::Target;

// ── Commands ──────────────────────────────────────────────────────────────────

/// Requests an action makes of its brain.  Buffered while actions run and
/// applied by the brain afterwards, so no action ever observes a half-applied
/// change.
#[derive(Default)]
pub(crate) struct Commands {
    pub(crate) deactivate: bool,
    pub(crate) transition: Option<String>,
    pub(crate) target:     Option<TargetCommand>,
}

pub(crate) enum TargetCommand {
    Set(Box<dyn Target>),
    Clear,
}

impl Commands {
    pub(crate) fn is_empty(&self) -> bool {
        !self.deactivate && self.transition.is_none() && self.target.is_none()
    }
}

// ── ActionContext ─────────────────────────────────────────────────────────────

/// Mutable view passed to every [`Action`][crate::Action] callback.
///
/// Gives exclusive access to the owner for the duration of the call.
pub struct ActionContext<'a, O> {
    pub brain: BrainId,
    pub frame: FrameTime,
    pub owner: &'a mut O,
    pub time_in_state: f64,
    pub last_known_target_position: Option<Position>,
    target:   Option<&'a dyn Target>,
    commands: &'a mut Commands,
}

impl<'a, O> ActionContext<'a, O> {
    pub(crate) fn new(
        brain:    BrainId,
        frame:    FrameTime,
        owner:    &'a mut O,
        target:   Option<&'a dyn Target>,
        time_in_state: f64,
        last_known_target_position: Option<Position>,
        commands: &'a mut Commands,
    ) -> Self {
        Self { brain, frame, owner, time_in_state, last_known_target_position, target, commands }
    }

    /// The bound target, if any.
    #[inline]
    pub fn target(&self) -> Option<&dyn Target> {
        self.target
    }

    /// Current target position; `None` if no target is bound or the target
    /// has no position right now.
    #[inline]
    pub fn target_position(&self) -> Option<Position> {
        self.target.and_then(|t| t.position())
    }

    /// Suspend the brain once the current action phase finishes.
    pub fn deactivate_brain(&mut self) {
        self.commands.deactivate = true;
    }

    /// Ask the brain to move to `state` once the current action phase
    /// finishes.  A later request in the same phase replaces an earlier one.
    pub fn request_transition(&mut self, state: impl Into<String>) {
        self.commands.transition = Some(state.into());
    }

    /// Rebind the brain's target.
    pub fn set_target(&mut self, target: Box<dyn Target>) {
        self.commands.target = Some(TargetCommand::Set(target));
    }

    /// Unbind the brain's target.
    pub fn clear_target(&mut self) {
        self.commands.target = Some(TargetCommand::Clear);
    }

    /// Read-only view for decisions sharing this call.
    pub fn as_decision(&self) -> DecisionContext<'_, O> {
        DecisionContext {
            brain: self.brain,
            frame: self.frame,
            owner: &*self.owner,
            time_in_state: self.time_in_state,
            last_known_target_position: self.last_known_target_position,
            target: self.target,
        }
    }
}

// ── DecisionContext ───────────────────────────────────────────────────────────

/// Read-only view passed to every [`Decision`][crate::Decision] callback.
pub struct DecisionContext<'a, O> {
    pub brain: BrainId,
    pub frame: FrameTime,
    pub owner: &'a O,
    pub time_in_state: f64,
    pub last_known_target_position: Option<Position>,
    target: Option<&'a dyn Target>,
}

impl<'a, O> DecisionContext<'a, O> {
    #[inline]
    pub fn target(&self) -> Option<&dyn Target> {
        self.target
    }

    #[inline]
    pub fn target_position(&self) -> Option<Position> {
        self.target.and_then(|t| t.position())
    }
}
