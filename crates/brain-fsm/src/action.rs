//! The `Action` trait: behaviors run while their state is current.

use crate::context::ActionContext;
use crate::init::{InitGate, InitializationMode};

/// A pluggable behavior.
///
/// The owning [`State`][crate::State] drives the lifecycle:
///
/// | Hook           | When                                                       |
/// |----------------|------------------------------------------------------------|
/// | `initialize`   | On reset and on enter, gated by [`InitializationMode`]     |
/// | `on_enter`     | Every time the owning state becomes current                |
/// | `perform`      | Every action tick while the state is current               |
/// | `advance`      | Every host frame while the state is current                |
/// | `on_exit`      | When the owning state is left; the cancellation point     |
///
/// # Long-running actions
///
/// An action whose effect spans several frames (a burst of shots, a timed
/// dash) keeps its own micro state machine.  `perform` only *starts* a run;
/// `advance` moves it forward by `ctx.frame.dt` so it keeps going between
/// action samples.  `on_exit` must stop any in-flight run synchronously and
/// release whatever collaborator it was driving.
///
/// # Missing collaborators
///
/// If the target has no position, an action must simply do nothing for that
/// call.  Actions that cannot work at all without a bound target return
/// `true` from [`requires_target`][Self::requires_target] so the builder
/// rejects the configuration up front.
pub trait Action<O>: Send {
    /// Human-readable name used in logs.
    fn label(&self) -> &str;

    fn initialize(&mut self, _ctx: &mut ActionContext<'_, O>) {}

    fn on_enter(&mut self, _ctx: &mut ActionContext<'_, O>) {}

    fn perform(&mut self, ctx: &mut ActionContext<'_, O>);

    fn advance(&mut self, _ctx: &mut ActionContext<'_, O>) {}

    fn on_exit(&mut self, _ctx: &mut ActionContext<'_, O>) {}

    /// `true` while a multi-frame run is active.
    fn in_progress(&self) -> bool {
        false
    }

    fn requires_target(&self) -> bool {
        false
    }
}

/// An action registered in a state, with its initialization gate.
pub(crate) struct ActionSlot<O> {
    pub(crate) action: Box<dyn Action<O>>,
    pub(crate) init:   InitGate,
}

impl<O> ActionSlot<O> {
    pub(crate) fn new(mode: InitializationMode, action: Box<dyn Action<O>>) -> Self {
        Self { action, init: InitGate::new(mode) }
    }

    pub(crate) fn initialize(&mut self, ctx: &mut ActionContext<'_, O>) {
        if self.init.begin() {
            self.action.initialize(ctx);
        }
    }
}
