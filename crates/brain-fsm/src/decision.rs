//! The `Decision` trait: predicates that drive transitions.

use crate::context::DecisionContext;
use crate::init::{InitGate, InitializationMode};
use crate::Signal;

/// A pluggable predicate.
///
/// Same lifecycle shape as [`Action`][crate::Action] without `perform`.
/// `decide` is called at most once per decision tick, in rule order, and
/// only until the first rule fires.
///
/// Decisions never command the owner: they only get a shared reference to
/// it.  Private bookkeeping (a countdown, a latch) lives in `&mut self`.
///
/// # Conventions
///
/// - A missing collaborator (no target, target without a position) makes
///   `decide` return `false`.
/// - Comparison decisions document whether their boundary is inclusive.
/// - Latches set by [`on_signal`][Self::on_signal] are cleared in both
///   `on_enter` and `on_exit`, so every visit starts clean.
pub trait Decision<O>: Send {
    fn label(&self) -> &str;

    fn initialize(&mut self, _ctx: &DecisionContext<'_, O>) {}

    fn on_enter(&mut self, _ctx: &DecisionContext<'_, O>) {}

    fn decide(&mut self, ctx: &DecisionContext<'_, O>) -> bool;

    fn on_exit(&mut self, _ctx: &DecisionContext<'_, O>) {}

    /// Receive a host event while the owning state is current.
    fn on_signal(&mut self, _signal: &Signal) {}

    fn requires_target(&self) -> bool {
        false
    }
}

pub(crate) struct DecisionSlot<O> {
    pub(crate) decision: Box<dyn Decision<O>>,
    pub(crate) init:     InitGate,
}

impl<O> DecisionSlot<O> {
    pub(crate) fn new(mode: InitializationMode, decision: Box<dyn Decision<O>>) -> Self {
        Self { decision, init: InitGate::new(mode) }
    }

    pub(crate) fn initialize(&mut self, ctx: &DecisionContext<'_, O>) {
        if self.init.begin() {
            self.decision.initialize(ctx);
        }
    }
}
