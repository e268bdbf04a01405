//! Decisions over the brain's collaborators and host signals.

use brain_core::StatusFlags;
use brain_fsm::{Decision, DecisionContext, Owner, Signal};

// ── TargetIsNull ──────────────────────────────────────────────────────────────

/// Fires while no target is bound or the bound target has no position.
pub struct TargetIsNull;

impl<O> Decision<O> for TargetIsNull {
    fn label(&self) -> &str {
        "target_is_null"
    }

    fn decide(&mut self, ctx: &DecisionContext<'_, O>) -> bool {
        ctx.target_position().is_none()
    }
}

// ── OwnerStatus ───────────────────────────────────────────────────────────────

/// Fires while every flag in `flags` is set on the owner.
pub struct OwnerStatus {
    label: String,
    flags: StatusFlags,
}

impl OwnerStatus {
    pub fn new(flags: StatusFlags) -> Self {
        Self { label: "owner_status".to_owned(), flags }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl<O: Owner> Decision<O> for OwnerStatus {
    fn label(&self) -> &str {
        &self.label
    }

    fn decide(&mut self, ctx: &DecisionContext<'_, O>) -> bool {
        ctx.owner.has_status(self.flags)
    }
}

// ── HitCount ──────────────────────────────────────────────────────────────────

/// Fires once at least `hits` [`Signal::Hit`]s arrived during the current
/// visit of the state.
///
/// The count is latched between decision ticks and cleared on enter and
/// exit.
pub struct HitCount {
    label:    String,
    hits:     u32,
    received: u32,
}

impl HitCount {
    pub fn new(hits: u32) -> Self {
        Self { label: "hit_count".to_owned(), hits: hits.max(1), received: 0 }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn received(&self) -> u32 {
        self.received
    }
}

impl<O> Decision<O> for HitCount {
    fn label(&self) -> &str {
        &self.label
    }

    fn on_enter(&mut self, _ctx: &DecisionContext<'_, O>) {
        self.received = 0;
    }

    fn decide(&mut self, _ctx: &DecisionContext<'_, O>) -> bool {
        self.received >= self.hits
    }

    fn on_exit(&mut self, _ctx: &DecisionContext<'_, O>) {
        self.received = 0;
    }

    fn on_signal(&mut self, signal: &Signal) {
        if let Signal::Hit { .. } = signal {
            self.received = self.received.saturating_add(1);
        }
    }
}
