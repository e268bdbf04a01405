//! Time-based decisions.

use brain_core::BrainRng;
use brain_fsm::{Decision, DecisionContext};
use tracing::warn;

/// Fires once the brain has spent at least a threshold number of seconds in
/// the current state.
///
/// The threshold is drawn uniformly from `[min, max]` on every entry into
/// the state, so two visits of the same state can last differently.
pub struct TimeInState {
    label:     String,
    min:       f64,
    max:       f64,
    rng:       BrainRng,
    threshold: f64,
}

impl TimeInState {
    /// `min` and `max` are swapped if given in the wrong order and clamped
    /// to be non-negative.
    pub fn between(min: f64, max: f64, rng: BrainRng) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let (min, max) = (min.max(0.0), max.max(0.0));
        Self { label: "time_in_state".to_owned(), min, max, rng, threshold: max }
    }

    pub fn fixed(secs: f64) -> Self {
        // A degenerate range never draws, so the seed is irrelevant.
        Self::between(secs, secs, BrainRng::from_seed(0))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// The threshold in force for the current visit.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl<O> Decision<O> for TimeInState {
    fn label(&self) -> &str {
        &self.label
    }

    fn on_enter(&mut self, ctx: &DecisionContext<'_, O>) {
        self.threshold = match self.rng.duration_between(self.min, self.max) {
            Ok(secs) => secs,
            Err(error) => {
                warn!(brain = %ctx.brain, %error, "time_in_state: falling back to max");
                self.max
            }
        };
    }

    fn decide(&mut self, ctx: &DecisionContext<'_, O>) -> bool {
        ctx.time_in_state >= self.threshold
    }
}

/// Always fires.  Paired with a target state it means "leave on the next
/// decision tick".
pub struct NextFrame;

impl<O> Decision<O> for NextFrame {
    fn label(&self) -> &str {
        "next_frame"
    }

    fn decide(&mut self, _ctx: &DecisionContext<'_, O>) -> bool {
        true
    }
}
