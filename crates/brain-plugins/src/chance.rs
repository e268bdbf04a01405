//! `RandomChance`: fires with a fixed probability on each evaluation.

use brain_core::BrainRng;
use brain_fsm::{Decision, DecisionContext};

pub struct RandomChance {
    label: String,
    odds:  f64,
    rng:   BrainRng,
}

impl RandomChance {
    /// `odds` is clamped to `[0, 1]`.
    pub fn new(odds: f64, rng: BrainRng) -> Self {
        Self { label: "random_chance".to_owned(), odds: odds.clamp(0.0, 1.0), rng }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn odds(&self) -> f64 {
        self.odds
    }
}

impl<O> Decision<O> for RandomChance {
    fn label(&self) -> &str {
        &self.label
    }

    fn decide(&mut self, _ctx: &DecisionContext<'_, O>) -> bool {
        self.rng.gen_bool(self.odds)
    }
}
