//! `DistanceToTarget`: compares owner-to-target distance with a threshold.

use brain_fsm::{Decision, DecisionContext, Owner};

/// How the measured distance is compared with the threshold.
///
/// Both ordered comparisons are inclusive: a distance exactly equal to the
/// threshold satisfies `GreaterThan` *and* `LowerThan`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison {
    /// `distance >= threshold`
    GreaterThan,
    /// `distance <= threshold`
    LowerThan,
    /// `|distance - threshold| <= tolerance`
    Equals { tolerance: f32 },
}

impl Comparison {
    #[inline]
    pub fn holds(self, distance: f32, threshold: f32) -> bool {
        match self {
            Comparison::GreaterThan         => distance >= threshold,
            Comparison::LowerThan           => distance <= threshold,
            Comparison::Equals { tolerance } => (distance - threshold).abs() <= tolerance,
        }
    }
}

/// Fires when the distance from the owner to the target satisfies the
/// comparison.  `false` while the target has no position.
pub struct DistanceToTarget {
    label:      String,
    comparison: Comparison,
    threshold:  f32,
}

impl DistanceToTarget {
    pub fn new(comparison: Comparison, threshold: f32) -> Self {
        Self { label: "distance_to_target".to_owned(), comparison, threshold }
    }

    pub fn greater_than(threshold: f32) -> Self {
        Self::new(Comparison::GreaterThan, threshold)
    }

    pub fn lower_than(threshold: f32) -> Self {
        Self::new(Comparison::LowerThan, threshold)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl<O: Owner> Decision<O> for DistanceToTarget {
    fn label(&self) -> &str {
        &self.label
    }

    fn decide(&mut self, ctx: &DecisionContext<'_, O>) -> bool {
        ctx.target_position()
            .map(|at| self.comparison.holds(ctx.owner.position().distance(at), self.threshold))
            .unwrap_or(false)
    }

    fn requires_target(&self) -> bool {
        true
    }
}
