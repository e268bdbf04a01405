//! Fluent builder for constructing a [`Brain`].

use brain_core::{BrainId, BrainRng, CoreError, FrameTime, SimTime};
use serde::{Deserialize, Serialize};

use crate::brain::NameIndex;
use crate::context::Commands;
use crate::{Brain, BrainError, BrainResult, Owner, State, Target};

// ── Period ────────────────────────────────────────────────────────────────────

/// How often a sampling clock fires, in seconds.
///
/// `Fixed(0.0)` samples every frame.  `Range` is drawn once, when the brain
/// is built, from the injected [`BrainRng`], so a population of brains
/// does not sample in lock-step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Period {
    Fixed(f64),
    Range { min: f64, max: f64 },
}

impl Default for Period {
    fn default() -> Self {
        Period::Fixed(0.0)
    }
}

impl Period {
    fn resolve(self, rng: Option<&mut BrainRng>, brain: &str, what: &'static str) -> BrainResult<f64> {
        let invalid = |source: CoreError| BrainError::InvalidPeriod {
            brain: brain.to_owned(),
            what,
            source,
        };
        match self {
            Period::Fixed(secs) => {
                if !secs.is_finite() || secs < 0.0 {
                    return Err(invalid(CoreError::InvalidDuration(secs)));
                }
                Ok(secs)
            }
            Period::Range { min, max } => {
                let rng = rng.ok_or_else(|| BrainError::MissingRng { brain: brain.to_owned(), what })?;
                rng.duration_between(min, max).map_err(invalid)
            }
        }
    }
}

// ── BrainBuilder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Brain<O>`].
///
/// # Required inputs
///
/// - `BrainId` and the owner `O`: passed to [`new`](Self::new).
/// - At least one [`State`] for the brain to do anything useful.
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default            |
/// |-------------------------|--------------------|
/// | `.label(s)`             | `"brain"`          |
/// | `.target(t)`            | no target          |
/// | `.action_period(p)`     | `Period::Fixed(0)` |
/// | `.decision_period(p)`   | `Period::Fixed(0)` |
/// | `.rng(r)`               | none               |
/// | `.reset_on_start(b)`    | `true`             |
/// | `.reset_on_enable(b)`   | `false`            |
/// | `.record_events(b)`     | `false`            |
///
/// # Validation
///
/// [`build`](Self::build) rejects empty or duplicate state names, rules
/// that target an unknown state, components that need a target when none is
/// bound, and randomized periods without an rng.
///
/// # Example
///
/// ```rust,ignore
/// let mut brain = BrainBuilder::new(BrainId(0), guard)
///     .label("guard")
///     .target(Box::new(player.clone()))
///     .decision_period(Period::Range { min: 0.1, max: 0.3 })
///     .rng(BrainRng::new(seed, BrainId(0)))
///     .state(patrol)
///     .state(chase)
///     .build()?;
/// brain.start();
/// ```
pub struct BrainBuilder<O> {
    id:              BrainId,
    label:           String,
    owner:           O,
    target:          Option<Box<dyn Target>>,
    states:          Vec<State<O>>,
    action_period:   Period,
    decision_period: Period,
    rng:             Option<BrainRng>,
    reset_on_start:  bool,
    reset_on_enable: bool,
    record_events:   bool,
}

impl<O: Owner> BrainBuilder<O> {
    pub fn new(id: BrainId, owner: O) -> Self {
        Self {
            id,
            label:           "brain".to_owned(),
            owner,
            target:          None,
            states:          Vec::new(),
            action_period:   Period::default(),
            decision_period: Period::default(),
            rng:             None,
            reset_on_start:  true,
            reset_on_enable: false,
            record_events:   false,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn target(mut self, target: Box<dyn Target>) -> Self {
        self.target = Some(target);
        self
    }

    /// Append a state.  The first state appended is the reset state.
    pub fn state(mut self, state: State<O>) -> Self {
        self.states.push(state);
        self
    }

    pub fn action_period(mut self, period: Period) -> Self {
        self.action_period = period;
        self
    }

    pub fn decision_period(mut self, period: Period) -> Self {
        self.decision_period = period;
        self
    }

    /// Random source for period randomization.  Consumed by `build`.
    pub fn rng(mut self, rng: BrainRng) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn reset_on_start(mut self, enabled: bool) -> Self {
        self.reset_on_start = enabled;
        self
    }

    pub fn reset_on_enable(mut self, enabled: bool) -> Self {
        self.reset_on_enable = enabled;
        self
    }

    pub fn record_events(mut self, enabled: bool) -> Self {
        self.record_events = enabled;
        self
    }

    /// Validate the configuration and return a brain in the uninitialized
    /// mode.  Call [`Brain::start`] (or `reset`) before the first tick.
    pub fn build(mut self) -> BrainResult<Brain<O>> {
        let describe = format!("{} ({})", self.label, self.id);

        // ── State names ───────────────────────────────────────────────────
        let mut index = NameIndex::default();
        for (i, state) in self.states.iter().enumerate() {
            if state.name().is_empty() {
                return Err(BrainError::EmptyStateName { brain: describe });
            }
            if index.insert(state.name().to_owned(), i).is_some() {
                return Err(BrainError::DuplicateState {
                    brain: describe,
                    name:  state.name().to_owned(),
                });
            }
        }

        // ── Rule targets and collaborators ────────────────────────────────
        for state in &self.states {
            for rule in state.rules() {
                if !rule.target().is_empty() && !index.contains_key(rule.target()) {
                    return Err(BrainError::UnknownState {
                        brain:  describe,
                        from:   Some(state.name().to_owned()),
                        target: rule.target().to_owned(),
                    });
                }
            }
            if self.target.is_none() {
                if let Some(component) = state.requires_target() {
                    return Err(BrainError::MissingTarget {
                        brain:     describe,
                        state:     state.name().to_owned(),
                        component: component.to_owned(),
                    });
                }
            }
        }

        // ── Sampling periods ──────────────────────────────────────────────
        let action_period = self.action_period.resolve(self.rng.as_mut(), &describe, "action")?;
        let decision_period = self.decision_period.resolve(self.rng.as_mut(), &describe, "decision")?;

        Ok(Brain {
            id: self.id,
            label: self.label,
            owner: self.owner,
            target: self.target,
            states: self.states,
            index,
            current: None,
            active: true,
            action_period,
            decision_period,
            last_action_sample: None,
            last_decision_sample: None,
            time_in_state: 0.0,
            last_known_target_position: None,
            reset_on_start: self.reset_on_start,
            reset_on_enable: self.reset_on_enable,
            last_frame: FrameTime::new(SimTime::ZERO, 0.0),
            commands: Commands::default(),
            record_events: self.record_events,
            events: Vec::new(),
        })
    }
}
