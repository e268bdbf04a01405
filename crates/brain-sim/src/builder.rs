//! Fluent builder for constructing a [`Sim`].

use std::collections::HashSet;

use brain_core::SimClock;
use brain_fsm::{Brain, Owner};

use crate::{Sim, SimConfig, SimError, SimResult};

/// Fluent builder for [`Sim<O>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: frame length, run length, seed, time scale.
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default |
/// |-------------------|---------|
/// | `.brain(b)`       | none    |
/// | `.brains(iter)`   | none    |
/// | `.start(b)`       | `true`  |
///
/// `build` turns on event recording for every brain so the observer sees
/// all transitions, and (unless `.start(false)`) calls [`Brain::start`] on
/// each.  Entry events produced by `start` reach the observer with the
/// first frame.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .brains(guards)
///     .build()?;
/// let mut log = CsvTransitionLog::new(Path::new("./output"))?;
/// sim.run(&mut log);
/// ```
pub struct SimBuilder<O> {
    config: SimConfig,
    brains: Vec<Brain<O>>,
    start:  bool,
}

impl<O: Owner> SimBuilder<O> {
    pub fn new(config: SimConfig) -> Self {
        Self { config, brains: Vec::new(), start: true }
    }

    pub fn brain(mut self, brain: Brain<O>) -> Self {
        self.brains.push(brain);
        self
    }

    pub fn brains(mut self, brains: impl IntoIterator<Item = Brain<O>>) -> Self {
        self.brains.extend(brains);
        self
    }

    /// Whether `build` starts the brains.
    pub fn start(mut self, start: bool) -> Self {
        self.start = start;
        self
    }

    pub fn build(mut self) -> SimResult<Sim<O>> {
        self.config.validate()?;

        let mut seen = HashSet::with_capacity(self.brains.len());
        for brain in &self.brains {
            if !seen.insert(brain.id()) {
                return Err(SimError::DuplicateBrain(brain.id()));
            }
        }

        let mut clock = SimClock::new();
        clock.set_time_scale(self.config.time_scale)?;

        for brain in &mut self.brains {
            brain.set_event_recording(true);
            if self.start {
                brain.start();
            }
        }

        Ok(Sim { config: self.config, clock, brains: self.brains })
    }
}
