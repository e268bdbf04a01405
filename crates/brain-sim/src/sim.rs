//! The `Sim` struct and its frame loop.

use brain_core::{BrainId, FrameTime, SimClock};
use brain_fsm::{Brain, Owner};
use tracing::{debug, trace};

use crate::{SimConfig, SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// Drives a population of brains from one host clock.
///
/// Each frame:
///
/// 1. **Clock**: advance the [`SimClock`] by `config.frame_dt` (scaled).
/// 2. **Tick**: call [`Brain::tick`] on every brain with the same
///    [`FrameTime`] (Rayon-parallel with the `parallel` feature).
/// 3. **Events**: drain every brain's recorded events in ascending
///    registration order and hand them to the observer.
///
/// Brains never see each other, so the tick phase has no ordering
/// dependencies and the event stream is identical with or without
/// `parallel`.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<O> {
    /// Frame length, run length, seed.
    pub config: SimConfig,

    /// Host clock.  Its time scale applies to every brain.
    pub clock: SimClock,

    pub(crate) brains: Vec<Brain<O>>,
}

impl<O: Owner> Sim<O> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run `config.total_frames` frames from the current position.
    pub fn run<S: SimObserver>(&mut self, observer: &mut S) {
        debug!(frames = self.config.total_frames, brains = self.brains.len(), "sim run");
        self.run_frames(self.config.total_frames, observer);
        observer.on_sim_end(self.clock.frame());
    }

    /// Run exactly `n` frames.  Does not call `on_sim_end`.
    pub fn run_frames<S: SimObserver>(&mut self, n: u64, observer: &mut S) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Advance one frame and return its timing.
    pub fn step<S: SimObserver>(&mut self, observer: &mut S) -> FrameTime {
        let frame = self.clock.advance(self.config.frame_dt);
        observer.on_frame_start(&frame);

        self.tick_brains(frame);

        for brain in &mut self.brains {
            for event in brain.drain_events() {
                observer.on_brain_event(&frame, &event);
            }
        }

        let active = self.active_count();
        trace!(frame = frame.frame, now = %frame.now, active, "frame end");
        observer.on_frame_end(&frame, active);
        frame
    }

    /// Pause (`0.0`) or speed up every brain.
    pub fn set_time_scale(&mut self, scale: f32) -> SimResult<()> {
        self.clock.set_time_scale(scale)?;
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn brains(&self) -> &[Brain<O>] {
        &self.brains
    }

    /// Mutable access for host-side changes between frames (signals,
    /// forced transitions, owner updates).
    pub fn brains_mut(&mut self) -> &mut [Brain<O>] {
        &mut self.brains
    }

    pub fn brain(&self, id: BrainId) -> Option<&Brain<O>> {
        self.brains.iter().find(|b| b.id() == id)
    }

    pub fn brain_mut(&mut self, id: BrainId) -> Option<&mut Brain<O>> {
        self.brains.iter_mut().find(|b| b.id() == id)
    }

    pub fn active_count(&self) -> usize {
        self.brains.iter().filter(|b| b.is_active()).count()
    }

    // ── Tick phase ────────────────────────────────────────────────────────

    fn tick_brains(&mut self, frame: FrameTime) {
        #[cfg(not(feature = "parallel"))]
        {
            for brain in &mut self.brains {
                brain.tick(frame);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.brains.par_iter_mut().for_each(|brain| brain.tick(frame));
        }
    }
}
