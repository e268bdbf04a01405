//! Deterministic, injectable random source.
//!
//! # Determinism strategy
//!
//! Nothing in the scheduler touches `rand::thread_rng()`.  Every random draw
//! (period randomization at construction, random decisions, random
//! time-in-state thresholds) goes through a `BrainRng` handed in by the host.
//! Per-brain seeds are derived as:
//!
//!   seed = global_seed XOR (brain_id * MIXING_CONSTANT)
//!
//! so adding brains at the end of a population does not disturb the streams
//! of existing ones.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{BrainId, CoreError, CoreResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// A seeded `SmallRng` wrapper.
///
/// `Send` but deliberately not `Clone`: two brains must never share a stream
/// by accident.  Use [`child`][Self::child] to derive an independent one.
#[derive(Debug)]
pub struct BrainRng(SmallRng);

impl BrainRng {
    /// Seed deterministically from the run's global seed and a brain ID.
    pub fn new(global_seed: u64, brain: BrainId) -> Self {
        let seed = global_seed ^ (brain.0 as u64).wrapping_mul(MIXING_CONSTANT);
        BrainRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed directly from a raw `u64`.
    pub fn from_seed(seed: u64) -> Self {
        BrainRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent child stream, e.g. one per plugin, so their
    /// draw orders stay uncoupled.
    pub fn child(&mut self, offset: u64) -> BrainRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        BrainRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Draw a duration in seconds uniformly from the closed range
    /// `[min, max]`.  A degenerate range returns `min` without consuming a
    /// draw.
    pub fn duration_between(&mut self, min: f64, max: f64) -> CoreResult<f64> {
        if !min.is_finite() || min < 0.0 {
            return Err(CoreError::InvalidDuration(min));
        }
        if !max.is_finite() || max < 0.0 {
            return Err(CoreError::InvalidDuration(max));
        }
        if min > max {
            return Err(CoreError::InvalidRange { min, max });
        }
        if min == max {
            return Ok(min);
        }
        Ok(self.0.gen_range(min..=max))
    }
}
