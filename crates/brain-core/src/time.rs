//! Simulation time model.
//!
//! # Design
//!
//! Unlike a fixed-step schedule, brains run inside a real-time host loop
//! whose frames have variable length.  Time is therefore continuous:
//!
//! - [`SimTime`] is an absolute instant in scaled simulation seconds.
//! - [`FrameTime`] is what the host hands to every brain once per frame:
//!   the instant, the scaled delta since the previous frame, and the
//!   current time scale.
//! - [`SimClock`] produces `FrameTime`s from unscaled frame deltas.
//!
//! Durations are plain `f64` seconds.  A `time_scale` of `0.0` means
//! "paused": brains treat such frames exactly like being inactive.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation instant, in seconds since the host started.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Seconds elapsed from `earlier` to `self`.  Negative if `earlier` is
    /// in the future.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}

// ── FrameTime ─────────────────────────────────────────────────────────────────

/// Per-frame timing handed to every brain tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameTime {
    /// Monotonic frame counter.
    pub frame: u64,
    /// Current instant (after this frame's delta was applied).
    pub now: SimTime,
    /// Scaled seconds since the previous frame.
    pub dt: f64,
    /// Host time scale in effect for this frame.
    pub time_scale: f32,
}

impl FrameTime {
    /// A frame at `now` with delta `dt` and unit time scale, for tests
    /// and for hosts that manage their own clock.
    #[inline]
    pub fn new(now: SimTime, dt: f64) -> Self {
        Self { frame: 0, now, dt, time_scale: 1.0 }
    }

    /// `true` when the host is paused (`time_scale == 0`).
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.time_scale == 0.0
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Host-side clock.  Advanced once per frame with the unscaled frame delta.
#[derive(Clone, Debug)]
pub struct SimClock {
    now:        SimTime,
    frame:      u64,
    time_scale: f32,
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimClock {
    pub fn new() -> Self {
        Self { now: SimTime::ZERO, frame: 0, time_scale: 1.0 }
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Set the time scale.  `0.0` pauses every brain driven by this clock.
    pub fn set_time_scale(&mut self, scale: f32) -> CoreResult<()> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(CoreError::Config(format!("time scale {scale} must be finite and >= 0")));
        }
        self.time_scale = scale;
        Ok(())
    }

    /// Advance by one frame of `unscaled_dt` real seconds and return the
    /// timing for that frame.
    pub fn advance(&mut self, unscaled_dt: f64) -> FrameTime {
        let dt = unscaled_dt.max(0.0) * self.time_scale as f64;
        self.now = self.now + dt;
        self.frame += 1;
        FrameTime {
            frame:      self.frame,
            now:        self.now,
            dt,
            time_scale: self.time_scale,
        }
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {} @ {} (x{})", self.frame, self.now, self.time_scale)
    }
}
