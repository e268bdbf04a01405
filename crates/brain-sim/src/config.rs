//! Host loop configuration.

use serde::{Deserialize, Serialize};

use crate::{SimError, SimResult};

/// Frame loop parameters.
///
/// Deserializes from the `[sim]` table of a scenario file; every field has a
/// default so partial tables are fine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Unscaled seconds per frame.
    pub frame_dt: f64,
    /// Frames executed by [`Sim::run`][crate::Sim::run].
    pub total_frames: u64,
    /// Initial host time scale; `0` starts paused.
    pub time_scale: f32,
    /// Global seed that per-brain rngs are derived from.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_dt:     1.0 / 60.0,
            total_frames: 600,
            time_scale:   1.0,
            seed:         0,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> SimResult<()> {
        if !self.frame_dt.is_finite() || self.frame_dt <= 0.0 {
            return Err(SimError::Config(format!("frame_dt must be > 0, got {}", self.frame_dt)));
        }
        if !self.time_scale.is_finite() || self.time_scale < 0.0 {
            return Err(SimError::Config(format!("time_scale must be >= 0, got {}", self.time_scale)));
        }
        Ok(())
    }

    /// Simulated seconds covered by a full run at the configured scale.
    pub fn duration_secs(&self) -> f64 {
        self.total_frames as f64 * self.frame_dt * self.time_scale as f64
    }
}
