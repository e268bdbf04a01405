//! Scenario file: sim settings, the player's route, guard posts, and the
//! guard brain blueprint.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use brain_core::Vec3;
use brain_fsm::BrainBlueprint;
use brain_sim::SimConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub sim:    SimConfig,
    pub player: PlayerConfig,
    pub guards: Vec<GuardConfig>,
    pub brain:  BrainBlueprint,
}

#[derive(Debug, Deserialize)]
pub struct PlayerConfig {
    pub speed:     f32,
    /// Distance within which the player shoots back at guards.
    pub range:     f32,
    /// Seconds between the player's shots.
    pub fire_rate: f64,
    pub damage:    f32,
    pub waypoints: Vec<[f32; 3]>,
}

#[derive(Debug, Deserialize)]
pub struct GuardConfig {
    pub post:   [f32; 3],
    pub health: f32,
}

pub fn vec3([x, y, z]: [f32; 3]) -> Vec3 {
    Vec3::new(x, y, z)
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        let scenario: Scenario = toml::from_str(&text)
            .with_context(|| format!("parsing scenario {}", path.display()))?;
        ensure!(!scenario.guards.is_empty(), "scenario has no guards");
        ensure!(scenario.player.waypoints.len() >= 2, "player route needs at least two waypoints");
        ensure!(scenario.player.fire_rate > 0.0, "player fire_rate must be > 0");
        Ok(scenario)
    }
}
