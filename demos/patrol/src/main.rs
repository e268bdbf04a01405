//! patrol: guards driven by finite-state brains chase a player around a
//! courtyard.
//!
//! The guard brain is loaded from a TOML blueprint; every state transition
//! and configuration error is written to `transitions.csv` /
//! `config_errors.csv` in the output directory.
//!
//! ```text
//! cargo run -p patrol -- [scenario.toml] [output_dir]
//! RUST_LOG=brain_fsm=debug cargo run -p patrol     # log every transition
//! ```

mod scenario;
mod world;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use brain_core::{BrainId, BrainRng, FrameTime};
use brain_fsm::{Brain, BrainEvent, SharedTarget, Signal};
use brain_plugins::StandardPlugins;
use brain_sim::{CsvTransitionLog, SimBuilder, SimObserver};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use scenario::{Scenario, vec3};
use world::{Guard, Player};

// ── Observer ──────────────────────────────────────────────────────────────────

/// Forwards to the CSV log and keeps a few counters for the summary.
struct DemoObserver {
    log:         CsvTransitionLog,
    transitions: usize,
    errors:      usize,
}

impl SimObserver for DemoObserver {
    fn on_brain_event(&mut self, frame: &FrameTime, event: &BrainEvent) {
        match event {
            BrainEvent::Transitioned { brain, from: Some(from), to, .. } => {
                info!(frame = frame.frame, %brain, %from, %to, "guard changed state");
                self.transitions += 1;
            }
            BrainEvent::Transitioned { .. } => self.transitions += 1,
            BrainEvent::ConfigurationError { brain, error, .. } => {
                warn!(frame = frame.frame, %brain, %error, "guard configuration error");
                self.errors += 1;
            }
        }
        self.log.on_brain_event(frame, event);
    }

    fn on_sim_end(&mut self, final_frame: u64) {
        self.log.on_sim_end(final_frame);
    }
}

// ── Player fire ───────────────────────────────────────────────────────────────

/// The live guard closest to the player, if within `range`.
fn nearest_guard<'a>(brains: &'a mut [Brain<Guard>], player: &Player, range: f32) -> Option<&'a mut Brain<Guard>> {
    brains
        .iter_mut()
        .filter(|b| !b.owner().is_dead())
        .map(|b| (b.owner().position.distance(player.position), b))
        .filter(|(d, _)| *d <= range)
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, b)| b)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,brain_fsm=warn")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let scenario_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/blueprints/guard.toml")));
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("output/patrol"));

    // 1. Scenario.
    let scenario = Scenario::load(&scenario_path)?;
    let seed = scenario.sim.seed;
    info!(
        scenario = %scenario_path.display(),
        guards = scenario.guards.len(),
        states = scenario.brain.states.len(),
        frames = scenario.sim.total_frames,
        seed,
        "loaded scenario"
    );

    // 2. Player and the shared target every guard watches.
    let mut player = Player::new(
        scenario.player.waypoints.iter().copied().map(vec3).collect(),
        scenario.player.speed,
    );
    let target = SharedTarget::new(Some(player.position));

    // 3. One brain per guard, all from the same blueprint.
    let mut brains = Vec::with_capacity(scenario.guards.len());
    for (i, guard) in scenario.guards.iter().enumerate() {
        let id = BrainId::try_from(i).context("too many guards")?;
        let mut rng = BrainRng::new(seed, id);
        let mut plugins = StandardPlugins::new(rng.child(1));
        let brain = scenario
            .brain
            .builder(id, Guard::new(vec3(guard.post), guard.health), &mut plugins)?
            .label(format!("guard-{i}"))
            .target(Box::new(target.clone()))
            .rng(rng)
            .build()
            .with_context(|| format!("building brain for guard {i}"))?;
        brains.push(brain);
    }

    let mut sim = SimBuilder::new(scenario.sim).brains(brains).build()?;

    // 4. Output.
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    let mut observer = DemoObserver {
        log:         CsvTransitionLog::new(&out_dir)?,
        transitions: 0,
        errors:      0,
    };

    // 5. Frame loop: brains tick inside `step`; the host moves everything
    //    and resolves shots afterwards.
    let started = Instant::now();
    for _ in 0..sim.config.total_frames {
        let frame = sim.step(&mut observer);

        player.advance(frame.dt);
        target.set(Some(player.position));

        for brain in sim.brains_mut() {
            let guard = brain.owner_mut();
            guard.integrate(frame.dt);
            player.hits += guard.resolve_shots(player.position);
        }

        if player.ready_to_fire(frame.dt, scenario.player.fire_rate) {
            if let Some(brain) = nearest_guard(sim.brains_mut(), &player, scenario.player.range) {
                brain.owner_mut().take_damage(scenario.player.damage);
                brain.signal(&Signal::Hit { damage: scenario.player.damage });
            }
        }
    }
    observer.on_sim_end(sim.clock.frame());
    if let Some(e) = observer.log.take_error() {
        return Err(e).context("writing transition log");
    }

    // 6. Summary.
    println!();
    println!("=== patrol: {} frames, {:.1} s simulated in {:.2?} ===", sim.clock.frame(), sim.clock.now().secs(), started.elapsed());
    println!("{:<10} {:<10} {:>7} {:>6} {:>7}", "guard", "state", "health", "shots", "bursts");
    for brain in sim.brains() {
        let guard = brain.owner();
        println!(
            "{:<10} {:<10} {:>7.1} {:>6} {:>7}",
            brain.label(),
            brain.current_state_name().unwrap_or("-"),
            guard.health.max(0.0),
            guard.shots_fired,
            guard.bursts,
        );
    }
    println!();
    println!("player hits taken:  {}", player.hits);
    println!("transitions logged: {}", observer.transitions);
    println!("config errors:      {}", observer.errors);
    println!("output:             {}", out_dir.display());
    Ok(())
}
