//! Integration tests for brain-sim.

use brain_core::{BrainId, FrameTime, Position, StatusFlags, Vec3};
use brain_fsm::{Brain, BrainBuilder, BrainEvent, Directive, Owner, State};
use brain_plugins::{DeactivateBrain, TimeInState};

use crate::{EventCollector, NoopObserver, Sim, SimBuilder, SimConfig, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Default)]
struct TestOwner {
    position: Vec3,
}

impl Owner for TestOwner {
    fn position(&self) -> Position {
        self.position
    }

    fn status(&self) -> StatusFlags {
        StatusFlags::empty()
    }

    fn apply(&mut self, _directive: Directive) {}
}

fn test_config(total_frames: u64) -> SimConfig {
    SimConfig {
        frame_dt:     0.25,
        total_frames,
        time_scale:   1.0,
        seed:         42,
    }
}

/// Alternates `A` ↔ `B`, staying 0.5 s in each; at 0.25 s frames it switches
/// every third frame.
fn ping(id: u32) -> Brain<TestOwner> {
    BrainBuilder::new(BrainId(id), TestOwner::default())
        .label("ping")
        .state(State::new("A").rule(Box::new(TimeInState::fixed(0.5)), "B"))
        .state(State::new("B").rule(Box::new(TimeInState::fixed(0.5)), "A"))
        .build()
        .unwrap()
}

fn sleeper(id: u32) -> Brain<TestOwner> {
    BrainBuilder::new(BrainId(id), TestOwner::default())
        .state(State::new("Dead").action(Box::new(DeactivateBrain)))
        .build()
        .unwrap()
}

fn ping_sim(brains: u32, frames: u64) -> Sim<TestOwner> {
    SimBuilder::new(test_config(frames))
        .brains((0..brains).map(ping))
        .build()
        .unwrap()
}

#[derive(Default)]
struct CountingObserver {
    starts:    u64,
    ends:      u64,
    events:    usize,
    last_end:  Option<(u64, usize)>,
    sim_end:   Option<u64>,
}

impl SimObserver for CountingObserver {
    fn on_frame_start(&mut self, _frame: &FrameTime) {
        self.starts += 1;
    }
    fn on_brain_event(&mut self, _frame: &FrameTime, _event: &BrainEvent) {
        self.events += 1;
    }
    fn on_frame_end(&mut self, frame: &FrameTime, active: usize) {
        self.ends += 1;
        self.last_end = Some((frame.frame, active));
    }
    fn on_sim_end(&mut self, final_frame: u64) {
        self.sim_end = Some(final_frame);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_and_starts_brains() {
        let sim = ping_sim(3, 10);
        assert_eq!(sim.brains().len(), 3);
        assert!(sim.brains().iter().all(|b| b.current_state_name() == Some("A")));
        assert_eq!(sim.clock.frame(), 0);
    }

    #[test]
    fn start_can_be_deferred() {
        let sim = SimBuilder::new(test_config(1)).brain(ping(0)).start(false).build().unwrap();
        assert!(sim.brains()[0].current_state_name().is_none());
    }

    #[test]
    fn duplicate_brain_ids_rejected() {
        let result = SimBuilder::new(test_config(1)).brain(ping(4)).brain(ping(4)).build();
        assert!(matches!(result, Err(SimError::DuplicateBrain(BrainId(4)))));
    }

    #[test]
    fn invalid_frame_dt_rejected() {
        let config = SimConfig { frame_dt: 0.0, ..test_config(1) };
        let result = SimBuilder::<TestOwner>::new(config).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn negative_time_scale_rejected() {
        let config = SimConfig { time_scale: -1.0, ..test_config(1) };
        assert!(SimBuilder::<TestOwner>::new(config).build().is_err());
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sim_tests {
    use super::*;

    #[test]
    fn run_advances_clock_and_calls_observer() {
        let mut sim = ping_sim(2, 8);
        let mut obs = CountingObserver::default();
        sim.run(&mut obs);

        assert_eq!(sim.clock.frame(), 8);
        assert_eq!(sim.clock.now().secs(), 2.0);
        assert_eq!(obs.starts, 8);
        assert_eq!(obs.ends, 8);
        assert_eq!(obs.last_end, Some((8, 2)));
        assert_eq!(obs.sim_end, Some(8));
    }

    #[test]
    fn transitions_reported_per_frame() {
        let mut sim = ping_sim(1, 7);
        let mut obs = EventCollector::new();
        sim.run(&mut obs);

        let transitions: Vec<_> = obs.transitions().collect();
        assert_eq!(
            transitions,
            [
                (1, BrainId(0), "A"),
                (3, BrainId(0), "B"),
                (6, BrainId(0), "A"),
            ]
        );
        assert_eq!(sim.brains()[0].current_state_name(), Some("A"));
    }

    #[test]
    fn events_ordered_by_brain() {
        let mut sim = ping_sim(3, 3);
        let mut obs = EventCollector::new();
        sim.run_frames(3, &mut obs);
        let at_frame_3: Vec<_> = obs.transitions().filter(|(f, ..)| *f == 3).map(|(_, b, _)| b).collect();
        assert_eq!(at_frame_3, [BrainId(0), BrainId(1), BrainId(2)]);
    }

    #[test]
    fn zero_time_scale_pauses_everything() {
        let mut sim = ping_sim(2, 20);
        sim.set_time_scale(0.0).unwrap();
        let mut obs = EventCollector::new();
        sim.run(&mut obs);

        assert_eq!(sim.clock.now().secs(), 0.0);
        assert!(obs.transitions().all(|(_, _, to)| to == "A"), "only the initial entries");
        for brain in sim.brains() {
            assert_eq!(brain.time_in_state(), 0.0);
            assert!(brain.last_decision_sample().is_none());
        }

        sim.set_time_scale(1.0).unwrap();
        sim.run_frames(3, &mut obs);
        assert!(obs.transitions().any(|(_, _, to)| to == "B"));
    }

    #[test]
    fn deactivated_brains_counted() {
        let mut sim = SimBuilder::new(test_config(2))
            .brain(ping(0))
            .brain(sleeper(1))
            .build()
            .unwrap();
        assert_eq!(sim.active_count(), 2);
        let mut obs = CountingObserver::default();
        sim.run(&mut obs);
        assert_eq!(sim.active_count(), 1);
        assert_eq!(obs.last_end, Some((2, 1)));
        assert!(!sim.brain(BrainId(1)).unwrap().is_active());
    }

    #[test]
    fn host_configuration_error_reaches_observer() {
        let mut sim = ping_sim(2, 1);
        let result = sim.brain_mut(BrainId(1)).unwrap().request_transition("Nope");
        assert!(result.is_err());

        let mut obs = EventCollector::new();
        sim.run(&mut obs);
        let errors: Vec<_> = obs
            .events
            .iter()
            .filter_map(|(_, e)| match e {
                BrainEvent::ConfigurationError { brain, .. } => Some(*brain),
                _ => None,
            })
            .collect();
        assert_eq!(errors, [BrainId(1)]);
    }

    #[test]
    fn identical_setups_produce_identical_streams() {
        let run = || {
            let mut sim = ping_sim(4, 40);
            let mut obs = EventCollector::new();
            sim.run(&mut obs);
            obs.events
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn noop_observer_runs() {
        let mut sim = ping_sim(1, 5);
        sim.run(&mut NoopObserver);
        assert_eq!(sim.clock.frame(), 5);
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_table_fills_defaults() {
        let config: SimConfig = toml::from_str("frame_dt = 0.5\nseed = 9\n").unwrap();
        assert_eq!(config.frame_dt, 0.5);
        assert_eq!(config.seed, 9);
        assert_eq!(config.total_frames, SimConfig::default().total_frames);
        assert_eq!(config.time_scale, 1.0);
    }

    #[test]
    fn duration_accounts_for_time_scale() {
        let config = SimConfig { time_scale: 0.5, ..test_config(8) };
        assert_eq!(config.duration_secs(), 1.0);
    }
}

// ── CsvTransitionLog ──────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::CsvTransitionLog;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut log = CsvTransitionLog::new(dir.path()).unwrap();
        log.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("transitions.csv")).unwrap();
        assert_eq!(rdr.headers().unwrap(), vec!["frame", "time", "brain", "from", "to"]);
        let mut rdr = csv::Reader::from_path(dir.path().join("config_errors.csv")).unwrap();
        assert_eq!(rdr.headers().unwrap(), vec!["frame", "time", "brain", "message"]);
    }

    #[test]
    fn transitions_written_in_order() {
        let dir = tmp();
        let mut log = CsvTransitionLog::new(dir.path()).unwrap();
        let mut sim = ping_sim(1, 7);
        sim.run(&mut log);
        assert!(log.take_error().is_none());
        assert_eq!(log.rows(), 3);

        let mut rdr = csv::Reader::from_path(dir.path().join("transitions.csv")).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0], vec!["1", "0", "0", "", "A"]);
        assert_eq!(&rows[1], vec!["3", "0.75", "0", "A", "B"]);
        assert_eq!(&rows[2], vec!["6", "1.5", "0", "B", "A"]);
    }

    #[test]
    fn configuration_errors_written() {
        let dir = tmp();
        let mut log = CsvTransitionLog::new(dir.path()).unwrap();
        let mut sim = ping_sim(1, 1);
        let _ = sim.brain_mut(BrainId(0)).unwrap().request_transition("Ghost");
        sim.run(&mut log);

        let mut rdr = csv::Reader::from_path(dir.path().join("config_errors.csv")).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "0");
        assert!(rows[0][3].contains("Ghost"));
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut log = CsvTransitionLog::new(dir.path()).unwrap();
        log.finish().unwrap();
        log.finish().unwrap();
    }
}
