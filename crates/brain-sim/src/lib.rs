//! `brain-sim`: host frame loop for populations of brains.
//!
//! # Frame loop
//!
//! ```text
//! for frame in 0..config.total_frames:
//!   ① Clock : SimClock::advance(config.frame_dt) → FrameTime (scaled)
//!   ② Tick  : Brain::tick(frame) for every brain
//!               (parallel with the `parallel` feature)
//!   ③ Events: drain each brain's BrainEvents in registration order
//!               → SimObserver::on_brain_event
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Runs the tick phase on Rayon's thread pool.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use brain_sim::{CsvTransitionLog, SimBuilder, SimConfig};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).brains(brains).build()?;
//! let mut log = CsvTransitionLog::new(Path::new("./output"))?;
//! sim.run(&mut log);
//! if let Some(e) = log.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod builder;
pub mod config;
pub mod csv_log;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use config::SimConfig;
pub use csv_log::CsvTransitionLog;
pub use error::{OutputError, OutputResult, SimError, SimResult};
pub use observer::{EventCollector, NoopObserver, SimObserver};
pub use sim::Sim;
