//! CSV event log.
//!
//! Creates two files in the configured output directory:
//! - `transitions.csv`: `frame,time,brain,from,to`
//! - `config_errors.csv`: `frame,time,brain,message`

use std::fs::File;
use std::path::Path;

use brain_core::FrameTime;
use brain_fsm::BrainEvent;
use csv::Writer;

use crate::{OutputError, OutputResult, SimObserver};

/// A [`SimObserver`] that appends every brain event to CSV files.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct CsvTransitionLog {
    transitions: Writer<File>,
    errors:      Writer<File>,
    rows:        u64,
    finished:    bool,
    last_error:  Option<OutputError>,
}

impl CsvTransitionLog {
    /// Create (or truncate) the two CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut transitions = Writer::from_path(dir.join("transitions.csv"))?;
        transitions.write_record(["frame", "time", "brain", "from", "to"])?;

        let mut errors = Writer::from_path(dir.join("config_errors.csv"))?;
        errors.write_record(["frame", "time", "brain", "message"])?;

        Ok(Self { transitions, errors, rows: 0, finished: false, last_error: None })
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Number of data rows written so far, across both files.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush both files.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.transitions.flush()?;
        self.errors.flush()?;
        Ok(())
    }

    fn write_event(&mut self, frame: &FrameTime, event: &BrainEvent) -> OutputResult<()> {
        match event {
            BrainEvent::Transitioned { brain, from, to, at } => {
                self.transitions.write_record(&[
                    frame.frame.to_string(),
                    at.secs().to_string(),
                    brain.0.to_string(),
                    from.clone().unwrap_or_default(),
                    to.clone(),
                ])?;
            }
            BrainEvent::ConfigurationError { brain, error, at } => {
                self.errors.write_record(&[
                    frame.frame.to_string(),
                    at.secs().to_string(),
                    brain.0.to_string(),
                    error.to_string(),
                ])?;
            }
        }
        self.rows += 1;
        Ok(())
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl SimObserver for CsvTransitionLog {
    fn on_brain_event(&mut self, frame: &FrameTime, event: &BrainEvent) {
        let result = self.write_event(frame, event);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_frame: u64) {
        let result = self.finish();
        self.store_err(result);
    }
}
