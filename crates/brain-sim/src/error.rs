//! Error types for brain-sim.

use brain_core::{BrainId, CoreError};
use brain_fsm::BrainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("brain id {0} registered more than once")]
    DuplicateBrain(BrainId),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Brain(#[from] BrainError),
}

pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur when writing simulation output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
