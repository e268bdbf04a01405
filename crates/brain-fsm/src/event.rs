//! Records of notable brain activity, drained by the host.

use brain_core::{BrainId, SimTime};

use crate::BrainError;

/// Something the host may want to log, persist or react to.
///
/// Brains only record events when recording is enabled (see
/// [`Brain::set_event_recording`][crate::Brain::set_event_recording]); the
/// host drains them with [`Brain::drain_events`][crate::Brain::drain_events].
#[derive(Debug, Clone, PartialEq)]
pub enum BrainEvent {
    /// The brain entered `to`.  `from` is `None` on the first entry.
    Transitioned {
        brain: BrainId,
        from:  Option<String>,
        to:    String,
        at:    SimTime,
    },
    /// A runtime configuration error was reported and ignored.
    ConfigurationError {
        brain: BrainId,
        error: BrainError,
        at:    SimTime,
    },
}
