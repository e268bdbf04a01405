//! Simulation observer trait for progress reporting and data collection.

use brain_core::FrameTime;
use brain_fsm::BrainEvent;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// frame loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: transition printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_brain_event(&mut self, frame: &FrameTime, event: &BrainEvent) {
///         if let BrainEvent::Transitioned { brain, to, .. } = event {
///             println!("frame {}: {brain} -> {to}", frame.frame);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each frame, before any brain ticks.
    fn on_frame_start(&mut self, _frame: &FrameTime) {}

    /// Called once per event recorded during the frame, in ascending brain
    /// order and, per brain, in the order the events happened.
    fn on_brain_event(&mut self, _frame: &FrameTime, _event: &BrainEvent) {}

    /// Called at the end of each frame.  `active` is the number of brains
    /// still active after the frame.
    fn on_frame_end(&mut self, _frame: &FrameTime, _active: usize) {}

    /// Called once after the final frame of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_frame: u64) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Keeps every event in memory together with the frame it happened in.
#[derive(Default)]
pub struct EventCollector {
    pub events: Vec<(u64, BrainEvent)>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the transitions, as `(frame, brain, to)`.
    pub fn transitions(&self) -> impl Iterator<Item = (u64, brain_core::BrainId, &str)> {
        self.events.iter().filter_map(|(frame, event)| match event {
            BrainEvent::Transitioned { brain, to, .. } => Some((*frame, *brain, to.as_str())),
            BrainEvent::ConfigurationError { .. } => None,
        })
    }
}

impl SimObserver for EventCollector {
    fn on_brain_event(&mut self, frame: &FrameTime, event: &BrainEvent) {
        self.events.push((frame.frame, event.clone()));
    }
}
