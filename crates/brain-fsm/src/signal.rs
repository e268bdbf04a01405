//! Host events forwarded to the current state's decisions.

/// Something that happened to the owner outside the brain's own sampling.
///
/// Decisions that react to events latch them in `on_signal` and report the
/// latch on their next `decide`.  Latches are cleared on enter and exit.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// The owner took damage.
    Hit { damage: f32 },
    /// The owner's target was lost by the host (despawn, teleport, …).
    TargetLost,
    /// Application-defined event.
    Custom(String),
}
