//! Capability contracts the brain needs from its host.
//!
//! A brain never reaches into a global world.  The host injects exactly two
//! collaborators at construction time:
//!
//! - an [`Owner`]: the controlled entity, which can be queried for its
//!   position and [`StatusFlags`] and commanded with [`Directive`]s;
//! - an optional [`Target`]: something with a world position the brain is
//!   interested in (the player, an objective, a noise source).
//!
//! Only actions receive `&mut` access to the owner.  Decisions see it
//! through a shared reference.

use std::sync::{Arc, RwLock};

use brain_core::{Position, StatusFlags, Vec3};

/// A command an action issues to its owner.
///
/// The host decides what each directive means physically; the brain only
/// guarantees ordering (directives are applied in the order actions issue
/// them within a tick).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Directive {
    /// Apply an instantaneous impulse.
    Impulse(Vec3),
    /// Start or keep moving towards `destination` at `speed` m/s.
    MoveTowards { destination: Position, speed: f32 },
    /// Stop any ongoing movement.
    Stop,
    /// Turn the weapon (or head) towards a point.
    Aim(Position),
    /// Pull the weapon trigger once.
    TriggerWeapon,
    /// Release the weapon trigger and abort any automatic fire.
    ReleaseWeapon,
}

/// The entity a brain controls.
pub trait Owner: Send + 'static {
    /// Current world position.
    fn position(&self) -> Position;

    /// Current status flags (stunned, dead, grounded, …).
    fn status(&self) -> StatusFlags;

    /// Apply a directive issued by an action.
    fn apply(&mut self, directive: Directive);

    /// `true` if every flag in `flags` is set.
    #[inline]
    fn has_status(&self, flags: StatusFlags) -> bool {
        self.status().contains(flags)
    }
}

/// A position provider.
///
/// Returning `None` means "the target currently has no position" (it
/// despawned, is hidden, …); decisions treat that as a missing collaborator
/// and fail closed.
pub trait Target: Send + 'static {
    fn position(&self) -> Option<Position>;
}

/// A fixed point in space is a valid target.
impl Target for Position {
    #[inline]
    fn position(&self) -> Option<Position> {
        Some(*self)
    }
}

/// A target whose position the host updates every frame and many brains
/// read.
///
/// Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct SharedTarget(Arc<RwLock<Option<Position>>>);

impl SharedTarget {
    pub fn new(position: Option<Position>) -> Self {
        Self(Arc::new(RwLock::new(position)))
    }

    /// Move the target (or clear it with `None`).
    pub fn set(&self, position: Option<Position>) {
        match self.0.write() {
            Ok(mut slot) => *slot = position,
            Err(poisoned) => *poisoned.into_inner() = position,
        }
    }
}

impl Target for SharedTarget {
    fn position(&self) -> Option<Position> {
        match self.0.read() {
            Ok(slot) => *slot,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
