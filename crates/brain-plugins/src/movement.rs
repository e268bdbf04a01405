//! Movement actions: steer towards the target, kick with an impulse, halt.

use brain_core::Vec3;
use brain_fsm::{Action, ActionContext, Directive, Owner};

// ── MoveTowardsTarget ─────────────────────────────────────────────────────────

/// Keeps the owner moving towards the target's current position.
///
/// Within `stop_distance` (inclusive) the owner is told to stop instead.
/// Without a target position the action does nothing for that call.
pub struct MoveTowardsTarget {
    label:         String,
    speed:         f32,
    stop_distance: f32,
    moving:        bool,
}

impl MoveTowardsTarget {
    pub fn new(speed: f32, stop_distance: f32) -> Self {
        Self {
            label: "move_towards_target".to_owned(),
            speed,
            stop_distance: stop_distance.max(0.0),
            moving: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl<O: Owner> Action<O> for MoveTowardsTarget {
    fn label(&self) -> &str {
        &self.label
    }

    fn on_enter(&mut self, _ctx: &mut ActionContext<'_, O>) {
        self.moving = false;
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, O>) {
        let Some(destination) = ctx.target_position() else {
            return;
        };
        if ctx.owner.position().distance(destination) <= self.stop_distance {
            if self.moving {
                ctx.owner.apply(Directive::Stop);
                self.moving = false;
            }
            return;
        }
        ctx.owner.apply(Directive::MoveTowards { destination, speed: self.speed });
        self.moving = true;
    }

    fn on_exit(&mut self, ctx: &mut ActionContext<'_, O>) {
        if self.moving {
            ctx.owner.apply(Directive::Stop);
            self.moving = false;
        }
    }

    fn requires_target(&self) -> bool {
        true
    }
}

// ── ImpulseAction ─────────────────────────────────────────────────────────────

/// Direction an [`ImpulseAction`] pushes in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImpulseDirection {
    TowardsTarget,
    AwayFromTarget,
    /// World-space direction; normalized before use.
    Fixed(Vec3),
}

/// Applies an instantaneous impulse of `strength` every action tick.
pub struct ImpulseAction {
    label:     String,
    strength:  f32,
    direction: ImpulseDirection,
}

impl ImpulseAction {
    pub fn new(strength: f32, direction: ImpulseDirection) -> Self {
        Self { label: "impulse".to_owned(), strength, direction }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl<O: Owner> Action<O> for ImpulseAction {
    fn label(&self) -> &str {
        &self.label
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, O>) {
        let here = ctx.owner.position();
        let direction = match self.direction {
            ImpulseDirection::Fixed(d) => d.normalized(),
            ImpulseDirection::TowardsTarget => match ctx.target_position() {
                Some(at) => here.direction_to(at),
                None => return,
            },
            ImpulseDirection::AwayFromTarget => match ctx.target_position() {
                Some(at) => -here.direction_to(at),
                None => return,
            },
        };
        if direction == Vec3::ZERO {
            return;
        }
        ctx.owner.apply(Directive::Impulse(direction * self.strength));
    }

    fn requires_target(&self) -> bool {
        !matches!(self.direction, ImpulseDirection::Fixed(_))
    }
}

// ── Halt ──────────────────────────────────────────────────────────────────────

/// Stops the owner on entry and then idles.
pub struct Halt;

impl<O: Owner> Action<O> for Halt {
    fn label(&self) -> &str {
        "halt"
    }

    fn on_enter(&mut self, ctx: &mut ActionContext<'_, O>) {
        ctx.owner.apply(Directive::Stop);
    }

    fn perform(&mut self, _ctx: &mut ActionContext<'_, O>) {}
}

// ── DeactivateBrain ───────────────────────────────────────────────────────────

/// Suspends the brain on its first action tick in the state.
///
/// Typical use is a terminal "Dead" state; the host re-enables the brain
/// (optionally with a reset) when the owner respawns.
pub struct DeactivateBrain;

impl<O: Owner> Action<O> for DeactivateBrain {
    fn label(&self) -> &str {
        "deactivate_brain"
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, O>) {
        ctx.deactivate_brain();
    }
}
