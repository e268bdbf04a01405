//! `BurstAction`: a multi-shot burst with inter-shot delays and a cooldown.

use brain_core::StatusFlags;
use brain_fsm::{Action, ActionContext, Directive, Owner};
use tracing::trace;

/// Where a burst is in its run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BurstPhase {
    Idle,
    /// `fired` shots of the burst have gone out; the next one is due in
    /// `delay_remaining` seconds.
    Running { fired: u32, delay_remaining: f64 },
    Cooldown { remaining: f64 },
}

/// Fires `shots` shots spaced `interval` seconds apart, then waits
/// `cooldown` seconds before another burst may start.
///
/// `perform` only starts a burst: the first shot goes out immediately and
/// the remaining ones are released by `advance` as host time passes, so the
/// burst keeps its rhythm regardless of the brain's action period.
///
/// The owner must not be stunned or dead for a burst to start.  With
/// [`aiming`](Self::aiming) enabled it also needs a target position; the
/// weapon is re-aimed before every shot and a shot is skipped silently if
/// the target has no position at that moment.
///
/// Leaving the state aborts the burst and releases the trigger.  A pending
/// cooldown survives the exit and is still pending on re-entry.
pub struct BurstAction {
    label:    String,
    shots:    u32,
    interval: f64,
    cooldown: f64,
    aim:      bool,
    phase:    BurstPhase,
}

impl BurstAction {
    pub fn new(shots: u32, interval: f64, cooldown: f64) -> Self {
        Self {
            label: "burst".to_owned(),
            shots: shots.max(1),
            interval: interval.max(0.0),
            cooldown: cooldown.max(0.0),
            aim: false,
            phase: BurstPhase::Idle,
        }
    }

    pub fn aiming(mut self, aim: bool) -> Self {
        self.aim = aim;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn phase(&self) -> BurstPhase {
        self.phase
    }

    fn ready<O: Owner>(&self, ctx: &ActionContext<'_, O>) -> bool {
        if ctx.owner.status().intersects(StatusFlags::STUNNED | StatusFlags::DEAD) {
            return false;
        }
        !self.aim || ctx.target_position().is_some()
    }

    fn fire<O: Owner>(&self, ctx: &mut ActionContext<'_, O>) {
        if self.aim {
            let Some(at) = ctx.target_position() else {
                return;
            };
            ctx.owner.apply(Directive::Aim(at));
        }
        ctx.owner.apply(Directive::TriggerWeapon);
    }

    /// After the `fired`-th shot: either wait for the next one or finish.
    fn after_shot<O: Owner>(&mut self, fired: u32, carry: f64, ctx: &mut ActionContext<'_, O>) {
        if fired >= self.shots {
            ctx.owner.apply(Directive::ReleaseWeapon);
            self.phase = if self.cooldown > 0.0 {
                BurstPhase::Cooldown { remaining: self.cooldown }
            } else {
                BurstPhase::Idle
            };
        } else {
            self.phase = BurstPhase::Running { fired, delay_remaining: self.interval + carry };
        }
    }
}

impl<O: Owner> Action<O> for BurstAction {
    fn label(&self) -> &str {
        &self.label
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, O>) {
        if self.phase != BurstPhase::Idle || !self.ready(ctx) {
            return;
        }
        trace!(brain = %ctx.brain, shots = self.shots, "burst started");
        self.fire(ctx);
        self.after_shot(1, 0.0, ctx);
    }

    fn advance(&mut self, ctx: &mut ActionContext<'_, O>) {
        let dt = ctx.frame.dt;
        match self.phase {
            BurstPhase::Idle => {}
            BurstPhase::Running { mut fired, delay_remaining } => {
                let mut delay = delay_remaining - dt;
                // A long frame can release several shots at once.
                while delay <= 0.0 && fired < self.shots {
                    self.fire(ctx);
                    fired += 1;
                    self.after_shot(fired, delay, ctx);
                    match self.phase {
                        BurstPhase::Running { delay_remaining, .. } => delay = delay_remaining,
                        _ => return,
                    }
                }
                self.phase = BurstPhase::Running { fired, delay_remaining: delay };
            }
            BurstPhase::Cooldown { remaining } => {
                let remaining = remaining - dt;
                self.phase = if remaining <= 0.0 {
                    BurstPhase::Idle
                } else {
                    BurstPhase::Cooldown { remaining }
                };
            }
        }
    }

    fn on_exit(&mut self, ctx: &mut ActionContext<'_, O>) {
        if let BurstPhase::Running { fired, .. } = self.phase {
            trace!(brain = %ctx.brain, fired, "burst cancelled");
            ctx.owner.apply(Directive::ReleaseWeapon);
            self.phase = BurstPhase::Idle;
        }
    }

    fn in_progress(&self) -> bool {
        matches!(self.phase, BurstPhase::Running { .. })
    }

    fn requires_target(&self) -> bool {
        self.aim
    }
}
