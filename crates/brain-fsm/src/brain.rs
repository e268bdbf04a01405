//! The `Brain` struct and its tick loop.

use brain_core::{BrainId, FrameTime, Position, SimTime};
use tracing::{debug, trace, warn};

use crate::context::{ActionContext, Commands, TargetCommand};
use crate::{BrainError, BrainEvent, BrainResult, Signal, State, Target};

#[cfg(feature = "fx-hash")]
pub(crate) type NameIndex = rustc_hash::FxHashMap<String, usize>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type NameIndex = std::collections::HashMap<String, usize>;

// ── Brain ─────────────────────────────────────────────────────────────────────

/// A flat named-state machine driving one owner.
///
/// `Brain<O>` holds the ordered states, the current state, two independent
/// sampling clocks (one for actions, one for decisions) and the injected
/// collaborators.  The host calls [`tick`][Self::tick] once per frame.
///
/// # Modes
///
/// - **Uninitialized**: no current state yet; `tick` is a no-op until
///   [`start`][Self::start], [`reset`][Self::reset] or
///   [`request_transition`][Self::request_transition] picks one.
/// - **Active**: the current state's actions and rules are sampled.
/// - **Suspended**: `is_active() == false`; the current state is kept but
///   nothing is sampled and no clock moves.  A host time scale of `0` has
///   the same effect for that frame.
///
/// Create via [`BrainBuilder`][crate::BrainBuilder].
pub struct Brain<O> {
    pub(crate) id:      BrainId,
    pub(crate) label:   String,
    pub(crate) owner:   O,
    pub(crate) target:  Option<Box<dyn Target>>,
    pub(crate) states:  Vec<State<O>>,
    pub(crate) index:   NameIndex,
    pub(crate) current: Option<usize>,
    pub(crate) active:  bool,

    pub(crate) action_period:        f64,
    pub(crate) decision_period:      f64,
    pub(crate) last_action_sample:   Option<SimTime>,
    pub(crate) last_decision_sample: Option<SimTime>,
    pub(crate) time_in_state:        f64,
    pub(crate) last_known_target_position: Option<Position>,

    pub(crate) reset_on_start:  bool,
    pub(crate) reset_on_enable: bool,

    /// Timing of the most recent frame; used for lifecycle calls made by
    /// the host between frames (reset, forced transitions).
    pub(crate) last_frame: FrameTime,
    pub(crate) commands:   Commands,

    pub(crate) record_events: bool,
    pub(crate) events:        Vec<BrainEvent>,
}

impl<O> Brain<O> {
    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> BrainId {
        self.id
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn owner(&self) -> &O {
        &self.owner
    }

    /// Mutable owner access for the host (applying physics results, setting
    /// status flags).  Never call this from inside a plugin.
    #[inline]
    pub fn owner_mut(&mut self) -> &mut O {
        &mut self.owner
    }

    #[inline]
    pub fn target(&self) -> Option<&dyn Target> {
        self.target.as_deref()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current_state(&self) -> Option<&State<O>> {
        self.current.map(|i| &self.states[i])
    }

    pub fn current_state_name(&self) -> Option<&str> {
        self.current_state().map(State::name)
    }

    /// Look up a state by name.
    pub fn find_state(&self, name: &str) -> Option<&State<O>> {
        self.index.get(name).map(|&i| &self.states[i])
    }

    /// All states in registration order.
    pub fn states(&self) -> &[State<O>] {
        &self.states
    }

    /// Seconds spent in the current state.
    #[inline]
    pub fn time_in_state(&self) -> f64 {
        self.time_in_state
    }

    /// The target's position as of the end of the last active tick.
    #[inline]
    pub fn last_known_target_position(&self) -> Option<Position> {
        self.last_known_target_position
    }

    /// Effective action period in seconds (after any randomization).
    #[inline]
    pub fn action_period(&self) -> f64 {
        self.action_period
    }

    /// Effective decision period in seconds (after any randomization).
    #[inline]
    pub fn decision_period(&self) -> f64 {
        self.decision_period
    }

    #[inline]
    pub fn last_action_sample(&self) -> Option<SimTime> {
        self.last_action_sample
    }

    #[inline]
    pub fn last_decision_sample(&self) -> Option<SimTime> {
        self.last_decision_sample
    }

    #[inline]
    pub fn reset_on_start(&self) -> bool {
        self.reset_on_start
    }

    #[inline]
    pub fn reset_on_enable(&self) -> bool {
        self.reset_on_enable
    }

    // ── Host control ──────────────────────────────────────────────────────

    /// First activation by the host.
    ///
    /// With `reset_on_start` this is a full [`reset`][Self::reset];
    /// otherwise the brain simply enters its first state if it has none.
    pub fn start(&mut self) {
        if self.reset_on_start {
            self.reset();
            return;
        }
        if self.current.is_none() && !self.states.is_empty() {
            let first = self.states[0].name().to_owned();
            let frame = self.idle_frame();
            // The first state always exists, so this cannot fail.
            let _ = self.transition_to(&first, frame);
        }
    }

    /// Re-run initialization and restart from the first state.
    ///
    /// Initializes every decision then every action across all states
    /// (once-only components at most once over the brain's lifetime),
    /// activates the brain, exits the current state if any, resets
    /// `time_in_state` and both sample clocks, and enters the first
    /// registered state.
    pub fn reset(&mut self) {
        let frame = self.idle_frame();
        debug!(brain = %self.id, label = %self.label, "reset");

        {
            let (states, mut ctx) = self.parts(frame);
            for state in states.iter_mut() {
                state.initialize_decisions(&ctx.as_decision());
            }
            for state in states.iter_mut() {
                state.initialize_actions(&mut ctx);
            }
        }

        self.active = true;

        let from = self.current.take();
        if let Some(cur) = from {
            let (states, mut ctx) = self.parts(frame);
            states[cur].exit(&mut ctx);
        }
        self.time_in_state = 0.0;
        self.last_action_sample = None;
        self.last_decision_sample = None;

        if !self.states.is_empty() {
            self.current = Some(0);
            let (states, mut ctx) = self.parts(frame);
            states[0].enter_hooks(&mut ctx);
            self.record_transition(from, 0, frame.now);
        }
    }

    /// Suspend or resume the brain.
    ///
    /// Resuming an inactive brain configured with `reset_on_enable` resets
    /// it.  Suspending keeps the current state and freezes both clocks.
    pub fn set_active(&mut self, active: bool) {
        if active && !self.active && self.reset_on_enable {
            self.reset();
            return;
        }
        if active != self.active {
            debug!(brain = %self.id, label = %self.label, active, "set_active");
        }
        self.active = active;
    }

    /// Force a transition from outside the brain (death events, scripted
    /// sequences).  Works regardless of `is_active`.
    ///
    /// Requesting the current state is a no-op.  An unknown name is reported
    /// as a configuration error, returned, and leaves the brain where it was.
    pub fn request_transition(&mut self, state: &str) -> BrainResult<()> {
        let frame = self.idle_frame();
        self.transition_to(state, frame).map(|_| ())
    }

    /// Bind a new target.
    pub fn set_target(&mut self, target: Box<dyn Target>) {
        self.target = Some(target);
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Forward a host event to the current state's decisions.
    pub fn signal(&mut self, signal: &Signal) {
        if let Some(cur) = self.current {
            trace!(brain = %self.id, ?signal, "signal");
            self.states[cur].signal(signal);
        }
    }

    /// Enable or disable recording of [`BrainEvent`]s.
    pub fn set_event_recording(&mut self, enabled: bool) {
        self.record_events = enabled;
        if !enabled {
            self.events.clear();
        }
    }

    /// Take every recorded event, oldest first.
    pub fn drain_events(&mut self) -> Vec<BrainEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the brain by one host frame.
    pub fn tick(&mut self, frame: FrameTime) {
        if !self.active || frame.is_paused() {
            return;
        }
        let Some(current) = self.current else {
            return;
        };
        self.last_frame = frame;

        {
            let (states, mut ctx) = self.parts(frame);
            states[current].advance_actions(&mut ctx);
        }
        let mut transitioned = self.apply_commands(frame);

        if self.active
            && !transitioned
            && sample_due(self.last_action_sample, frame.now, self.action_period)
        {
            if let Some(cur) = self.current {
                let (states, mut ctx) = self.parts(frame);
                states[cur].perform_actions(&mut ctx);
            }
            self.last_action_sample = Some(frame.now);
            transitioned = self.apply_commands(frame);
        }

        // An action may have suspended the brain.
        if !self.active {
            return;
        }

        if !transitioned && sample_due(self.last_decision_sample, frame.now, self.decision_period) {
            if let Some(cur) = self.current {
                let target = {
                    let (states, ctx) = self.parts(frame);
                    states[cur]
                        .evaluate_transitions(&ctx.as_decision())
                        .map(str::to_owned)
                };
                if let Some(target) = target {
                    transitioned = matches!(self.transition_to(&target, frame), Ok(true));
                }
            }
            self.last_decision_sample = Some(frame.now);
        }

        // A transition tick's delta belongs to the state that was left.
        if !transitioned {
            self.time_in_state += frame.dt;
        }
        if let Some(position) = self.target.as_ref().and_then(|t| t.position()) {
            self.last_known_target_position = Some(position);
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Split the brain into its states and an action context over the
    /// remaining fields.
    fn parts(&mut self, frame: FrameTime) -> (&mut Vec<State<O>>, ActionContext<'_, O>) {
        let ctx = ActionContext::new(
            self.id,
            frame,
            &mut self.owner,
            self.target.as_deref(),
            self.time_in_state,
            self.last_known_target_position,
            &mut self.commands,
        );
        (&mut self.states, ctx)
    }

    fn idle_frame(&self) -> FrameTime {
        FrameTime { dt: 0.0, ..self.last_frame }
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.label, self.id)
    }

    /// Apply buffered action commands.  Returns `true` if a transition
    /// happened.
    fn apply_commands(&mut self, frame: FrameTime) -> bool {
        if self.commands.is_empty() {
            return false;
        }
        let commands = std::mem::take(&mut self.commands);

        match commands.target {
            Some(TargetCommand::Set(target)) => self.target = Some(target),
            Some(TargetCommand::Clear)       => self.target = None,
            None => {}
        }

        let transitioned = match commands.transition {
            Some(state) => matches!(self.transition_to(&state, frame), Ok(true)),
            None => false,
        };

        if commands.deactivate {
            debug!(brain = %self.id, label = %self.label, "deactivated by action");
            self.active = false;
        }
        transitioned
    }

    /// Move to `name`.  Returns `Ok(true)` if the current state changed.
    fn transition_to(&mut self, name: &str, frame: FrameTime) -> BrainResult<bool> {
        if name.is_empty() {
            return Ok(false);
        }
        let Some(&next) = self.index.get(name) else {
            let error = BrainError::UnknownState {
                brain:  self.describe(),
                from:   self.current_state_name().map(str::to_owned),
                target: name.to_owned(),
            };
            self.report(&error, frame.now);
            return Err(error);
        };

        let from = self.current;
        match from {
            Some(cur) if cur == next => return Ok(false),
            Some(cur) => {
                let (states, mut ctx) = self.parts(frame);
                states[cur].exit(&mut ctx);
            }
            None => {}
        }
        if from.is_some() {
            self.time_in_state = 0.0;
        }

        self.current = Some(next);
        let (states, mut ctx) = self.parts(frame);
        states[next].enter(&mut ctx);
        self.record_transition(from, next, frame.now);
        Ok(true)
    }

    fn record_transition(&mut self, from: Option<usize>, to: usize, at: SimTime) {
        let from = from.map(|i| self.states[i].name().to_owned());
        let to = self.states[to].name().to_owned();
        debug!(brain = %self.id, label = %self.label, from = ?from, to = %to, "transition");
        if self.record_events {
            self.events.push(BrainEvent::Transitioned { brain: self.id, from, to, at });
        }
    }

    fn report(&mut self, error: &BrainError, at: SimTime) {
        warn!(brain = %self.id, label = %self.label, state = ?self.current_state_name(), %error, "configuration error");
        if self.record_events {
            self.events.push(BrainEvent::ConfigurationError {
                brain: self.id,
                error: error.clone(),
                at,
            });
        }
    }
}

impl<O> Drop for Brain<O> {
    /// Cancel any in-flight multi-frame action.
    fn drop(&mut self) {
        if let Some(cur) = self.current {
            if self.states[cur].any_action_in_progress() {
                let frame = self.idle_frame();
                let (states, mut ctx) = self.parts(frame);
                states[cur].exit(&mut ctx);
            }
        }
    }
}

/// Strictly-greater comparison: a period of `p` samples at most once every
/// `> p` seconds.  The first sample is always due.
#[inline]
fn sample_due(last: Option<SimTime>, now: SimTime, period: f64) -> bool {
    match last {
        None       => true,
        Some(last) => now.since(last) > period,
    }
}
