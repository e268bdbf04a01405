//! `State`: a named bundle of actions and ordered transition rules.

use tracing::trace;

use crate::action::ActionSlot;
use crate::context::{ActionContext, DecisionContext};
use crate::decision::DecisionSlot;
use crate::init::InitializationMode;
use crate::{Action, Decision, Signal};

/// Pairs a decision with the state to move to when it fires.
///
/// An empty `target` is the "stay here" sentinel: the rule still wins the
/// tie-break when its decision fires, but no transition happens.
pub struct TransitionRule<O> {
    pub(crate) decision: DecisionSlot<O>,
    target:              String,
}

impl<O> TransitionRule<O> {
    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[inline]
    pub fn decision(&self) -> &dyn Decision<O> {
        self.decision.decision.as_ref()
    }

    #[inline]
    pub fn initialization_mode(&self) -> InitializationMode {
        self.decision.init.mode()
    }
}

/// A named state.
///
/// Built with a by-value fluent API and handed to
/// [`BrainBuilder::state`][crate::BrainBuilder::state]:
///
/// ```rust,ignore
/// let patrol = State::new("Patrol")
///     .action(Box::new(MoveTowardsTarget::new(3.0, 1.5)))
///     .rule(Box::new(DistanceToTarget::lower_than(8.0)), "Chase");
/// ```
pub struct State<O> {
    name:    String,
    actions: Vec<ActionSlot<O>>,
    rules:   Vec<TransitionRule<O>>,
}

impl<O> State<O> {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), actions: Vec::new(), rules: Vec::new() }
    }

    /// Append an action initialized every time the state is entered.
    pub fn action(self, action: Box<dyn Action<O>>) -> Self {
        self.action_with(InitializationMode::EveryTime, action)
    }

    pub fn action_with(mut self, mode: InitializationMode, action: Box<dyn Action<O>>) -> Self {
        self.actions.push(ActionSlot::new(mode, action));
        self
    }

    /// Append a transition rule; rules are evaluated in the order added.
    pub fn rule(self, decision: Box<dyn Decision<O>>, target: impl Into<String>) -> Self {
        self.rule_with(InitializationMode::EveryTime, decision, target)
    }

    pub fn rule_with(
        mut self,
        mode:     InitializationMode,
        decision: Box<dyn Decision<O>>,
        target:   impl Into<String>,
    ) -> Self {
        self.rules.push(TransitionRule {
            decision: DecisionSlot::new(mode, decision),
            target:   target.into(),
        });
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actions(&self) -> impl Iterator<Item = &dyn Action<O>> {
        self.actions.iter().map(|slot| slot.action.as_ref())
    }

    pub fn rules(&self) -> &[TransitionRule<O>] {
        &self.rules
    }

    /// `true` if any action of this state has a multi-frame run active.
    pub fn any_action_in_progress(&self) -> bool {
        self.actions.iter().any(|slot| slot.action.in_progress())
    }

    pub(crate) fn requires_target(&self) -> Option<&str> {
        self.actions
            .iter()
            .find(|slot| slot.action.requires_target())
            .map(|slot| slot.action.label())
            .or_else(|| {
                self.rules
                    .iter()
                    .find(|rule| rule.decision.decision.requires_target())
                    .map(|rule| rule.decision.decision.label())
            })
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    pub(crate) fn initialize_decisions(&mut self, ctx: &DecisionContext<'_, O>) {
        for rule in &mut self.rules {
            rule.decision.initialize(ctx);
        }
    }

    pub(crate) fn initialize_actions(&mut self, ctx: &mut ActionContext<'_, O>) {
        for slot in &mut self.actions {
            slot.initialize(ctx);
        }
    }

    /// Initialize (per mode) decisions then actions, then `on_enter`
    /// decisions then actions, each group in registration order.
    pub(crate) fn enter(&mut self, ctx: &mut ActionContext<'_, O>) {
        self.initialize_decisions(&ctx.as_decision());
        self.initialize_actions(ctx);
        self.enter_hooks(ctx);
    }

    /// `on_enter` only.  Used by reset, which has already initialized every
    /// component.
    pub(crate) fn enter_hooks(&mut self, ctx: &mut ActionContext<'_, O>) {
        let view = ctx.as_decision();
        for rule in &mut self.rules {
            rule.decision.decision.on_enter(&view);
        }
        for slot in &mut self.actions {
            slot.action.on_enter(ctx);
        }
    }

    /// `on_exit` actions first (releasing their collaborators), then
    /// decisions.
    pub(crate) fn exit(&mut self, ctx: &mut ActionContext<'_, O>) {
        for slot in &mut self.actions {
            slot.action.on_exit(ctx);
        }
        let view = ctx.as_decision();
        for rule in &mut self.rules {
            rule.decision.decision.on_exit(&view);
        }
    }

    pub(crate) fn advance_actions(&mut self, ctx: &mut ActionContext<'_, O>) {
        for slot in &mut self.actions {
            slot.action.advance(ctx);
        }
    }

    pub(crate) fn perform_actions(&mut self, ctx: &mut ActionContext<'_, O>) {
        for slot in &mut self.actions {
            trace!(state = %self.name, action = slot.action.label(), "perform");
            slot.action.perform(ctx);
        }
    }

    /// Target of the first rule whose decision fires.  `None` if nothing
    /// fires or the winning rule carries the empty sentinel.
    pub(crate) fn evaluate_transitions(&mut self, ctx: &DecisionContext<'_, O>) -> Option<&str> {
        for rule in &mut self.rules {
            if rule.decision.decision.decide(ctx) {
                trace!(state = %self.name, decision = rule.decision.decision.label(), to = %rule.target, "decision fired");
                return if rule.target.is_empty() { None } else { Some(rule.target.as_str()) };
            }
        }
        None
    }

    pub(crate) fn signal(&mut self, signal: &Signal) {
        for rule in &mut self.rules {
            rule.decision.decision.on_signal(signal);
        }
    }
}
