//! Declarative brain configuration.
//!
//! A [`BrainBlueprint`] describes states, their actions, their ordered
//! transition rules and the sampling setup as plain data.  It deserializes
//! from any serde format; the demo loads TOML:
//!
//! ```toml
//! label = "guard"
//! decision_period = { min = 0.1, max = 0.3 }
//!
//! [[states]]
//! name = "Patrol"
//! actions = [{ kind = "move_towards_target", params = { speed = 2.0 } }]
//! transitions = [
//!     { decision = { kind = "distance_to_target", params = { comparison = "lower_than", distance = 8.0 } }, target = "Chase" },
//! ]
//! ```
//!
//! Turning a plugin spec into a boxed [`Action`] or [`Decision`] is the job
//! of a [`PluginFactory`]; this crate knows no concrete plugins.

use std::collections::BTreeMap;

use brain_core::BrainId;
use serde::{Deserialize, Serialize};

use crate::{
    Action, BrainBuilder, BrainError, BrainResult, Decision, InitializationMode, Owner, Period,
    State,
};

fn default_true() -> bool {
    true
}

/// A complete brain description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrainBlueprint {
    pub label: String,
    #[serde(default)]
    pub action_period: Period,
    #[serde(default)]
    pub decision_period: Period,
    #[serde(default = "default_true")]
    pub reset_on_start: bool,
    #[serde(default)]
    pub reset_on_enable: bool,
    pub states: Vec<StateBlueprint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateBlueprint {
    pub name: String,
    #[serde(default)]
    pub actions: Vec<PluginSpec>,
    #[serde(default)]
    pub transitions: Vec<RuleBlueprint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleBlueprint {
    pub decision: PluginSpec,
    /// Empty (or omitted) means "stay in the current state".
    #[serde(default)]
    pub target: String,
}

/// A scalar plugin parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Which plugin to build and with what parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginSpec {
    pub kind: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub init: InitializationMode,
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
}

impl PluginSpec {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind:   kind.into(),
            label:  None,
            init:   InitializationMode::default(),
            params: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: ParamValue) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    /// The explicit label, or the kind.
    pub fn label_or_kind(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.kind)
    }

    fn invalid(&self, key: &str, reason: impl Into<String>) -> BrainError {
        BrainError::InvalidParameter {
            kind:   self.kind.clone(),
            key:    key.to_owned(),
            reason: reason.into(),
        }
    }

    /// Optional numeric parameter.
    pub fn number(&self, key: &str) -> BrainResult<Option<f64>> {
        match self.params.get(key) {
            None                          => Ok(None),
            Some(ParamValue::Number(n))   => Ok(Some(*n)),
            Some(_)                       => Err(self.invalid(key, "must be a number")),
        }
    }

    pub fn number_or(&self, key: &str, default: f64) -> BrainResult<f64> {
        Ok(self.number(key)?.unwrap_or(default))
    }

    pub fn require_number(&self, key: &str) -> BrainResult<f64> {
        self.number(key)?.ok_or_else(|| self.invalid(key, "is required"))
    }

    /// Numeric parameter that must be finite and `>= 0`.
    pub fn non_negative_or(&self, key: &str, default: f64) -> BrainResult<f64> {
        let value = self.number_or(key, default)?;
        if !value.is_finite() || value < 0.0 {
            return Err(self.invalid(key, format!("must be finite and >= 0, got {value}")));
        }
        Ok(value)
    }

    pub fn text(&self, key: &str) -> BrainResult<Option<&str>> {
        match self.params.get(key) {
            None                        => Ok(None),
            Some(ParamValue::Text(s))   => Ok(Some(s.as_str())),
            Some(_)                     => Err(self.invalid(key, "must be a string")),
        }
    }

    pub fn flag_or(&self, key: &str, default: bool) -> BrainResult<bool> {
        match self.params.get(key) {
            None                        => Ok(default),
            Some(ParamValue::Bool(b))   => Ok(*b),
            Some(_)                     => Err(self.invalid(key, "must be a boolean")),
        }
    }

    /// Error for a parameter whose value is out of the plugin's domain.
    pub fn reject(&self, key: &str, reason: impl Into<String>) -> BrainError {
        self.invalid(key, reason)
    }
}

/// Builds concrete plugins from specs.
pub trait PluginFactory<O> {
    fn action(&mut self, spec: &PluginSpec) -> BrainResult<Box<dyn Action<O>>>;

    fn decision(&mut self, spec: &PluginSpec) -> BrainResult<Box<dyn Decision<O>>>;
}

impl BrainBlueprint {
    /// Instantiate every plugin through `factory` and return a builder
    /// carrying the blueprint's states, periods and flags.
    ///
    /// The caller still supplies the target and rng (if the blueprint uses
    /// randomized periods) before calling `build`.
    pub fn builder<O, F>(&self, id: BrainId, owner: O, factory: &mut F) -> BrainResult<BrainBuilder<O>>
    where
        O: Owner,
        F: PluginFactory<O>,
    {
        let mut builder = BrainBuilder::new(id, owner)
            .label(self.label.clone())
            .action_period(self.action_period)
            .decision_period(self.decision_period)
            .reset_on_start(self.reset_on_start)
            .reset_on_enable(self.reset_on_enable);

        for state_bp in &self.states {
            let mut state = State::new(state_bp.name.clone());
            for spec in &state_bp.actions {
                state = state.action_with(spec.init, factory.action(spec)?);
            }
            for rule in &state_bp.transitions {
                let decision = factory.decision(&rule.decision)?;
                state = state.rule_with(rule.decision.init, decision, rule.target.clone());
            }
            builder = builder.state(state);
        }
        Ok(builder)
    }
}
