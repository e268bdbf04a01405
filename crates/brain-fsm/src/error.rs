use brain_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BrainError {
    #[error("brain {brain}: duplicate state name {name:?}")]
    DuplicateState { brain: String, name: String },

    #[error("brain {brain}: state names must not be empty")]
    EmptyStateName { brain: String },

    #[error("brain {brain}: state {from:?} requested transition to unknown state {target:?}")]
    UnknownState {
        brain:  String,
        /// State that was current (or declared the rule) when the lookup failed.
        from:   Option<String>,
        target: String,
    },

    #[error("brain {brain}: {component} in state {state:?} requires a target but none is bound")]
    MissingTarget {
        brain:     String,
        state:     String,
        component: String,
    },

    #[error("brain {brain}: randomized {what} period requires an injected rng")]
    MissingRng { brain: String, what: &'static str },

    #[error("brain {brain}: invalid {what} period: {source}")]
    InvalidPeriod {
        brain:  String,
        what:   &'static str,
        #[source]
        source: CoreError,
    },

    #[error("unknown {what} plugin kind {kind:?}")]
    UnknownPlugin { what: &'static str, kind: String },

    #[error("plugin {kind:?}: parameter {key:?} {reason}")]
    InvalidParameter {
        kind:   String,
        key:    String,
        reason: String,
    },

    #[error("brain configuration error: {0}")]
    Config(String),
}

pub type BrainResult<T> = Result<T, BrainError>;
