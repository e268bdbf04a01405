//! Initialization policy shared by actions and decisions.

use serde::{Deserialize, Serialize};

/// When a component's `initialize` hook runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitializationMode {
    /// Every time the owning state is entered and on every brain reset.
    #[default]
    EveryTime,
    /// The first time ever, across every enter and every reset.
    OnlyOnce,
}

/// Tracks whether a component has been initialized and decides whether the
/// next initialization request should run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InitGate {
    mode:        InitializationMode,
    initialized: bool,
}

impl InitGate {
    pub(crate) fn new(mode: InitializationMode) -> Self {
        Self { mode, initialized: false }
    }

    #[inline]
    pub(crate) fn mode(&self) -> InitializationMode {
        self.mode
    }

    #[inline]
    pub(crate) fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns `true` if `initialize` must run now, and records that it did.
    pub(crate) fn begin(&mut self) -> bool {
        let run = match self.mode {
            InitializationMode::EveryTime => true,
            InitializationMode::OnlyOnce  => !self.initialized,
        };
        self.initialized = true;
        run
    }
}
