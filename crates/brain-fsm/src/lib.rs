//! `brain-fsm`: flat named-state brain for non-player characters.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`collab`]    | `Owner` / `Target` capability traits, `Directive`, `SharedTarget` |
//! | [`context`]   | `ActionContext`, `DecisionContext` handed to plugins           |
//! | [`init`]      | `InitializationMode` and the once/every-time gate              |
//! | [`action`]    | `Action` trait and its registration slot                       |
//! | [`decision`]  | `Decision` trait and its registration slot                     |
//! | [`signal`]    | `Signal`: host events forwarded to decisions                  |
//! | [`state`]     | `State`, `TransitionRule`                                      |
//! | [`brain`]     | `Brain`: clocks, lifecycle, and the tick algorithm            |
//! | [`builder`]   | `BrainBuilder`, `Period`                                       |
//! | [`blueprint`] | Declarative `BrainBlueprint` + `PluginFactory`                 |
//! | [`event`]     | `BrainEvent` records drained by the host                       |
//! | [`error`]     | `BrainError`, `BrainResult<T>`                                 |
//!
//! # Tick order
//!
//! ```text
//! tick(frame):
//!   ① inactive / paused / no current state → return
//!   ② advance long-running actions of the current state by frame.dt
//!   ③ action period elapsed   → perform every action in order
//!   ④ brain deactivated by an action → return
//!   ⑤ decision period elapsed → first true rule wins → transition
//!   ⑥ time_in_state += dt, cache last known target position
//! ```
//!
//! Actions run to completion before any decision is evaluated, and at most
//! one transition happens per tick.

pub mod action;
pub mod blueprint;
pub mod brain;
pub mod builder;
pub mod collab;
pub mod context;
pub mod decision;
pub mod error;
pub mod event;
pub mod init;
pub mod signal;
pub mod state;


pub use action::Action;
pub use blueprint::{BrainBlueprint, ParamValue, PluginFactory, PluginSpec, RuleBlueprint, StateBlueprint};
pub use brain::Brain;
pub use builder::{BrainBuilder, Period};
pub use collab::{Directive, Owner, SharedTarget, Target};
pub use context::{ActionContext, DecisionContext};
pub use decision::Decision;
pub use error::{BrainError, BrainResult};
pub use event::BrainEvent;
pub use init::InitializationMode;
pub use signal::Signal;
pub use state::{State, TransitionRule};
