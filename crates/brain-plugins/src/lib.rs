//! `brain-plugins`: stock actions and decisions for `brain-fsm`.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`burst`]    | `BurstAction`: multi-shot burst with delays and cooldown   |
//! | [`movement`] | `MoveTowardsTarget`, `ImpulseAction`, `Halt`, `DeactivateBrain` |
//! | [`distance`] | `DistanceToTarget`, `Comparison`                            |
//! | [`timing`]   | `TimeInState`, `NextFrame`                                  |
//! | [`chance`]   | `RandomChance`                                              |
//! | [`sensing`]  | `TargetIsNull`, `OwnerStatus`, `HitCount`                   |
//! | [`factory`]  | `StandardPlugins`: `PluginFactory` over all of the above   |
//!
//! Every plugin is generic over the owner type and touches the owner only
//! through the [`Owner`][brain_fsm::Owner] trait.

pub mod burst;
pub mod chance;
pub mod distance;
pub mod factory;
pub mod movement;
pub mod sensing;
pub mod timing;


pub use burst::{BurstAction, BurstPhase};
pub use chance::RandomChance;
pub use distance::{Comparison, DistanceToTarget};
pub use factory::StandardPlugins;
pub use movement::{DeactivateBrain, Halt, ImpulseAction, ImpulseDirection, MoveTowardsTarget};
pub use sensing::{HitCount, OwnerStatus, TargetIsNull};
pub use timing::{NextFrame, TimeInState};
