//! `StandardPlugins`: builds the stock plugins from blueprint specs.

use brain_core::{BrainRng, StatusFlags, Vec3};
use brain_fsm::{Action, BrainError, BrainResult, Decision, Owner, PluginFactory, PluginSpec};

use crate::{
    BurstAction, Comparison, DeactivateBrain, DistanceToTarget, HitCount, Halt, ImpulseAction,
    ImpulseDirection, MoveTowardsTarget, NextFrame, OwnerStatus, RandomChance, TargetIsNull,
    TimeInState,
};

/// Plugin factory for every action and decision in this crate.
///
/// | Kind                  | Parameters                                                   |
/// |-----------------------|--------------------------------------------------------------|
/// | `burst`               | `shots` (3), `interval` (0.1), `cooldown` (1.0), `aim` (false) |
/// | `move_towards_target` | `speed` (required), `stop_distance` (0)                      |
/// | `impulse`             | `strength` (required), `direction` (`towards`, `away`, or `fixed` with `x`/`y`/`z`) |
/// | `halt`                | -                                                            |
/// | `deactivate_brain`    | -                                                            |
/// | `distance_to_target`  | `comparison` (`greater_than`, `lower_than`, `equals`), `distance` (required), `tolerance` (0.1) |
/// | `time_in_state`       | `seconds`, or `min` and `max`                                |
/// | `random_chance`       | `odds` (required, `[0, 1]`)                                  |
/// | `next_frame`          | -                                                            |
/// | `target_is_null`      | -                                                            |
/// | `owner_status`        | `flags` (required, e.g. `"stunned | dead"`)                   |
/// | `hit_count`           | `hits` (1)                                                   |
///
/// Randomized plugins each get an independent child stream of the
/// factory's rng, in the order they are built.
pub struct StandardPlugins {
    rng:     BrainRng,
    streams: u64,
}

impl StandardPlugins {
    pub fn new(rng: BrainRng) -> Self {
        Self { rng, streams: 0 }
    }

    fn next_rng(&mut self) -> BrainRng {
        self.streams += 1;
        self.rng.child(self.streams)
    }
}

fn count(spec: &PluginSpec, key: &str, default: u32) -> BrainResult<u32> {
    let value = spec.non_negative_or(key, default as f64)?;
    if value.fract() != 0.0 || value < 1.0 || value > u32::MAX as f64 {
        return Err(spec.reject(key, format!("must be a positive integer, got {value}")));
    }
    Ok(value as u32)
}

fn status_flags(spec: &PluginSpec, key: &str) -> BrainResult<StatusFlags> {
    let Some(text) = spec.text(key)? else {
        return Err(spec.reject(key, "is required"));
    };
    let mut flags = StatusFlags::empty();
    for name in text.split('|').map(str::trim).filter(|s| !s.is_empty()) {
        match StatusFlags::from_name(&name.to_ascii_uppercase()) {
            Some(flag) => flags |= flag,
            None => return Err(spec.reject(key, format!("unknown status flag {name:?}"))),
        }
    }
    if flags.is_empty() {
        return Err(spec.reject(key, "must name at least one flag"));
    }
    Ok(flags)
}

impl<O: Owner> PluginFactory<O> for StandardPlugins {
    fn action(&mut self, spec: &PluginSpec) -> BrainResult<Box<dyn Action<O>>> {
        let label = spec.label_or_kind();
        let action: Box<dyn Action<O>> = match spec.kind.as_str() {
            "burst" => Box::new(
                BurstAction::new(
                    count(spec, "shots", 3)?,
                    spec.non_negative_or("interval", 0.1)?,
                    spec.non_negative_or("cooldown", 1.0)?,
                )
                .aiming(spec.flag_or("aim", false)?)
                .with_label(label),
            ),
            "move_towards_target" => Box::new(
                MoveTowardsTarget::new(
                    spec.require_number("speed")? as f32,
                    spec.non_negative_or("stop_distance", 0.0)? as f32,
                )
                .with_label(label),
            ),
            "impulse" => {
                let direction = match spec.text("direction")?.unwrap_or("towards") {
                    "towards" => ImpulseDirection::TowardsTarget,
                    "away"    => ImpulseDirection::AwayFromTarget,
                    "fixed"   => ImpulseDirection::Fixed(Vec3::new(
                        spec.number_or("x", 0.0)? as f32,
                        spec.number_or("y", 0.0)? as f32,
                        spec.number_or("z", 0.0)? as f32,
                    )),
                    other => return Err(spec.reject("direction", format!("unknown direction {other:?}"))),
                };
                Box::new(ImpulseAction::new(spec.require_number("strength")? as f32, direction).with_label(label))
            }
            "halt" => Box::new(Halt),
            "deactivate_brain" => Box::new(DeactivateBrain),
            other => {
                return Err(BrainError::UnknownPlugin { what: "action", kind: other.to_owned() });
            }
        };
        Ok(action)
    }

    fn decision(&mut self, spec: &PluginSpec) -> BrainResult<Box<dyn Decision<O>>> {
        let label = spec.label_or_kind();
        let decision: Box<dyn Decision<O>> = match spec.kind.as_str() {
            "distance_to_target" => {
                let comparison = match spec.text("comparison")?.unwrap_or("lower_than") {
                    "greater_than" => Comparison::GreaterThan,
                    "lower_than"   => Comparison::LowerThan,
                    "equals"       => Comparison::Equals {
                        tolerance: spec.non_negative_or("tolerance", 0.1)? as f32,
                    },
                    other => return Err(spec.reject("comparison", format!("unknown comparison {other:?}"))),
                };
                let distance = spec.require_number("distance")?;
                if distance < 0.0 {
                    return Err(spec.reject("distance", "must be >= 0"));
                }
                Box::new(DistanceToTarget::new(comparison, distance as f32).with_label(label))
            }
            "time_in_state" => {
                let (min, max) = match spec.number("seconds")? {
                    Some(_) => {
                        let secs = spec.non_negative_or("seconds", 0.0)?;
                        (secs, secs)
                    }
                    None => (spec.non_negative_or("min", 0.0)?, spec.non_negative_or("max", 0.0)?),
                };
                if min > max {
                    return Err(spec.reject("min", format!("must not exceed max ({min} > {max})")));
                }
                Box::new(TimeInState::between(min, max, self.next_rng()).with_label(label))
            }
            "random_chance" => {
                let odds = spec.require_number("odds")?;
                if !(0.0..=1.0).contains(&odds) {
                    return Err(spec.reject("odds", format!("must be within [0, 1], got {odds}")));
                }
                Box::new(RandomChance::new(odds, self.next_rng()).with_label(label))
            }
            "next_frame" => Box::new(NextFrame),
            "target_is_null" => Box::new(TargetIsNull),
            "owner_status" => Box::new(OwnerStatus::new(status_flags(spec, "flags")?).with_label(label)),
            "hit_count" => Box::new(HitCount::new(count(spec, "hits", 1)?).with_label(label)),
            other => {
                return Err(BrainError::UnknownPlugin { what: "decision", kind: other.to_owned() });
            }
        };
        Ok(decision)
    }
}
