//! Host-side entities: the guards brains drive and the player they chase.

use brain_core::{Position, StatusFlags, Vec3};
use brain_fsm::{Directive, Owner};

/// Fraction of an impulse left after one second.
const IMPULSE_DECAY_PER_SEC: f32 = 0.1;

/// Guard shots land within this distance of the player.
const GUARD_RANGE: f32 = 15.0;

// ── Guard ─────────────────────────────────────────────────────────────────────

/// A guard as the brain sees it.  Directives only record intent; the host
/// integrates movement in [`integrate`][Self::integrate].
pub struct Guard {
    pub position:    Position,
    pub velocity:    Vec3,
    pub impulse:     Vec3,
    pub aim:         Option<Position>,
    pub status:      StatusFlags,
    pub health:      f32,
    pub shots_fired: u32,
    pub bursts:      u32,
    pending_shots:   u32,
}

impl Guard {
    pub fn new(post: Position, health: f32) -> Self {
        Self {
            position:      post,
            velocity:      Vec3::ZERO,
            impulse:       Vec3::ZERO,
            aim:           None,
            status:        StatusFlags::empty(),
            health,
            shots_fired:   0,
            bursts:        0,
            pending_shots: 0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.status.contains(StatusFlags::DEAD)
    }

    pub fn integrate(&mut self, dt: f64) {
        if self.is_dead() {
            return;
        }
        let dt = dt as f32;
        self.position = self.position + (self.velocity + self.impulse) * dt;
        self.impulse = self.impulse * IMPULSE_DECAY_PER_SEC.powf(dt);
    }

    pub fn take_damage(&mut self, damage: f32) {
        self.health -= damage;
        if self.health <= 0.0 {
            self.status |= StatusFlags::DEAD;
            self.velocity = Vec3::ZERO;
            self.impulse = Vec3::ZERO;
        }
    }

    /// Resolve the shots fired since the last call; returns how many hit a
    /// player standing at `player`.
    pub fn resolve_shots(&mut self, player: Position) -> u32 {
        let shots = std::mem::take(&mut self.pending_shots);
        match self.aim {
            Some(aim) if aim.distance(player) < 1.0 && self.position.distance(player) <= GUARD_RANGE => shots,
            _ => 0,
        }
    }
}

impl Owner for Guard {
    fn position(&self) -> Position {
        self.position
    }

    fn status(&self) -> StatusFlags {
        self.status
    }

    fn apply(&mut self, directive: Directive) {
        if self.is_dead() {
            return;
        }
        match directive {
            Directive::MoveTowards { destination, speed } => {
                self.velocity = self.position.direction_to(destination) * speed;
            }
            Directive::Stop => self.velocity = Vec3::ZERO,
            Directive::Impulse(impulse) => self.impulse = self.impulse + impulse,
            Directive::Aim(at) => self.aim = Some(at),
            Directive::TriggerWeapon => {
                self.shots_fired += 1;
                self.pending_shots += 1;
            }
            Directive::ReleaseWeapon => self.bursts += 1,
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Walks a closed route of waypoints at constant speed.
pub struct Player {
    pub position:  Position,
    pub hits:      u32,
    waypoints:     Vec<Position>,
    next:          usize,
    speed:         f32,
    cooldown:      f64,
}

impl Player {
    /// `waypoints` must not be empty; the player starts on the first one.
    pub fn new(waypoints: Vec<Position>, speed: f32) -> Self {
        let position = waypoints.first().copied().unwrap_or(Vec3::ZERO);
        Self { position, hits: 0, waypoints, next: 1, speed, cooldown: 0.0 }
    }

    pub fn advance(&mut self, dt: f64) {
        let mut budget = self.speed * dt as f32;
        while budget > 0.0 && !self.waypoints.is_empty() {
            let goal = self.waypoints[self.next % self.waypoints.len()];
            let remaining = self.position.distance(goal);
            if remaining <= budget {
                self.position = goal;
                budget -= remaining;
                self.next = (self.next + 1) % self.waypoints.len();
                if remaining == 0.0 {
                    // Degenerate route (repeated waypoint).
                    break;
                }
            } else {
                self.position = self.position + self.position.direction_to(goal) * budget;
                budget = 0.0;
            }
        }
    }

    /// Count down the fire cooldown; returns `true` when the player may
    /// shoot this frame.
    pub fn ready_to_fire(&mut self, dt: f64, fire_rate: f64) -> bool {
        self.cooldown -= dt;
        if self.cooldown > 0.0 {
            return false;
        }
        self.cooldown += fire_rate;
        true
    }
}
