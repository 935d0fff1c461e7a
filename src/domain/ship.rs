use std::time::Instant;

use tracing::debug;

use crate::domain::geometry::{Vec2, normalize_deg, round2, velocity_components};
use crate::domain::ids::next_entity_id;
use crate::domain::projectile::Projectile;
use crate::domain::tuning::ShipTuning;

/// A player-controlled ship.
///
/// Heading is in degrees, normalized to `[0, 360)`. The velocity vector is
/// derived state: it is recomputed on every heading or speed write and is
/// never read back stale.
#[derive(Debug, Clone)]
pub struct Ship {
    pub id: u64,
    /// Name of the owning player.
    pub owner: String,
    pub position: Vec2,
    heading_deg: f64,
    speed: f64,
    velocity: Vec2,
    ammo: Vec<Projectile>,
    tuning: ShipTuning,
}

impl Ship {
    pub fn new(owner: &str, tuning: ShipTuning) -> Self {
        let ammo = (0..tuning.ammo_count)
            .map(|_| Projectile::new(next_entity_id(), owner))
            .collect();
        let heading_deg = 0.0;
        let speed = round2(tuning.initial_speed);
        Self {
            id: next_entity_id(),
            owner: owner.to_string(),
            position: tuning.spawn_position,
            heading_deg,
            speed,
            velocity: velocity_components(heading_deg, speed),
            ammo,
            tuning,
        }
    }

    pub fn heading_deg(&self) -> f64 {
        self.heading_deg
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn ammo_remaining(&self) -> usize {
        self.ammo.len()
    }

    /// Commits a new speed and recomputes the velocity vector, unless the
    /// magnitude exceeds the configured maximum, in which case the call is
    /// silently ignored.
    pub fn set_speed(&mut self, speed: f64) {
        if speed.abs() > self.tuning.max_speed {
            debug!(ship = %self.owner, speed, "speed update out of range, ignored");
            return;
        }
        self.speed = round2(speed);
        self.velocity = velocity_components(self.heading_deg, self.speed);
    }

    /// Adds to the current speed, through the same clamping path as
    /// `set_speed`.
    pub fn accelerate(&mut self, delta: f64) {
        self.set_speed(self.speed + delta);
    }

    /// Turns the ship by a delta in degrees. Speed is preserved; the velocity
    /// vector follows the new heading.
    pub fn rotate(&mut self, delta_deg: f64) {
        self.set_heading(self.heading_deg + delta_deg);
    }

    /// Points the ship at an absolute heading, normalized into `[0, 360)`.
    pub fn set_heading(&mut self, heading_deg: f64) {
        self.heading_deg = normalize_deg(heading_deg);
        self.velocity = velocity_components(self.heading_deg, self.speed);
    }

    /// Applies natural deceleration, then integrates position. Deceleration
    /// only shrinks the speed magnitude toward zero; it never flips the sign.
    pub fn advance_one_tick(&mut self) {
        let magnitude = (self.speed.abs() - self.tuning.natural_deceleration).max(0.0);
        self.set_speed(magnitude.copysign(self.speed));

        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
    }

    /// Pops one round from the ammunition pool (most recently added first)
    /// and launches it from the ship's position along its heading. Returns
    /// `None` when the pool is empty.
    pub fn fire(&mut self, launch_speed: f64, now: Instant) -> Option<Projectile> {
        let mut projectile = self.ammo.pop()?;
        projectile.activate(
            self.position,
            velocity_components(self.heading_deg, launch_speed),
            now,
        );
        Some(projectile)
    }
}
