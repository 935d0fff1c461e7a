use std::time::Instant;

use crate::domain::geometry::Vec2;

/// A single round of ammunition.
///
/// Projectiles are pre-created inert inside a ship's ammunition pool and only
/// enter the entity registry when fired. Once activated they fly in a straight
/// line until they hit a ship.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u64,
    /// Name of the player whose ship fired (or will fire) this round.
    pub owner: String,
    pub position: Vec2,
    pub velocity: Vec2,
    activated: bool,
    activated_at: Option<Instant>,
}

impl Projectile {
    pub fn new(id: u64, owner: &str) -> Self {
        Self {
            id,
            owner: owner.to_string(),
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            activated: false,
            activated_at: None,
        }
    }

    /// Puts the round into the world: position and velocity come from the
    /// firing ship, the timestamp starts the collision grace window.
    pub fn activate(&mut self, position: Vec2, velocity: Vec2, now: Instant) {
        self.position = position;
        self.velocity = velocity;
        self.activated = true;
        self.activated_at = Some(now);
    }

    pub fn activated(&self) -> bool {
        self.activated
    }

    pub fn activated_at(&self) -> Option<Instant> {
        self.activated_at
    }

    /// Integrates position by the fixed velocity. Inert rounds do not move.
    pub fn advance_one_tick(&mut self) {
        if !self.activated {
            return;
        }
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
    }
}
