// Gameplay tuning. Keep this separate from runtime/server configuration
// (tick rates, ports, etc.).

use std::time::Duration;

use crate::domain::geometry::Vec2;

/// Gameplay tuning for player-controlled ships.
#[derive(Debug, Clone, Copy)]
pub struct ShipTuning {
    /// Maximum speed magnitude in world units per tick.
    pub max_speed: f64,

    /// Speed magnitude lost every tick.
    pub natural_deceleration: f64,

    /// Speed a ship starts with at spawn.
    pub initial_speed: f64,

    /// Where new ships appear.
    pub spawn_position: Vec2,

    /// Rounds pre-created with each ship.
    pub ammo_count: usize,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            max_speed: 3.0,
            natural_deceleration: 0.0,
            initial_speed: 0.6,
            spawn_position: Vec2::new(40.0, 40.0),
            ammo_count: 10,
        }
    }
}

/// Gameplay tuning for projectiles.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileTuning {
    /// Launch speed in world units per tick, along the firing ship's heading.
    pub launch_speed: f64,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self { launch_speed: 4.0 }
    }
}

/// Tuning for projectile-vs-ship interaction checks.
#[derive(Debug, Clone, Copy)]
pub struct CombatTuning {
    /// Distance at or under which a projectile hits a ship.
    pub collision_radius: f64,

    /// Minimum time after activation before a projectile can hit anything,
    /// so a ship cannot collide with its own freshly fired shot.
    pub grace_period: Duration,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            collision_radius: 10.0,
            grace_period: Duration::from_millis(300),
        }
    }
}

/// Bundle handed to the world at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldTuning {
    pub ship: ShipTuning,
    pub projectile: ProjectileTuning,
    pub combat: CombatTuning,
}
