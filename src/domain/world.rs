use std::time::Instant;

use tracing::{debug, info};

use crate::domain::errors::GameError;
use crate::domain::geometry::{Vec2, distance_rounded};
use crate::domain::players::{PlayerDirectory, PlayerUpdate};
use crate::domain::registry::{Entity, EntityRegistry};
use crate::domain::tuning::WorldTuning;

/// Full state of the calling player, returned once at join time to seed the
/// client's local mirror.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub name: String,
    pub color: String,
    pub position: Vec2,
    pub heading_deg: f64,
    pub speed: f64,
    pub ammo_remaining: usize,
}

/// One opposing player as seen in a world snapshot.
#[derive(Debug, Clone)]
pub struct OpponentSnapshot {
    pub name: String,
    pub position: Vec2,
    pub color: String,
}

/// What a polling client sees: everyone else, every live projectile, and
/// whether the caller itself is still in the game.
#[derive(Debug, Clone)]
pub struct WorldSnapshot {
    pub opponents: Vec<OpponentSnapshot>,
    pub projectiles: Vec<Vec2>,
    pub eliminated: bool,
}

/// The authoritative game world: the entity registry and the player
/// directory behind one handle, so paired mutations stay atomic under a
/// single lock.
#[derive(Debug, Default)]
pub struct World {
    pub registry: EntityRegistry,
    pub directory: PlayerDirectory,
    tuning: WorldTuning,
}

impl World {
    pub fn new() -> Self {
        Self::with_tuning(WorldTuning::default())
    }

    pub fn with_tuning(tuning: WorldTuning) -> Self {
        Self {
            registry: EntityRegistry::new(),
            directory: PlayerDirectory::new(),
            tuning,
        }
    }

    pub fn join(&mut self, name: &str) -> Result<(), GameError> {
        self.directory
            .create(name, &mut self.registry, self.tuning.ship)
    }

    pub fn leave(&mut self, name: &str) -> Result<(), GameError> {
        if self.directory.remove(name, &mut self.registry) {
            Ok(())
        } else {
            Err(GameError::NotFound)
        }
    }

    pub fn apply_intent(&mut self, name: &str, update: &PlayerUpdate) -> Result<(), GameError> {
        if self
            .directory
            .apply_update(name, &mut self.registry, update)
        {
            Ok(())
        } else {
            Err(GameError::NotFound)
        }
    }

    pub fn rotate(&mut self, name: &str, delta_deg: f64) -> Result<(), GameError> {
        let ship = self.ship_mut(name)?;
        ship.rotate(delta_deg);
        Ok(())
    }

    pub fn accelerate(&mut self, name: &str, delta: f64) -> Result<(), GameError> {
        let ship = self.ship_mut(name)?;
        ship.accelerate(delta);
        Ok(())
    }

    /// Fires one round from the named player's ship into the registry.
    /// An empty ammunition pool is not an error; the request is simply
    /// ignored.
    pub fn fire(&mut self, name: &str, now: Instant) -> Result<(), GameError> {
        let launch_speed = self.tuning.projectile.launch_speed;
        let ship = self.ship_mut(name)?;
        match ship.fire(launch_speed, now) {
            Some(projectile) => {
                let id = projectile.id;
                self.registry.add(Entity::Projectile(projectile));
                info!(player = name, projectile = id, "projectile fired");
            }
            None => {
                debug!(player = name, "fire ignored, out of ammunition");
            }
        }
        Ok(())
    }

    /// Advances every live entity by one tick, then resolves interactions.
    /// The caller holds the world lock for the whole pass, so polling clients
    /// never observe a half-updated world.
    pub fn advance_tick(&mut self, now: Instant) {
        for entity in self.registry.iter_mut() {
            entity.advance_one_tick();
        }
        self.resolve_collisions(now);
    }

    /// Projectile-vs-ship interaction pass over the full cross-product.
    ///
    /// A hit removes the projectile and cascade-removes the ship's owning
    /// player. Removal takes effect immediately: an eliminated ship is not
    /// evaluated again in the same pass, and a consumed projectile checks no
    /// further ships.
    pub fn resolve_collisions(&mut self, now: Instant) {
        let projectile_ids: Vec<u64> = self
            .registry
            .projectiles(true)
            .iter()
            .map(|p| p.id)
            .collect();
        let player_names = self.directory.names();

        for projectile_id in projectile_ids {
            for name in &player_names {
                let Some(projectile) = self.registry.projectile(projectile_id) else {
                    break;
                };
                let Some(activated_at) = projectile.activated_at() else {
                    break;
                };
                // Too fresh to hit anything, including the ship that fired it.
                if now.duration_since(activated_at) < self.tuning.combat.grace_period {
                    break;
                }
                let projectile_position = projectile.position;
                let shooter = projectile.owner.clone();

                let Some(player) = self.directory.find_by_name(name) else {
                    continue;
                };
                let Some(ship) = self.registry.ship(player.ship_id) else {
                    continue;
                };

                let distance = distance_rounded(projectile_position, ship.position);
                if distance > self.tuning.combat.collision_radius {
                    continue;
                }

                self.registry.remove(projectile_id);
                self.directory.remove(name, &mut self.registry);
                info!(victim = %name, shooter = %shooter, "ship destroyed by projectile");
                break;
            }
        }
    }

    pub fn self_snapshot(&self, name: &str) -> Result<PlayerSnapshot, GameError> {
        let player = self.directory.find_by_name(name).ok_or(GameError::NotFound)?;
        let ship = self
            .registry
            .ship(player.ship_id)
            .ok_or(GameError::NotFound)?;
        Ok(PlayerSnapshot {
            name: player.name.clone(),
            color: player.color.clone(),
            position: ship.position,
            heading_deg: ship.heading_deg(),
            speed: ship.speed(),
            ammo_remaining: ship.ammo_remaining(),
        })
    }

    /// Snapshot of the world as seen by `name`: every other live player,
    /// every activated projectile, and whether the caller has been
    /// eliminated. Never fails; an absent caller simply reads as eliminated.
    pub fn world_snapshot(&self, name: &str) -> WorldSnapshot {
        let opponents = self
            .directory
            .iter()
            .filter(|player| player.name != name)
            .filter_map(|player| {
                let ship = self.registry.ship(player.ship_id)?;
                Some(OpponentSnapshot {
                    name: player.name.clone(),
                    position: ship.position,
                    color: player.color.clone(),
                })
            })
            .collect();

        let projectiles = self
            .registry
            .projectiles(true)
            .iter()
            .map(|projectile| projectile.position)
            .collect();

        WorldSnapshot {
            opponents,
            projectiles,
            eliminated: self.directory.find_by_name(name).is_none(),
        }
    }

    fn ship_mut(&mut self, name: &str) -> Result<&mut crate::domain::ship::Ship, GameError> {
        let ship_id = self
            .directory
            .find_by_name(name)
            .ok_or(GameError::NotFound)?
            .ship_id;
        self.registry.ship_mut(ship_id).ok_or(GameError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn world_with_players(names: &[&str]) -> World {
        let mut world = World::new();
        for name in names {
            world.join(name).expect("join should succeed");
        }
        world
    }

    #[test]
    fn eleven_fires_leave_exactly_ten_projectiles_registered() {
        let mut world = world_with_players(&["ada"]);
        let now = Instant::now();

        for _ in 0..11 {
            world.fire("ada", now).expect("player exists");
        }

        assert_eq!(world.registry.projectiles(false).len(), 10);
        assert_eq!(world.registry.projectiles(true).len(), 10);
        // Ship still registered alongside its shots.
        assert_eq!(world.registry.len(), 11);
    }

    #[test]
    fn fire_for_unknown_player_is_not_found() {
        let mut world = World::new();
        assert_eq!(world.fire("ghost", Instant::now()), Err(GameError::NotFound));
    }

    #[test]
    fn collision_inside_grace_period_eliminates_nobody() {
        let mut world = world_with_players(&["ada", "grace"]);
        let fired_at = Instant::now();
        // Both ships spawn at the same point, so the shot overlaps "grace"
        // from the moment it is fired.
        world.fire("ada", fired_at).unwrap();

        world.resolve_collisions(fired_at + Duration::from_millis(100));

        assert_eq!(world.directory.len(), 2);
        assert_eq!(world.registry.projectiles(true).len(), 1);
    }

    #[test]
    fn collision_after_grace_period_eliminates_the_ship_owner() {
        let mut world = world_with_players(&["ada", "grace"]);
        let fired_at = Instant::now();
        world.fire("ada", fired_at).unwrap();
        let projectile_id = world.registry.projectiles(true)[0].id;

        world.resolve_collisions(fired_at + Duration::from_millis(400));

        // One of the two overlapping ships is gone, and so is the projectile.
        assert_eq!(world.directory.len(), 1);
        assert!(!world.registry.contains(projectile_id));
        assert!(world.registry.projectiles(false).is_empty());
    }

    #[test]
    fn one_projectile_eliminates_at_most_one_ship() {
        let mut world = world_with_players(&["ada", "grace", "edsger"]);
        let fired_at = Instant::now();
        world.fire("ada", fired_at).unwrap();

        world.resolve_collisions(fired_at + Duration::from_millis(400));

        // All three ships overlap, but the projectile is consumed by the
        // first hit.
        assert_eq!(world.directory.len(), 2);
    }

    #[test]
    fn leave_of_unknown_player_changes_nothing() {
        let mut world = world_with_players(&["ada"]);

        assert_eq!(world.leave("ghost"), Err(GameError::NotFound));
        assert_eq!(world.directory.len(), 1);
        assert_eq!(world.registry.len(), 1);
    }

    #[test]
    fn world_snapshot_never_lists_the_caller_as_an_opponent() {
        let mut world = world_with_players(&["ada", "grace"]);
        world.fire("grace", Instant::now()).unwrap();

        let snapshot = world.world_snapshot("ada");

        assert_eq!(snapshot.opponents.len(), 1);
        assert_eq!(snapshot.opponents[0].name, "grace");
        assert_eq!(snapshot.projectiles.len(), 1);
        assert!(!snapshot.eliminated);
    }

    #[test]
    fn world_snapshot_reports_elimination_for_absent_caller() {
        let world = world_with_players(&["grace"]);
        let snapshot = world.world_snapshot("ada");
        assert!(snapshot.eliminated);
        assert_eq!(snapshot.opponents.len(), 1);
    }

    #[test]
    fn advance_tick_moves_ships_and_projectiles() {
        let mut world = world_with_players(&["ada"]);
        let now = Instant::now();
        world.rotate("ada", 90.0).unwrap();
        world.accelerate("ada", 1.4).unwrap();
        world.fire("ada", now).unwrap();

        let before = world.self_snapshot("ada").unwrap().position;
        world.advance_tick(now);
        let after = world.self_snapshot("ada").unwrap().position;

        // Heading 90 degrees: the ship moved along +y by its speed.
        assert_eq!(after.x, before.x);
        assert_eq!(after.y, before.y + 2.0);

        let projectile = world.world_snapshot("observer").projectiles[0];
        assert_eq!(projectile, Vec2::new(before.x, before.y + 4.0));
    }

    #[test]
    fn self_snapshot_reflects_ship_state() {
        let mut world = world_with_players(&["ada"]);
        world.fire("ada", Instant::now()).unwrap();

        let snapshot = world.self_snapshot("ada").unwrap();
        assert_eq!(snapshot.name, "ada");
        assert_eq!(snapshot.color, "red");
        assert_eq!(snapshot.ammo_remaining, 9);
        assert_eq!(snapshot.speed, 0.6);

        assert_eq!(world.self_snapshot("ghost"), Err(GameError::NotFound));
    }
}
