use tracing::info;

use crate::domain::errors::GameError;
use crate::domain::geometry::Vec2;
use crate::domain::registry::{Entity, EntityRegistry};
use crate::domain::ship::Ship;
use crate::domain::tuning::ShipTuning;

/// Color assigned to players that have not picked one yet.
const DEFAULT_PLAYER_COLOR: &str = "red";

/// A live player. Owns exactly one ship, created together with the player
/// and referenced by registry id.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub color: String,
    pub ship_id: u64,
}

/// Declarative state patch sent by clients that drive their ship through the
/// simple movement protocol.
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub position: Option<Vec2>,
    pub color: Option<String>,
    pub heading_deg: Option<f64>,
    pub speed: Option<f64>,
}

/// The live mapping from player name to player. Names are unique among live
/// players; paired registry mutations (ship creation, cascade removal) happen
/// inside the same call so callers can keep both collections consistent under
/// one lock.
#[derive(Debug, Default)]
pub struct PlayerDirectory {
    players: Vec<Player>,
}

impl PlayerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name == name)
    }

    /// Creates a player and its ship, and registers the ship. Rejects names
    /// that are already live.
    pub fn create(
        &mut self,
        name: &str,
        registry: &mut EntityRegistry,
        tuning: ShipTuning,
    ) -> Result<(), GameError> {
        if self.find_by_name(name).is_some() {
            return Err(GameError::NameConflict);
        }

        let ship = Ship::new(name, tuning);
        let ship_id = ship.id;
        registry.add(Entity::Ship(ship));
        self.players.push(Player {
            name: name.to_string(),
            color: DEFAULT_PLAYER_COLOR.to_string(),
            ship_id,
        });
        info!(player = name, ship_id, "player joined");
        Ok(())
    }

    /// Removes a player and cascades into the registry: the owned ship leaves
    /// the world and its unfired ammunition is dropped with it. Projectiles
    /// already fired stay live. Returns whether a removal happened.
    pub fn remove(&mut self, name: &str, registry: &mut EntityRegistry) -> bool {
        let Some(index) = self.players.iter().position(|p| p.name == name) else {
            return false;
        };
        let player = self.players.remove(index);
        registry.remove(player.ship_id);
        info!(player = name, "player removed");
        true
    }

    /// Applies a declarative patch to a player's ship. Speed goes through the
    /// ship's clamping path. Returns false when the player is absent.
    pub fn apply_update(
        &mut self,
        name: &str,
        registry: &mut EntityRegistry,
        update: &PlayerUpdate,
    ) -> bool {
        let Some(player) = self.find_by_name_mut(name) else {
            return false;
        };
        if let Some(color) = &update.color {
            player.color = color.clone();
        }
        let ship_id = player.ship_id;

        let Some(ship) = registry.ship_mut(ship_id) else {
            return false;
        };
        if let Some(position) = update.position {
            ship.position = position;
        }
        if let Some(heading_deg) = update.heading_deg {
            ship.set_heading(heading_deg);
        }
        if let Some(speed) = update.speed {
            ship.set_speed(speed);
        }
        true
    }
}
