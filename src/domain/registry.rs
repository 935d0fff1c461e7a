use std::collections::HashMap;

use tracing::debug;

use crate::domain::projectile::Projectile;
use crate::domain::ship::Ship;

/// A live simulation object. Membership and removal are by id.
#[derive(Debug, Clone)]
pub enum Entity {
    Ship(Ship),
    Projectile(Projectile),
}

impl Entity {
    pub fn id(&self) -> u64 {
        match self {
            Entity::Ship(ship) => ship.id,
            Entity::Projectile(projectile) => projectile.id,
        }
    }

    pub fn advance_one_tick(&mut self) {
        match self {
            Entity::Ship(ship) => ship.advance_one_tick(),
            Entity::Projectile(projectile) => projectile.advance_one_tick(),
        }
    }
}

/// The authoritative set of all live entities: ships and fired projectiles.
///
/// Inert ammunition lives inside its ship's pool and is not registered here
/// until fired.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: HashMap<u64, Entity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entity unless one with the same id is already present.
    pub fn add(&mut self, entity: Entity) {
        let id = entity.id();
        if self.entities.contains_key(&id) {
            debug!(id, "entity already registered, add ignored");
            return;
        }
        self.entities.insert(id, entity);
    }

    /// Removes and returns the entity with the given id. No-op when absent.
    pub fn remove(&mut self, id: u64) -> Option<Entity> {
        self.entities.remove(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Ids of all live entities.
    pub fn ids(&self) -> Vec<u64> {
        self.entities.keys().copied().collect()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.values_mut()
    }

    /// All registered projectiles, optionally only activated ones.
    pub fn projectiles(&self, activated_only: bool) -> Vec<&Projectile> {
        self.entities
            .values()
            .filter_map(|entity| match entity {
                Entity::Projectile(projectile) => Some(projectile),
                Entity::Ship(_) => None,
            })
            .filter(|projectile| !activated_only || projectile.activated())
            .collect()
    }

    pub fn projectile(&self, id: u64) -> Option<&Projectile> {
        match self.entities.get(&id) {
            Some(Entity::Projectile(projectile)) => Some(projectile),
            _ => None,
        }
    }

    pub fn ship(&self, id: u64) -> Option<&Ship> {
        match self.entities.get(&id) {
            Some(Entity::Ship(ship)) => Some(ship),
            _ => None,
        }
    }

    pub fn ship_mut(&mut self, id: u64) -> Option<&mut Ship> {
        match self.entities.get_mut(&id) {
            Some(Entity::Ship(ship)) => Some(ship),
            _ => None,
        }
    }
}
