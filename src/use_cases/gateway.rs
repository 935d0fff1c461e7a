// Synchronization gateway: the operations polling clients drive the world
// with. Each function takes the world lock around the in-memory mutation or
// read only; transport concerns stay in the adapter layer.

use std::time::Instant;

use crate::domain::{GameError, PlayerSnapshot, PlayerUpdate, WorldSnapshot};
use crate::use_cases::SharedWorld;

pub async fn join(world: &SharedWorld, name: &str) -> Result<(), GameError> {
    world.lock().await.join(name)
}

pub async fn exit(world: &SharedWorld, name: &str) -> Result<(), GameError> {
    world.lock().await.leave(name)
}

/// Applies a declarative state patch to the caller's ship (the simple
/// movement protocol).
pub async fn submit_intent(
    world: &SharedWorld,
    name: &str,
    update: &PlayerUpdate,
) -> Result<(), GameError> {
    world.lock().await.apply_intent(name, update)
}

/// Imperative turn command (the richer movement protocol).
pub async fn rotate(world: &SharedWorld, name: &str, delta_deg: f64) -> Result<(), GameError> {
    world.lock().await.rotate(name, delta_deg)
}

/// Imperative speed-change command (the richer movement protocol).
pub async fn accelerate(world: &SharedWorld, name: &str, delta: f64) -> Result<(), GameError> {
    world.lock().await.accelerate(name, delta)
}

/// Fires one round. Out of ammunition is not an error; only an unknown
/// player is.
pub async fn fire(world: &SharedWorld, name: &str) -> Result<(), GameError> {
    world.lock().await.fire(name, Instant::now())
}

pub async fn self_snapshot(world: &SharedWorld, name: &str) -> Result<PlayerSnapshot, GameError> {
    world.lock().await.self_snapshot(name)
}

pub async fn world_snapshot(world: &SharedWorld, name: &str) -> WorldSnapshot {
    world.lock().await.world_snapshot(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::World;
    use crate::use_cases::shared_world;

    #[tokio::test]
    async fn join_then_duplicate_join_conflicts() {
        let world = shared_world(World::new());

        assert_eq!(join(&world, "ada").await, Ok(()));
        assert_eq!(join(&world, "ada").await, Err(GameError::NameConflict));

        let guard = world.lock().await;
        assert_eq!(guard.directory.len(), 1);
    }

    #[tokio::test]
    async fn full_session_against_the_gateway() {
        let world = shared_world(World::new());
        join(&world, "ada").await.unwrap();
        join(&world, "grace").await.unwrap();

        rotate(&world, "ada", 45.0).await.unwrap();
        accelerate(&world, "ada", 1.0).await.unwrap();
        fire(&world, "ada").await.unwrap();

        let me = self_snapshot(&world, "ada").await.unwrap();
        assert_eq!(me.heading_deg, 45.0);
        assert_eq!(me.ammo_remaining, 9);

        let snapshot = world_snapshot(&world, "ada").await;
        assert_eq!(snapshot.opponents.len(), 1);
        assert_eq!(snapshot.projectiles.len(), 1);
        assert!(!snapshot.eliminated);

        exit(&world, "ada").await.unwrap();
        let snapshot = world_snapshot(&world, "ada").await;
        assert!(snapshot.eliminated);
    }

    #[tokio::test]
    async fn operations_on_unknown_players_are_not_found() {
        let world = shared_world(World::new());

        assert_eq!(exit(&world, "ghost").await, Err(GameError::NotFound));
        assert_eq!(fire(&world, "ghost").await, Err(GameError::NotFound));
        assert_eq!(rotate(&world, "ghost", 1.0).await, Err(GameError::NotFound));
        assert_eq!(
            submit_intent(&world, "ghost", &PlayerUpdate::default()).await,
            Err(GameError::NotFound)
        );
        assert_eq!(
            self_snapshot(&world, "ghost").await,
            Err(GameError::NotFound)
        );
    }
}
