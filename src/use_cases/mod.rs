// Use cases layer: application workflows for the arena server.

pub mod gateway;
pub mod simulation;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::World;

/// The one shared handle to the authoritative world. The tick task and every
/// request handler serialize through this lock; each holds it only for one
/// full logical operation (a tick pass or one in-memory mutation), never
/// across transport work.
pub type SharedWorld = Arc<Mutex<World>>;

pub fn shared_world(world: World) -> SharedWorld {
    Arc::new(Mutex::new(world))
}
