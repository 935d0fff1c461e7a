// The fixed-tick driver for the authoritative world.

use std::time::{Duration, Instant};

use tracing::info;

use crate::use_cases::SharedWorld;

/// Runs the simulation forever: every tick advances all entities and then
/// resolves interactions, in one lock scope. Request handlers interleave
/// between ticks; neither side ever observes a partially applied pass.
pub async fn simulation_task(world: SharedWorld, tick_interval: Duration) {
    info!(tick_ms = tick_interval.as_millis(), "simulation loop started");
    let mut interval = tokio::time::interval(tick_interval);
    loop {
        interval.tick().await;
        let now = Instant::now();
        let mut world = world.lock().await;
        world.advance_tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::World;
    use crate::use_cases::shared_world;

    #[tokio::test]
    async fn ticks_advance_the_world_while_a_handler_can_still_lock() {
        let mut initial = World::new();
        initial.join("ada").unwrap();
        let world = shared_world(initial);

        let task = tokio::spawn(simulation_task(
            world.clone(),
            Duration::from_millis(5),
        ));

        // Poll until the ship has drifted from its spawn point, proving the
        // loop ticks while this "handler" keeps taking the lock.
        let spawn = { world.lock().await.self_snapshot("ada").unwrap().position };
        let mut moved = false;
        for _ in 0..100 {
            tokio::time::sleep(Duration::from_millis(5)).await;
            let position = { world.lock().await.self_snapshot("ada").unwrap().position };
            if position != spawn {
                moved = true;
                break;
            }
        }
        task.abort();

        assert!(moved, "simulation loop never advanced the ship");
    }
}
