use std::{env, time::Duration};

// Runtime/server constants (not gameplay tuning).

const DEFAULT_TICK_HZ: u64 = 30;

pub fn http_port() -> u16 {
    env::var("ARENA_SERVER_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000)
}

/// Fixed tick interval for the simulation loop, derived from a rate in Hz.
pub fn tick_interval() -> Duration {
    let hz = env::var("ARENA_TICK_HZ")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|hz| *hz > 0)
        .unwrap_or(DEFAULT_TICK_HZ);
    Duration::from_millis(1000 / hz)
}
