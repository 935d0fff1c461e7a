use axum::{
    Router,
    routing::{get, post},
};

use crate::interface_adapters::handlers::{
    accelerate, enter, fire, get_my_data, get_world_data, landing, player_exit, rotate, send_data,
};
use crate::interface_adapters::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing))
        .route("/enter", get(enter))
        .route("/exit", get(player_exit))
        .route("/send_data", post(send_data))
        .route("/fire", post(fire))
        .route("/rotate", post(rotate))
        .route("/accelerate", post(accelerate))
        .route("/get_my_data", get(get_my_data))
        .route("/get_world_data", get(get_world_data))
        .with_state(state)
}
