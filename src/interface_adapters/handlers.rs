use axum::{Json, extract::Query, extract::State, http::StatusCode, response::Html};
use tracing::info;

use crate::domain::{GameError, PlayerUpdate};
use crate::interface_adapters::protocol::{
    AccelerateRequest, AckResponse, ErrorResponse, FireRequest, IntentRequest, PlayerQuery,
    PlayerSnapshotDto, RotateRequest, WorldSnapshotDto,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::gateway;

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn map_game_error(error: GameError) -> HandlerError {
    let (status, message) = match error {
        GameError::NameConflict => (
            StatusCode::CONFLICT,
            "player name already exists, please choose a new name",
        ),
        GameError::NotFound => (
            StatusCode::NOT_FOUND,
            "player does not exist, please create a new player",
        ),
    };
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

// Landing page so a browser poke shows something friendly.
pub async fn landing() -> Html<&'static str> {
    Html(
        "<html>\
         <head><title>Arena</title></head>\
         <body>\
         <h1>Arena server</h1>\
         <p>You wake up on an unknown terrain with an opponent in similar straits. \
         Your objective is to defeat the enemy. Good luck, pilot.</p>\
         </body>\
         </html>",
    )
}

// Handler for joining the game: creates the player and its ship.
pub async fn enter(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<AckResponse>, HandlerError> {
    gateway::join(&state.world, &query.player_name)
        .await
        .map_err(map_game_error)?;
    info!(player = %query.player_name, "joined the game");
    Ok(Json(AckResponse::new("successfully joined the game")))
}

// Handler for leaving the game: cascade-removes the player.
pub async fn player_exit(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<AckResponse>, HandlerError> {
    gateway::exit(&state.world, &query.player_name)
        .await
        .map_err(map_game_error)?;
    info!(player = %query.player_name, "left the game");
    Ok(Json(AckResponse::new("successfully exited from the game")))
}

// Handler for the declarative movement patch.
pub async fn send_data(
    State(state): State<AppState>,
    Json(payload): Json<IntentRequest>,
) -> Result<Json<AckResponse>, HandlerError> {
    let update = PlayerUpdate::from(&payload);
    gateway::submit_intent(&state.world, &payload.player_name, &update)
        .await
        .map_err(map_game_error)?;
    Ok(Json(AckResponse::new("successfully sent player data")))
}

// Handler for firing one round. Running dry is not an error.
pub async fn fire(
    State(state): State<AppState>,
    Json(payload): Json<FireRequest>,
) -> Result<Json<AckResponse>, HandlerError> {
    gateway::fire(&state.world, &payload.player_name)
        .await
        .map_err(map_game_error)?;
    Ok(Json(AckResponse::new("fired")))
}

// Handler for the imperative turn command.
pub async fn rotate(
    State(state): State<AppState>,
    Json(payload): Json<RotateRequest>,
) -> Result<Json<AckResponse>, HandlerError> {
    gateway::rotate(&state.world, &payload.player_name, payload.delta_deg)
        .await
        .map_err(map_game_error)?;
    Ok(Json(AckResponse::new("rotated")))
}

// Handler for the imperative speed-change command.
pub async fn accelerate(
    State(state): State<AppState>,
    Json(payload): Json<AccelerateRequest>,
) -> Result<Json<AckResponse>, HandlerError> {
    gateway::accelerate(&state.world, &payload.player_name, payload.delta_speed)
        .await
        .map_err(map_game_error)?;
    Ok(Json(AckResponse::new("accelerated")))
}

// Handler for the one-time self snapshot that seeds the client mirror.
pub async fn get_my_data(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<PlayerSnapshotDto>, HandlerError> {
    let snapshot = gateway::self_snapshot(&state.world, &query.player_name)
        .await
        .map_err(map_game_error)?;
    Ok(Json(PlayerSnapshotDto::from(snapshot)))
}

// Handler for the per-poll world snapshot. Never fails; an absent caller
// reads as eliminated.
pub async fn get_world_data(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Json<WorldSnapshotDto> {
    let snapshot = gateway::world_snapshot(&state.world, &query.player_name).await;
    Json(WorldSnapshotDto::from(snapshot))
}
