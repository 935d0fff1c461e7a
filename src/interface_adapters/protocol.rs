// Wire protocol DTOs and conversions for the public polling API.
//
// The self snapshot is an explicit plain-data schema on purpose: clients
// receive typed fields, never an opaque serialized object graph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{OpponentSnapshot, PlayerSnapshot, PlayerUpdate, Vec2, WorldSnapshot};

/// Human-readable error string for consistent JSON error responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Confirmation body for mutating requests.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub message: String,
}

impl AckResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Query string carrying the caller's identity.
#[derive(Debug, Deserialize)]
pub struct PlayerQuery {
    pub player_name: String,
}

/// Declarative ship patch sent by the simple movement protocol.
#[derive(Debug, Deserialize)]
pub struct IntentRequest {
    pub player_name: String,
    #[serde(default)]
    pub position: Option<[f64; 2]>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub heading_deg: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
}

impl From<&IntentRequest> for PlayerUpdate {
    fn from(request: &IntentRequest) -> Self {
        Self {
            position: request.position.map(|[x, y]| Vec2::new(x, y)),
            color: request.color.clone(),
            heading_deg: request.heading_deg,
            speed: request.speed,
        }
    }
}

/// Body for the imperative fire command.
#[derive(Debug, Deserialize)]
pub struct FireRequest {
    pub player_name: String,
}

/// Body for the imperative turn command.
#[derive(Debug, Deserialize)]
pub struct RotateRequest {
    pub player_name: String,
    pub delta_deg: f64,
}

/// Body for the imperative speed-change command.
#[derive(Debug, Deserialize)]
pub struct AccelerateRequest {
    pub player_name: String,
    pub delta_speed: f64,
}

/// Full state of the caller's own player and ship.
#[derive(Debug, Serialize)]
pub struct PlayerSnapshotDto {
    pub name: String,
    pub color: String,
    pub position: [f64; 2],
    pub heading_deg: f64,
    pub speed: f64,
    pub ammo_remaining: usize,
}

impl From<PlayerSnapshot> for PlayerSnapshotDto {
    fn from(snapshot: PlayerSnapshot) -> Self {
        Self {
            name: snapshot.name,
            color: snapshot.color,
            position: [snapshot.position.x, snapshot.position.y],
            heading_deg: snapshot.heading_deg,
            speed: snapshot.speed,
            ammo_remaining: snapshot.ammo_remaining,
        }
    }
}

/// One opposing player in a world snapshot.
#[derive(Debug, Serialize)]
pub struct OpponentDto {
    pub name: String,
    pub position: [f64; 2],
    pub color: String,
}

impl From<&OpponentSnapshot> for OpponentDto {
    fn from(opponent: &OpponentSnapshot) -> Self {
        Self {
            name: opponent.name.clone(),
            position: [opponent.position.x, opponent.position.y],
            color: opponent.color.clone(),
        }
    }
}

/// Non-player objects visible to polling clients.
#[derive(Debug, Serialize)]
pub struct WorldObjectsDto {
    pub projectiles: Vec<[f64; 2]>,
}

/// The caller's own standing in the world.
#[derive(Debug, Serialize)]
pub struct SelfStatusDto {
    pub eliminated: bool,
}

/// Structured world snapshot for one polling client.
#[derive(Debug, Serialize)]
pub struct WorldSnapshotDto {
    pub opponent_player_data: HashMap<String, OpponentDto>,
    pub world_objects_data: WorldObjectsDto,
    pub your_data: SelfStatusDto,
}

impl From<WorldSnapshot> for WorldSnapshotDto {
    fn from(snapshot: WorldSnapshot) -> Self {
        Self {
            opponent_player_data: snapshot
                .opponents
                .iter()
                .map(|opponent| (opponent.name.clone(), OpponentDto::from(opponent)))
                .collect(),
            world_objects_data: WorldObjectsDto {
                projectiles: snapshot
                    .projectiles
                    .iter()
                    .map(|position| [position.x, position.y])
                    .collect(),
            },
            your_data: SelfStatusDto {
                eliminated: snapshot.eliminated,
            },
        }
    }
}
