// Domain layer: core simulation types and rules.

pub mod errors;
pub mod geometry;
pub mod ids;
pub mod players;
pub mod projectile;
pub mod registry;
pub mod ship;
pub mod tuning;
pub mod world;

pub use errors::GameError;
pub use geometry::Vec2;
pub use players::{Player, PlayerDirectory, PlayerUpdate};
pub use projectile::Projectile;
pub use registry::{Entity, EntityRegistry};
pub use ship::Ship;
pub use tuning::{CombatTuning, ProjectileTuning, ShipTuning, WorldTuning};
pub use world::{OpponentSnapshot, PlayerSnapshot, World, WorldSnapshot};
