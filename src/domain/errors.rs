// Domain-level errors for gateway workflows.
//
// Out-of-ammunition and out-of-range speed updates are deliberately absent:
// both are recovered silently inside the ship model and never surface as
// response values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A player with the requested name is already live.
    NameConflict,
    /// The named player does not exist.
    NotFound,
}
