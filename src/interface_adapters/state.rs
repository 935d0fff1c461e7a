use crate::use_cases::SharedWorld;

// Application state shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub world: SharedWorld,
}
