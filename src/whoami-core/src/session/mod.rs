//! The authentication session: its state record and the controller that drives it.
mod controller;
mod state;

pub use controller::{ControllerSettings, SessionController};
pub use state::{Operation, Session, SessionState};
