//! Inspection session
//!
//! Serving state and the controller that keeps a recipe's scaled view current.

pub mod controller;
pub mod signal;
pub mod state;

pub use controller::{ControllerState, OpenRecipe, ServingController, SessionError, SessionResult};
pub use signal::ServingSignal;
pub use state::ScaleState;
