mod engine;
mod generator;
mod progress;
mod review;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use engine::{Feedback, GameSession};
pub use generator::BatchBuilder;
pub use progress::SessionProgress;
pub use review::ReviewSet;
pub use workflow::{DrillService, SESSION_LENGTH};
