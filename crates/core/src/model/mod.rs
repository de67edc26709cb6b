pub mod config;
pub mod ids;
mod question;
mod stats;

pub use config::{GameConfig, TargetError, TargetNumber, TimeLimit};
pub use ids::QuestionId;
pub use question::{Operation, OperationChoice, Question};
pub use stats::SessionStats;
