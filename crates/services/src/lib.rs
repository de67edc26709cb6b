#![forbid(unsafe_code)]

pub mod audio;
pub mod error;
pub mod reward;
pub mod sessions;

pub use drill_core::Clock;

pub use audio::{ToneCue, ToneService};
pub use error::{RewardError, SessionError};
pub use reward::{REWARD_PROMPT, RewardImage, RewardService};

pub use sessions::{
    BatchBuilder, DrillService, Feedback, GameSession, ReviewSet, SESSION_LENGTH, SessionProgress,
};
