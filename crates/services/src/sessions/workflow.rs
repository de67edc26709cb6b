use chrono::{DateTime, Utc};
use rand::Rng;

use drill_core::Clock;
use drill_core::model::GameConfig;

use super::engine::GameSession;
use super::generator::BatchBuilder;
use super::review::ReviewSet;
use crate::error::SessionError;

/// Questions in a freshly started session.
pub const SESSION_LENGTH: usize = 10;

/// Orchestrates session start, review re-entry and the reward decision.
///
/// The one constructor the renderer talks to; owns the clock so timestamps
/// stay deterministic in tests.
#[derive(Debug, Clone)]
pub struct DrillService {
    clock: Clock,
}

impl DrillService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Current time according to the service clock. Views pass this into
    /// epoch-guarded advances.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Start a session of [`SESSION_LENGTH`] questions from the given
    /// config snapshot.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` when the generated batch is empty.
    pub fn start_session(&self, config: GameConfig) -> Result<GameSession, SessionError> {
        let mut rng = rand::rng();
        self.start_session_with(config, SESSION_LENGTH, &mut rng)
    }

    /// Start a session of `count` questions with a caller-supplied rng.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` when `count` is zero.
    pub fn start_session_with<R: Rng + ?Sized>(
        &self,
        config: GameConfig,
        count: usize,
        rng: &mut R,
    ) -> Result<GameSession, SessionError> {
        let questions = BatchBuilder::new(&config).generate(count, rng);
        GameSession::new(config, questions, self.clock.now())
    }

    /// Re-enter play over the unique questions still missed in a finished
    /// session. Each one restarts as a fresh question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` when the session has not finished,
    /// `SessionError::Empty` when nothing was missed.
    pub fn start_review(&self, finished: &GameSession) -> Result<GameSession, SessionError> {
        if !finished.is_complete() {
            return Err(SessionError::Completed);
        }
        let review = ReviewSet::from_queue(finished.queue());
        if review.is_empty() {
            return Err(SessionError::Empty);
        }
        let batch = review.rebuild_batch(1);
        GameSession::new(*finished.config(), batch, self.clock.now())
    }

    /// A finished run with no wrong answers earns a reward-image request.
    #[must_use]
    pub fn reward_eligible(&self, session: &GameSession) -> bool {
        session.is_complete() && session.stats().wrong_count() == 0
    }
}
