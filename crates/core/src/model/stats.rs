use chrono::{DateTime, Utc};

/// Running score for one session.
///
/// `total_questions` is fixed when the session starts and does not grow when
/// retry clones are appended, so the number of answered events can exceed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    total_questions: u32,
    correct_count: u32,
    wrong_count: u32,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl SessionStats {
    /// Opens the scoreboard for a session of `total_questions` initial
    /// questions.
    #[must_use]
    pub fn start(total_questions: u32, started_at: DateTime<Utc>) -> Self {
        Self {
            total_questions,
            correct_count: 0,
            wrong_count: 0,
            started_at,
            completed_at: None,
        }
    }

    /// Records one answered question (retries included): exactly one counter
    /// moves per call.
    pub fn record(&mut self, correct: bool) {
        if correct {
            self.correct_count = self.correct_count.saturating_add(1);
        } else {
            self.wrong_count = self.wrong_count.saturating_add(1);
        }
    }

    /// Stamps the completion time. Only the first call takes effect.
    pub fn finalize(&mut self, completed_at: DateTime<Utc>) {
        if self.completed_at.is_none() {
            self.completed_at = Some(completed_at);
        }
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    /// Total answered events, retries included.
    #[must_use]
    pub fn answered(&self) -> u32 {
        self.correct_count + self.wrong_count
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Average seconds per question, or `None` before completion.
    ///
    /// Divides elapsed time by the initial batch size, not by the number of
    /// answer events, so sessions with retries read slightly slow. Kept
    /// that way on purpose; `average_divides_by_initial_batch` pins it.
    #[must_use]
    pub fn average_secs_per_question(&self) -> Option<f64> {
        let completed_at = self.completed_at?;
        if self.total_questions == 0 {
            return None;
        }
        let elapsed = (completed_at - self.started_at).num_milliseconds() as f64 / 1000.0;
        Some(elapsed / f64::from(self.total_questions))
    }
}
