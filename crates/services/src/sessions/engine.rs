use chrono::{DateTime, Utc};
use std::fmt;

use drill_core::model::{GameConfig, Question, SessionStats};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

/// Outcome of evaluating one submission, shown to the player before the
/// queue advances. While feedback is displayed all input handlers are
/// gated off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong { expected: u32 },
    TimedOut { expected: u32 },
}

impl Feedback {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct)
    }

    /// The correct answer, carried so the renderer can show it on a miss.
    #[must_use]
    pub fn expected(&self) -> Option<u32> {
        match self {
            Feedback::Correct => None,
            Feedback::Wrong { expected } | Feedback::TimedOut { expected } => Some(*expected),
        }
    }
}

//
// ─── GAME SESSION ──────────────────────────────────────────────────────────────
//

/// The question queue and its scoring state machine.
///
/// Owns the ordered queue, the current position, the pending input buffer
/// and the running stats for one session. The queue grows append-only: a
/// missed question pushes a retry clone onto the tail. The current index
/// never moves backwards.
///
/// Timer callbacks from the renderer (per-question countdown, feedback
/// display delay) pass the `epoch` they were scheduled under; a callback
/// from a question that is no longer current is dropped instead of mutating
/// later state.
pub struct GameSession {
    config: GameConfig,
    queue: Vec<Question>,
    current: usize,
    input: String,
    feedback: Option<Feedback>,
    stats: SessionStats,
    epoch: u64,
}

impl GameSession {
    /// Create a session over an already-generated batch.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the batch has no questions.
    pub fn new(
        config: GameConfig,
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }
        let total = u32::try_from(questions.len()).unwrap_or(u32::MAX);
        Ok(Self {
            config,
            queue: questions,
            current: 0,
            input: String::new(),
            feedback: None,
            stats: SessionStats::start(total, started_at),
            epoch: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The full queue, retries included, in play order.
    #[must_use]
    pub fn queue(&self) -> &[Question] {
        &self.queue
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Identifies the current question instance for scheduled callbacks.
    /// Bumped every time the queue advances.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Digits typed so far for the current question.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.queue.get(self.current)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.queue.len()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            position: (self.current + 1).min(self.queue.len()),
            total: self.queue.len(),
            answered: self.stats.answered() as usize,
            is_complete: self.is_complete(),
        }
    }

    /// Append one typed digit to the pending answer.
    ///
    /// No-op while feedback is displayed, once the session is complete, or
    /// for a non-digit. When the buffer reaches the digit length of the
    /// correct answer it is parsed and evaluated automatically; there is no
    /// explicit submit.
    pub fn press_digit(&mut self, digit: u8) -> Option<Feedback> {
        if self.feedback.is_some() || digit > 9 {
            return None;
        }
        let cap = self.current_question()?.answer_digits();
        if self.input.len() >= cap {
            return None;
        }
        self.input.push(char::from(b'0' + digit));
        if self.input.len() == cap {
            let submitted = self.input.parse::<u32>().ok();
            return Some(self.evaluate(submitted));
        }
        None
    }

    /// Remove the last typed digit. Gated exactly like `press_digit`.
    pub fn erase_digit(&mut self) {
        if self.feedback.is_some() {
            return;
        }
        self.input.pop();
    }

    /// Countdown expiry for the question scheduled under `epoch`.
    ///
    /// A stale epoch, an already-evaluated question, or an exhausted queue
    /// makes this a no-op. Otherwise the question is scored as a no-answer
    /// submission: always wrong, whatever was partially typed.
    pub fn expire_timer(&mut self, epoch: u64) -> Option<Feedback> {
        if epoch != self.epoch || self.feedback.is_some() || self.current_question().is_none() {
            return None;
        }
        Some(self.evaluate(None))
    }

    /// Leave the feedback state: clear the buffer, move to the next queue
    /// position, finalize the stats when the queue is exhausted.
    ///
    /// Driven by the renderer's feedback-delay timer; a stale epoch or a
    /// session not in feedback makes this a no-op.
    pub fn advance(&mut self, epoch: u64, now: DateTime<Utc>) {
        if epoch != self.epoch || self.feedback.is_none() {
            return;
        }
        self.input.clear();
        self.feedback = None;
        self.epoch += 1;
        self.current += 1;
        if self.current >= self.queue.len() {
            self.stats.finalize(now);
        }
    }

    // Caller guarantees a current question exists.
    fn evaluate(&mut self, submitted: Option<u32>) -> Feedback {
        let expected = self.queue[self.current].correct_answer;
        let correct = submitted == Some(expected);

        self.queue[self.current].user_answer = submitted;
        self.stats.record(correct);

        let feedback = if correct {
            Feedback::Correct
        } else {
            let retry = self.queue[self.current].retry_clone();
            self.queue.push(retry);
            match submitted {
                Some(_) => Feedback::Wrong { expected },
                None => Feedback::TimedOut { expected },
            }
        };
        self.feedback = Some(feedback);
        feedback
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("queue_len", &self.queue.len())
            .field("current", &self.current)
            .field("input", &self.input)
            .field("feedback", &self.feedback)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::model::{
        Operation, OperationChoice, QuestionId, TimeLimit,
    };
    use drill_core::time::fixed_now;
    use chrono::Duration;

    fn config() -> GameConfig {
        GameConfig::new(
            OperationChoice::Fixed(Operation::Multiplication),
            None,
            TimeLimit::Ten,
        )
    }

    fn question(base: u64, answer: u32) -> Question {
        Question::new(
            QuestionId::new(base),
            answer,
            1,
            Operation::Multiplication,
            answer,
        )
    }

    fn session(answers: &[u32]) -> GameSession {
        let questions = answers
            .iter()
            .enumerate()
            .map(|(index, answer)| question(index as u64 + 1, *answer))
            .collect();
        GameSession::new(config(), questions, fixed_now()).unwrap()
    }

    fn type_answer(session: &mut GameSession, value: u32) -> Option<Feedback> {
        let mut feedback = None;
        for ch in value.to_string().chars() {
            feedback = session.press_digit(ch as u8 - b'0');
        }
        feedback
    }

    #[test]
    fn empty_batch_is_rejected() {
        let err = GameSession::new(config(), Vec::new(), fixed_now()).unwrap_err();
        assert_eq!(err, SessionError::Empty);
    }

    #[test]
    fn correct_answer_scores_and_does_not_grow_queue() {
        let mut session = session(&[6, 8]);
        let feedback = type_answer(&mut session, 6).unwrap();

        assert!(feedback.is_correct());
        assert_eq!(session.stats().correct_count(), 1);
        assert_eq!(session.stats().wrong_count(), 0);
        assert_eq!(session.queue().len(), 2);
    }

    #[test]
    fn wrong_answer_appends_a_retry_clone() {
        let mut session = session(&[6, 8]);
        let feedback = type_answer(&mut session, 5).unwrap();

        assert_eq!(feedback, Feedback::Wrong { expected: 6 });
        assert_eq!(session.stats().wrong_count(), 1);
        assert_eq!(session.queue().len(), 3);

        let retry = session.queue().last().unwrap();
        assert!(retry.is_retry);
        assert_eq!(retry.user_answer, None);
        assert_eq!(retry.id.base_id(), 1);
        assert_ne!(retry.id, session.queue()[0].id);
    }

    #[test]
    fn timeout_scores_like_a_wrong_answer_despite_partial_input() {
        let mut session = session(&[42, 8]);
        session.press_digit(4); // partial input only

        let feedback = session.expire_timer(session.epoch()).unwrap();
        assert_eq!(feedback, Feedback::TimedOut { expected: 42 });
        assert_eq!(session.stats().wrong_count(), 1);
        assert_eq!(session.queue().len(), 3);
        // A timeout is a no-answer submission.
        assert_eq!(session.queue()[0].user_answer, None);
    }

    #[test]
    fn stale_timer_epoch_is_dropped() {
        let mut session = session(&[6, 8]);
        let stale = session.epoch();
        type_answer(&mut session, 6);
        session.advance(stale, fixed_now());

        assert!(session.expire_timer(stale).is_none());
        assert_eq!(session.stats().wrong_count(), 0);
    }

    #[test]
    fn input_is_gated_while_feedback_shows() {
        let mut session = session(&[6, 8]);
        type_answer(&mut session, 5);
        assert!(session.feedback().is_some());

        assert!(session.press_digit(9).is_none());
        session.erase_digit();
        assert!(session.expire_timer(session.epoch()).is_none());
        assert_eq!(session.stats().answered(), 1);
    }

    #[test]
    fn buffer_caps_at_answer_digit_length() {
        let mut session = session(&[42, 8]);
        session.press_digit(4);
        assert_eq!(session.input(), "4");
        session.erase_digit();
        assert_eq!(session.input(), "");

        // Two digits triggers auto-submit, so the buffer never exceeds the cap.
        session.press_digit(4);
        let feedback = session.press_digit(2);
        assert_eq!(feedback, Some(Feedback::Correct));
    }

    #[test]
    fn advance_requires_feedback_and_a_current_epoch() {
        let mut session = session(&[6, 8]);
        let before = session.epoch();
        session.advance(before, fixed_now());
        assert_eq!(session.epoch(), before); // not in feedback: no-op

        type_answer(&mut session, 6);
        session.advance(before + 99, fixed_now()); // stale epoch: no-op
        assert!(session.feedback().is_some());

        session.advance(before, fixed_now());
        assert!(session.feedback().is_none());
        assert_eq!(session.epoch(), before + 1);
        assert_eq!(session.input(), "");
    }

    #[test]
    fn session_completes_after_the_last_queue_entry() {
        let mut session = session(&[6, 8]);

        type_answer(&mut session, 6);
        session.advance(session.epoch(), fixed_now());
        assert!(!session.is_complete());

        type_answer(&mut session, 8);
        let done = fixed_now() + Duration::seconds(12);
        session.advance(session.epoch(), done);

        assert!(session.is_complete());
        assert!(session.current_question().is_none());
        assert_eq!(session.stats().completed_at(), Some(done));
    }

    #[test]
    fn full_session_queue_grows_by_total_misses() {
        // 3 initial questions; miss the second once, clear its retry.
        let mut session = session(&[6, 8, 9]);

        type_answer(&mut session, 6);
        session.advance(session.epoch(), fixed_now());
        type_answer(&mut session, 5);
        session.advance(session.epoch(), fixed_now());
        type_answer(&mut session, 9);
        session.advance(session.epoch(), fixed_now());

        // The retry of question 2 is now current.
        let retry = session.current_question().unwrap();
        assert!(retry.is_retry);
        assert_eq!(retry.correct_answer, 8);
        type_answer(&mut session, 8);
        session.advance(session.epoch(), fixed_now());

        assert!(session.is_complete());
        assert_eq!(session.queue().len(), 4); // N + W
        assert_eq!(session.stats().correct_count(), 3);
        assert_eq!(session.stats().wrong_count(), 1);
        assert_eq!(session.stats().answered(), 4);
        assert_eq!(session.stats().total_questions(), 3);
    }

    #[test]
    fn exhausted_session_ignores_all_input() {
        let mut session = session(&[6]);
        type_answer(&mut session, 6);
        session.advance(session.epoch(), fixed_now());
        assert!(session.is_complete());

        assert!(session.press_digit(1).is_none());
        session.erase_digit();
        assert!(session.expire_timer(session.epoch()).is_none());
        session.advance(session.epoch(), fixed_now());
        assert_eq!(session.stats().answered(), 1);
    }
}
