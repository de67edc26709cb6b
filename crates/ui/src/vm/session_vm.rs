use services::{DrillService, Feedback, GameSession, SessionProgress};

/// Intents the renderer forwards into the queue controller.
///
/// Timer-driven intents carry the epoch they were scheduled under so the
/// engine can drop callbacks that outlived their question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionIntent {
    Digit(u8),
    Erase,
    TimerExpired { epoch: u64 },
    Advance { epoch: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Continue,
    Feedback(Feedback),
    Completed,
}

/// UI-facing wrapper over one `GameSession`.
pub struct SessionVm {
    session: GameSession,
}

impl SessionVm {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.session.epoch()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.session.feedback()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        self.session.progress()
    }

    #[must_use]
    pub fn prompt(&self) -> Option<String> {
        self.session.current_question().map(|question| question.prompt())
    }

    #[must_use]
    pub fn input(&self) -> &str {
        self.session.input()
    }

    /// Apply one renderer intent and report what happened.
    ///
    /// `Completed` fires exactly once, on the advance that exhausts the
    /// queue; replayed or stale intents collapse to `Continue`.
    pub fn apply(&mut self, drill: &DrillService, intent: SessionIntent) -> SessionOutcome {
        match intent {
            SessionIntent::Digit(digit) => match self.session.press_digit(digit) {
                Some(feedback) => SessionOutcome::Feedback(feedback),
                None => SessionOutcome::Continue,
            },
            SessionIntent::Erase => {
                self.session.erase_digit();
                SessionOutcome::Continue
            }
            SessionIntent::TimerExpired { epoch } => match self.session.expire_timer(epoch) {
                Some(feedback) => SessionOutcome::Feedback(feedback),
                None => SessionOutcome::Continue,
            },
            SessionIntent::Advance { epoch } => {
                let was_complete = self.session.is_complete();
                self.session.advance(epoch, drill.now());
                if !was_complete && self.session.is_complete() {
                    SessionOutcome::Completed
                } else {
                    SessionOutcome::Continue
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::model::{
        GameConfig, Operation, OperationChoice, Question, QuestionId, TimeLimit,
    };
    use drill_core::time::{fixed_clock, fixed_now};

    fn vm(answers: &[u32]) -> SessionVm {
        let questions = answers
            .iter()
            .enumerate()
            .map(|(index, answer)| {
                Question::new(
                    QuestionId::new(index as u64 + 1),
                    *answer,
                    1,
                    Operation::Multiplication,
                    *answer,
                )
            })
            .collect();
        let config = GameConfig::new(
            OperationChoice::Fixed(Operation::Multiplication),
            None,
            TimeLimit::Five,
        );
        SessionVm::new(GameSession::new(config, questions, fixed_now()).unwrap())
    }

    fn drill() -> DrillService {
        DrillService::new(fixed_clock())
    }

    #[test]
    fn digit_intents_feed_the_buffer_until_auto_submit() {
        let mut vm = vm(&[42]);
        let drill = drill();

        assert_eq!(vm.apply(&drill, SessionIntent::Digit(4)), SessionOutcome::Continue);
        assert_eq!(vm.input(), "4");
        let outcome = vm.apply(&drill, SessionIntent::Digit(2));
        assert_eq!(outcome, SessionOutcome::Feedback(Feedback::Correct));
    }

    #[test]
    fn erase_trims_the_buffer() {
        let mut vm = vm(&[42]);
        let drill = drill();
        vm.apply(&drill, SessionIntent::Digit(4));
        vm.apply(&drill, SessionIntent::Erase);
        assert_eq!(vm.input(), "");
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut vm = vm(&[6]);
        let drill = drill();

        vm.apply(&drill, SessionIntent::Digit(6));
        let epoch = vm.epoch();
        assert_eq!(
            vm.apply(&drill, SessionIntent::Advance { epoch }),
            SessionOutcome::Completed
        );
        // A stale delay callback replaying the advance stays quiet.
        assert_eq!(
            vm.apply(&drill, SessionIntent::Advance { epoch }),
            SessionOutcome::Continue
        );
    }

    #[test]
    fn stale_timer_intents_are_dropped() {
        let mut vm = vm(&[6, 8]);
        let drill = drill();

        let stale = vm.epoch();
        vm.apply(&drill, SessionIntent::Digit(6));
        vm.apply(&drill, SessionIntent::Advance { epoch: stale });

        assert_eq!(
            vm.apply(&drill, SessionIntent::TimerExpired { epoch: stale }),
            SessionOutcome::Continue
        );
        assert_eq!(vm.session().stats().wrong_count(), 0);
    }

    #[test]
    fn timeout_intent_scores_the_question_wrong() {
        let mut vm = vm(&[6]);
        let drill = drill();
        let epoch = vm.epoch();

        let outcome = vm.apply(&drill, SessionIntent::TimerExpired { epoch });
        assert_eq!(
            outcome,
            SessionOutcome::Feedback(Feedback::TimedOut { expected: 6 })
        );
        assert_eq!(vm.session().stats().wrong_count(), 1);
    }
}
