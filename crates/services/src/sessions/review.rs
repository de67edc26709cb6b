use std::collections::HashSet;

use drill_core::model::{Question, QuestionId};

/// The de-duplicated set of logically-distinct questions answered
/// incorrectly at least once in a session.
///
/// Scans the queue for entries with a submitted answer that missed and
/// keeps the first such attempt per base id, so an original and its failed
/// retries collapse into one entry. Timed-out attempts carry no submitted
/// answer and only enter the set through a later typed miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSet {
    entries: Vec<Question>,
}

impl ReviewSet {
    #[must_use]
    pub fn from_queue(queue: &[Question]) -> Self {
        let mut seen: HashSet<u64> = HashSet::new();
        let entries = queue
            .iter()
            .filter(|question| question.answered_wrong())
            .filter(|question| seen.insert(question.id.base_id()))
            .cloned()
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The missed questions with their first wrong answers, in queue order.
    #[must_use]
    pub fn entries(&self) -> &[Question] {
        &self.entries
    }

    /// Rebuild the set as a fresh batch for review mode: new ids allocated
    /// from `start_base`, answers cleared, retry flags reset.
    #[must_use]
    pub fn rebuild_batch(&self, start_base: u64) -> Vec<Question> {
        self.entries
            .iter()
            .enumerate()
            .map(|(offset, question)| {
                Question::new(
                    QuestionId::new(start_base + offset as u64),
                    question.num1,
                    question.num2,
                    question.operation,
                    question.correct_answer,
                )
            })
            .collect()
    }
}
