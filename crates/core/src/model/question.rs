use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::QuestionId;

//
// ─── OPERATIONS ────────────────────────────────────────────────────────────────
//

/// The four arithmetic operations the game drills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// All operations, in the order the menu presents them.
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// Display symbol for this operation.
    #[must_use]
    pub fn symbol(&self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '−',
            Operation::Multiplication => '×',
            Operation::Division => '÷',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// What the player picked on the menu: one operation, or a random one
/// sampled per question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationChoice {
    Fixed(Operation),
    Mixed,
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One entry in the session queue.
///
/// `num1` and `num2` are the operands as displayed; the generator arranges
/// them so `correct_answer` is always a non-negative integer (larger operand
/// first for subtraction, dividend built from an integer product for
/// division).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub num1: u32,
    pub num2: u32,
    pub operation: Operation,
    pub correct_answer: u32,
    pub user_answer: Option<u32>,
    pub is_retry: bool,
}

impl Question {
    /// Creates a fresh, unanswered question.
    #[must_use]
    pub fn new(
        id: QuestionId,
        num1: u32,
        num2: u32,
        operation: Operation,
        correct_answer: u32,
    ) -> Self {
        Self {
            id,
            num1,
            num2,
            operation,
            correct_answer,
            user_answer: None,
            is_retry: false,
        }
    }

    /// Clones this question for another attempt: same arithmetic, fresh
    /// derived id, answer cleared, marked as a retry.
    #[must_use]
    pub fn retry_clone(&self) -> Self {
        Self {
            id: self.id.retry(),
            num1: self.num1,
            num2: self.num2,
            operation: self.operation,
            correct_answer: self.correct_answer,
            user_answer: None,
            is_retry: true,
        }
    }

    /// Digit length of the correct answer. Drives the input-buffer cap and
    /// the auto-submit threshold.
    #[must_use]
    pub fn answer_digits(&self) -> usize {
        let mut value = self.correct_answer;
        let mut digits = 1;
        while value >= 10 {
            value /= 10;
            digits += 1;
        }
        digits
    }

    /// The equation as shown to the player.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{} {} {} = ?", self.num1, self.operation.symbol(), self.num2)
    }

    /// True when an answer was submitted and it missed.
    #[must_use]
    pub fn answered_wrong(&self) -> bool {
        self.user_answer.is_some_and(|given| given != self.correct_answer)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn question(answer: u32) -> Question {
        Question::new(QuestionId::new(1), 6, 7, Operation::Multiplication, answer)
    }

    #[test]
    fn retry_clone_resets_answer_and_marks_retry() {
        let mut original = question(42);
        original.user_answer = Some(40);

        let retry = original.retry_clone();
        assert_eq!(retry.id, original.id.retry());
        assert_eq!(retry.num1, original.num1);
        assert_eq!(retry.num2, original.num2);
        assert_eq!(retry.correct_answer, original.correct_answer);
        assert_eq!(retry.user_answer, None);
        assert!(retry.is_retry);
    }

    #[test]
    fn answer_digits_counts_decimal_digits() {
        assert_eq!(question(0).answer_digits(), 1);
        assert_eq!(question(7).answer_digits(), 1);
        assert_eq!(question(10).answer_digits(), 2);
        assert_eq!(question(100).answer_digits(), 3);
    }

    #[test]
    fn prompt_uses_operation_symbol() {
        assert_eq!(question(42).prompt(), "6 × 7 = ?");
    }

    #[test]
    fn answered_wrong_requires_a_submitted_miss() {
        let mut q = question(42);
        assert!(!q.answered_wrong());
        q.user_answer = Some(42);
        assert!(!q.answered_wrong());
        q.user_answer = Some(41);
        assert!(q.answered_wrong());
    }
}
