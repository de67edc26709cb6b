use rand::Rng;

use drill_core::model::config::{OPERAND_MAX, OPERAND_MIN};
use drill_core::model::{GameConfig, Operation, OperationChoice, Question, QuestionId};

/// Builds a batch of questions from a config snapshot.
///
/// Pure apart from the caller-supplied rng; tests drive it with a seeded
/// `StdRng`. Id bases are allocated sequentially from `start_base` so every
/// question in a session gets a unique id.
pub struct BatchBuilder<'a> {
    config: &'a GameConfig,
    start_base: u64,
}

impl<'a> BatchBuilder<'a> {
    #[must_use]
    pub fn new(config: &'a GameConfig) -> Self {
        Self {
            config,
            start_base: 1,
        }
    }

    /// First id base to allocate from. Defaults to 1.
    #[must_use]
    pub fn with_start_base(mut self, base: u64) -> Self {
        self.start_base = base;
        self
    }

    /// Generate `count` fresh questions. `count == 0` yields an empty batch.
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Question> {
        (0..count)
            .map(|offset| self.build_question(QuestionId::new(self.start_base + offset as u64), rng))
            .collect()
    }

    fn build_question<R: Rng + ?Sized>(&self, id: QuestionId, rng: &mut R) -> Question {
        let operation = match self.config.operation {
            OperationChoice::Fixed(operation) => operation,
            OperationChoice::Mixed => Operation::ALL[rng.random_range(0..Operation::ALL.len())],
        };

        // One operand pinned to the target when set, the other sampled.
        let sampled = u32::from(rng.random_range(OPERAND_MIN..=OPERAND_MAX));
        let (mut num1, mut num2) = match self.config.target {
            Some(target) => (u32::from(target.get()), sampled),
            None => (
                u32::from(rng.random_range(OPERAND_MIN..=OPERAND_MAX)),
                sampled,
            ),
        };

        let correct_answer = match operation {
            Operation::Addition => {
                let answer = num1 + num2;
                if rng.random_bool(0.5) {
                    std::mem::swap(&mut num1, &mut num2);
                }
                answer
            }
            Operation::Subtraction => {
                // Larger operand first, so the answer never goes negative.
                if num1 < num2 {
                    std::mem::swap(&mut num1, &mut num2);
                }
                num1 - num2
            }
            Operation::Multiplication => {
                let answer = num1 * num2;
                if rng.random_bool(0.5) {
                    std::mem::swap(&mut num1, &mut num2);
                }
                answer
            }
            Operation::Division => {
                // The sampled num1 is the quotient; display (num1*num2) ÷ num2
                // so the division is always exact.
                let quotient = num1;
                num1 *= num2;
                quotient
            }
        };

        Question::new(id, num1, num2, operation, correct_answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::model::{TargetNumber, TimeLimit};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn config(operation: OperationChoice, target: Option<u8>) -> GameConfig {
        GameConfig::new(
            operation,
            target.map(|value| TargetNumber::new(value).unwrap()),
            TimeLimit::Ten,
        )
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn batch_has_requested_length_and_unique_ids() {
        let config = config(OperationChoice::Mixed, None);
        let batch = BatchBuilder::new(&config).generate(50, &mut rng());

        assert_eq!(batch.len(), 50);
        let ids: HashSet<_> = batch.iter().map(|question| question.id).collect();
        assert_eq!(ids.len(), 50);
        assert!(batch.iter().all(|question| !question.is_retry));
        assert!(batch.iter().all(|question| question.user_answer.is_none()));
    }

    #[test]
    fn zero_count_yields_an_empty_batch() {
        let config = config(OperationChoice::Fixed(Operation::Addition), None);
        assert!(BatchBuilder::new(&config).generate(0, &mut rng()).is_empty());
    }

    #[test]
    fn division_is_always_exact_with_nonzero_divisor() {
        let config = config(OperationChoice::Fixed(Operation::Division), None);
        for question in BatchBuilder::new(&config).generate(200, &mut rng()) {
            assert_ne!(question.num2, 0);
            assert_eq!(question.num1 % question.num2, 0);
            assert_eq!(question.num1 / question.num2, question.correct_answer);
        }
    }

    #[test]
    fn subtraction_never_goes_negative() {
        let config = config(OperationChoice::Fixed(Operation::Subtraction), None);
        for question in BatchBuilder::new(&config).generate(200, &mut rng()) {
            assert!(question.num1 >= question.num2);
            assert_eq!(question.correct_answer, question.num1 - question.num2);
        }
    }

    #[test]
    fn mixed_choice_still_produces_valid_answers() {
        let config = config(OperationChoice::Mixed, None);
        for question in BatchBuilder::new(&config).generate(200, &mut rng()) {
            let expected = match question.operation {
                Operation::Addition => question.num1 + question.num2,
                Operation::Subtraction => question.num1 - question.num2,
                Operation::Multiplication => question.num1 * question.num2,
                Operation::Division => question.num1 / question.num2,
            };
            assert_eq!(question.correct_answer, expected);
        }
    }

    #[test]
    fn target_number_pins_one_operand() {
        let config = config(OperationChoice::Fixed(Operation::Multiplication), Some(7));
        for question in BatchBuilder::new(&config).generate(100, &mut rng()) {
            assert!(question.num1 == 7 || question.num2 == 7);
            assert_eq!(question.correct_answer, question.num1 * question.num2);
        }
    }

    #[test]
    fn operands_stay_in_range() {
        let config = config(OperationChoice::Fixed(Operation::Addition), None);
        for question in BatchBuilder::new(&config).generate(200, &mut rng()) {
            assert!((1..=10).contains(&question.num1));
            assert!((1..=10).contains(&question.num2));
        }
    }

    #[test]
    fn start_base_offsets_id_allocation() {
        let config = config(OperationChoice::Fixed(Operation::Addition), None);
        let batch = BatchBuilder::new(&config)
            .with_start_base(100)
            .generate(3, &mut rng());
        let bases: Vec<_> = batch
            .iter()
            .map(|question| question.id.base_id())
            .collect();
        assert_eq!(bases, vec![100, 101, 102]);
    }
}
