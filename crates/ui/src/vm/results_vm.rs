use services::{GameSession, ReviewSet};

/// One missed question on the results screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub prompt: String,
    pub given: String,
    pub expected: String,
}

/// Everything the results screen shows.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsVm {
    pub total: u32,
    pub correct: u32,
    pub wrong: u32,
    pub answered: u32,
    pub average_label: Option<String>,
    pub perfect: bool,
    pub review: Vec<ReviewItemVm>,
}

#[must_use]
pub fn map_results(session: &GameSession) -> ResultsVm {
    let stats = session.stats();
    let review = ReviewSet::from_queue(session.queue())
        .entries()
        .iter()
        .map(|question| ReviewItemVm {
            prompt: question.prompt(),
            given: question
                .user_answer
                .map_or_else(|| "—".to_string(), |given| given.to_string()),
            expected: question.correct_answer.to_string(),
        })
        .collect::<Vec<_>>();

    ResultsVm {
        total: stats.total_questions(),
        correct: stats.correct_count(),
        wrong: stats.wrong_count(),
        answered: stats.answered(),
        average_label: stats
            .average_secs_per_question()
            .map(|average| format!("{average:.1}s")),
        perfect: stats.wrong_count() == 0,
        review,
    }
}
