use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user's results for one quiz. `score` tracks the number of correct
/// entries in `answers`; each question appears at most once.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QuizResult {
    pub quiz_id: String,
    pub user_id: String,
    pub score: i64,
    pub answers: Vec<Answer>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Answer {
    pub question_id: String,
    pub selected_option: i64,
    pub is_correct: bool,
}

impl QuizResult {
    pub fn new(quiz_id: &str, user_id: &str) -> Self {
        QuizResult {
            quiz_id: quiz_id.to_string(),
            user_id: user_id.to_string(),
            score: 0,
            answers: Vec::new(),
        }
    }

    /// Records an answer, replacing any earlier answer to the same question.
    ///
    /// A previously correct answer has its point withdrawn before the new
    /// answer is scored, so resubmitting the same choice leaves the score
    /// unchanged.
    pub fn record_answer(&mut self, answer: Answer) {
        let existing = self
            .answers
            .iter_mut()
            .find(|a| a.question_id == answer.question_id);

        let is_correct = answer.is_correct;

        match existing {
            Some(previous) => {
                if previous.is_correct {
                    self.score -= 1;
                }
                *previous = answer;
            }
            None => self.answers.push(answer),
        }

        if is_correct {
            self.score += 1;
        }
    }
}

/// Records `answer` for `user_id` within a quiz's result list, creating the
/// user's result on first submission. Returns the updated result.
pub fn record_submission<'a>(
    results: &'a mut Vec<QuizResult>,
    quiz_id: &str,
    user_id: &str,
    answer: Answer,
) -> &'a QuizResult {
    let index = match results.iter().position(|r| r.user_id == user_id) {
        Some(index) => index,
        None => {
            results.push(QuizResult::new(quiz_id, user_id));
            results.len() - 1
        }
    };

    let result = &mut results[index];
    result.record_answer(answer);
    result
}
