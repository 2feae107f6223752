use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{quiz_result::record_submission, Answer, Question, Quiz, QuizResult},
        dto::{
            request::{CreateQuizRequest, SubmitAnswerRequest},
            response::AnswerFeedback,
        },
    },
    repositories::QuizRepository,
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
    // One lock per quiz, held across the read-modify-write of its result list.
    submission_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self {
            repository,
            submission_locks: Mutex::new(HashMap::new()),
        }
    }

    pub async fn create_quiz(&self, request: CreateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;

        let questions = request.questions.into_iter().map(Question::from).collect();
        let quiz = Quiz::new(&request.title, questions);

        let quiz = self.repository.create_quiz(quiz).await?;
        log::info!(
            "Created quiz '{}' ({}) with {} questions",
            quiz.title,
            quiz.id,
            quiz.questions.len()
        );
        Ok(quiz)
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.fetch_quiz(id).await
    }

    pub async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.repository.find_all().await
    }

    /// Scores a single answer and folds it into the user's result for the quiz.
    pub async fn submit_answer(&self, request: SubmitAnswerRequest) -> AppResult<AnswerFeedback> {
        request.validate()?;

        let quiz = self.fetch_quiz(&request.quiz_id).await?;
        let question = quiz.find_question(&request.question_id).ok_or_else(|| {
            log::warn!(
                "Question '{}' not found in quiz '{}'",
                request.question_id,
                request.quiz_id
            );
            AppError::NotFound("Question not found".to_string())
        })?;

        let is_correct = question.is_correct(request.selected_option);
        let correct_option = question.correct_option;

        let answer = Answer {
            question_id: request.question_id.clone(),
            selected_option: request.selected_option,
            is_correct,
        };

        let lock = self.submission_lock(&request.quiz_id).await;
        let _guard = lock.lock().await;
        let mut results = self
            .repository
            .find_results(&request.quiz_id)
            .await?
            .unwrap_or_default();

        let score = record_submission(&mut results, &request.quiz_id, &request.user_id, answer).score;
        self.repository
            .save_results(&request.quiz_id, results)
            .await?;

        log::debug!(
            "User '{}' answered question '{}' of quiz '{}': correct={}, score={}",
            request.user_id,
            request.question_id,
            request.quiz_id,
            is_correct,
            score
        );

        Ok(AnswerFeedback {
            is_correct,
            correct_option,
        })
    }

    pub async fn get_results(&self, quiz_id: &str) -> AppResult<Vec<QuizResult>> {
        self.fetch_quiz(quiz_id).await?;

        let results = self
            .repository
            .find_results(quiz_id)
            .await?
            .unwrap_or_default();
        Ok(results)
    }

    async fn submission_lock(&self, quiz_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.submission_locks.lock().await;
        Arc::clone(locks.entry(quiz_id.to_string()).or_default())
    }

    async fn fetch_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            log::warn!("Quiz '{}' not found", id);
            AppError::NotFound("Quiz not found".to_string())
        })
    }
}
