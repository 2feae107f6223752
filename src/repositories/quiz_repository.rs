use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::AppResult,
    models::domain::{Quiz, QuizResult},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create_quiz(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn find_all(&self) -> AppResult<Vec<Quiz>>;
    async fn save_results(&self, quiz_id: &str, results: Vec<QuizResult>) -> AppResult<()>;
    async fn find_results(&self, quiz_id: &str) -> AppResult<Option<Vec<QuizResult>>>;
}

/// Process-lifetime store for quizzes and their results. Nothing is evicted.
#[derive(Default)]
pub struct InMemoryQuizRepository {
    quizzes: RwLock<QuizTable>,
    results: RwLock<HashMap<String, Vec<QuizResult>>>,
}

#[derive(Default)]
struct QuizTable {
    by_id: HashMap<String, Quiz>,
    insertion_order: Vec<String>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create_quiz(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.by_id.insert(quiz.id.clone(), quiz.clone()).is_none() {
            quizzes.insertion_order.push(quiz.id.clone());
        }
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.by_id.get(id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        let items = quizzes
            .insertion_order
            .iter()
            .filter_map(|id| quizzes.by_id.get(id).cloned())
            .collect();
        Ok(items)
    }

    async fn save_results(&self, quiz_id: &str, results: Vec<QuizResult>) -> AppResult<()> {
        let mut stored = self.results.write().await;
        stored.insert(quiz_id.to_string(), results);
        Ok(())
    }

    async fn find_results(&self, quiz_id: &str) -> AppResult<Option<Vec<QuizResult>>> {
        let stored = self.results.read().await;
        Ok(stored.get(quiz_id).cloned())
    }
}
