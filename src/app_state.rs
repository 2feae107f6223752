use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{InMemoryQuizRepository, QuizRepository},
    services::quiz_service::QuizService,
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_repository(config, Arc::new(InMemoryQuizRepository::new()))
    }

    pub fn with_repository(config: Config, repository: Arc<dyn QuizRepository>) -> Self {
        let quiz_service = Arc::new(QuizService::new(repository));

        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}
