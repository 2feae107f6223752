pub mod answer_handler;
pub mod docs_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::{errors::AppError, middleware::get_request_id};

/// Registers every route. `answers` comes before `{id}` so the literal
/// segment is matched first.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health_handler::health_check)
        .service(docs_handler::api_docs_page)
        .service(docs_handler::api_docs_json)
        .service(answer_handler::submit_answer)
        .service(answer_handler::get_results)
        .service(quiz_handler::create_quiz)
        .service(quiz_handler::list_quizzes)
        .service(quiz_handler::get_quiz);
}

/// Body parse failures (bad JSON, wrong types, missing fields) are
/// validation errors and use the same envelope as every other error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::debug!(
            "Rejected request body [{}]: {}",
            get_request_id(req).unwrap_or_default(),
            err
        );
        AppError::from(err).into()
    })
}
