use actix_web::{get, http::StatusCode, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::CreateQuizRequest,
        response::{ApiResponse, QuizView},
    },
};

#[post("/api/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.create_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        StatusCode::CREATED,
        "Quiz created successfully",
        quiz,
    )))
}

#[get("/api/quizzes")]
pub async fn list_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let quizzes: Vec<QuizView> = state
        .quiz_service
        .list_quizzes()
        .await?
        .into_iter()
        .map(QuizView::from)
        .collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StatusCode::OK,
        "Quizzes retrieved successfully",
        quizzes,
    )))
}

/// Correct options are stripped before the quiz leaves the server.
#[get("/api/quizzes/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StatusCode::OK,
        "Quiz retrieved successfully",
        QuizView::from(quiz),
    )))
}
