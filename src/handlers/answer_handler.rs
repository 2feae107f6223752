use actix_web::{get, http::StatusCode, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::SubmitAnswerRequest, response::ApiResponse},
};

#[post("/api/quizzes/answers")]
pub async fn submit_answer(
    state: web::Data<AppState>,
    request: web::Json<SubmitAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let feedback = state.quiz_service.submit_answer(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StatusCode::OK,
        "Answer submitted successfully",
        feedback,
    )))
}

#[get("/api/quizzes/{id}/results")]
pub async fn get_results(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let results = state.quiz_service.get_results(&id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StatusCode::OK,
        "Results retrieved successfully",
        results,
    )))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};

    use crate::{
        app_state::AppState, config::Config, handlers::configure,
        test_utils::fixtures::sample_quiz_request,
    };

    async fn state_with_quiz() -> (web::Data<AppState>, String, String) {
        let state = AppState::new(Config::test_config());
        let quiz = state
            .quiz_service
            .create_quiz(sample_quiz_request())
            .await
            .unwrap();
        let question_id = quiz.questions[0].id.clone();
        (web::Data::new(state), quiz.id, question_id)
    }

    fn answer_body(quiz_id: &str, question_id: &str, selected: Value) -> Value {
        json!({
            "quizId": quiz_id,
            "userId": "u1",
            "questionId": question_id,
            "selectedOption": selected
        })
    }

    #[actix_web::test]
    async fn test_submit_answer_reports_correctness() {
        let (state, quiz_id, question_id) = state_with_quiz().await;
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/quizzes/answers")
            .set_json(answer_body(&quiz_id, &question_id, json!(1)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"]["message"], "Answer submitted successfully");
        assert_eq!(body["data"], json!({ "isCorrect": true, "correctOption": 1 }));
    }

    #[actix_web::test]
    async fn test_submit_answer_with_textual_option_is_bad_request() {
        let (state, quiz_id, question_id) = state_with_quiz().await;
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/quizzes/answers")
            .set_json(answer_body(&quiz_id, &question_id, json!("one")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"]["code"], 400);
    }

    #[actix_web::test]
    async fn test_submit_answer_with_missing_fields_is_bad_request() {
        let (state, quiz_id, _) = state_with_quiz().await;
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/quizzes/answers")
            .set_json(json!({ "quizId": quiz_id }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_submit_answer_to_unknown_question_is_not_found() {
        let (state, quiz_id, _) = state_with_quiz().await;
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/quizzes/answers")
            .set_json(answer_body(&quiz_id, "missing", json!(0)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_results_for_quiz_without_answers_are_empty() {
        let (state, quiz_id, _) = state_with_quiz().await;
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/quizzes/{}/results", quiz_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"]["message"], "Results retrieved successfully");
        assert_eq!(body["data"], json!([]));
    }

    #[actix_web::test]
    async fn test_results_for_missing_quiz_are_not_found() {
        let (state, _, _) = state_with_quiz().await;
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/api/quizzes/missing/results")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
