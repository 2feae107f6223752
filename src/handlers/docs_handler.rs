use actix_web::{get, http::header::ContentType, web, HttpResponse};

use crate::{
    app_state::AppState,
    docs::{api_document, swagger_page},
};

#[get("/api-docs")]
pub async fn api_docs_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(swagger_page())
}

#[get("/api-docs/openapi.json")]
pub async fn api_docs_json(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(api_document(&state.config.server_url()))
}
