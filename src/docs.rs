//! OpenAPI description of the HTTP surface, with schemas derived from the
//! request and response types.

use schemars::{generate::SchemaSettings, Schema};
use serde_json::{json, Value};

use crate::models::{
    domain::{Quiz, QuizResult},
    dto::{
        request::{CreateQuizRequest, SubmitAnswerRequest},
        response::{AnswerFeedback, ApiResponse, QuizView},
    },
};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// `server_url` is advertised as the single entry of `servers`.
pub fn api_document(server_url: &str) -> Value {
    let mut generator = SchemaSettings::openapi3().into_generator();

    let create_quiz = generator.subschema_for::<CreateQuizRequest>();
    let submit_answer = generator.subschema_for::<SubmitAnswerRequest>();
    let created = generator.subschema_for::<ApiResponse<Quiz>>();
    let quiz_view = generator.subschema_for::<ApiResponse<QuizView>>();
    let quiz_list = generator.subschema_for::<ApiResponse<Vec<QuizView>>>();
    let feedback = generator.subschema_for::<ApiResponse<AnswerFeedback>>();
    let results = generator.subschema_for::<ApiResponse<Vec<QuizResult>>>();
    let error = generator.subschema_for::<ApiResponse<()>>();

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Quiz API Documentation",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Create quizzes, submit answers and read per-user results."
        },
        "servers": [{ "url": server_url }],
        "paths": {
            "/api/quizzes": {
                "post": {
                    "summary": "Create a quiz",
                    "requestBody": json_body(&create_quiz),
                    "responses": {
                        "201": json_response("Quiz created successfully", &created),
                        "400": json_response("Validation failed", &error)
                    }
                },
                "get": {
                    "summary": "List quizzes without their correct options",
                    "responses": {
                        "200": json_response("Quizzes retrieved successfully", &quiz_list)
                    }
                }
            },
            "/api/quizzes/{id}": {
                "get": {
                    "summary": "Fetch a quiz without its correct options",
                    "parameters": [id_parameter()],
                    "responses": {
                        "200": json_response("Quiz retrieved successfully", &quiz_view),
                        "404": json_response("Quiz not found", &error)
                    }
                }
            },
            "/api/quizzes/answers": {
                "post": {
                    "summary": "Submit an answer to one question",
                    "requestBody": json_body(&submit_answer),
                    "responses": {
                        "200": json_response("Answer submitted successfully", &feedback),
                        "400": json_response("Validation failed", &error),
                        "404": json_response("Quiz or question not found", &error)
                    }
                }
            },
            "/api/quizzes/{id}/results": {
                "get": {
                    "summary": "Per-user results for a quiz",
                    "parameters": [id_parameter()],
                    "responses": {
                        "200": json_response("Results retrieved successfully", &results),
                        "404": json_response("Quiz not found", &error)
                    }
                }
            }
        },
        "components": {
            "schemas": generator.definitions().clone()
        }
    })
}

/// Swagger UI page rendering the document served at [`OPENAPI_PATH`].
pub fn swagger_page() -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Quiz API Documentation</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {{
      window.ui = SwaggerUIBundle({{ url: "{}", dom_id: "#swagger-ui" }});
    }};
  </script>
</body>
</html>"##,
        OPENAPI_PATH
    )
}

fn json_body(schema: &Schema) -> Value {
    json!({
        "required": true,
        "content": { "application/json": { "schema": schema } }
    })
}

fn json_response(description: &str, schema: &Schema) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema } }
    })
}

fn id_parameter() -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "string" }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = api_document("http://127.0.0.1:8080");
        let paths = doc["paths"].as_object().unwrap();

        for path in [
            "/api/quizzes",
            "/api/quizzes/{id}",
            "/api/quizzes/answers",
            "/api/quizzes/{id}/results",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
        assert_eq!(doc["openapi"], "3.0.3");
    }

    #[test]
    fn document_includes_request_schemas() {
        let doc = api_document("http://127.0.0.1:8080");
        let schemas = doc["components"]["schemas"].as_object().unwrap();

        let submit = &schemas["SubmitAnswerRequest"];
        assert!(submit["properties"].get("selectedOption").is_some());
        assert!(schemas.contains_key("CreateQuizRequest"));
        assert!(schemas.contains_key("CreateQuestionRequest"));
    }

    #[test]
    fn quiz_view_schema_has_no_correct_option() {
        let doc = api_document("http://127.0.0.1:8080");
        let question_view = &doc["components"]["schemas"]["QuestionView"];

        assert!(question_view["properties"].get("text").is_some());
        assert!(question_view["properties"].get("correct_option").is_none());
    }

    #[test]
    fn swagger_page_points_at_document() {
        let page = swagger_page();
        assert!(page.contains(OPENAPI_PATH));
        assert!(page.contains(r##"dom_id: "#swagger-ui""##));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn document_advertises_server_url() {
        let doc = api_document("http://localhost:9090");
        assert_eq!(doc["servers"][0]["url"], "http://localhost:9090");
    }
}
