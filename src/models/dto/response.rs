use actix_web::http::StatusCode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::{Question, Quiz};

/// Envelope wrapping every response body, successful or not.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ResponseStatus {
    pub code: u16,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        ApiResponse {
            status: ResponseStatus {
                code: status.as_u16(),
                message: message.into(),
            },
            data: Some(data),
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        ApiResponse {
            status: ResponseStatus {
                code: status.as_u16(),
                message: message.into(),
            },
            data: None,
        }
    }
}

/// A quiz as shown to quiz takers: correct options are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuizView {
    pub id: String,
    pub title: String,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuestionView {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
}

impl From<Question> for QuestionView {
    fn from(question: Question) -> Self {
        QuestionView {
            id: question.id,
            text: question.text,
            options: question.options,
        }
    }
}

impl From<Quiz> for QuizView {
    fn from(quiz: Quiz) -> Self {
        QuizView {
            id: quiz.id,
            title: quiz.title,
            questions: quiz.questions.into_iter().map(QuestionView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub correct_option: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Quiz {
        Quiz::new(
            "Sample Quiz",
            vec![Question::new("2+2?", vec!["2".into(), "4".into(), "6".into()], 1)],
        )
    }

    #[test]
    fn quiz_view_strips_correct_option() {
        let quiz = quiz();
        let question_id = quiz.questions[0].id.clone();

        let view = QuizView::from(quiz);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["title"], "Sample Quiz");
        assert_eq!(json["questions"][0]["id"], question_id.as_str());
        assert_eq!(json["questions"][0]["options"][1], "4");
        assert!(json["questions"][0].get("correct_option").is_none());
    }

    #[test]
    fn success_envelope_carries_code_message_and_data() {
        let response = ApiResponse::success(
            StatusCode::OK,
            "Answer submitted successfully",
            AnswerFeedback {
                is_correct: true,
                correct_option: 1,
            },
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"]["code"], 200);
        assert_eq!(json["status"]["message"], "Answer submitted successfully");
        assert_eq!(json["data"]["isCorrect"], true);
        assert_eq!(json["data"]["correctOption"], 1);
    }

    #[test]
    fn error_envelope_omits_data() {
        let response = ApiResponse::<()>::error(StatusCode::NOT_FOUND, "Not found: Quiz not found");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"]["code"], 404);
        assert!(json.get("data").is_none());
    }
}
