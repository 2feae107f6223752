use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::Question;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, JsonSchema)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "A quiz needs at least one question"), nested)]
    pub questions: Vec<CreateQuestionRequest>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, JsonSchema)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, message = "Question text must not be empty"))]
    pub text: String,

    #[validate(custom(function = "validate_options"))]
    pub options: Vec<String>,

    #[validate(range(min = 0, message = "Correct option must be a non-negative index"))]
    pub correct_option: i64,
}

impl From<CreateQuestionRequest> for Question {
    fn from(request: CreateQuestionRequest) -> Self {
        Question::new(&request.text, request.options, request.correct_option)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    #[validate(length(min = 1, message = "Quiz id must not be empty"))]
    pub quiz_id: String,

    #[validate(length(min = 1, message = "User id must not be empty"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "Question id must not be empty"))]
    pub question_id: String,

    #[validate(range(min = 0, message = "Selected option must be a non-negative index"))]
    pub selected_option: i64,
}

#[allow(clippy::ptr_arg)]
fn validate_options(options: &Vec<String>) -> Result<(), ValidationError> {
    if options.is_empty() {
        let mut error = ValidationError::new("options_empty");
        error.message = Some("A question needs at least one option".into());
        return Err(error);
    }
    if options.iter().any(|o| o.is_empty()) {
        let mut error = ValidationError::new("option_empty");
        error.message = Some("Options must not be empty".into());
        return Err(error);
    }
    Ok(())
}
