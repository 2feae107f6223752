use crate::models::dto::request::{CreateQuestionRequest, CreateQuizRequest, SubmitAnswerRequest};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// The "Sample Quiz": one question, "2+2?", correct option 1.
    pub fn sample_quiz_request() -> CreateQuizRequest {
        CreateQuizRequest {
            title: "Sample Quiz".to_string(),
            questions: vec![CreateQuestionRequest {
                text: "2+2?".to_string(),
                options: vec!["2".to_string(), "4".to_string(), "6".to_string()],
                correct_option: 1,
            }],
        }
    }

    pub fn submit_request(
        quiz_id: &str,
        user_id: &str,
        question_id: &str,
        selected_option: i64,
    ) -> SubmitAnswerRequest {
        SubmitAnswerRequest {
            quiz_id: quiz_id.to_string(),
            user_id: user_id.to_string(),
            question_id: question_id.to_string(),
            selected_option,
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use validator::Validate;

    #[test]
    fn test_fixtures_sample_quiz_is_valid() {
        let request = sample_quiz_request();
        assert!(request.validate().is_ok());
        assert_eq!(request.questions[0].correct_option, 1);
    }

    #[test]
    fn test_fixtures_submit_request() {
        let request = submit_request("quiz", "u1", "q1", 2);
        assert_eq!(request.user_id, "u1");
        assert_eq!(request.selected_option, 2);
    }
}
