use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::quiz_question::Question;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Quiz {
    pub id: String, // Generated on create, never supplied by the client
    pub title: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(title: &str, questions: Vec<Question>) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            questions,
        }
    }

    pub fn find_question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}
