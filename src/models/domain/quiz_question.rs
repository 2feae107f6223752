use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: i64, // index into options, not bounds-checked
}

impl Question {
    pub fn new(text: &str, options: Vec<String>, correct_option: i64) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            options,
            correct_option,
        }
    }

    /// An out-of-range selection is simply never equal to `correct_option`.
    pub fn is_correct(&self, selected_option: i64) -> bool {
        self.correct_option == selected_option
    }
}
