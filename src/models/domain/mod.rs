pub mod quiz;
pub mod quiz_question;
pub mod quiz_result;
pub use quiz::Quiz;
pub use quiz_question::Question;
pub use quiz_result::{Answer, QuizResult};
