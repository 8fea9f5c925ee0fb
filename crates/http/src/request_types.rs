//! Request types (Deserialize)

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SaveAnswerRequest {
    pub session_id: String,
    pub question_number: i32,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitFormRequest {
    pub session_id: String,
}
