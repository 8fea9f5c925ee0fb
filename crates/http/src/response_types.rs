//! Response types (Serialize)

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct InitFormResponse {
    pub session_id: String,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SaveAnswerResponse {
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitFormResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub submission_id: String,
    pub answers_count: usize,
}
