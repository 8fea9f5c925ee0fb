use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;

use stepform_core::FormSnapshot;

use crate::api_error::ApiError;
use crate::request_types::{SaveAnswerRequest, SubmitFormRequest};
use crate::response_types::{
    InitFormResponse, MessageResponse, SaveAnswerResponse, SubmitFormResponse,
};
use crate::AppState;

const STATUS_SUCCESS: &str = "success";

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse { message: "Form API is running" })
}

/// Request body, if any, is ignored.
pub async fn init_form(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InitFormResponse>, ApiError> {
    let session = state.form_service.init_form().await?;
    Ok(Json(InitFormResponse {
        session_id: session.session_id,
        message: "Form session initialized",
    }))
}

pub async fn save_answer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SaveAnswerRequest>, JsonRejection>,
) -> Result<Json<SaveAnswerResponse>, ApiError> {
    let Json(req) = payload?;
    let saved =
        state.form_service.save_answer(&req.session_id, req.question_number, &req.answer).await?;
    Ok(Json(SaveAnswerResponse {
        status: STATUS_SUCCESS,
        message: format!("Answer for question {} saved", saved.question_number),
    }))
}

pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitFormRequest>, JsonRejection>,
) -> Result<Json<SubmitFormResponse>, ApiError> {
    let Json(req) = payload?;
    let receipt = state.form_service.submit_form(&req.session_id).await?;
    Ok(Json(SubmitFormResponse {
        status: STATUS_SUCCESS,
        message: "Form submitted successfully",
        submission_id: receipt.session.session_id,
        answers_count: receipt.answers_count,
    }))
}

pub async fn get_form_data(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<FormSnapshot>, ApiError> {
    let snapshot = state.form_service.get_form_data(&session_id).await?;
    Ok(Json(snapshot))
}
