use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{ApiError, DeviceError};
use crate::services::DeviceService;

#[derive(Clone)]
pub struct ModeState {
    pub device_service: Arc<DeviceService>,
}

/// The dashboard posts the mode as a form field rather than JSON.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ModeForm {
    pub mode: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetModeResponse {
    pub status: String,
    pub mode: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ModeResponse {
    pub mode: String,
}

pub fn mode_router(state: ModeState) -> Router {
    Router::new()
        .route("/set_mode", post(set_mode))
        .route("/get_mode", get(get_mode))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/set_mode",
    tag = "mode",
    request_body(content = ModeForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Mode updated, stored label echoed back", body = SetModeResponse),
        (status = 400, description = "Missing or empty mode value"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn set_mode(
    State(state): State<ModeState>,
    payload: Result<Form<ModeForm>, FormRejection>,
) -> Result<Json<SetModeResponse>, ApiError> {
    let Form(form) = payload?;

    // Any non-empty label is a valid mode; there is no enumerated set.
    let mode = match form.mode {
        Some(mode) if !mode.is_empty() => mode,
        _ => return Err(DeviceError::MissingMode.into()),
    };

    let mode = state.device_service.set_mode(mode).await;

    Ok(Json(SetModeResponse {
        status: String::from("success"),
        mode,
    }))
}

#[utoipa::path(
    get,
    path = "/get_mode",
    tag = "mode",
    responses(
        (status = 200, description = "Current mode label", body = ModeResponse)
    )
)]
pub async fn get_mode(State(state): State<ModeState>) -> Json<ModeResponse> {
    Json(ModeResponse {
        mode: state.device_service.mode().await,
    })
}
