use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{ApiError, DeviceError};
use crate::models::LedState;
use crate::services::DeviceService;

#[derive(Clone)]
pub struct LedControlState {
    pub device_service: Arc<DeviceService>,
}

/// Both fields are required; `Option` only makes their absence a typed check.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LedBody {
    pub brightness: Option<i64>,
    pub status: Option<String>,
}

pub fn led_router(state: LedControlState) -> Router {
    Router::new()
        .route("/led", post(update_led))
        .route("/get_led_status", get(get_led_status))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/led",
    tag = "led",
    request_body = LedBody,
    responses(
        (status = 200, description = "LED state updated, stored pair echoed back", body = LedState),
        (status = 400, description = "Missing brightness or status, or malformed body"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_led(
    State(state): State<LedControlState>,
    payload: Result<Json<LedBody>, JsonRejection>,
) -> Result<Json<LedState>, ApiError> {
    let Json(body) = payload?;

    // Brightness and status always change together; a partial request
    // leaves the stored pair untouched.
    let (Some(brightness), Some(status)) = (body.brightness, body.status) else {
        return Err(DeviceError::MissingLedField.into());
    };

    let led = state.device_service.set_led(brightness, status).await;

    Ok(Json(led))
}

#[utoipa::path(
    get,
    path = "/get_led_status",
    tag = "led",
    responses(
        (status = 200, description = "Current LED state", body = LedState)
    )
)]
pub async fn get_led_status(State(state): State<LedControlState>) -> Json<LedState> {
    Json(state.device_service.led_state().await)
}
