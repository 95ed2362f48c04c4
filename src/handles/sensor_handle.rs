use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{ApiError, DeviceError};
use crate::services::DeviceService;

#[derive(Clone)]
pub struct SensorState {
    pub device_service: Arc<DeviceService>,
}

/// Sensor clients may send extra telemetry fields alongside the reading;
/// anything but `light_value` is ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SensorBody {
    pub light_value: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SensorAck {
    pub status: String,
    pub light_value: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LightValueResponse {
    pub light_value: Option<f64>,
}

pub fn sensor_router(state: SensorState) -> Router {
    Router::new()
        .route("/update_sensor", post(update_sensor))
        .route("/get_light_value", get(get_light_value))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/update_sensor",
    tag = "sensor",
    request_body = SensorBody,
    responses(
        (status = 200, description = "Reading stored, value echoed back", body = SensorAck),
        (status = 400, description = "Missing light value or malformed body"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_sensor(
    State(state): State<SensorState>,
    payload: Result<Json<SensorBody>, JsonRejection>,
) -> Result<Json<SensorAck>, ApiError> {
    let Json(body) = payload?;

    let Some(value) = body.light_value else {
        return Err(DeviceError::MissingLightValue.into());
    };

    let light_value = state.device_service.report_light(value).await;

    Ok(Json(SensorAck {
        status: String::from("success"),
        light_value,
    }))
}

#[utoipa::path(
    get,
    path = "/get_light_value",
    tag = "sensor",
    responses(
        (status = 200, description = "Most recent reading, null before the first report", body = LightValueResponse)
    )
)]
pub async fn get_light_value(State(state): State<SensorState>) -> Json<LightValueResponse> {
    Json(LightValueResponse {
        light_value: state.device_service.light_value().await,
    })
}
