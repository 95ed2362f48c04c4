use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handles::*;
use crate::services::DeviceService;

pub fn create_app(device_service: Arc<DeviceService>) -> Router {
    let led = led_router(LedControlState {
        device_service: device_service.clone(),
    });

    let mode = mode_router(ModeState {
        device_service: device_service.clone(),
    });

    let sensor = sensor_router(SensorState { device_service });

    Router::new()
        .merge(dashboard_router())
        .merge(led)
        .merge(mode)
        .merge(sensor)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
