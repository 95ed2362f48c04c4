use std::sync::Arc;

use axum::Router;

use ledlink_server::app::create_app;
use ledlink_server::services::DeviceService;

pub struct MockApp {
    pub router: Router,
    pub device_service: Arc<DeviceService>,
}

impl MockApp {
    pub fn new() -> Self {
        let device_service = Arc::new(DeviceService::new());
        let router = create_app(device_service.clone());

        Self {
            router,
            device_service,
        }
    }
}
