use tokio::sync::RwLock;

use crate::models::{DEFAULT_MODE, LedState};

/// Process-wide state owner for the single simulated device.
///
/// Each entity sits behind its own lock, so a reader of one entity never
/// contends with a writer of another. Writes to the same entity serialize
/// on the write guard and the last writer wins; there is no history and no
/// timestamp-based conflict resolution.
pub struct DeviceService {
    led: RwLock<LedState>,
    mode: RwLock<String>,
    light: RwLock<Option<f64>>,
}

impl DeviceService {
    pub fn new() -> Self {
        Self {
            led: RwLock::new(LedState::default()),
            mode: RwLock::new(String::from(DEFAULT_MODE)),
            light: RwLock::new(None),
        }
    }

    /// Overwrites brightness and status as one unit under a single write
    /// guard, so concurrent readers never observe a mixed pair.
    pub async fn set_led(&self, brightness: i64, status: String) -> LedState {
        let mut led = self.led.write().await;
        led.brightness = brightness;
        led.status = status;

        tracing::info!(brightness = led.brightness, status = %led.status, "LED state updated");

        led.clone()
    }

    pub async fn led_state(&self) -> LedState {
        self.led.read().await.clone()
    }

    pub async fn set_mode(&self, mode: String) -> String {
        let mut current = self.mode.write().await;
        *current = mode;

        tracing::info!(mode = %current, "mode updated");

        current.clone()
    }

    pub async fn mode(&self) -> String {
        self.mode.read().await.clone()
    }

    pub async fn report_light(&self, value: f64) -> f64 {
        let mut light = self.light.write().await;
        *light = Some(value);

        tracing::info!(light_value = value, "light reading updated");

        value
    }

    /// `None` until the first reading arrives; serialized as JSON null.
    pub async fn light_value(&self) -> Option<f64> {
        *self.light.read().await
    }
}

impl Default for DeviceService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initial_state() {
        let service = DeviceService::new();

        assert_eq!(service.led_state().await, LedState::default());
        assert_eq!(service.mode().await, "DIM");
        assert_eq!(service.light_value().await, None);
    }

    #[tokio::test]
    async fn test_set_led_overwrites_pair() {
        let service = DeviceService::new();

        let led = service.set_led(128, String::from("ON")).await;
        assert_eq!(led.brightness, 128);
        assert_eq!(led.status, "ON");

        let led = service.led_state().await;
        assert_eq!(led.brightness, 128);
        assert_eq!(led.status, "ON");
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let service = DeviceService::new();

        service.set_led(10, String::from("ON")).await;
        service.set_led(0, String::from("OFF")).await;

        assert_eq!(service.led_state().await, LedState::default());
    }

    #[tokio::test]
    async fn test_mode_is_free_form() {
        let service = DeviceService::new();

        service.set_mode(String::from("FULL")).await;
        service.set_mode(String::from("CUSTOM_LABEL")).await;

        assert_eq!(service.mode().await, "CUSTOM_LABEL");
    }

    #[tokio::test]
    async fn test_brightness_is_not_range_checked() {
        let service = DeviceService::new();

        service.set_led(100_000, String::from("ON")).await;

        assert_eq!(service.led_state().await.brightness, 100_000);
    }

    #[tokio::test]
    async fn test_light_reading_overwrite() {
        let service = DeviceService::new();

        assert_eq!(service.report_light(512.0).await, 512.0);
        assert_eq!(service.light_value().await, Some(512.0));

        service.report_light(8.5).await;
        assert_eq!(service.light_value().await, Some(8.5));
    }
}
