//! Simulated ambient light sensor. Stands in for the hardware client by
//! posting a reading to `/update_sensor` once per second.

use std::env;
use std::time::Duration;

use serde_json::json;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sensor_sim=info".into()),
        )
        .init();

    let server =
        env::var("LEDLINK_SERVER").unwrap_or_else(|_| String::from("http://127.0.0.1:5000"));
    let endpoint = format!("{server}/update_sensor");

    let client = reqwest::Client::new();

    tracing::info!("reporting to {}", endpoint);

    let mut tick: u64 = 0;
    loop {
        // Triangle wave over the 12-bit ADC range the hardware sensor reports.
        let phase = tick % 120;
        let light_value = if phase < 60 {
            phase * 68
        } else {
            (120 - phase) * 68
        };

        match client
            .post(&endpoint)
            .json(&json!({ "light_value": light_value }))
            .send()
            .await
        {
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                tracing::info!(%status, body = %body, "reported light value {}", light_value);
            }
            Err(e) => {
                tracing::warn!("failed to reach {}: {}", endpoint, e);
            }
        }

        tick += 1;
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}
