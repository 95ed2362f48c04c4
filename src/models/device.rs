use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// On/off status and brightness of the controlled LED.
///
/// Brightness is stored exactly as received. The dashboard slider keeps
/// itself within [0, 255] but the server performs no range check, matching
/// the observed device behavior (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LedState {
    pub brightness: i64,
    pub status: String,
}

impl Default for LedState {
    fn default() -> Self {
        Self {
            brightness: 0,
            status: String::from("OFF"),
        }
    }
}

/// Mode the device boots into before any client sets one.
pub const DEFAULT_MODE: &str = "DIM";
