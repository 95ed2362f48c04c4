pub mod dashboard_handle;
pub mod led_handle;
pub mod mode_handle;
pub mod sensor_handle;

pub use dashboard_handle::*;
pub use led_handle::*;
pub use mode_handle::*;
pub use sensor_handle::*;
