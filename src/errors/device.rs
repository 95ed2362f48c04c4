use axum::http::StatusCode;

/// A required field is absent from an otherwise well-formed request.
/// The messages match what clients of the original endpoint expect.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("No light value in request")]
    MissingLightValue,

    #[error("Missing brightness or status")]
    MissingLedField,

    #[error("No mode value in request")]
    MissingMode,
}

impl DeviceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DeviceError::MissingLightValue => StatusCode::BAD_REQUEST,
            DeviceError::MissingLedField => StatusCode::BAD_REQUEST,
            DeviceError::MissingMode => StatusCode::BAD_REQUEST,
        }
    }
}
