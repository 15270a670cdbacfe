use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

#[derive(Debug)]
pub enum ConvertError {
    // I/O errors
    Io(std::io::Error),

    // Transcription errors
    UnsupportedMagnitude(usize),

    // Request validation errors
    AmountTooLong(usize),

    // Speech backend errors
    SpeechBackend(String),

    // Internal errors
    TaskJoin(String),
    Unknown(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Io(e) => write!(f, "I/O error: {}", e),
            ConvertError::UnsupportedMagnitude(digits) => write!(
                f,
                "Unsupported magnitude: {} digits exceeds the scale table",
                digits
            ),
            ConvertError::AmountTooLong(len) => {
                write!(f, "Amount too long: {} characters", len)
            }
            ConvertError::SpeechBackend(msg) => write!(f, "Speech backend error: {}", msg),
            ConvertError::TaskJoin(msg) => write!(f, "Task execution error: {}", msg),
            ConvertError::Unknown(msg) => write!(f, "Unknown error: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {}

// Conversions
impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io(err)
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Unknown(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ConvertError {
    fn from(err: tokio::task::JoinError) -> Self {
        ConvertError::TaskJoin(err.to_string())
    }
}

// Axum integration
impl IntoResponse for ConvertError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ConvertError::AmountTooLong(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ConvertError::UnsupportedMagnitude(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            _ => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (
            status,
            axum::Json(serde_json::json!({
                "status": "error",
                "error": message
            })),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unsupported_magnitude() {
        let err = ConvertError::UnsupportedMagnitude(70);
        let msg = err.to_string();
        assert!(msg.contains("70"));
        assert!(msg.contains("scale table"));
    }

    #[test]
    fn test_display_amount_too_long() {
        let err = ConvertError::AmountTooLong(500);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ConvertError = io.into();
        assert!(matches!(err, ConvertError::Io(_)));
    }

    #[test]
    fn test_client_errors_map_to_bad_request() {
        let response = ConvertError::AmountTooLong(1000).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unsupported_magnitude_maps_to_unprocessable() {
        let response = ConvertError::UnsupportedMagnitude(70).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_backend_errors_map_to_internal() {
        let response = ConvertError::SpeechBackend("spawn failed".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
