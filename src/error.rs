use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use thiserror::Error;

/// The single failure of the conversion core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Amount {amount} is out of range (must be >= 0 and < {ceiling})")]
    OutOfRange { amount: String, ceiling: u64 },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount {amount} must be greater than or equal to 0 and no more than {limit}")]
    AmountOutsideLimit { amount: Decimal, limit: Decimal },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Axum integration
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Conversion(_)
            | AppError::InvalidAmount(_)
            | AppError::AmountOutsideLimit { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
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

pub type Result<T> = std::result::Result<T, AppError>;
