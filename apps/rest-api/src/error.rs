//! # API Error Type
//!
//! Unified error type for the HTTP surface.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Beerstock                              │
//! │                                                                         │
//! │  HTTP Client                 Rust Backend                               │
//! │  ───────────                 ────────────                               │
//! │                                                                         │
//! │  PATCH /beers/1/increment                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler → Result<T, ApiError>                                   │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Engine failure? ── BeerError::StockExceeded ──┐                │  │
//! │  │         │                                      ▼                │  │
//! │  │  Store failure? ─── DbError::QueryFailed ──── ApiError ────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄──── 400 {"code": "STOCK_EXCEEDED",                                  │
//! │          "message": "Quantity is less than 0 or stock exceeds          │
//! │                      max quantity of: 5"}                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every `ErrorCode` maps to a fixed HTTP status; the message carries the
//! human-readable detail, unmodified from the domain error that raised it.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use beerstock_core::{BeerError, ValidationError};
use beerstock_db::DbError;

/// API error returned from route handlers.
///
/// ## Serialization
/// This is what the client receives when a request fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Beer not found with id 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Create request targets an existing name (400)
    AlreadyRegistered,

    /// Quantity bound violated (400)
    StockExceeded,

    /// Request-shape validation failed (400)
    ValidationError,

    /// Concurrent update conflict (409)
    Conflict,

    /// Database operation failed (500)
    DatabaseError,
}

impl ErrorCode {
    /// The HTTP status this code is surfaced with.
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::AlreadyRegistered => StatusCode::BAD_REQUEST,
            ErrorCode::StockExceeded => StatusCode::BAD_REQUEST,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a conflict error for a beer whose stock update kept losing
    /// the version race.
    pub fn conflict(id: i64) -> Self {
        ApiError::new(
            ErrorCode::Conflict,
            format!("Concurrent stock update on beer with id {}, please retry", id),
        )
    }
}

/// Converts engine errors to API errors.
///
/// The message text is the domain error's own Display output, so the
/// client sees exactly the wording the engine produced.
impl From<BeerError> for ApiError {
    fn from(err: BeerError) -> Self {
        let code = match &err {
            BeerError::NotFound { .. } => ErrorCode::NotFound,
            BeerError::AlreadyRegistered { .. } => ErrorCode::AlreadyRegistered,
            BeerError::StockExceeded { .. } => ErrorCode::StockExceeded,
            BeerError::Validation(_) => ErrorCode::ValidationError,
        };

        let message = match err {
            // Unwrap the "Validation error:" prefix, the field message stands alone
            BeerError::Validation(inner) => inner.to_string(),
            other => other.to_string(),
        };

        ApiError::new(code, message)
    }
}

/// Converts request-shape validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::new(ErrorCode::ValidationError, err.to_string())
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::new(
                ErrorCode::NotFound,
                format!("{} not found: {}", entity, id),
            ),
            DbError::UniqueViolation { field, value } => ApiError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            DbError::ConnectionFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Renders the error as an HTTP response: status from the code, JSON body
/// with code + message.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::AlreadyRegistered.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::StockExceeded.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::ValidationError.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::Conflict.status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::DatabaseError.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_beer_error_preserves_message() {
        let api: ApiError = BeerError::not_found_by_id(42).into();
        assert_eq!(api.code, ErrorCode::NotFound);
        assert_eq!(api.message, "Beer not found with id 42");

        let api: ApiError = BeerError::StockExceeded { max: 5 }.into();
        assert_eq!(api.code, ErrorCode::StockExceeded);
        assert_eq!(
            api.message,
            "Quantity is less than 0 or stock exceeds max quantity of: 5"
        );
    }

    #[test]
    fn test_validation_error_drops_prefix() {
        let api: ApiError =
            BeerError::Validation(ValidationError::Required { field: "name" }).into();
        assert_eq!(api.code, ErrorCode::ValidationError);
        assert_eq!(api.message, "name is required");
    }

    #[test]
    fn test_serialized_shape() {
        let api = ApiError::new(ErrorCode::StockExceeded, "boom");
        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["code"], "STOCK_EXCEEDED");
        assert_eq!(json["message"], "boom");
    }
}
