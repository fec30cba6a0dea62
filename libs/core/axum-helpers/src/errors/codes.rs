//! Error identifiers shared by every error body.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::Conflict.as_str(), "CONFLICT");
//! assert_eq!(ErrorCode::Conflict.code(), 1008);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Identifier carried in the `error` field, with a numeric twin in `code`.
///
/// Client-side failures use 1xxx, server faults 5xxx.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Body field rule violated
    ValidationError,
    /// Query string unparseable or out of bounds
    InvalidQuery,
    /// Body is not the expected JSON
    JsonExtraction,
    NotFound,
    /// Duplicate item name
    Conflict,
    UnprocessableEntity,
    BadRequest,
    InternalError,
}

struct Meta {
    name: &'static str,
    code: i32,
    message: &'static str,
}

impl ErrorCode {
    const fn meta(self) -> Meta {
        let (name, code, message) = match self {
            Self::ValidationError => ("VALIDATION_ERROR", 1001, "Request validation failed"),
            Self::InvalidQuery => ("INVALID_QUERY", 1002, "Invalid query parameters"),
            Self::JsonExtraction => ("JSON_EXTRACTION", 1003, "Failed to parse request body"),
            Self::NotFound => ("NOT_FOUND", 1004, "Resource not found"),
            Self::Conflict => ("CONFLICT", 1008, "Resource already exists"),
            Self::UnprocessableEntity => {
                ("UNPROCESSABLE_ENTITY", 1009, "Request cannot be processed")
            }
            Self::BadRequest => ("BAD_REQUEST", 1012, "Bad request"),
            Self::InternalError => ("INTERNAL_ERROR", 5000, "An internal server error occurred"),
        };
        Meta {
            name,
            code,
            message,
        }
    }

    /// Same spelling serde uses
    pub const fn as_str(&self) -> &'static str {
        self.meta().name
    }

    pub const fn code(&self) -> i32 {
        self.meta().code
    }

    /// Used as `detail` when the failure has nothing more specific to say
    pub const fn default_message(&self) -> &'static str {
        self.meta().message
    }

    pub const fn is_server_error(&self) -> bool {
        self.code() >= 5000
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 8] = [
        ErrorCode::ValidationError,
        ErrorCode::InvalidQuery,
        ErrorCode::JsonExtraction,
        ErrorCode::NotFound,
        ErrorCode::Conflict,
        ErrorCode::UnprocessableEntity,
        ErrorCode::BadRequest,
        ErrorCode::InternalError,
    ];

    #[test]
    fn test_display_matches_serde_for_every_code() {
        for code in ALL {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{code}\""));
        }
    }

    #[test]
    fn test_numeric_codes_are_unique() {
        let mut codes: Vec<i32> = ALL.iter().map(|c| c.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ALL.len());
    }

    #[test]
    fn test_only_internal_error_is_a_server_error() {
        let server: Vec<_> = ALL.into_iter().filter(|c| c.is_server_error()).collect();
        assert_eq!(server, vec![ErrorCode::InternalError]);
    }

    #[test]
    fn test_parses_from_wire_name() {
        let code: ErrorCode = serde_json::from_str("\"BAD_REQUEST\"").unwrap();
        assert_eq!(code, ErrorCode::BadRequest);
    }
}
