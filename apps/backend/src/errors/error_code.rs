//! Error codes for the sportsbook API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses and websocket error messages.

use core::fmt;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Invalid account ID provided
    InvalidAccountId,
    /// General validation error
    ValidationError,
    /// General bad request error (malformed body, unreadable payload)
    BadRequest,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Account not found
    AccountNotFound,
    /// General not found error
    NotFound,

    // Business Logic
    /// Username already registered
    DuplicateUsername,
    /// Wager exceeds the account's points balance
    InsufficientBalance,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 15] = [
        Self::InvalidGameId,
        Self::InvalidAccountId,
        Self::ValidationError,
        Self::BadRequest,
        Self::GameNotFound,
        Self::AccountNotFound,
        Self::NotFound,
        Self::DuplicateUsername,
        Self::InsufficientBalance,
        Self::Conflict,
        Self::DbError,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::Internal,
        Self::ConfigError,
    ];

    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidAccountId => "INVALID_ACCOUNT_ID",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::AccountNotFound => "ACCOUNT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DuplicateUsername => "DUPLICATE_USERNAME",
            Self::InsufficientBalance => "INSUFFICIENT_BALANCE",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
