//! Errors raised by services, repos and the simulator.
//!
//! Nothing here knows about HTTP status codes or SQL. Routes convert into
//! `AppError` through `From<DomainError>`; repos convert from `DbErr`
//! through `infra::db_errors`.

use thiserror::Error;

/// Operational failure categories
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    Other(String),
}

/// Which record a lookup failed to find
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Account,
    Game,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    DuplicateUsername,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Bad input or a broken business rule
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Wager larger than the balance seen at placement time
    #[error("insufficient balance: requested {requested}, available {balance}")]
    InsufficientBalance { balance: f64, requested: f64 },
    #[error("infra {0:?}: {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn insufficient_balance(balance: f64, requested: f64) -> Self {
        Self::InsufficientBalance { balance, requested }
    }

    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Transient database trouble that a later retry may clear
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Infra(InfraErrorKind::Timeout | InfraErrorKind::DbUnavailable, _)
        )
    }
}
