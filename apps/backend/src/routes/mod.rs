//! HTTP route registration.

use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod accounts;
pub mod bets;
pub mod games;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(crate::health::configure_routes)
        .configure(accounts::configure_routes)
        .configure(games::configure_routes)
        .configure(bets::configure_routes)
        .configure(crate::ws::configure_routes);
}

/// Parse a wire enum value, reporting failures as a validation error.
pub(crate) fn parse_field<T>(field: &str, raw: &str) -> Result<T, AppError>
where
    T: std::str::FromStr<Err = String>,
{
    raw.parse::<T>()
        .map_err(|e| AppError::invalid(ErrorCode::ValidationError, format!("{field}: {e}")))
}
