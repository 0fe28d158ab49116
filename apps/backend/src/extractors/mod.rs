pub mod account_id;
pub mod game_id;
pub mod validated_json;

pub use account_id::AccountId;
pub use game_id::GameId;
pub use validated_json::ValidatedJson;

use actix_web::HttpRequest;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Parse a positive integer id from a named path segment.
pub(crate) fn positive_path_id(
    req: &HttpRequest,
    param: &str,
    code: ErrorCode,
    label: &str,
) -> Result<i64, AppError> {
    let raw = req
        .match_info()
        .get(param)
        .ok_or_else(|| AppError::bad_request(code, format!("Missing {param} parameter")))?;

    let id = raw
        .parse::<i64>()
        .map_err(|_| AppError::bad_request(code, format!("Invalid {label} id: {raw}")))?;

    if id <= 0 {
        return Err(AppError::bad_request(
            code,
            format!("{label} id must be positive, got: {id}"),
        ));
    }
    Ok(id)
}
