use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::{Deserialize, Serialize};

use super::positive_path_id;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Game ID extracted from the `{game_id}` path parameter.
///
/// Only checks the shape of the id; existence is up to the handler.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub i64);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(positive_path_id(req, "game_id", ErrorCode::InvalidGameId, "Game").map(GameId))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    fn extract(path_value: &str) -> Result<GameId, AppError> {
        let (req, mut payload) = TestRequest::default()
            .param("game_id", path_value.to_string())
            .to_http_parts();
        GameId::from_request(&req, &mut payload).into_inner()
    }

    #[test]
    fn parses_positive_id() {
        assert_eq!(extract("42").unwrap(), GameId(42));
    }

    #[test]
    fn rejects_non_numeric_and_non_positive() {
        for bad in ["abc", "0", "-3", "1.5"] {
            let err = extract(bad).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidGameId, "input {bad}");
        }
    }
}
