use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::{Deserialize, Serialize};

use super::positive_path_id;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Account ID extracted from the `{account_id}` path parameter
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct AccountId(pub i64);

impl FromRequest for AccountId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            positive_path_id(req, "account_id", ErrorCode::InvalidAccountId, "Account")
                .map(AccountId),
        )
    }
}
