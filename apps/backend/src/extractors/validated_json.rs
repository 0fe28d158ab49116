use std::future::Future;
use std::ops::Deref;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// Request bodies in this API are a handful of fields.
pub const MAX_BODY_BYTES: usize = 16 * 1024;

/// JSON body extractor whose failures render as 400 `BAD_REQUEST` problems.
///
/// Details never echo the body back; at most they name a missing field.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let declared_json = is_json_content_type(req);
        let mut payload = payload.take();

        Box::pin(async move {
            if !declared_json {
                return Err(AppError::bad_request(
                    ErrorCode::BadRequest,
                    "Expected content-type application/json",
                ));
            }

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    debug!(trace_id = %trace_ctx::trace_id(), error = %e, "body read failed");
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                if body.len() + chunk.len() > MAX_BODY_BYTES {
                    return Err(AppError::bad_request(
                        ErrorCode::BadRequest,
                        format!("Request body exceeds {MAX_BODY_BYTES} bytes"),
                    ));
                }
                body.extend_from_slice(&chunk);
            }

            serde_json::from_slice::<T>(&body)
                .map(ValidatedJson)
                .map_err(|e| {
                    debug!(
                        trace_id = %trace_ctx::trace_id(),
                        error = %e,
                        body_size = body.len(),
                        "JSON body rejected"
                    );
                    AppError::bad_request(ErrorCode::BadRequest, describe_json_error(&e))
                })
        })
    }
}

/// Absent content-type is tolerated; anything else must be a JSON type.
fn is_json_content_type(req: &HttpRequest) -> bool {
    match req
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        None => true,
        Some(ct) => {
            let essence = ct.split(';').next().unwrap_or("").trim();
            essence.eq_ignore_ascii_case("application/json") || essence.ends_with("+json")
        }
    }
}

fn describe_json_error(error: &serde_json::Error) -> String {
    match error.classify() {
        Category::Syntax => format!("Invalid JSON at line {}", error.line()),
        Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        Category::Data => match missing_field(error) {
            Some(field) => format!("Invalid JSON: missing field '{field}'"),
            None => "Invalid JSON: wrong types for one or more fields".to_string(),
        },
        Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}

/// Field name from serde's "missing field `x`" message.
fn missing_field(error: &serde_json::Error) -> Option<String> {
    let msg = error.to_string();
    let rest = msg.strip_prefix("missing field `")?;
    rest.split('`').next().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct BetBody {
        user_id: i64,
        points: f64,
    }

    async fn extract(req: TestRequest) -> Result<ValidatedJson<BetBody>, AppError> {
        let (req, mut payload) = req.to_http_parts();
        ValidatedJson::<BetBody>::from_request(&req, &mut payload).await
    }

    #[test]
    fn syntax_errors_report_the_line() {
        let error = serde_json::from_str::<BetBody>("{\n\"user_id\": 1,\n\"points\": }").unwrap_err();
        assert_eq!(describe_json_error(&error), "Invalid JSON at line 3");
    }

    #[test]
    fn truncated_body_is_eof() {
        let error = serde_json::from_str::<BetBody>(r#"{"user_id": 1"#).unwrap_err();
        assert!(describe_json_error(&error).contains("unexpected end of input"));
    }

    #[test]
    fn missing_field_is_named() {
        let error = serde_json::from_str::<BetBody>(r#"{"user_id": 1}"#).unwrap_err();
        assert_eq!(
            describe_json_error(&error),
            "Invalid JSON: missing field 'points'"
        );
    }

    #[test]
    fn wrong_type_is_generic() {
        let error = serde_json::from_str::<BetBody>(r#"{"user_id": "one", "points": 5}"#)
            .unwrap_err();
        assert!(describe_json_error(&error).contains("wrong types"));
    }

    #[actix_web::test]
    async fn well_formed_body_is_extracted() {
        let body = extract(
            TestRequest::post()
                .insert_header(("content-type", "application/json"))
                .set_payload(r#"{"user_id": 3, "points": 12.5}"#),
        )
        .await
        .unwrap();
        assert_eq!(body.user_id, 3);
        assert_eq!(body.into_inner().points, 12.5);
    }

    #[actix_web::test]
    async fn malformed_body_is_bad_request() {
        let err = extract(
            TestRequest::post()
                .insert_header(("content-type", "application/json"))
                .set_payload("{not json"),
        )
        .await
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::BadRequest);
        assert_eq!(err.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn non_json_content_type_is_rejected() {
        let err = extract(
            TestRequest::post()
                .insert_header(("content-type", "text/plain"))
                .set_payload(r#"{"user_id": 3, "points": 1}"#),
        )
        .await
        .unwrap_err();
        assert!(err.detail().contains("application/json"));
    }

    #[actix_web::test]
    async fn oversized_body_is_rejected() {
        let padding = " ".repeat(MAX_BODY_BYTES + 1);
        let err = extract(
            TestRequest::post()
                .insert_header(("content-type", "application/json"))
                .set_payload(format!(r#"{{"user_id": 3, "points": 1}}{padding}"#)),
        )
        .await
        .unwrap_err();
        assert!(err.detail().contains("exceeds"));
    }
}
