//! Assertions for problem+json error responses.
//!
//! Deliberately decoupled from backend types: the body is decoded into a
//! local mirror so a change to the wire shape breaks these tests.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Decode a problem body and check the invariants every error response
/// shares: matching status field, `type` ending in the code, and a body
/// `trace_id` equal to the `x-trace-id` header.
pub fn decode_problem(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> Problem {
    let problem: Problem = serde_json::from_slice(body).unwrap_or_else(|e| {
        panic!(
            "not a problem body ({e}): {}",
            String::from_utf8_lossy(body)
        )
    });

    let header_trace = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_else(|| panic!("missing x-trace-id on {status} response"));
    assert_eq!(problem.trace_id, header_trace, "body and header trace ids differ");

    assert_eq!(problem.status, status.as_u16(), "status field disagrees with HTTP status");
    assert!(
        problem.type_uri.ends_with(&problem.code),
        "type {} does not end with code {}",
        problem.type_uri,
        problem.code
    );
    assert!(!problem.title.is_empty(), "empty title");
    problem
}

/// Read `resp` and assert it is the expected problem.
pub async fn assert_problem_details_from_service_response(
    resp: ServiceResponse<BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) -> Problem {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_eq!(status, expected_status, "body: {}", String::from_utf8_lossy(&body));
    let problem = decode_problem(status, &headers, &body);
    assert_eq!(problem.code, expected_code);

    if let Some(fragment) = expected_detail_contains {
        assert!(
            problem.detail.contains(fragment),
            "detail {:?} lacks {fragment:?}",
            problem.detail
        );
    }
    problem
}
