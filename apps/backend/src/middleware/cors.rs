use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// Origins allowed when `CORS_ALLOWED_ORIGINS` is unset or has no valid entry
const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Parsed `CORS_ALLOWED_ORIGINS` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

/// Parse a comma-separated origin list; `*` allows any origin.
pub fn parse_allowed_origins(raw: &str) -> AllowedOrigins {
    if raw.split(',').any(|s| s.trim() == "*") {
        return AllowedOrigins::Any;
    }

    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.to_string())
        .collect();

    if origins.is_empty() {
        AllowedOrigins::List(DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect())
    } else {
        AllowedOrigins::List(origins)
    }
}

/// Build CORS middleware from `CORS_ALLOWED_ORIGINS`.
pub fn cors_middleware() -> Cors {
    let allowed = parse_allowed_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    match allowed {
        AllowedOrigins::Any => cors.allow_any_origin(),
        AllowedOrigins::List(origins) => origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_allows_any_origin() {
        assert_eq!(parse_allowed_origins("*"), AllowedOrigins::Any);
        assert_eq!(
            parse_allowed_origins("http://a.test, *"),
            AllowedOrigins::Any
        );
    }

    #[test]
    fn invalid_entries_fall_back_to_localhost() {
        let AllowedOrigins::List(list) = parse_allowed_origins("null, ftp://x, ") else {
            panic!("expected list");
        };
        assert_eq!(list, vec!["http://localhost:3000", "http://127.0.0.1:3000"]);
    }

    #[test]
    fn keeps_valid_origins() {
        assert_eq!(
            parse_allowed_origins("https://book.example.com,http://localhost:5173"),
            AllowedOrigins::List(vec![
                "https://book.example.com".to_string(),
                "http://localhost:5173".to_string()
            ])
        );
    }
}
