//! Bearer Token Header Handling
//!
//! RFC 6750 `Authorization: Bearer <token>` parsing utilities.

use axum::http::{HeaderMap, HeaderValue, header};

/// Authentication scheme name (matched case-insensitively)
pub const BEARER_SCHEME: &str = "Bearer";

/// Extract a bearer token from the Authorization header
///
/// Returns `None` when the header is missing, not valid ASCII, uses a
/// different scheme, or carries an empty token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}

/// Build an Authorization header value for a bearer token
pub fn authorization_value(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("{} {}", BEARER_SCHEME, token))
        .unwrap_or_else(|_| HeaderValue::from_static(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        let headers = headers_with("Bearer abc.123");
        assert_eq!(extract_bearer_token(&headers), Some("abc.123".to_string()));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let headers = headers_with("bearer abc.123");
        assert_eq!(extract_bearer_token(&headers), Some("abc.123".to_string()));
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_empty_token() {
        let headers = headers_with("Bearer   ");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_authorization_value_roundtrip() {
        let value = authorization_value("abc.123");
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value);
        assert_eq!(extract_bearer_token(&headers), Some("abc.123".to_string()));
    }
}
