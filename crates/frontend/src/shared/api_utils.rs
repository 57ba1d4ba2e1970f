//! API utilities for talking to the sales service
//!
//! The service origin is fixed at build time through the `SALES_API_URL`
//! environment variable (falls back to `http://localhost:8080`).

use once_cell::sync::Lazy;

const DEFAULT_API_URL: &str = "http://localhost:8080";

static API_BASE: Lazy<String> =
    Lazy::new(|| normalize_base(option_env!("SALES_API_URL").unwrap_or(DEFAULT_API_URL)));

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Get the base URL for API requests
///
/// # Returns
/// - Origin like "http://localhost:8080", never with a trailing slash
pub fn api_base() -> &'static str {
    API_BASE.as_str()
}

/// Build a full API URL from a path and an already-encoded query string
///
/// # Example
/// ```ignore
/// let url = api_url("/api/sales", "page=2&pageSize=10");
/// ```
pub fn api_url(path: &str, query: &str) -> String {
    join_url(api_base(), path, query)
}

fn join_url(base: &str, path: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{}{}", base, path)
    } else {
        format!("{}{}?{}", base, path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("https://sales.example.com/"), "https://sales.example.com");
        assert_eq!(normalize_base("  "), DEFAULT_API_URL);
    }

    #[test]
    fn test_join_url_without_query() {
        assert_eq!(
            join_url("http://localhost:8080", "/api/filters/options", ""),
            "http://localhost:8080/api/filters/options"
        );
        assert_eq!(
            join_url("http://localhost:8080", "/api/sales", "page=1"),
            "http://localhost:8080/api/sales?page=1"
        );
    }
}
