//! Response metadata returned alongside every decoded result.

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};

/// Pagination values reported by GitLab's `X-*` headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub total_items: Option<u64>,
    pub total_pages: Option<u64>,
    pub items_per_page: Option<u64>,
    pub current_page: Option<u64>,
    pub next_page: Option<u64>,
    pub previous_page: Option<u64>,
}

impl Pagination {
    fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            total_items: header_number(headers, "x-total"),
            total_pages: header_number(headers, "x-total-pages"),
            items_per_page: header_number(headers, "x-per-page"),
            current_page: header_number(headers, "x-page"),
            next_page: header_number(headers, "x-next-page"),
            previous_page: header_number(headers, "x-prev-page"),
        }
    }
}

/// Rate-limit values reported by GitLab's `RateLimit-*` headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: Option<u64>,
    pub remaining: Option<u64>,
    pub reset_at: Option<DateTime<Utc>>,
}

impl RateLimit {
    fn from_headers(headers: &HeaderMap) -> Self {
        let reset_at = header_number(headers, "ratelimit-reset")
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0));

        Self {
            limit: header_number(headers, "ratelimit-limit"),
            remaining: header_number(headers, "ratelimit-remaining"),
            reset_at,
        }
    }
}

/// Metadata of a received HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    pub method: Method,
    pub url: Url,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub pagination: Pagination,
    pub rate_limit: RateLimit,
}

impl Response {
    pub fn from_parts(method: Method, url: Url, status: StatusCode, headers: HeaderMap) -> Self {
        let pagination = Pagination::from_headers(&headers);
        let rate_limit = RateLimit::from_headers(&headers);
        Self {
            method,
            url,
            status,
            headers,
            pagination,
            rate_limit,
        }
    }
}

// Empty values are sent by GitLab for X-Next-Page on the last page.
fn header_number(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://gitlab.example.com/api/v4/projects/1/releases").unwrap()
    }

    #[test]
    fn test_pagination_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-total", "42".parse().unwrap());
        headers.insert("x-total-pages", "3".parse().unwrap());
        headers.insert("x-per-page", "20".parse().unwrap());
        headers.insert("x-page", "3".parse().unwrap());
        headers.insert("x-next-page", "".parse().unwrap());
        headers.insert("x-prev-page", "2".parse().unwrap());

        let response = Response::from_parts(Method::GET, url(), StatusCode::OK, headers);

        assert_eq!(
            response.pagination,
            Pagination {
                total_items: Some(42),
                total_pages: Some(3),
                items_per_page: Some(20),
                current_page: Some(3),
                next_page: None,
                previous_page: Some(2),
            }
        );
    }

    #[test]
    fn test_rate_limit_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("ratelimit-limit", "600".parse().unwrap());
        headers.insert("ratelimit-remaining", "599".parse().unwrap());
        headers.insert("ratelimit-reset", "1546480579".parse().unwrap());

        let response = Response::from_parts(Method::GET, url(), StatusCode::OK, headers);

        assert_eq!(response.rate_limit.limit, Some(600));
        assert_eq!(response.rate_limit.remaining, Some(599));
        assert_eq!(
            response.rate_limit.reset_at,
            DateTime::from_timestamp(1_546_480_579, 0)
        );
    }

    #[test]
    fn test_missing_headers() {
        let response = Response::from_parts(Method::GET, url(), StatusCode::OK, HeaderMap::new());
        assert_eq!(response.pagination, Pagination::default());
        assert_eq!(response.rate_limit, RateLimit::default());
    }

    #[test]
    fn test_malformed_header_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert("x-total", "many".parse().unwrap());
        let response = Response::from_parts(Method::GET, url(), StatusCode::OK, headers);
        assert_eq!(response.pagination.total_items, None);
    }
}
