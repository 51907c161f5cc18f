//! Pagination parameters and per-call request options.

use std::time::Duration;

use reqwest::RequestBuilder;
use reqwest::header::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Pagination parameters shared by list endpoints.
///
/// Unset values are left out of the query string so the server defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// A request mutator applied after the base request is built.
///
/// Options run in the order given and the first failure aborts the call
/// before anything is sent.
pub type RequestOption =
    Box<dyn Fn(RequestBuilder) -> Result<RequestBuilder, ApiError> + Send + Sync>;

/// Performs the call as another user (administrators only).
pub fn with_sudo(user: impl Into<String>) -> RequestOption {
    with_header("Sudo", user)
}

/// Adds an extra header to the request.
pub fn with_header(name: impl Into<String>, value: impl Into<String>) -> RequestOption {
    let name = name.into();
    let value = value.into();
    Box::new(move |builder| {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ApiError::InvalidArgument(format!("invalid header name {:?}: {}", name, e))
        })?;
        let header_value = HeaderValue::from_str(&value).map_err(|e| {
            ApiError::InvalidArgument(format!("invalid value for header {}: {}", name, e))
        })?;
        Ok(builder.header(header_name, header_value))
    })
}

/// Overrides the client-wide timeout for this call.
pub fn with_timeout(timeout: Duration) -> RequestOption {
    Box::new(move |builder| Ok(builder.timeout(timeout)))
}

pub(crate) fn apply_options(
    mut builder: RequestBuilder,
    options: &[RequestOption],
) -> Result<RequestBuilder, ApiError> {
    for option in options {
        builder = option(builder)?;
    }
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Client;

    #[test]
    fn test_list_options_query_omits_unset() {
        let opts = ListOptions {
            page: Some(2),
            per_page: None,
        };
        let request = Client::new()
            .get("https://gitlab.example.com/api/v4/projects/1/releases")
            .query(&opts)
            .build()
            .unwrap();
        assert_eq!(request.url().query(), Some("page=2"));

        let request = Client::new()
            .get("https://gitlab.example.com/api/v4/projects/1/releases")
            .query(&ListOptions::default())
            .build()
            .unwrap();
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn test_with_sudo_sets_header() {
        let builder = Client::new().get("https://gitlab.example.com/api/v4/user");
        let request = apply_options(builder, &[with_sudo("alice")])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.headers().get("Sudo").unwrap(), "alice");
    }

    #[test]
    fn test_with_header_invalid_value_fails() {
        let builder = Client::new().get("https://gitlab.example.com/api/v4/user");
        let result = apply_options(builder, &[with_header("X-Trace", "bad\nvalue")]);
        assert!(matches!(result, Err(ApiError::InvalidArgument(_))));
    }

    #[test]
    fn test_options_applied_in_order() {
        let builder = Client::new().get("https://gitlab.example.com/api/v4/user");
        let request = apply_options(
            builder,
            &[with_header("X-Order", "first"), with_header("X-Order", "second")],
        )
        .unwrap()
        .build()
        .unwrap();
        let values: Vec<_> = request.headers().get_all("X-Order").iter().collect();
        assert_eq!(values, vec!["first", "second"]);
    }

    #[test]
    fn test_failing_option_stops_chain() {
        let calls = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = calls.clone();
        let counting: RequestOption = Box::new(move |b| {
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(b)
        });
        let failing: RequestOption =
            Box::new(|_| Err(ApiError::RequestConstruction("boom".to_string())));

        let builder = Client::new().get("https://gitlab.example.com/api/v4/user");
        let result = apply_options(builder, &[failing, counting]);

        assert!(result.is_err());
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[test]
    fn test_with_timeout_sets_timeout() {
        let builder = Client::new().get("https://gitlab.example.com/api/v4/user");
        let request = apply_options(builder, &[with_timeout(Duration::from_secs(5))])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.timeout(), Some(&Duration::from_secs(5)));
    }
}
