//! Generic REST client: request building and response execution.

use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, parse_error_message};
use super::options::{RequestOption, apply_options};
use super::response::Response;

const API_VERSION_PATH: &str = "api/v4/";

/// Result of a single API call: the decoded value and its response metadata.
pub type ApiResult<T> = std::result::Result<(T, Response), ApiError>;

/// Thin wrapper over a [`reqwest::Client`] bound to a GitLab API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for `base_url`.
    ///
    /// The URL is normalized to end with `/api/v4/`, so both
    /// `https://gitlab.com` and `https://gitlab.com/api/v4` are accepted.
    pub fn new(client: Client, base_url: &str) -> Result<Self, ApiError> {
        let mut url = Url::parse(base_url).map_err(|e| {
            ApiError::RequestConstruction(format!("invalid base URL {:?}: {}", base_url, e))
        })?;

        let mut path = url.path().to_string();
        if !path.ends_with('/') {
            path.push('/');
        }
        let has_version = path
            .strip_suffix(API_VERSION_PATH)
            .is_some_and(|rest| rest.ends_with('/'));
        if !has_version {
            path.push_str(API_VERSION_PATH);
        }
        url.set_path(&path);

        Ok(Self {
            client,
            base_url: url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Builds a request for `path`, relative to the base URL.
    ///
    /// For `POST` and `PUT`, `opt` is sent as the JSON body; for every other
    /// method it is encoded as the query string. Per-call `options` are
    /// applied last, in order.
    pub fn new_request<O>(
        &self,
        method: Method,
        path: &str,
        opt: Option<&O>,
        options: &[RequestOption],
    ) -> Result<RequestBuilder, ApiError>
    where
        O: Serialize + ?Sized,
    {
        let raw = format!("{}{}", self.base_url, path);
        let url = Url::parse(&raw).map_err(|e| {
            ApiError::RequestConstruction(format!("invalid request URL {:?}: {}", raw, e))
        })?;

        let sends_body = method == Method::POST || method == Method::PUT;
        let mut builder = self
            .client
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(opt) = opt {
            if sends_body {
                let body = serde_json::to_vec(opt).map_err(|e| {
                    ApiError::RequestConstruction(format!("failed to encode request body: {}", e))
                })?;
                builder = builder
                    .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                    .body(body);
            } else {
                builder = builder.query(opt);
            }
        }

        apply_options(builder, options)
    }

    /// Sends the request and decodes the JSON response into `T`.
    ///
    /// Non-success statuses become [`ApiError::Remote`]; the response metadata
    /// is kept on every error raised after a response arrived.
    #[tracing::instrument(skip(self, request))]
    pub async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let request = request
            .build()
            .map_err(|e| ApiError::RequestConstruction(e.to_string()))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!("{} {}...", method, url);

        let http_response =
            self.client
                .execute(request)
                .await
                .map_err(|source| ApiError::Transport {
                    url: url.to_string(),
                    source,
                    response: None,
                })?;

        let response = Response::from_parts(
            method,
            url.clone(),
            http_response.status(),
            http_response.headers().clone(),
        );
        debug!(
            "{} {} -> {} (rate limit remaining: {:?})",
            response.method, response.url, response.status, response.rate_limit.remaining
        );

        let body = match http_response.bytes().await {
            Ok(body) => body,
            Err(source) => {
                return Err(ApiError::Transport {
                    url: url.to_string(),
                    source,
                    response: Some(Box::new(response)),
                });
            }
        };

        if !response.status.is_success() {
            let message = parse_error_message(&body);
            debug!("Request failed with {}: {}", response.status, message);
            return Err(ApiError::Remote {
                response: Box::new(response),
                message,
            });
        }

        match serde_json::from_slice::<T>(&body) {
            Ok(value) => Ok((value, response)),
            Err(source) => Err(ApiError::Decode {
                response: Box::new(response),
                source,
            }),
        }
    }
}
