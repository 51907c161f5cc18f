//! Client configuration: base URL, authentication and HTTP settings.

use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue},
};
use std::time::Duration;

use crate::http::{ApiClient, ApiError};
use crate::releases::ReleasesService;

pub const DEFAULT_API_URL: &str = "https://gitlab.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const API_URL_ENV: &str = "GITLAB_API_URL";
pub const TOKEN_ENV: &str = "GITLAB_TOKEN";

const PRIVATE_TOKEN_HEADER: &str = "private-token";

/// How the access token is sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenKind {
    /// Personal, project or group access token (`PRIVATE-TOKEN` header).
    #[default]
    Private,
    /// OAuth2 token (`Authorization: Bearer`).
    OAuth,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub token_kind: TokenKind,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            token_kind: TokenKind::default(),
            user_agent: format!("glrelease/{}", env!("GLRELEASE_VERSION")),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Reads `GITLAB_API_URL` and `GITLAB_TOKEN` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();
        if let Some(api_url) = non_empty(API_URL_ENV) {
            config.api_url = api_url;
        }
        config.token = non_empty(TOKEN_ENV);
        config
    }

    fn default_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        let Some(token) = self.token.as_deref() else {
            return Ok(headers);
        };

        let (name, value) = match self.token_kind {
            TokenKind::Private => (
                HeaderName::from_static(PRIVATE_TOKEN_HEADER),
                token.to_string(),
            ),
            TokenKind::OAuth => (AUTHORIZATION, format!("Bearer {}", token)),
        };
        let mut value = HeaderValue::from_str(&value)
            .map_err(|e| ApiError::InvalidArgument(format!("invalid access token: {}", e)))?;
        value.set_sensitive(true);
        headers.insert(name, value);

        debug!(
            "Using {:?} token for authentication: {}",
            self.token_kind,
            mask_token(token)
        );
        Ok(headers)
    }

    /// Builds the API client described by this configuration.
    pub fn build_client(&self) -> Result<ApiClient, ApiError> {
        let client = Client::builder()
            .user_agent(self.user_agent.as_str())
            .default_headers(self.default_headers()?)
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                ApiError::RequestConstruction(format!("failed to create HTTP client: {}", e))
            })?;

        ApiClient::new(client, &self.api_url)
    }

    pub fn releases(&self) -> Result<ReleasesService, ApiError> {
        Ok(ReleasesService::new(self.build_client()?))
    }
}

fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}
