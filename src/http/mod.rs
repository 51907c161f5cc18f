//! Generic GitLab REST client: request building, execution and error handling.

mod client;
mod error;
mod options;
mod response;

pub use client::{ApiClient, ApiResult};
pub use error::ApiError;
pub use options::{ListOptions, RequestOption, with_header, with_sudo, with_timeout};
pub use response::{Pagination, RateLimit, Response};
