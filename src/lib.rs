//! Typed client for the GitLab releases REST API.
//!
//! ```no_run
//! # async fn run() -> Result<(), glrelease::http::ApiError> {
//! use glrelease::config::ClientConfig;
//! use glrelease::releases::ReleasesApi;
//!
//! let service = ClientConfig::from_env().releases()?;
//! let (release, _response) = service
//!     .get_release(&"group/project".into(), "v1.0.0", &[])
//!     .await?;
//! println!("{}", release.name);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod http;
pub mod project;
pub mod releases;
