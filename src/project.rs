//! Project references: numeric ids or `namespace/project` paths.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt;
use std::str::FromStr;

use crate::http::ApiError;

/// Characters left untouched when a project path becomes a URL segment.
/// Everything else, `/` included, is percent-encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Identifies a project either by id or by its full path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectRef {
    Id(i64),
    Path(String),
}

impl ProjectRef {
    /// Converts the reference into an encoded path segment.
    ///
    /// Non-positive ids and blank paths are rejected with
    /// [`ApiError::InvalidArgument`].
    pub fn to_path_segment(&self) -> Result<String, ApiError> {
        match self {
            ProjectRef::Id(id) if *id > 0 => Ok(id.to_string()),
            ProjectRef::Id(id) => Err(ApiError::InvalidArgument(format!(
                "invalid project id {}, the id must be a positive integer",
                id
            ))),
            ProjectRef::Path(path) => {
                let path = path.trim().trim_matches('/');
                if path.is_empty() {
                    return Err(ApiError::InvalidArgument(
                        "invalid project path, the path must not be empty".to_string(),
                    ));
                }
                Ok(utf8_percent_encode(path, PATH_SEGMENT).to_string())
            }
        }
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectRef::Id(id) => write!(f, "{}", id),
            ProjectRef::Path(path) => write!(f, "{}", path),
        }
    }
}

impl FromStr for ProjectRef {
    type Err = ApiError;

    /// All-digit strings become ids, anything else a path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ApiError::InvalidArgument(
                "project reference must not be empty".to_string(),
            ));
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = s.parse::<i64>() {
                return Ok(ProjectRef::Id(id));
            }
        }
        Ok(ProjectRef::Path(s.to_string()))
    }
}

impl From<i64> for ProjectRef {
    fn from(id: i64) -> Self {
        ProjectRef::Id(id)
    }
}

impl From<i32> for ProjectRef {
    fn from(id: i32) -> Self {
        ProjectRef::Id(i64::from(id))
    }
}

impl From<u32> for ProjectRef {
    fn from(id: u32) -> Self {
        ProjectRef::Id(i64::from(id))
    }
}

impl From<&str> for ProjectRef {
    fn from(path: &str) -> Self {
        ProjectRef::Path(path.to_string())
    }
}

impl From<String> for ProjectRef {
    fn from(path: String) -> Self {
        ProjectRef::Path(path)
    }
}

impl From<&String> for ProjectRef {
    fn from(path: &String) -> Self {
        ProjectRef::Path(path.clone())
    }
}
