//! Client for the project releases API.
//!
//! Releases are addressed by project and tag name:
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | list   | `GET`    | `projects/{project}/releases` |
//! | get    | `GET`    | `projects/{project}/releases/{tag}` |
//! | create | `POST`   | `projects/{project}/releases` |
//! | update | `PUT`    | `projects/{project}/releases/{tag}` |
//! | delete | `DELETE` | `projects/{project}/releases/{tag}` |

#[cfg(test)]
pub(crate) mod fixtures;
mod service;
mod types;

#[cfg(test)]
pub use service::MockReleasesApi;
pub use service::{ReleasesApi, ReleasesService};
pub use types::{
    Commit, CreateReleaseOptions, ListReleasesOptions, Release, ReleaseAssetLink, ReleaseAssets,
    ReleaseAssetsInfo, ReleaseAuthor, ReleaseLink, ReleaseSource, UpdateReleaseOptions,
};
