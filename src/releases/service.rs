use async_trait::async_trait;
use log::debug;
use reqwest::Method;

use crate::http::{ApiClient, ApiError, ApiResult, RequestOption};
use crate::project::ProjectRef;

use super::types::{CreateReleaseOptions, ListReleasesOptions, Release, UpdateReleaseOptions};

/// Operations on the releases of a project.
///
/// Every call performs exactly one HTTP round trip and returns the decoded
/// record together with the response metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleasesApi: Send + Sync {
    /// Lists releases of a project, in the order the server returns them.
    async fn list_releases(
        &self,
        project: &ProjectRef,
        opt: &ListReleasesOptions,
        options: &[RequestOption],
    ) -> ApiResult<Vec<Release>>;

    /// Gets the release for a tag.
    async fn get_release(
        &self,
        project: &ProjectRef,
        tag_name: &str,
        options: &[RequestOption],
    ) -> ApiResult<Release>;

    /// Creates a release and returns the server's record of it.
    async fn create_release(
        &self,
        project: &ProjectRef,
        opt: &CreateReleaseOptions,
        options: &[RequestOption],
    ) -> ApiResult<Release>;

    /// Updates the name and description of the release for a tag.
    async fn update_release(
        &self,
        project: &ProjectRef,
        tag_name: &str,
        opt: &UpdateReleaseOptions,
        options: &[RequestOption],
    ) -> ApiResult<Release>;

    /// Deletes the release for a tag and returns the deleted record.
    async fn delete_release(
        &self,
        project: &ProjectRef,
        tag_name: &str,
        options: &[RequestOption],
    ) -> ApiResult<Release>;
}

/// [`ReleasesApi`] backed by the GitLab REST API.
#[derive(Clone, Debug)]
pub struct ReleasesService {
    client: ApiClient,
}

impl ReleasesService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

// The tag is appended as given; only the project segment is encoded.
fn releases_path(project: &str) -> String {
    format!("projects/{}/releases", project)
}

// URL parsing collapses `.` and `..` segments, which would silently target
// another endpoint, so such tags are refused up front.
fn release_path(project: &str, tag_name: &str) -> Result<String, ApiError> {
    if tag_name.is_empty() || tag_name.split('/').any(|s| s == "." || s == "..") {
        return Err(ApiError::InvalidArgument(format!("invalid tag name {:?}", tag_name)));
    }
    Ok(format!("projects/{}/releases/{}", project, tag_name))
}

#[async_trait]
impl ReleasesApi for ReleasesService {
    #[tracing::instrument(skip(self, opt, options))]
    async fn list_releases(
        &self,
        project: &ProjectRef,
        opt: &ListReleasesOptions,
        options: &[RequestOption],
    ) -> ApiResult<Vec<Release>> {
        let path = releases_path(&project.to_path_segment()?);
        debug!("Listing releases from {}...", path);

        let request = self
            .client
            .new_request(Method::GET, &path, Some(opt), options)?;
        self.client.execute(request).await
    }

    #[tracing::instrument(skip(self, options))]
    async fn get_release(
        &self,
        project: &ProjectRef,
        tag_name: &str,
        options: &[RequestOption],
    ) -> ApiResult<Release> {
        let path = release_path(&project.to_path_segment()?, tag_name)?;
        debug!("Fetching release from {}...", path);

        let request = self
            .client
            .new_request(Method::GET, &path, None::<&()>, options)?;
        self.client.execute(request).await
    }

    #[tracing::instrument(skip(self, opt, options), fields(tag_name = %opt.tag_name))]
    async fn create_release(
        &self,
        project: &ProjectRef,
        opt: &CreateReleaseOptions,
        options: &[RequestOption],
    ) -> ApiResult<Release> {
        let path = releases_path(&project.to_path_segment()?);
        debug!("Creating release {} at {}...", opt.tag_name, path);

        let request = self
            .client
            .new_request(Method::POST, &path, Some(opt), options)?;
        self.client.execute(request).await
    }

    #[tracing::instrument(skip(self, opt, options))]
    async fn update_release(
        &self,
        project: &ProjectRef,
        tag_name: &str,
        opt: &UpdateReleaseOptions,
        options: &[RequestOption],
    ) -> ApiResult<Release> {
        let path = release_path(&project.to_path_segment()?, tag_name)?;
        debug!("Updating release at {}...", path);

        let request = self
            .client
            .new_request(Method::PUT, &path, Some(opt), options)?;
        self.client.execute(request).await
    }

    #[tracing::instrument(skip(self, options))]
    async fn delete_release(
        &self,
        project: &ProjectRef,
        tag_name: &str,
        options: &[RequestOption],
    ) -> ApiResult<Release> {
        let path = release_path(&project.to_path_segment()?, tag_name)?;
        debug!("Deleting release at {}...", path);

        let request = self
            .client
            .new_request(Method::DELETE, &path, None::<&()>, options)?;
        self.client.execute(request).await
    }
}
