use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::http::ListOptions;

/// Options for [`list_releases`](super::ReleasesApi::list_releases).
pub type ListReleasesOptions = ListOptions;

/// Represents a project release.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Release {
    pub tag_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub description_html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<ReleaseAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<Commit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<ReleaseAssetsInfo>,
}

/// The user who created a release.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ReleaseAuthor {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatar_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub web_url: String,
}

/// The commit a release tag points to.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Commit {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub short_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parent_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authored_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub committer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub committer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committed_date: Option<DateTime<Utc>>,
}

/// Assets reported by the server for a release.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ReleaseAssetsInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<ReleaseSource>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<ReleaseLink>,
}

/// A generated source archive of a release.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ReleaseSource {
    pub format: String,
    pub url: String,
}

/// A link attached to a release, as reported by the server.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ReleaseLink {
    pub id: i64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub external: bool,
}

/// Assets to attach when creating a release.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ReleaseAssets {
    pub links: Vec<ReleaseAssetLink>,
}

/// A link to attach when creating a release.
///
/// The URL goes out under the `ref` key, unlike [`ReleaseLink`] which the
/// server reports with `url`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ReleaseAssetLink {
    pub name: String,
    #[serde(rename = "ref")]
    pub url: String,
}

/// Options for [`create_release`](super::ReleasesApi::create_release).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct CreateReleaseOptions {
    pub name: String,
    pub tag_name: String,
    pub description: String,
    /// Branch or commit to create the tag from, when the tag does not exist yet.
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<ReleaseAssets>,
}

/// Options for [`update_release`](super::ReleasesApi::update_release).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct UpdateReleaseOptions {
    pub name: String,
    pub description: String,
}

impl From<&Release> for CreateReleaseOptions {
    fn from(release: &Release) -> Self {
        let assets = release
            .assets
            .as_ref()
            .filter(|a| !a.links.is_empty())
            .map(|a| ReleaseAssets {
                links: a
                    .links
                    .iter()
                    .map(|link| ReleaseAssetLink {
                        name: link.name.clone(),
                        url: link.url.clone(),
                    })
                    .collect(),
            });

        CreateReleaseOptions {
            name: release.name.clone(),
            tag_name: release.tag_name.clone(),
            description: release.description.clone(),
            git_ref: None,
            assets,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
