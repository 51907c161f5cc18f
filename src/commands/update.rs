use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

use crate::{
    http::RequestOption,
    project::ProjectRef,
    releases::{ReleasesApi, UpdateReleaseOptions},
};

use super::{OutputFormat, log_response, write_json};

/// New values for a release. A `None` description keeps the current notes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReleaseChanges {
    pub name: String,
    pub description: Option<String>,
}

/// Update the name and description of a release
#[tracing::instrument(skip(api, changes, options, out))]
pub async fn update<A: ReleasesApi + ?Sized, W: Write>(
    api: &A,
    project: &ProjectRef,
    tag_name: &str,
    changes: &ReleaseChanges,
    options: &[RequestOption],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    // The server overwrites the description on every update.
    let description = match &changes.description {
        Some(description) => description.clone(),
        None => {
            debug!("Keeping current description of release {}", tag_name);
            let result = api.get_release(project, tag_name, options).await;
            if let Err(e) = &result {
                if e.is_not_found() {
                    anyhow::bail!("Release {} not found in project {}.", tag_name, project);
                }
            }
            let (current, response) = result
                .with_context(|| format!("Failed to fetch release {} of {}", tag_name, project))?;
            log_response(&response);
            current.description
        }
    };

    let opt = UpdateReleaseOptions {
        name: changes.name.clone(),
        description,
    };
    let (release, response) = api
        .update_release(project, tag_name, &opt, options)
        .await
        .with_context(|| format!("Failed to update release {} in {}", tag_name, project))?;
    log_response(&response);
    info!("Updated release {} in {}", release.tag_name, project);

    match format {
        OutputFormat::Json => write_json(out, &release),
        OutputFormat::Text => {
            writeln!(out, "Updated release {}: {}", release.tag_name, release.name)?;
            Ok(())
        }
    }
}
