use anyhow::{Context, Result};
use log::info;
use std::io::Write;

use crate::{http::RequestOption, project::ProjectRef, releases::ReleasesApi};

use super::{OutputFormat, log_response, write_json};

/// Delete a release. The tag itself is left in place.
#[tracing::instrument(skip(api, options, out))]
pub async fn delete<A: ReleasesApi + ?Sized, W: Write>(
    api: &A,
    project: &ProjectRef,
    tag_name: &str,
    options: &[RequestOption],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let (release, response) = api
        .delete_release(project, tag_name, options)
        .await
        .with_context(|| format!("Failed to delete release {} in {}", tag_name, project))?;
    log_response(&response);
    info!("Deleted release {} in {}", release.tag_name, project);

    match format {
        OutputFormat::Json => write_json(out, &release),
        OutputFormat::Text => {
            writeln!(out, "Deleted release {}: {}", release.tag_name, release.name)?;
            Ok(())
        }
    }
}
