use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use crate::{http::RequestOption, project::ProjectRef, releases::ReleasesApi};

use super::{OutputFormat, log_response, write_details, write_json};

/// Show detailed information about a release
#[tracing::instrument(skip(api, options, out))]
pub async fn show<A: ReleasesApi + ?Sized, W: Write>(
    api: &A,
    project: &ProjectRef,
    tag_name: &str,
    options: &[RequestOption],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    debug!("Showing release {} of {}", tag_name, project);

    let result = api.get_release(project, tag_name, options).await;
    if let Err(e) = &result {
        if e.is_not_found() {
            anyhow::bail!("Release {} not found in project {}.", tag_name, project);
        }
    }
    let (release, response) =
        result.with_context(|| format!("Failed to fetch release {} of {}", tag_name, project))?;
    log_response(&response);

    match format {
        OutputFormat::Json => write_json(out, &release),
        OutputFormat::Text => write_details(out, &release),
    }
}
