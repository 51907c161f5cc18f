use anyhow::{Context, Result};
use log::info;
use std::io::Write;

use crate::{
    http::RequestOption,
    project::ProjectRef,
    releases::{CreateReleaseOptions, ReleasesApi},
};

use super::{OutputFormat, log_response, write_json};

/// Create a release
#[tracing::instrument(skip(api, opt, options, out), fields(tag_name = %opt.tag_name))]
pub async fn create<A: ReleasesApi + ?Sized, W: Write>(
    api: &A,
    project: &ProjectRef,
    opt: &CreateReleaseOptions,
    options: &[RequestOption],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let (release, response) = api
        .create_release(project, opt, options)
        .await
        .with_context(|| format!("Failed to create release {} in {}", opt.tag_name, project))?;
    log_response(&response);
    info!("Created release {} in {}", release.tag_name, project);

    match format {
        OutputFormat::Json => write_json(out, &release),
        OutputFormat::Text => {
            writeln!(out, "Created release {}: {}", release.tag_name, release.name)?;
            Ok(())
        }
    }
}
