use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use crate::{
    http::RequestOption,
    project::ProjectRef,
    releases::{ListReleasesOptions, ReleasesApi},
};

use super::{OutputFormat, log_response, write_json, write_summary};

/// List the releases of a project
#[tracing::instrument(skip(api, opt, options, out))]
pub async fn list<A: ReleasesApi + ?Sized, W: Write>(
    api: &A,
    project: &ProjectRef,
    opt: &ListReleasesOptions,
    options: &[RequestOption],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let (releases, response) = api
        .list_releases(project, opt, options)
        .await
        .with_context(|| format!("Failed to list releases of project {}", project))?;
    log_response(&response);

    if format == OutputFormat::Json {
        return write_json(out, &releases);
    }

    if releases.is_empty() {
        writeln!(out, "No releases found.")?;
        return Ok(());
    }

    debug!("Found {} release(s)", releases.len());
    for release in &releases {
        write_summary(out, release)?;
    }

    let pages = &response.pagination;
    if let (Some(page), Some(total_pages)) = (pages.current_page, pages.total_pages) {
        if total_pages > 1 {
            writeln!(
                out,
                "Page {} of {} ({} releases)",
                page,
                total_pages,
                pages.total_items.unwrap_or_default()
            )?;
        }
    }

    Ok(())
}
