//! Command handlers behind the `glrelease` binary.
//!
//! Handlers talk to a [`ReleasesApi`](crate::releases::ReleasesApi) and write
//! to any [`Write`], so they can be driven by a mock in tests.

use anyhow::{Context, Result};
use std::io::Write;

use crate::http::Response;
use crate::releases::{Release, ReleaseAssetLink};

mod create;
mod delete;
mod list;
mod show;
mod update;

pub use create::create;
pub use delete::delete;
pub use list::list;
pub use show::show;
pub use update::{ReleaseChanges, update};

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parses a `NAME=URL` asset link argument.
pub fn parse_link(s: &str) -> Result<ReleaseAssetLink, String> {
    match s.split_once('=') {
        Some((name, url)) if !name.trim().is_empty() && !url.trim().is_empty() => {
            Ok(ReleaseAssetLink {
                name: name.trim().to_string(),
                url: url.trim().to_string(),
            })
        }
        _ => Err(format!("invalid link {:?}, expected NAME=URL", s)),
    }
}

pub(crate) fn write_json<W: Write, T: serde::Serialize + ?Sized>(
    out: &mut W,
    value: &T,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to encode JSON output")?;
    writeln!(out)?;
    Ok(())
}

/// One line per release: tag, name and creation date.
pub(crate) fn write_summary<W: Write>(out: &mut W, release: &Release) -> Result<()> {
    let created = release
        .created_at
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    let name = if release.name.is_empty() {
        "(unnamed)"
    } else {
        release.name.as_str()
    };
    writeln!(out, "{}\t{}\t{}", release.tag_name, name, created)?;
    Ok(())
}

pub(crate) fn write_details<W: Write>(out: &mut W, release: &Release) -> Result<()> {
    writeln!(out, "Tag: {}", release.tag_name)?;
    writeln!(out, "Name: {}", release.name)?;
    if let Some(created_at) = release.created_at {
        writeln!(out, "Created: {}", created_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    }
    if let Some(author) = &release.author {
        writeln!(out, "Author: {} (@{})", author.name, author.username)?;
    }
    if let Some(commit) = &release.commit {
        writeln!(out, "Commit: {} {}", commit.short_id, commit.title)?;
    }

    if let Some(assets) = &release.assets {
        if !assets.sources.is_empty() {
            writeln!(out, "\nSources:")?;
            for source in &assets.sources {
                writeln!(out, "  {:<8} {}", source.format, source.url)?;
            }
        }
        if !assets.links.is_empty() {
            writeln!(out, "\nLinks:")?;
            for link in &assets.links {
                writeln!(out, "  {} {}", link.name, link.url)?;
            }
        }
    }

    if !release.description.is_empty() {
        writeln!(out, "\nDescription:")?;
        for line in release.description.lines() {
            writeln!(out, "  {}", line)?;
        }
    }
    Ok(())
}

pub(crate) fn log_response(response: &Response) {
    log::debug!(
        "{} {} -> {}, page {:?}/{:?}, rate limit {:?}/{:?}",
        response.method,
        response.url,
        response.status,
        response.pagination.current_page,
        response.pagination.total_pages,
        response.rate_limit.remaining,
        response.rate_limit.limit
    );
}
