//! Output parsers for the wrapped managers and the PyPI index.
//!
//! All functions here are pure: they take the text a tool printed and return
//! normalized records, or `ParseError` when the shape is not the expected one.

use crate::core::types::{Manager, PackageRecord};
use crate::error::{Result, UnifiedError};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::LazyLock;

/// Descriptions longer than this are cut
pub const DESCRIPTION_MAX_CHARS: usize = 100;

static VERSION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?\d+\.\d+(\.\d+)?([-+.][0-9A-Za-z.-]+)?$").expect("Invalid regex pattern")
});

static PEP503_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_.]+").expect("Invalid regex pattern"));

static PYPI_SNIPPET_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="/project/([^/"]+)/""#).expect("Invalid regex pattern"));

static PYPI_SNIPPET_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"class="package-snippet__version"[^>]*>\s*([^<\s]+)"#)
        .expect("Invalid regex pattern")
});

static PYPI_SNIPPET_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"class="package-snippet__description"[^>]*>([^<]*)<"#)
        .expect("Invalid regex pattern")
});

fn parse_error(manager: Manager, what: &str, e: impl Display) -> UnifiedError {
    UnifiedError::ParseError {
        manager,
        message: format!("{}: {}", what, e),
    }
}

/// Cut a description to `DESCRIPTION_MAX_CHARS` characters
pub fn truncate_description(text: &str) -> String {
    let text = text.trim();
    match text.char_indices().nth(DESCRIPTION_MAX_CHARS) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.map(|t| truncate_description(&t)).filter(|t| !t.is_empty())
}

/// PEP 503 normalized form of a Python project name
pub fn normalize_pip_name(name: &str) -> String {
    PEP503_SEPARATORS
        .replace_all(&name.trim().to_lowercase(), "-")
        .into_owned()
}

// --- npm -------------------------------------------------------------------

#[derive(Deserialize)]
struct NpmListOutput {
    #[serde(default)]
    dependencies: BTreeMap<String, NpmListEntry>,
}

#[derive(Deserialize)]
struct NpmListEntry {
    version: Option<String>,
}

/// Parse `npm ls -g --depth=0 --json`
pub fn parse_npm_list(stdout: &str) -> Result<Vec<PackageRecord>> {
    if stdout.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parsed: NpmListOutput =
        serde_json::from_str(stdout).map_err(|e| parse_error(Manager::Npm, "npm ls", e))?;

    Ok(parsed
        .dependencies
        .into_iter()
        .map(|(name, entry)| PackageRecord::installed(Manager::Npm, name, entry.version))
        .collect())
}

#[derive(Deserialize)]
struct NpmSearchEntry {
    name: String,
    version: Option<String>,
    description: Option<String>,
}

/// Parse `npm search --json`, falling back to the tabular text format
/// older npm releases print when JSON output is unavailable.
pub fn parse_npm_search(stdout: &str, limit: usize) -> Result<Vec<PackageRecord>> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Vec<NpmSearchEntry>>(trimmed) {
        Ok(entries) => Ok(entries
            .into_iter()
            .take(limit)
            .map(|entry| {
                PackageRecord::available(
                    Manager::Npm,
                    entry.name,
                    entry.version,
                    non_empty(entry.description),
                )
            })
            .collect()),
        Err(e) if trimmed.starts_with('[') || trimmed.starts_with('{') => {
            Err(parse_error(Manager::Npm, "npm search", e))
        }
        Err(_) => Ok(parse_npm_search_text(trimmed, limit)),
    }
}

/// Parse the human-readable `npm search` table.
///
/// Rows are either pipe-delimited
/// (`name | description | =author | date | version | keywords`)
/// or whitespace-aligned. The header row starts with `NAME`.
pub fn parse_npm_search_text(output: &str, limit: usize) -> Vec<PackageRecord> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with("NAME") && !line.starts_with("No matches"))
        .filter_map(parse_npm_search_row)
        .take(limit)
        .collect()
}

fn parse_npm_search_row(line: &str) -> Option<PackageRecord> {
    if line.contains('|') {
        let columns: Vec<&str> = line.split('|').map(str::trim).collect();
        let name = columns.first().filter(|n| !n.is_empty())?;
        let description = columns.get(1).map(|d| d.to_string());
        let version = columns
            .get(4)
            .filter(|v| VERSION_TOKEN.is_match(v))
            .or_else(|| columns.iter().skip(2).find(|c| VERSION_TOKEN.is_match(c)))
            .map(|v| v.to_string());
        return Some(PackageRecord::available(
            Manager::Npm,
            *name,
            version,
            non_empty(description),
        ));
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let name = tokens.first()?;
    let version_idx = tokens
        .iter()
        .skip(1)
        .position(|t| VERSION_TOKEN.is_match(t))
        .map(|idx| idx + 1);
    // Description runs until the author column (`=user`) or the version
    let description_end = tokens
        .iter()
        .skip(1)
        .position(|t| t.starts_with('='))
        .map(|idx| idx + 1)
        .or(version_idx)
        .unwrap_or(tokens.len());
    let description = tokens[1..description_end].join(" ");

    Some(PackageRecord::available(
        Manager::Npm,
        *name,
        version_idx.map(|idx| tokens[idx].to_string()),
        non_empty(Some(description)),
    ))
}

#[derive(Deserialize)]
struct NpmOutdatedEntry {
    current: Option<String>,
    latest: Option<String>,
}

/// Parse `npm outdated -g --json`; empty output means nothing is outdated
pub fn parse_npm_outdated(stdout: &str) -> Result<Vec<PackageRecord>> {
    if stdout.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parsed: BTreeMap<String, NpmOutdatedEntry> =
        serde_json::from_str(stdout).map_err(|e| parse_error(Manager::Npm, "npm outdated", e))?;

    Ok(parsed
        .into_iter()
        .map(|(name, entry)| {
            PackageRecord::outdated(Manager::Npm, name, entry.current, entry.latest)
        })
        .collect())
}

// --- pip -------------------------------------------------------------------

#[derive(Deserialize)]
struct PipListEntry {
    name: String,
    version: String,
}

/// Parse `pip3 list --format=json`
pub fn parse_pip_list(stdout: &str) -> Result<Vec<PackageRecord>> {
    let entries: Vec<PipListEntry> =
        serde_json::from_str(stdout).map_err(|e| parse_error(Manager::Pip, "pip list", e))?;

    Ok(entries
        .into_iter()
        .map(|entry| PackageRecord::installed(Manager::Pip, entry.name, Some(entry.version)))
        .collect())
}

#[derive(Deserialize)]
struct PipOutdatedEntry {
    name: String,
    version: String,
    latest_version: String,
}

/// Parse `pip3 list --outdated --format=json`
pub fn parse_pip_outdated(stdout: &str) -> Result<Vec<PackageRecord>> {
    if stdout.trim().is_empty() {
        return Ok(Vec::new());
    }

    let entries: Vec<PipOutdatedEntry> = serde_json::from_str(stdout)
        .map_err(|e| parse_error(Manager::Pip, "pip list --outdated", e))?;

    Ok(entries
        .into_iter()
        .map(|entry| {
            PackageRecord::outdated(
                Manager::Pip,
                entry.name,
                Some(entry.version),
                Some(entry.latest_version),
            )
        })
        .collect())
}

/// Parse `pip3 show` into lower-cased keys
pub fn parse_pip_show(stdout: &str) -> BTreeMap<String, String> {
    stdout
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_lowercase(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

// --- PyPI ------------------------------------------------------------------

#[derive(Deserialize)]
struct PypiProject {
    info: PypiInfo,
}

#[derive(Deserialize)]
struct PypiInfo {
    name: String,
    version: String,
    summary: Option<String>,
}

/// Parse the body of `GET /pypi/<name>/json`
pub fn parse_pypi_project(body: &str) -> Result<PackageRecord> {
    let project: PypiProject =
        serde_json::from_str(body).map_err(|e| parse_error(Manager::Pip, "PyPI project", e))?;

    Ok(PackageRecord::available(
        Manager::Pip,
        project.info.name,
        Some(project.info.version),
        non_empty(project.info.summary),
    ))
}

/// Extract results from the PyPI HTML search page
pub fn parse_pypi_search_html(html: &str, limit: usize) -> Vec<PackageRecord> {
    html.split(r#"class="package-snippet""#)
        .skip(1)
        .filter_map(|snippet| {
            let name = PYPI_SNIPPET_NAME.captures(snippet)?.get(1)?.as_str();
            let version = PYPI_SNIPPET_VERSION
                .captures(snippet)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string());
            let description = PYPI_SNIPPET_DESCRIPTION
                .captures(snippet)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string());
            Some(PackageRecord::available(
                Manager::Pip,
                name,
                version,
                non_empty(description),
            ))
        })
        .take(limit)
        .collect()
}

// --- failures --------------------------------------------------------------

/// Whether failed install output says the package does not exist
pub fn indicates_missing_package(manager: Manager, output: &str) -> bool {
    match manager {
        Manager::Npm => {
            output.contains("E404") || output.contains("404 Not Found") || output.contains("is not in this registry")
        }
        Manager::Pip => {
            output.contains("No matching distribution found")
                || output.contains("Could not find a version that satisfies")
        }
    }
}
