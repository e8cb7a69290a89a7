//! Self-Update
//!
//! Queries the GitHub release endpoint for the latest published tag and
//! compares it against the version embedded at build time. The check runs at
//! every startup but only prints a notice; the explicit `update` command
//! re-installs through cargo.

use std::{process::Command, time::Duration};

use console::style;
use semver::Version;
use serde::Deserialize;

use crate::errors::{Result, UpdateError};

pub const APP_NAME: &str = "cmt";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const RELEASE_URL: &str = "https://api.github.com/repos/segersniels/cmt/releases/latest";

/// Successful release lookup.
#[derive(Deserialize)]
struct Release {
    tag_name: String,
}

/// Error body returned on non-200 responses, e.g. rate limiting.
#[derive(Deserialize)]
struct ApiFailure {
    message: String,
}

/// Fetches the latest published version from the release endpoint.
///
/// The request uses a 5 second timeout and an explicit `User-Agent` header
/// (the GitHub API rejects requests without one).
///
/// # Errors
/// * If the request fails or times out
/// * If the endpoint reports an error (surfaced with its message)
/// * If the tag is not a valid semantic version
pub fn fetch_latest_version() -> std::result::Result<Version, UpdateError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(5))
        .user_agent(APP_NAME)
        .build()?;

    let response = client.get(RELEASE_URL).send()?;
    let status = response.status();
    let body = response.text()?;

    if !status.is_success() {
        let failure: ApiFailure = serde_json::from_str(&body)?;

        return Err(UpdateError::Api {
            message: failure.message,
        });
    }

    let release: Release = serde_json::from_str(&body)?;

    parse_version_tag(&release.tag_name)
}

/// Parses a release tag as a semantic version, tolerating a leading `v`.
pub(crate) fn parse_version_tag(tag: &str) -> std::result::Result<Version, UpdateError> {
    Ok(Version::parse(tag.trim_start_matches('v'))?)
}

/// Prints an upgrade notice when a newer version has been published.
///
/// Called once at every startup; the caller logs failures at debug level so
/// a flaky network never interrupts the requested command.
///
/// # Errors
/// * If the release lookup fails
pub fn check_for_new_version() -> std::result::Result<(), UpdateError> {
    let current = Version::parse(APP_VERSION)?;
    let latest = fetch_latest_version()?;

    if latest > current {
        println!(
            "A new version of {APP_NAME} is available ({latest}). Run `{APP_NAME} update` to update.\n"
        );
    }

    Ok(())
}

/// Re-installs the latest published version through cargo.
///
/// # Errors
/// * If the release lookup fails
/// * If the install command exits with a non-zero status (its stderr is
///   included in the error)
pub fn update() -> Result<()> {
    let latest = fetch_latest_version()?;

    let output = Command::new("cargo")
        .args(["install", &format!("{APP_NAME}@{latest}")])
        .output()
        .map_err(UpdateError::from)?;

    if !output.status.success() {
        return Err(UpdateError::InstallFailed {
            output: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    println!("{} Updated {APP_NAME} to {latest}", style("✓").green());

    Ok(())
}
