// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Keeps the application version in sync across `package.json`,
//! `src-tauri/Cargo.toml` and `src-tauri/tauri.conf.json`.

pub mod args;
pub mod error;
pub mod source;
pub mod status;
pub mod version;

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cicommon::Outcome;
use semver::Version;
use tracing::info;

pub use error::VersionError;
pub use source::VersionSource;
pub use status::{VersionRecord, VersionStatus};
pub use version::{BumpLevel, is_valid_semver};

/// Requested change of the version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionUpdate {
    /// Write exactly this version
    Set(String),
    /// Increment the current consistent version
    Bump(BumpLevel),
}

impl VersionUpdate {
    /// The version to write, given the status read before the update.
    pub fn resolve(&self, status: &VersionStatus) -> Result<String, VersionError> {
        match self {
            Self::Set(version) if is_valid_semver(version) => Ok(version.clone()),
            Self::Set(version) => Err(VersionError::InvalidVersion(version.clone())),
            Self::Bump(level) => {
                let current = status
                    .consistent_version()
                    .ok_or(VersionError::Inconsistent)?;
                let parsed =
                    Version::parse(current).map_err(|source| VersionError::Unparseable {
                        version: current.to_owned(),
                        source,
                    })?;
                Ok(version::bump(&parsed, *level)?.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub repo_root: Utf8PathBuf,
    pub update: Option<VersionUpdate>,
    /// Turn an inconsistent final status into a failure
    pub check: bool,
}

/// Writes `version` to every source in order.
///
/// There is no rollback: when a later write fails, the earlier files keep the
/// new version.
pub fn update_all_versions(repo_root: &Utf8Path, version: &str) -> Result<(), VersionError> {
    for source in VersionSource::ALL {
        source.write(repo_root, version)?;
    }
    Ok(())
}

/// Prints the current status, applies the requested update and decides the
/// outcome.
///
/// Without `check` the run succeeds whatever the status is.
pub fn run<W: Write>(options: &RunOptions, out: &mut W) -> Result<Outcome, VersionError> {
    let repo_root = options.repo_root.as_path();
    let mut status = VersionStatus::load(repo_root)?;
    status.write_to(out)?;

    if let Some(update) = &options.update {
        let next = update.resolve(&status)?;
        info!(%next, "updating version");
        update_all_versions(repo_root, &next)?;
        writeln!(out, "\nUpdated version to {next}.")?;
        status = VersionStatus::load(repo_root)?;
        status.write_to(out)?;
    }

    if options.check {
        Ok(Outcome::from_success(status.is_consistent()))
    } else {
        Ok(Outcome::Success)
    }
}
