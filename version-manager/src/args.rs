// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use camino::Utf8PathBuf;
use cicommon::utils::repo_root;

use crate::{RunOptions, VersionUpdate, version::BumpLevel};

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about = "Manage the EchoNote frontend/backend version (semver)",
    long_about = "Reports the version found in package.json, src-tauri/Cargo.toml and \
                  src-tauri/tauri.conf.json, validates it as semver and checks that all three agree."
)]
pub struct Args {
    /// Write a new version to package.json, Cargo.toml and tauri.conf.json.
    #[arg(long = "set", value_name = "VERSION", conflicts_with = "bump")]
    pub new_version: Option<String>,
    /// Increment the current version and write it to all three files.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub bump: Option<BumpLevel>,
    /// Only validate; exit with status 1 when the versions are invalid or disagree.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub check: bool,
    /// Repository root holding package.json and src-tauri/.
    #[arg(long = "repo-root", value_name = "path")]
    pub repo_root: Option<Utf8PathBuf>,
}

impl Args {
    pub fn into_options(self) -> RunOptions {
        let update = match (self.new_version, self.bump) {
            (Some(version), _) => Some(VersionUpdate::Set(version)),
            (None, Some(level)) => Some(VersionUpdate::Bump(level)),
            (None, None) => None,
        };
        RunOptions {
            repo_root: self
                .repo_root
                .unwrap_or_else(|| repo_root().to_path_buf()),
            update,
            check: self.check,
        }
    }
}
