// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::io;

use camino::Utf8PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    #[error("failed to read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}")]
    Json {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode {path}")]
    Encode {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse {path}")]
    Toml {
        path: Utf8PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{path} does not contain a JSON object")]
    NotAnObject { path: Utf8PathBuf },
    #[error("could not locate the version field in {path}")]
    FieldNotFound { path: Utf8PathBuf },
    #[error("invalid version '{0}': expected a valid semver such as 1.2.3 or 1.2.3-beta.1")]
    InvalidVersion(String),
    #[error("cannot bump: the current versions are inconsistent or invalid")]
    Inconsistent,
    #[error("cannot bump version '{version}'")]
    Unparseable {
        version: String,
        #[source]
        source: semver::Error,
    },
    #[error("cannot bump version '{version}': the next version does not fit in a u64")]
    Overflow { version: String },
    #[error("failed to print the report")]
    Output(#[from] io::Error),
}
