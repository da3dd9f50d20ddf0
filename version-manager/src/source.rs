// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The three files that carry the application version.

use std::{fs, sync::LazyLock};

use camino::{Utf8Path, Utf8PathBuf};
use regex::{NoExpand, Regex};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::VersionError;

static CARGO_VERSION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^version\s*=\s*"(.*?)""#).expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionSource {
    /// Frontend package manifest
    PackageJson,
    /// Native crate manifest
    CargoToml,
    /// Desktop shell configuration
    TauriConf,
}

impl VersionSource {
    /// All sources, in the order they are reported and written.
    pub const ALL: [Self; 3] = [Self::PackageJson, Self::CargoToml, Self::TauriConf];

    pub fn name(self) -> &'static str {
        match self {
            Self::PackageJson => "package.json",
            Self::CargoToml => "Cargo.toml",
            Self::TauriConf => "tauri.conf.json",
        }
    }

    /// Location relative to the repository root.
    pub fn relative_path(self) -> &'static str {
        match self {
            Self::PackageJson => "package.json",
            Self::CargoToml => "src-tauri/Cargo.toml",
            Self::TauriConf => "src-tauri/tauri.conf.json",
        }
    }

    pub fn path(self, repo_root: &Utf8Path) -> Utf8PathBuf {
        repo_root.join(self.relative_path())
    }

    /// Reads the version string. A missing field yields an empty string.
    pub fn read(self, repo_root: &Utf8Path) -> Result<String, VersionError> {
        let path = self.path(repo_root);
        let version = match self {
            Self::PackageJson | Self::TauriConf => read_json_version(&path)?,
            Self::CargoToml => read_cargo_version(&path)?,
        };
        debug!(source = self.name(), %version, "read version");
        Ok(version)
    }

    /// Replaces the version, leaving the rest of the file intact.
    pub fn write(self, repo_root: &Utf8Path, version: &str) -> Result<(), VersionError> {
        let path = self.path(repo_root);
        match self {
            Self::PackageJson | Self::TauriConf => write_json_version(&path, version)?,
            Self::CargoToml => write_cargo_version(&path, version)?,
        }
        info!(%path, %version, "wrote version");
        Ok(())
    }
}

fn read_file(path: &Utf8Path) -> Result<String, VersionError> {
    fs::read_to_string(path).map_err(|source| VersionError::Read {
        path: path.to_owned(),
        source,
    })
}

fn write_file(path: &Utf8Path, contents: &str) -> Result<(), VersionError> {
    fs::write(path, contents).map_err(|source| VersionError::Write {
        path: path.to_owned(),
        source,
    })
}

fn read_json_object(path: &Utf8Path) -> Result<Map<String, Value>, VersionError> {
    let raw = read_file(path)?;
    let value: Value = serde_json::from_str(&raw).map_err(|source| VersionError::Json {
        path: path.to_owned(),
        source,
    })?;
    match value {
        Value::Object(object) => Ok(object),
        _ => Err(VersionError::NotAnObject {
            path: path.to_owned(),
        }),
    }
}

fn read_json_version(path: &Utf8Path) -> Result<String, VersionError> {
    let object = read_json_object(path)?;
    Ok(object
        .get("version")
        .map(|value| match value {
            Value::String(version) => version.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default())
}

fn write_json_version(path: &Utf8Path, version: &str) -> Result<(), VersionError> {
    let mut object = read_json_object(path)?;
    object.insert("version".to_owned(), Value::String(version.to_owned()));
    let mut rendered = serde_json::to_string_pretty(&object).map_err(|source| {
        VersionError::Encode {
            path: path.to_owned(),
            source,
        }
    })?;
    rendered.push('\n');
    write_file(path, &rendered)
}

fn read_cargo_version(path: &Utf8Path) -> Result<String, VersionError> {
    let raw = read_file(path)?;
    let manifest: toml::Table = raw.parse().map_err(|source| VersionError::Toml {
        path: path.to_owned(),
        source,
    })?;
    Ok(manifest
        .get("package")
        .and_then(|package| package.get("version"))
        .map(|value| match value {
            toml::Value::String(version) => version.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default())
}

/// Rewrites the first line starting with `version = "..."`. Every other byte
/// of the manifest is kept.
fn write_cargo_version(path: &Utf8Path, version: &str) -> Result<(), VersionError> {
    let content = read_file(path)?;
    if !CARGO_VERSION_LINE.is_match(&content) {
        return Err(VersionError::FieldNotFound {
            path: path.to_owned(),
        });
    }
    let replacement = format!("version = \"{version}\"");
    let updated = CARGO_VERSION_LINE.replacen(&content, 1, NoExpand(&replacement));
    write_file(path, &updated)
}
