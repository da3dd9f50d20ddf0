// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    collections::BTreeSet,
    io::{self, Write},
};

use camino::Utf8Path;

use crate::{error::VersionError, source::VersionSource, version::is_valid_semver};

/// Version found in one source. Empty when the field is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub source: VersionSource,
    pub version: String,
}

impl VersionRecord {
    pub fn new(source: VersionSource, version: impl Into<String>) -> Self {
        Self {
            source,
            version: version.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_semver(&self.version)
    }
}

/// Snapshot of the version in every source, read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionStatus {
    records: Vec<VersionRecord>,
}

impl VersionStatus {
    pub fn load(repo_root: &Utf8Path) -> Result<Self, VersionError> {
        let records = VersionSource::ALL
            .into_iter()
            .map(|source| -> Result<_, VersionError> {
                Ok(VersionRecord::new(source, source.read(repo_root)?))
            })
            .collect::<Result<_, VersionError>>()?;
        Ok(Self { records })
    }

    pub fn from_records(records: impl IntoIterator<Item = VersionRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    pub fn records(&self) -> &[VersionRecord] {
        &self.records
    }

    /// The single version shared by every non-empty source, if it is valid.
    ///
    /// Sources missing the field do not take part; if all of them miss it
    /// there is nothing to be consistent about.
    pub fn consistent_version(&self) -> Option<&str> {
        let distinct: BTreeSet<&str> = self
            .records
            .iter()
            .map(|record| record.version.as_str())
            .filter(|version| !version.is_empty())
            .collect();
        match distinct.into_iter().collect::<Vec<_>>()[..] {
            [version] if is_valid_semver(version) => Some(version),
            _ => None,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.consistent_version().is_some()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\nCurrent version status:")?;
        for record in &self.records {
            let version = if record.version.is_empty() {
                "[missing]"
            } else {
                record.version.as_str()
            };
            let flag = if record.is_valid() { "OK" } else { "invalid" };
            writeln!(out, "- {:20} {version} ({flag})", record.source.name())?;
        }
        if self.is_consistent() {
            writeln!(out, "All version numbers are consistent and valid.")
        } else {
            writeln!(
                out,
                "Version numbers are inconsistent or invalid; update them as needed."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn status(versions: [&str; 3]) -> VersionStatus {
        VersionStatus::from_records(
            VersionSource::ALL
                .into_iter()
                .zip(versions)
                .map(|(source, version)| VersionRecord::new(source, version)),
        )
    }

    fn render(status: &VersionStatus) -> String {
        let mut buffer = Vec::new();
        status.write_to(&mut buffer).unwrap();
        let rendered = String::from_utf8(buffer).unwrap();
        rendered
            .strip_prefix('\n')
            .expect("status starts with a blank line")
            .to_owned()
    }

    #[test]
    fn consistency() {
        assert!(status(["1.0.0", "1.0.0", "1.0.0"]).is_consistent());
        assert!(!status(["1.0.0", "1.0.1", "1.0.0"]).is_consistent());
        assert!(!status(["", "", ""]).is_consistent());
        assert!(!status(["1.0", "1.0", "1.0"]).is_consistent());
        assert_eq!(
            status(["2.0.0-rc.1", "", "2.0.0-rc.1"]).consistent_version(),
            Some("2.0.0-rc.1")
        );
    }

    #[test]
    fn renders_consistent_status() {
        assert_snapshot!(render(&status(["0.4.0", "0.4.0", "0.4.0"])), @r"
        Current version status:
        - package.json         0.4.0 (OK)
        - Cargo.toml           0.4.0 (OK)
        - tauri.conf.json      0.4.0 (OK)
        All version numbers are consistent and valid.
        ");
    }

    #[test]
    fn renders_inconsistent_status() {
        assert_snapshot!(render(&status(["0.4.0", "", "04.0.0"])), @r"
        Current version status:
        - package.json         0.4.0 (OK)
        - Cargo.toml           [missing] (invalid)
        - tauri.conf.json      04.0.0 (invalid)
        Version numbers are inconsistent or invalid; update them as needed.
        ");
    }
}
