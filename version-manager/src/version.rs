// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

use crate::error::VersionError;

static SEMVER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)",
        r"(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?",
        r"(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?$",
    ))
    .expect("valid regex")
});

/// Returns `true` if `version` is a Semantic Versioning 2.0.0 string.
///
/// The check is purely syntactic: no trimming, no `v` prefix, no coercion.
pub fn is_valid_semver(version: &str) -> bool {
    SEMVER_PATTERN.is_match(version)
}

/// Which component `--bump` increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BumpLevel {
    Major,
    Minor,
    Patch,
}

/// Next release after `current` at the given level.
///
/// Lower components are reset; pre-release and build metadata are dropped.
/// Fails when the incremented component does not fit in a `u64`.
pub fn bump(current: &Version, level: BumpLevel) -> Result<Version, VersionError> {
    let overflow = || VersionError::Overflow {
        version: current.to_string(),
    };
    let next = match level {
        BumpLevel::Major => {
            Version::new(current.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
        }
        BumpLevel::Minor => Version::new(
            current.major,
            current.minor.checked_add(1).ok_or_else(overflow)?,
            0,
        ),
        BumpLevel::Patch => Version::new(
            current.major,
            current.minor,
            current.patch.checked_add(1).ok_or_else(overflow)?,
        ),
    };
    Ok(next)
}
