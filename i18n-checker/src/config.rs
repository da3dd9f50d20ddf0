// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use camino::{Utf8Path, Utf8PathBuf};

pub const DEFAULT_LOCALES_DIR: &str = "src/utils/i18n/locales";
pub const DEFAULT_BASE_LOCALE: &str = "en";
pub const DEFAULT_EXTENSION: &str = "ts";
pub const DEFAULT_INDEX_FILE: &str = "index.ts";

/// Where and how locale dictionaries are discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Directory holding one module per locale
    pub locales_dir: Utf8PathBuf,
    /// Locale whose key set every other locale must match
    pub base_locale: String,
    /// Extension (without the dot) of locale modules
    pub extension: String,
    /// Aggregator module living next to the locales, never scanned
    pub index_file: String,
}

impl CheckerConfig {
    /// Configuration with every default except the locale directory.
    pub fn new(locales_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            locales_dir: locales_dir.into(),
            base_locale: DEFAULT_BASE_LOCALE.to_owned(),
            extension: DEFAULT_EXTENSION.to_owned(),
            index_file: DEFAULT_INDEX_FILE.to_owned(),
        }
    }

    /// Default configuration for the application repository at `repo_root`.
    pub fn for_repo(repo_root: &Utf8Path) -> Self {
        Self::new(repo_root.join(DEFAULT_LOCALES_DIR))
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self::for_repo(cicommon::utils::repo_root())
    }
}
