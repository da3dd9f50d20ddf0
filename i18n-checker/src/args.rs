// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use camino::Utf8PathBuf;
use cicommon::utils::{repo_root, resolve_relative};

use crate::config::{CheckerConfig, DEFAULT_BASE_LOCALE, DEFAULT_LOCALES_DIR};

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about = "Check that every locale dictionary defines exactly the keys of the base locale"
)]
pub struct Args {
    /// Repository root the locale directory is resolved against.
    #[arg(long = "repo-root", value_name = "path")]
    pub repo_root: Option<Utf8PathBuf>,
    /// Directory holding one module per locale.
    #[arg(long = "locales-dir", value_name = "path", default_value = DEFAULT_LOCALES_DIR)]
    pub locales_dir: Utf8PathBuf,
    /// Locale every other dictionary is compared against.
    #[arg(long = "base-locale", value_name = "id", default_value = DEFAULT_BASE_LOCALE)]
    pub base_locale: String,
}

impl Args {
    pub fn into_config(self) -> CheckerConfig {
        let root = self
            .repo_root
            .unwrap_or_else(|| repo_root().to_path_buf());
        CheckerConfig {
            base_locale: self.base_locale,
            ..CheckerConfig::new(resolve_relative(&root, &self.locales_dir))
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_match_the_repository_layout() {
        let config = Args::try_parse_from(["i18n-key-checker"])
            .unwrap()
            .into_config();
        assert_eq!(config, CheckerConfig::default());
    }

    #[test]
    fn overrides() {
        let config = Args::try_parse_from([
            "i18n-key-checker",
            "--repo-root",
            "/app",
            "--locales-dir",
            "i18n",
            "--base-locale",
            "fr",
        ])
        .unwrap()
        .into_config();
        assert_eq!(config.locales_dir, Utf8PathBuf::from("/app/i18n"));
        assert_eq!(config.base_locale, "fr");

        let config = Args::try_parse_from(["i18n-key-checker", "--locales-dir", "/abs/locales"])
            .unwrap()
            .into_config();
        assert_eq!(config.locales_dir, Utf8PathBuf::from("/abs/locales"));
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Args::try_parse_from(["i18n-key-checker", "fr"]).is_err());
    }
}
