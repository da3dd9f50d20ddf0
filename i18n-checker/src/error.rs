// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::io;

use camino::Utf8PathBuf;

/// Failure to locate the dictionary literal inside a locale source file.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("translation dictionary object is missing or malformed")]
    MissingDictionary,
}

/// Structural failures that abort a check run before any comparison.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("could not locate {0}")]
    MissingDirectory(Utf8PathBuf),
    #[error("no locale files found under {0}")]
    NoLocaleFiles(Utf8PathBuf),
    #[error("failed to read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {file}")]
    Parse {
        file: String,
        #[source]
        source: ExtractError,
    },
    #[error("base locale '{0}' is missing or empty")]
    EmptyBase(String),
}

impl CheckError {
    /// The single line printed to the report when the run is aborted.
    pub fn report_line(&self) -> String {
        match self {
            Self::MissingDirectory(dir) => format!("Error: could not locate {dir}"),
            Self::NoLocaleFiles(dir) => format!("Warning: no locale files found under {dir}"),
            Self::Read { path, source } => format!("Error reading {path}: {source}"),
            Self::Parse { file, source } => format!("Error parsing {file}: {source}"),
            Self::EmptyBase(base) => format!("Error: base locale '{base}' is missing or empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lines() {
        let dir = Utf8PathBuf::from("/repo/src/utils/i18n/locales");
        assert_eq!(
            CheckError::MissingDirectory(dir.clone()).report_line(),
            "Error: could not locate /repo/src/utils/i18n/locales"
        );
        assert_eq!(
            CheckError::NoLocaleFiles(dir).report_line(),
            "Warning: no locale files found under /repo/src/utils/i18n/locales"
        );
        assert_eq!(
            CheckError::Parse {
                file: "fr.ts".to_owned(),
                source: ExtractError::MissingDictionary,
            }
            .report_line(),
            "Error parsing fr.ts: translation dictionary object is missing or malformed"
        );
        assert_eq!(
            CheckError::EmptyBase("en".to_owned()).report_line(),
            "Error: base locale 'en' is missing or empty"
        );
    }
}
