// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Verifies that every locale dictionary of the application defines exactly
//! the keys of the base locale, without duplicates.

pub mod args;
pub mod config;
pub mod error;
pub mod extract;
pub mod locale;
pub mod report;

use std::io::Write;

use cicommon::Outcome;
use tracing::warn;

pub use config::CheckerConfig;
pub use error::{CheckError, ExtractError};
pub use locale::{LocaleCollection, LocaleKeySet};
pub use report::{CheckReport, LocaleReport, compare};

/// Loads the locale dictionaries described by `config`, compares them against
/// the base locale and writes the report to `out`.
///
/// Structural problems are reported as a single line and yield
/// [`Outcome::Failure`]. Only failures to write the report are returned as
/// errors.
pub fn run<W: Write>(config: &CheckerConfig, out: &mut W) -> anyhow::Result<Outcome> {
    let checked = LocaleCollection::load(config)
        .and_then(|collection| compare(&collection).map(|report| (collection, report)));
    let (collection, report) = match checked {
        Ok(checked) => checked,
        Err(error) => {
            warn!(%error, "locale check aborted");
            writeln!(out, "{}", error.report_line())?;
            return Ok(Outcome::Failure);
        }
    };

    writeln!(
        out,
        "Loaded {} locale dictionaries from {}.",
        collection.len(),
        config.locales_dir
    )?;
    report.write_to(out)?;
    Ok(Outcome::from_success(!report.has_errors()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use camino::Utf8PathBuf;
    use tempfile::tempdir;

    use super::*;

    fn write_locale(dir: &Utf8PathBuf, locale: &str, keys: &[&str]) {
        let body: String = keys
            .iter()
            .map(|key| format!("  {key}: \"{key}\",\n"))
            .collect();
        fs::write(
            dir.join(format!("{locale}.ts")),
            format!("export const {locale} = {{\n{body}}} as const;\n"),
        )
        .unwrap();
    }

    fn run_to_string(config: &CheckerConfig) -> (Outcome, String) {
        let mut buffer = Vec::new();
        let outcome = run(config, &mut buffer).unwrap();
        (outcome, String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn reports_missing_key() {
        let dir = tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        write_locale(&root, "en", &["greeting", "farewell"]);
        write_locale(&root, "fr", &["greeting"]);
        fs::write(root.join("index.ts"), "export { en } from './en';\n").unwrap();

        let (outcome, output) = run_to_string(&CheckerConfig::new(root.clone()));
        assert_eq!(outcome, Outcome::Failure);
        assert!(output.starts_with(&format!("Loaded 2 locale dictionaries from {root}.\n")));
        assert!(output.contains("Checking locale 'fr' (fr.ts)\n"));
        assert!(output.contains("  - [ERROR] missing 1 keys: farewell\n"));
    }

    #[test]
    fn synchronized_run_is_idempotent() {
        let dir = tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        write_locale(&root, "en", &["a", "b"]);
        write_locale(&root, "fr", &["b", "a"]);
        let config = CheckerConfig::new(root);

        let first = run_to_string(&config);
        let second = run_to_string(&config);
        assert_eq!(first.0, Outcome::Success);
        assert_eq!(first, second);
    }

    #[test]
    fn structural_errors_are_reported() {
        let dir = tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();

        let missing = root.join("missing");
        let (outcome, output) = run_to_string(&CheckerConfig::new(missing.clone()));
        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(output, format!("Error: could not locate {missing}\n"));

        let (outcome, output) = run_to_string(&CheckerConfig::new(root.clone()));
        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(output, format!("Warning: no locale files found under {root}\n"));

        write_locale(&root, "fr", &["a"]);
        let (outcome, output) = run_to_string(&CheckerConfig::new(root.clone()));
        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(output, "Error: base locale 'en' is missing or empty\n");

        fs::write(root.join("en.ts"), "export default {};\n").unwrap();
        let (outcome, output) = run_to_string(&CheckerConfig::new(root));
        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(
            output,
            "Error parsing en.ts: translation dictionary object is missing or malformed\n"
        );
    }
}
