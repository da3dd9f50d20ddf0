// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::io::{self, Write};

use cicommon::utils::format_list;

use crate::{error::CheckError, locale::LocaleCollection};

/// Differences between one locale and the base locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleReport {
    pub locale: String,
    pub file_name: String,
    pub duplicates: Vec<String>,
    /// Keys of the base locale this locale lacks
    pub missing: Vec<String>,
    /// Keys this locale defines that the base locale does not
    pub extra: Vec<String>,
}

impl LocaleReport {
    pub fn is_ok(&self) -> bool {
        self.duplicates.is_empty() && self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Result of comparing every locale against the base locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub base_locale: String,
    /// Number of distinct keys in the base locale
    pub base_key_count: usize,
    pub base_duplicates: Vec<String>,
    /// One entry per non-base locale, sorted by locale
    pub locales: Vec<LocaleReport>,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        !self.base_duplicates.is_empty() || self.locales.iter().any(|locale| !locale.is_ok())
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let base = &self.base_locale;
        writeln!(
            out,
            "Base locale '{base}' defines {} keys.",
            self.base_key_count
        )?;
        if self.base_duplicates.is_empty() {
            writeln!(out, "[OK] no duplicate keys in '{base}'.")?;
        } else {
            writeln!(
                out,
                "[ERROR] base locale '{base}' contains duplicate keys: {}",
                format_list(&self.base_duplicates)
            )?;
        }

        for locale in &self.locales {
            writeln!(
                out,
                "\nChecking locale '{}' ({})",
                locale.locale, locale.file_name
            )?;
            if !locale.duplicates.is_empty() {
                writeln!(
                    out,
                    "  - [ERROR] duplicate keys: {}",
                    format_list(&locale.duplicates)
                )?;
            }
            if !locale.missing.is_empty() {
                writeln!(
                    out,
                    "  - [ERROR] missing {} keys: {}",
                    locale.missing.len(),
                    format_list(&locale.missing)
                )?;
            }
            if !locale.extra.is_empty() {
                writeln!(
                    out,
                    "  - [ERROR] extra {} keys: {}",
                    locale.extra.len(),
                    format_list(&locale.extra)
                )?;
            }
            if locale.is_ok() {
                writeln!(
                    out,
                    "  - [OK] keys match the base locale and have no duplicates."
                )?;
            }
        }

        if self.has_errors() {
            writeln!(
                out,
                "\nFound i18n inconsistencies. Please review the errors above."
            )
        } else {
            writeln!(out, "\nAll translation dictionaries are synchronized! ✨")
        }
    }
}

/// Compares every locale of `collection` against its base locale.
///
/// Fails only when the base locale is absent or defines no keys; all other
/// findings are collected into the report.
pub fn compare(collection: &LocaleCollection) -> Result<CheckReport, CheckError> {
    let base = collection
        .base()
        .filter(|base| !base.keys().is_empty())
        .ok_or_else(|| CheckError::EmptyBase(collection.base_locale().to_owned()))?;
    let base_keys = base.key_set();

    let locales = collection
        .others()
        .map(|key_set| {
            let keys = key_set.key_set();
            LocaleReport {
                locale: key_set.locale().to_owned(),
                file_name: key_set.file_name().to_owned(),
                duplicates: key_set.duplicates(),
                missing: base_keys
                    .difference(&keys)
                    .map(|key| (*key).to_owned())
                    .collect(),
                extra: keys
                    .difference(&base_keys)
                    .map(|key| (*key).to_owned())
                    .collect(),
            }
        })
        .collect();

    Ok(CheckReport {
        base_locale: base.locale().to_owned(),
        base_key_count: base_keys.len(),
        base_duplicates: base.duplicates(),
        locales,
    })
}
