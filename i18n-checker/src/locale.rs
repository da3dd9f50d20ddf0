// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    collections::{BTreeMap, BTreeSet},
    fs, io,
};

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::{config::CheckerConfig, error::CheckError, extract::extract_keys};

/// Keys defined by a single locale module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleKeySet {
    locale: String,
    file_name: String,
    keys: Vec<String>,
}

impl LocaleKeySet {
    pub fn new(
        locale: impl Into<String>,
        file_name: impl Into<String>,
        keys: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            locale: locale.into(),
            file_name: file_name.into(),
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads and parses the locale module at `path`. The locale identifier is
    /// the file stem.
    pub fn from_file(path: &Utf8Path) -> Result<Self, CheckError> {
        let file_name = path.file_name().unwrap_or(path.as_str()).to_owned();
        let locale = path.file_stem().unwrap_or(file_name.as_str()).to_owned();
        let raw = fs::read_to_string(path).map_err(|source| CheckError::Read {
            path: path.to_owned(),
            source,
        })?;
        let keys = extract_keys(&raw).map_err(|source| CheckError::Parse {
            file: file_name.clone(),
            source,
        })?;
        debug!(%locale, keys = keys.len(), "extracted locale keys");
        Ok(Self {
            locale,
            file_name,
            keys,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Keys in source order, duplicates included.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn key_set(&self) -> BTreeSet<&str> {
        self.keys.iter().map(String::as_str).collect()
    }

    /// Keys defined more than once, sorted, each listed once.
    pub fn duplicates(&self) -> Vec<String> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for key in &self.keys {
            *counts.entry(key.as_str()).or_default() += 1;
        }
        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(key, _)| key.to_owned())
            .collect()
    }
}

/// All locale dictionaries of a directory, keyed and iterated by locale.
#[derive(Debug, Clone)]
pub struct LocaleCollection {
    base_locale: String,
    locales: BTreeMap<String, LocaleKeySet>,
}

impl LocaleCollection {
    pub fn new(base_locale: impl Into<String>) -> Self {
        Self {
            base_locale: base_locale.into(),
            locales: BTreeMap::new(),
        }
    }

    /// Discovers and parses every locale module described by `config`.
    ///
    /// Parsing stops at the first module without a dictionary literal.
    pub fn load(config: &CheckerConfig) -> Result<Self, CheckError> {
        let mut collection = Self::new(config.base_locale.clone());
        for path in discover_locale_files(config)? {
            collection.insert(LocaleKeySet::from_file(&path)?);
        }
        Ok(collection)
    }

    pub fn insert(&mut self, key_set: LocaleKeySet) {
        self.locales.insert(key_set.locale.clone(), key_set);
    }

    pub fn base_locale(&self) -> &str {
        &self.base_locale
    }

    pub fn base(&self) -> Option<&LocaleKeySet> {
        self.locales.get(&self.base_locale)
    }

    /// Every locale except the base one, sorted by identifier.
    pub fn others(&self) -> impl Iterator<Item = &LocaleKeySet> {
        self.locales
            .values()
            .filter(|key_set| key_set.locale != self.base_locale)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }
}

/// Lists the locale modules of `config.locales_dir`, sorted by path.
pub fn discover_locale_files(config: &CheckerConfig) -> Result<Vec<Utf8PathBuf>, CheckError> {
    let directory = &config.locales_dir;
    if !directory.exists() {
        return Err(CheckError::MissingDirectory(directory.clone()));
    }
    let read_error = |source: io::Error| CheckError::Read {
        path: directory.clone(),
        source,
    };

    let mut files = Vec::new();
    for entry in directory.read_dir_utf8().map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();
        if !path.is_file()
            || path.extension() != Some(config.extension.as_str())
            || entry.file_name() == config.index_file
        {
            continue;
        }
        files.push(path.to_path_buf());
    }
    files.sort();

    if files.is_empty() {
        return Err(CheckError::NoLocaleFiles(directory.clone()));
    }
    debug!(count = files.len(), %directory, "discovered locale files");
    Ok(files)
}
