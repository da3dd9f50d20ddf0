// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Path and formatting helpers shared by the tools.

use std::sync::LazyLock;

use camino::{Utf8Path, Utf8PathBuf};

static REPO_ROOT: LazyLock<Utf8PathBuf> = LazyLock::new(|| {
    let manifest_dir = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Utf8Path::parent)
        .expect("tooling workspace is expected to live one level below the repository root")
        .to_path_buf()
});

/// Root of the application repository the tools operate on.
///
/// The tooling workspace sits one directory below it, so this is two levels
/// above this crate's manifest.
pub fn repo_root() -> &'static Utf8Path {
    &REPO_ROOT
}

/// Resolves `raw` against `base` unless it is already absolute.
pub fn resolve_relative(base: &Utf8Path, raw: &Utf8Path) -> Utf8PathBuf {
    if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        base.join(raw)
    }
}

/// Joins items with `", "` for single-line reports.
pub fn format_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut buffer = String::new();
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            buffer.push_str(", ");
        }
        buffer.push_str(item.as_ref());
    }
    buffer
}
