// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Lexical extraction of translation keys from a TypeScript locale module.
//!
//! A locale module is expected to contain a single dictionary literal of the
//! form
//!
//! ```ts
//! export const fr = {
//!   greeting: "Bonjour",
//!   farewell: "Au revoir",
//! } as const;
//! ```
//!
//! Only keys that start a line directly inside the outer braces are counted.
//! Keys of objects nested inside a value are skipped.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ExtractError;

static DICTIONARY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"const\s+\w+\s*=\s*(\{[\s\S]*?\})\s*as const;").expect("valid regex")
});
static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z0-9_]+):").expect("valid regex"));

/// Returns the top-level keys of the dictionary literal in `source`, in
/// source order and including duplicates.
pub fn extract_keys(source: &str) -> Result<Vec<String>, ExtractError> {
    let block = DICTIONARY_PATTERN
        .captures(source)
        .and_then(|captures| captures.get(1))
        .ok_or(ExtractError::MissingDictionary)?
        .as_str();

    let mut scanner = Scanner::default();
    let mut keys = Vec::new();
    for line in block.lines() {
        if scanner.depth == 1 && scanner.in_code() {
            if let Some(key) = KEY_PATTERN.captures(line).and_then(|captures| captures.get(1)) {
                keys.push(key.as_str().to_owned());
            }
        }
        scanner.feed_line(line);
    }
    Ok(keys)
}

/// Tracks bracket nesting across lines, ignoring brackets inside string
/// literals and comments.
#[derive(Debug, Default)]
struct Scanner {
    depth: i32,
    string: Option<char>,
    block_comment: bool,
}

impl Scanner {
    fn in_code(&self) -> bool {
        self.string.is_none() && !self.block_comment
    }

    fn feed_line(&mut self, line: &str) {
        let mut chars = line.chars().peekable();
        let mut escaped = false;
        while let Some(ch) = chars.next() {
            if self.block_comment {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    self.block_comment = false;
                }
                continue;
            }
            if let Some(quote) = self.string {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == quote {
                    self.string = None;
                }
                continue;
            }
            match ch {
                '"' | '\'' | '`' => self.string = Some(ch),
                '/' if chars.peek() == Some(&'/') => break,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    self.block_comment = true;
                }
                '{' | '[' | '(' => self.depth += 1,
                '}' | ']' | ')' => self.depth -= 1,
                _ => {}
            }
        }
        // Only template literals continue on the next line.
        if matches!(self.string, Some('"' | '\'')) {
            self.string = None;
        }
    }
}
