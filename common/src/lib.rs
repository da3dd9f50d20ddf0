// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Scaffolding shared by the `i18n-key-checker` and `version-manager` tools.

pub mod logging;
pub mod outcome;
pub mod utils;

pub use outcome::Outcome;
