// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracing::{metadata::LevelFilter, subscriber::set_global_default};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Installs the global tracing subscriber.
///
/// Diagnostics go to stderr so that the report printed on stdout stays
/// untouched. The default level is `warn`; `RUST_LOG` raises it.
pub fn init_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let formatting_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let registry = Registry::default().with(env_filter).with(formatting_layer);
    set_global_default(registry).expect("logging already initialized");
}
