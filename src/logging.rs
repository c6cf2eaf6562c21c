// Copyright (c) 2025 mysql-introspect Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Logging setup for binaries embedding this crate.
//!
//! The library itself only emits `tracing` events; hosts that do not
//! already install a subscriber can call [`init_logging`] to get one
//! scoped to this crate's target. An explicit [`LogConfig`] level wins,
//! then `RUST_LOG`, then a `warn` default:
//!
//! ```bash
//! RUST_LOG=mysql_introspect=debug ./my_app
//! ```

use std::sync::OnceLock;
use tracing_subscriber::{fmt::time::SystemTime, EnvFilter};

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Logging configuration.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Log level: "OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE".
    pub level: Option<String>,
    /// Log file path. If unset, logs go to stderr.
    pub file: Option<String>,
}

/// Filter directives for a config. `None` means logging stays disabled.
fn filter_for(config: &LogConfig) -> Option<EnvFilter> {
    match config.level.as_deref() {
        Some(level) if level.eq_ignore_ascii_case("off") => None,
        Some(level) => Some(EnvFilter::new(format!(
            "mysql_introspect={}",
            level.to_lowercase()
        ))),
        None => Some(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mysql_introspect=warn")),
        ),
    }
}

/// Install a global subscriber for this crate's events.
///
/// At most one call per process takes effect; later calls and calls made
/// after the host already installed its own subscriber are no-ops.
pub fn init_logging(config: &LogConfig) {
    if LOGGING_INITIALIZED.set(()).is_err() {
        return;
    }
    let Some(filter) = filter_for(config) else {
        return;
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(SystemTime);

    match &config.file {
        Some(path) => {
            let opened = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path);
            match opened {
                Ok(file) => {
                    builder.with_writer(file).with_ansi(false).try_init().ok();
                }
                Err(e) => {
                    eprintln!("mysql-introspect: failed to open log file {path}: {e}");
                }
            }
        }
        None => {
            builder.with_writer(std::io::stderr).try_init().ok();
        }
    }
}
