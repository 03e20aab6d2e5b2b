// SPDX-License-Identifier: MPL-2.0
//! Location of `settings.toml`.
//!
//! Resolution order: explicit override, `--config-dir`, the
//! `NUMBER2LETTER_CONFIG_DIR` environment variable, then the platform config
//! directory from `dirs`.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "Number2Letter";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "NUMBER2LETTER_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Later calls are ignored; the first value wins.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized, ignoring");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the config directory, `override_path` first.
///
/// `None` when no source yields a directory.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
