// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Configuration file support for morse-cli.
//!
//! Settings live in the `[morse-cli]` section of `morse-rs.toml`, searched in:
//! 1. Path specified via `--config` CLI argument
//! 2. `./morse-rs.toml` (current directory)
//! 3. `~/.config/morse-rs/morse-rs.toml` (XDG config)
//! 4. `/etc/morse-rs/morse-rs.toml` (system-wide)

use std::path::{Path, PathBuf};

use morse_app::{ConfigError, ConfigFile};
use serde::{Deserialize, Serialize};

/// Top-level CLI configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// General settings
    pub general: GeneralConfig,
    /// Interactive console settings
    pub console: ConsoleConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: Option<String>,
}

/// Interactive console settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Print the title and menu when the console starts
    pub show_banner: bool,
    /// Repeat the entered line above the conversion result
    pub echo_original: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            echo_original: true,
        }
    }
}

impl CliConfig {
    pub fn validate(&self) -> Result<(), String> {
        validate_log_level(self.general.log_level.as_deref())
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        <Self as ConfigFile>::load_from_file(path)
    }

    /// Load configuration from the default search paths.
    /// Returns default config if no config file is found.
    pub fn load_from_default_paths() -> Result<(Self, Option<PathBuf>), ConfigError> {
        <Self as ConfigFile>::load_from_default_paths()
    }

    /// Generate an example configuration as a TOML string.
    pub fn example_toml() -> String {
        let example = CliConfig {
            general: GeneralConfig {
                log_level: Some("info".to_string()),
            },
            console: ConsoleConfig::default(),
        };

        let mut root = toml::Table::new();
        match toml::Value::try_from(&example) {
            Ok(section) => {
                root.insert(<Self as ConfigFile>::section_key().to_string(), section);
            }
            Err(_) => return String::new(),
        }
        toml::to_string_pretty(&root).unwrap_or_default()
    }
}

fn validate_log_level(level: Option<&str>) -> Result<(), String> {
    if let Some(level) = level {
        match level {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(format!(
                    "[general].log_level '{}' is invalid (expected one of: trace, debug, info, warn, error)",
                    level
                ))
            }
        }
    }
    Ok(())
}

impl ConfigFile for CliConfig {
    fn section_key() -> &'static str {
        "morse-cli"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.general.log_level.is_none());
        assert!(config.console.show_banner);
        assert!(config.console.echo_original);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_cli_section() {
        let toml_str = r#"
[general]
log_level = "debug"

[console]
show_banner = false
"#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, Some("debug".to_string()));
        assert!(!config.console.show_banner);
        assert!(config.console.echo_original);
    }

    #[test]
    fn test_example_toml_loads_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CliConfig::example_toml().as_bytes()).unwrap();

        let config = CliConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.general.log_level, Some("info".to_string()));
        assert!(config.console.show_banner);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = CliConfig::default();
        config.general.log_level = Some("verbose".to_string());
        assert!(config.validate().is_err());
    }
}
