//! config.toml parsing
//!
//! The shim reads an optional per-user configuration file:
//!
//! ```toml
//! # program name or absolute path of the Zig driver
//! driver = "zig"
//! # print config and launch diagnostics to stderr
//! verbose = false
//! ```
//!
//! The file lives at `$ZIGCC_CONFIG` when set, otherwise in the platform
//! config directory (`~/.config/zigcc/config.toml` on Linux). A missing
//! default file means defaults. `ZIGCC_DRIVER` and `ZIGCC_VERBOSE` override
//! whatever the file says.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::command::{Driver, DEFAULT_DRIVER};
use crate::error::{hints, ZigccError};
use crate::utils::terminal;

/// Environment variable selecting the config file
pub const CONFIG_ENV: &str = "ZIGCC_CONFIG";

/// Environment variable overriding the driver program
pub const DRIVER_ENV: &str = "ZIGCC_DRIVER";

/// Environment variable overriding verbosity
pub const VERBOSE_ENV: &str = "ZIGCC_VERBOSE";

/// Name of the config file inside the config directory
const CONFIG_FILE_NAME: &str = "config.toml";

/// Root configuration from config.toml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZigccConfig {
    /// Program name or path of the destination driver
    pub driver: String,

    /// Print diagnostics to stderr
    pub verbose: bool,
}

impl Default for ZigccConfig {
    fn default() -> Self {
        Self {
            driver: DEFAULT_DRIVER.to_string(),
            verbose: false,
        }
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// File named by `ZIGCC_CONFIG`
    Env(PathBuf),
    /// File in the user config directory
    UserDir(PathBuf),
    /// No file was read
    Defaults,
    /// A file was selected but rejected
    Fallback,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Env(path) => write!(f, "{} (from {})", path.display(), CONFIG_ENV),
            ConfigSource::UserDir(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => f.write_str("built-in defaults"),
            ConfigSource::Fallback => f.write_str("built-in defaults (config file rejected)"),
        }
    }
}

/// Configuration together with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: ZigccConfig,
    pub source: ConfigSource,
}

impl ZigccConfig {
    /// Load from the file selected by the environment, then apply env overrides.
    ///
    /// Never fails: an unusable file falls back to the defaults so the
    /// compile still reaches the driver.
    pub fn load() -> LoadedConfig {
        Self::resolve(Self::load_file(), |name| std::env::var(name).ok())
    }

    /// Combine the outcome of reading the file with the env overrides.
    ///
    /// A rejected file is reported on stderr only when verbose is on.
    pub fn resolve<F>(file: Result<LoadedConfig, ZigccError>, lookup: F) -> LoadedConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        match file {
            Ok(mut loaded) => {
                loaded.config.apply_env_overrides(lookup);
                loaded
            }
            Err(err) => {
                let mut config = Self::default();
                config.apply_env_overrides(lookup);
                if config.verbose {
                    err.display_with_hints();
                }
                LoadedConfig {
                    config,
                    source: ConfigSource::Fallback,
                }
            }
        }
    }

    fn load_file() -> Result<LoadedConfig, ZigccError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            let path = PathBuf::from(path);
            if !path.is_file() {
                return Err(ZigccError::config_error_with_hint(
                    format!("{} does not exist", path.display()),
                    None,
                    hints::config_not_found(),
                ));
            }
            let config = Self::load_from_path(&path)?;
            return Ok(LoadedConfig {
                config,
                source: ConfigSource::Env(path),
            });
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                let config = Self::load_from_path(&path)?;
                Ok(LoadedConfig {
                    config,
                    source: ConfigSource::UserDir(path),
                })
            }
            _ => Ok(LoadedConfig {
                config: Self::default(),
                source: ConfigSource::Defaults,
            }),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ZigccError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ZigccError::config_error_with_hint(
                format!("Failed to read {}", path.display()),
                Some(e.into()),
                hints::invalid_config(),
            )
        })?;

        Self::parse(&content).map_err(|err| match err {
            ZigccError::Config { message, source, hint } => ZigccError::Config {
                message: format!("{}: {}", path.display(), message),
                source,
                hint,
            },
            other => other,
        })
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self, ZigccError> {
        let config: Self = toml::from_str(content).map_err(|e| {
            ZigccError::config_error_with_hint(
                "Failed to parse config.toml",
                Some(e.into()),
                hints::invalid_config(),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ZIGCC_DRIVER` / `ZIGCC_VERBOSE` as looked up by `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(driver) = lookup(DRIVER_ENV).filter(|d| !d.trim().is_empty()) {
            self.driver = driver;
        }

        if let Some(value) = lookup(VERBOSE_ENV) {
            match parse_flag(&value) {
                Some(verbose) => self.verbose = verbose,
                // Stay silent unless the file already asked for diagnostics
                None if self.verbose => terminal::print_warning(&format!(
                    "ignoring {}={:?}, expected 1/0, true/false, yes/no or on/off",
                    VERBOSE_ENV, value
                )),
                None => {}
            }
        }
    }

    /// Reject settings that can never launch anything
    pub fn validate(&self) -> Result<(), ZigccError> {
        if self.driver.trim().is_empty() {
            return Err(ZigccError::config_error_with_hint(
                "driver must not be empty",
                None,
                hints::invalid_config(),
            ));
        }
        Ok(())
    }

    /// Destination driver described by this configuration
    pub fn driver(&self) -> Driver {
        Driver::new(self.driver.clone())
    }
}

/// Default config file location for the current user
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "zigcc", "zigcc")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Parse a boolean environment flag
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
