//! Error types and helpers for user-friendly error messages
//!
//! Translation itself never fails. The only failures are a broken
//! configuration file and a driver that cannot be started.

use thiserror::Error;

use crate::exec::launcher::LAUNCH_FAILURE_EXIT_CODE;
use crate::exec::LaunchError;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum ZigccError {
    /// Configuration file or environment errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        hint: Option<String>,
    },

    /// The driver could not be started
    #[error("Launch failed: {source}")]
    Launch {
        #[source]
        source: LaunchError,
        hint: String,
    },
}

impl ZigccError {
    /// Create a configuration error with source and hint
    pub fn config_error_with_hint(
        message: impl Into<String>,
        source: Option<anyhow::Error>,
        hint: impl Into<String>,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source,
            hint: Some(hint.into()),
        }
    }

    /// Wrap a launch failure with an installation hint
    pub fn launch(source: LaunchError) -> Self {
        let hint = match &source {
            LaunchError::NotFound { .. } => hints::zig_not_found(),
            LaunchError::Exec { .. } => hints::zig_not_executable(),
        };
        Self::Launch {
            source,
            hint: hint.to_string(),
        }
    }

    /// Status the process exits with for this error.
    ///
    /// Config errors are recovered from before dispatch, so in practice
    /// only launch failures reach `main`.
    pub fn exit_code(&self) -> i32 {
        match self {
            ZigccError::Config { .. } => LAUNCH_FAILURE_EXIT_CODE,
            ZigccError::Launch { source, .. } => source.exit_code(),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        match self {
            ZigccError::Config { hint, source, .. } => {
                if let Some(source) = source {
                    eprintln!("  {} {:#}", style("caused by:").dim(), source);
                }
                if let Some(h) = hint {
                    eprintln!("\n{} {}", style("HINT:").yellow().bold(), h);
                }
            }
            ZigccError::Launch { hint, .. } => {
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
        }

        eprintln!();
    }
}

/// Common error hints
pub mod hints {
    /// Hint for a driver missing from PATH
    pub fn zig_not_found() -> &'static str {
        "Install Zig from https://ziglang.org/download/ or use your package manager:\n\
         • macOS: brew install zig\n\
         • Ubuntu: sudo snap install zig --classic\n\
         • Windows: winget install zig.zig\n\
         \n\
         Or point ZIGCC_DRIVER (or `driver` in config.toml) at the zig executable."
    }

    /// Hint for a driver that exists but cannot be run
    pub fn zig_not_executable() -> &'static str {
        "The driver was found but could not be executed.\n\
         Check that it is a valid executable for this host and that it has\n\
         execute permission."
    }

    /// Hint for an unreadable or invalid config file
    pub fn invalid_config() -> &'static str {
        "config.toml is invalid. Supported keys:\n\
         • driver = \"zig\"    program or path of the Zig driver\n\
         • verbose = false   print diagnostics to stderr\n\
         \n\
         Set ZIGCC_CONFIG to use a different file."
    }

    /// Hint for ZIGCC_CONFIG pointing at nothing
    pub fn config_not_found() -> &'static str {
        "ZIGCC_CONFIG points to a file that does not exist.\n\
         Unset it to use the default location, or create the file."
    }
}
