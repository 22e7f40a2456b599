//! Invocation handling
//!
//! `zigcc` is installed as a C or C++ compiler, so it cannot own any flags:
//! everything after `argv[0]` belongs to the compiler. `argv[0]` only picks
//! between `zig cc` and `zig c++`.

use std::ffi::OsString;

use crate::command::{build_command, DriverCommand};
use crate::config::{LoadedConfig, ZigccConfig};
use crate::error::ZigccError;
use crate::exec::ProcessLauncher;
use crate::target::TripleTranslator;
use crate::utils::terminal;

/// One run of the shim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// `argv[0]`, lossily decoded
    pub invoked_name: String,
    /// Arguments after `argv[0]`
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Capture the current process arguments
    pub fn from_env() -> Self {
        Self::from_args(std::env::args_os())
    }

    /// Split a full argument vector into program name and arguments
    pub fn from_args<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let invoked_name = argv
            .next()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            invoked_name,
            args: argv.collect(),
        }
    }

    /// Load configuration and hand off to the driver.
    ///
    /// Returns only when the handoff did not happen.
    pub fn execute<L: ProcessLauncher>(self, launcher: &L) -> ZigccError {
        let loaded = ZigccConfig::load();
        self.dispatch(&loaded, launcher)
    }

    /// Rewrite the arguments, echo the result and launch it
    pub fn dispatch<L: ProcessLauncher>(self, loaded: &LoadedConfig, launcher: &L) -> ZigccError {
        let config = &loaded.config;
        if config.verbose {
            terminal::print_info(&format!("config: {}", loaded.source));
            terminal::print_info(&format!("invoked as: {}", self.invoked_name));
        }

        let command = self.rewrite(config);

        if let Err(err) = terminal::echo_command(&command) {
            if config.verbose {
                terminal::print_warning(&format!("could not echo command line: {}", err));
            }
        }

        let err = ZigccError::launch(launcher.replace_self(&command));
        if config.verbose {
            err.display_with_hints();
        }
        err
    }

    /// Driver command for this invocation
    pub fn rewrite(self, config: &ZigccConfig) -> DriverCommand {
        build_command(
            &config.driver(),
            &TripleTranslator::default(),
            &self.invoked_name,
            self.args,
        )
    }
}
