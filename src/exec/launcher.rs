//! Replacing the current process with the driver
//!
//! On Unix the driver takes over this process through `exec`, inheriting
//! the environment, working directory and file descriptors. Elsewhere the
//! driver runs as a child with inherited stdio and we exit with its status.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::command::DriverCommand;

/// Exit status used when the handoff fails
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = 1;

/// Why the driver could not be started
#[derive(Error, Debug)]
pub enum LaunchError {
    /// Program is not on PATH and is not a path to an executable
    #[error("driver '{program}' was not found")]
    NotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    /// Program was found but could not be executed
    #[error("failed to execute driver '{program}' ({path})")]
    Exec {
        program: String,
        path: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Status the wrapper exits with
    pub fn exit_code(&self) -> i32 {
        LAUNCH_FAILURE_EXIT_CODE
    }
}

/// Capability to hand control to another program.
///
/// Success never returns; the returned value always describes a failure.
pub trait ProcessLauncher {
    fn replace_self(&self, command: &DriverCommand) -> LaunchError;
}

/// Launcher backed by the operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    /// Resolve the driver program against PATH
    pub fn resolve(program: &str) -> Result<PathBuf, LaunchError> {
        which::which(program).map_err(|source| LaunchError::NotFound {
            program: program.to_string(),
            source,
        })
    }

    fn command(path: &Path, driver_command: &DriverCommand) -> Command {
        let mut cmd = Command::new(path);
        cmd.args(driver_command.args());
        cmd
    }
}

impl ProcessLauncher for SystemLauncher {
    #[cfg(unix)]
    fn replace_self(&self, driver_command: &DriverCommand) -> LaunchError {
        use std::os::unix::process::CommandExt;

        let path = match Self::resolve(driver_command.program()) {
            Ok(path) => path,
            Err(err) => return err,
        };

        // The driver sees the configured name, not the resolved path, as argv[0]
        let source = Self::command(&path, driver_command)
            .arg0(driver_command.program())
            .exec();

        LaunchError::Exec {
            program: driver_command.program().to_string(),
            path: path.display().to_string(),
            source,
        }
    }

    #[cfg(not(unix))]
    fn replace_self(&self, driver_command: &DriverCommand) -> LaunchError {
        use std::process::Stdio;

        let path = match Self::resolve(driver_command.program()) {
            Ok(path) => path,
            Err(err) => return err,
        };

        let status = Self::command(&path, driver_command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        match status {
            Ok(status) => std::process::exit(status.code().unwrap_or(LAUNCH_FAILURE_EXIT_CODE)),
            Err(source) => LaunchError::Exec {
                program: driver_command.program().to_string(),
                path: path.display().to_string(),
                source,
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{build_command, Driver};
    use crate::target::TripleTranslator;

    fn command_for(program: &str) -> DriverCommand {
        build_command(
            &Driver::new(program),
            &TripleTranslator::default(),
            "zigcc",
            ["--version"],
        )
    }

    #[test]
    fn test_missing_driver_is_not_found() {
        let err = SystemLauncher.replace_self(&command_for("zigcc-test-no-such-driver"));
        assert!(matches!(
            &err,
            LaunchError::NotFound { program, .. } if program == "zigcc-test-no-such-driver"
        ));
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_missing_driver_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let program = dir.path().join("zig");
        let err = SystemLauncher.replace_self(&command_for(&program.display().to_string()));
        assert!(matches!(err, LaunchError::NotFound { .. }));
    }

    #[test]
    fn test_error_messages_name_the_program() {
        let err = SystemLauncher::resolve("zigcc-test-no-such-driver").unwrap_err();
        assert_eq!(err.to_string(), "driver 'zigcc-test-no-such-driver' was not found");
    }

    #[test]
    fn test_recording_launcher_captures_command() {
        let launcher = testing::RecordingLauncher::default();
        let command = command_for("zig");
        let err = launcher.replace_self(&command);
        assert!(matches!(&err, LaunchError::Exec { program, .. } if program == "zig"));
        assert_eq!(launcher.launched.borrow().as_slice(), &[command]);
    }
}
