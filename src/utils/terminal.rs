//! Terminal output utilities
//!
//! Everything here writes to stderr. Stdout belongs to the echoed driver
//! command line and to the compiler itself.

use std::io::{self, Write};

use console::style;

use crate::command::DriverCommand;

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message);
}

/// Print an info message to stderr
pub fn print_info(message: &str) {
    eprintln!("{}: {}", style("info").blue().bold(), message);
}

/// Echo the rewritten command line to stdout as a single line.
///
/// Stdout is flushed before returning since the process image is replaced
/// right after this.
pub fn echo_command(command: &DriverCommand) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", command)?;
    stdout.flush()
}
