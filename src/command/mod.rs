//! Driver command assembly
//!
//! Rebuilds the argument vector of a `cc`/`c++` invocation as a `zig cc` /
//! `zig c++` invocation. Only `--target <triple>` and `--target=<triple>`
//! are rewritten; every other token is forwarded as-is and in order.

use std::ffi::{OsStr, OsString};
use std::fmt;

use crate::target::TripleTranslator;

/// Flag carrying the target triple
const TARGET_FLAG: &str = "--target";

/// Joined form of [`TARGET_FLAG`]
const TARGET_PREFIX: &str = "--target=";

/// Default program name of the destination driver
pub const DEFAULT_DRIVER: &str = "zig";

/// Which compiler frontend the driver should act as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubMode {
    /// C frontend (`zig cc`)
    Cc,
    /// C++ frontend (`zig c++`)
    Cxx,
}

impl SubMode {
    /// Pick the frontend from the name we were invoked under
    pub fn from_invoked_name(invoked_name: &str) -> Self {
        if is_cxx_invocation(invoked_name) {
            SubMode::Cxx
        } else {
            SubMode::Cc
        }
    }

    /// Sub-command token understood by the driver
    pub fn token(self) -> &'static str {
        match self {
            SubMode::Cc => "cc",
            SubMode::Cxx => "c++",
        }
    }
}

impl fmt::Display for SubMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Whether the binary name marks a C++ compiler (`c++`, `zigc++`, `g++` ...)
pub fn is_cxx_invocation(invoked_name: &str) -> bool {
    invoked_name.contains("++")
}

/// Destination compiler driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    program: String,
}

impl Driver {
    /// Driver with an explicit program name or path
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program name or path of the driver
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(DEFAULT_DRIVER)
    }
}

/// Fully rewritten invocation, ready to hand to a launcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverCommand {
    program: String,
    args: Vec<OsString>,
}

impl DriverCommand {
    /// Program to run
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments after the program: sub-mode token first, then the
    /// forwarded arguments
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Complete argument vector, program included
    pub fn argv(&self) -> impl Iterator<Item = &OsStr> + '_ {
        std::iter::once(OsStr::new(&self.program)).chain(self.args.iter().map(OsString::as_os_str))
    }
}

impl fmt::Display for DriverCommand {
    /// Single space-joined line; non-UTF-8 tokens are shown lossily
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.argv().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Rewrite a compiler invocation for the given driver.
///
/// `invoked_name` is `argv[0]` of the current process and `raw_args` the
/// arguments after it.
pub fn build_command<I, S>(
    driver: &Driver,
    translator: &TripleTranslator,
    invoked_name: &str,
    raw_args: I,
) -> DriverCommand
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args = vec![OsString::from(SubMode::from_invoked_name(invoked_name).token())];
    let mut raw_args = raw_args.into_iter().map(Into::into);

    while let Some(current) = raw_args.next() {
        match current.to_str() {
            Some(TARGET_FLAG) => {
                args.push(current);
                // A trailing `--target` is forwarded alone
                if let Some(value) = raw_args.next() {
                    args.push(translate_value(translator, value));
                }
            }
            Some(flag) if flag.starts_with(TARGET_PREFIX) => {
                let triple = translator.translate(&flag[TARGET_PREFIX.len()..]);
                args.push(OsString::from(format!("{}{}", TARGET_PREFIX, triple)));
            }
            _ => args.push(current),
        }
    }

    DriverCommand {
        program: driver.program().to_string(),
        args,
    }
}

/// Translate a detached `--target` value; non-UTF-8 values are forwarded
/// untouched since they cannot be triples
fn translate_value(translator: &TripleTranslator, value: OsString) -> OsString {
    match value.to_str() {
        Some(triple) => OsString::from(translator.translate(triple)),
        None => value,
    }
}
