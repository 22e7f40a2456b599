//! zigcc - drive `zig cc` / `zig c++` from build systems that speak Rust
//! target triples
//!
//! Install this binary as `CC` (and a copy or symlink whose name contains
//! `++` as `CXX`). Every invocation is rewritten and handed to Zig:
//!
//! ```text
//! zigcc  --target=aarch64-apple-darwin -c a.c   →  zig cc  --target=aarch64-macos -c a.c
//! zigc++ --target x86_64-unknown-linux-gnu a.cc →  zig c++ --target x86_64-linux-gnu a.cc
//! ```

mod cli;
mod command;
mod config;
mod error;
mod exec;
mod target;
mod utils;

use cli::Invocation;
use exec::SystemLauncher;

fn main() {
    let err = Invocation::from_env().execute(&SystemLauncher);
    std::process::exit(err.exit_code())
}
