//! Process handoff to the destination driver

pub mod launcher;

pub use launcher::{LaunchError, ProcessLauncher, SystemLauncher};
