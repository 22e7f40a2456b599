//! User configuration

pub mod zigcc_toml;

pub use zigcc_toml::{LoadedConfig, ZigccConfig};
