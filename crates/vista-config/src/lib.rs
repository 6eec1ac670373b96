//! Configuration system for Vista.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports CLI overrides via clap, hot-reload detection, and forward/backward
//! compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{BackgroundConfig, Config, DebugConfig, LodConfig};
pub use error::ConfigError;
