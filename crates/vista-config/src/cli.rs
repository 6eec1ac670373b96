//! Command-line argument parsing for Vista.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Vista command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "vista", about = "Vista LOD compositor")]
pub struct CliArgs {
    /// LOD tier bias.
    #[arg(long, allow_hyphen_values = true)]
    pub lod_bias: Option<i32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(bias) = args.lod_bias {
            self.lod.bias = bias;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            lod_bias: Some(0),
            log_level: Some("trace".to_string()),
            config: None,
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.lod.bias, 0);
        assert_eq!(config.debug.log_level, "trace");
        // Non-overridden fields retain defaults
        assert_eq!(config.lod.flats_list, "flats");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_negative_bias() {
        let args = CliArgs::try_parse_from(["vista", "--lod-bias", "-2", "--config", "/tmp/v"])
            .unwrap();
        assert_eq!(args.lod_bias, Some(-2));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/v")));
    }
}
