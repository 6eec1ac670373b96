//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vista_lod::DEFAULT_LOD_BIAS;
use vista_scene::{BackgroundSizes, GROUND_SIZE, SKY_SIZE};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Level-of-detail selection settings.
    pub lod: LodConfig,
    /// Ground and sky plane settings.
    pub background: BackgroundConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Level-of-detail configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LodConfig {
    /// Tier bias (higher = keep detailed tiers longer).
    pub bias: i32,
    /// Render list receiving flat/billboard parts.
    pub flats_list: String,
    /// Render list receiving volumetric parts.
    pub volumes_list: String,
}

/// Background plane configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Ground plane edge length in world units.
    pub ground_size: f32,
    /// Sky plane edge length in world units.
    pub sky_size: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for LodConfig {
    fn default() -> Self {
        Self {
            bias: DEFAULT_LOD_BIAS,
            flats_list: "flats".to_string(),
            volumes_list: "volumes".to_string(),
        }
    }
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            ground_size: GROUND_SIZE,
            sky_size: SKY_SIZE,
        }
    }
}

impl BackgroundConfig {
    /// Plane sizes for the background factory.
    pub fn sizes(&self) -> BackgroundSizes {
        BackgroundSizes {
            ground: self.ground_size,
            sky: self.sky_size,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Platform config directory for Vista, if the platform has one.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vista"))
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Check values that parse fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lod.flats_list.is_empty() {
            return Err(ConfigError::Invalid {
                field: "lod.flats_list",
                reason: "list id must not be empty",
            });
        }
        if self.lod.volumes_list.is_empty() {
            return Err(ConfigError::Invalid {
                field: "lod.volumes_list",
                reason: "list id must not be empty",
            });
        }
        for (field, size) in [
            ("background.ground_size", self.background.ground_size),
            ("background.sky_size", self.background.sky_size),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "plane size must be positive and finite",
                });
            }
        }
        Ok(())
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(ConfigError::Parse)
    }
}
