//! Toolkit configuration
//!
//! All tunable values live in [`VoxelKitConfig`]: the voxel cell size, the
//! maximum a surface may grow to, and the two pacing durations (surface
//! resize animation, voxel materialization interval). Configurations are
//! serializable and can be loaded from TOML or RON files.

use serde::{Deserialize, Serialize};

/// Compiled-in defaults, used when no configuration file is supplied and by
/// the default delegate implementation.
pub mod constants {
    /// Default edge length of a voxel cell, in meters
    pub const VOXEL_SIDE_LENGTH: f32 = 0.05;

    /// Maximum width a detected surface may grow to, in meters
    pub const MAX_SURFACE_WIDTH: f32 = 2.0;

    /// Maximum length a detected surface may grow to, in meters
    pub const MAX_SURFACE_LENGTH: f32 = 2.0;

    /// Duration of an animated surface resize, in seconds
    pub const RESIZE_DURATION: f32 = 0.1;

    /// Delay between consecutive voxel materializations, in seconds
    pub const MATERIALIZE_INTERVAL: f32 = 0.01;
}

/// Toolkit configuration
///
/// # Examples
/// ```
/// # use voxel_kit::config::VoxelKitConfig;
/// let config = VoxelKitConfig::new()
///     .with_voxel_side_length(0.1)
///     .with_surface_maxima(1.0, 1.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoxelKitConfig {
    /// Edge length of a voxel cell, in meters
    pub voxel_side_length: f32,

    /// Maximum surface width, in meters
    pub max_surface_width: f32,

    /// Maximum surface length, in meters
    pub max_surface_length: f32,

    /// Duration of an animated surface resize, in seconds
    pub resize_duration: f32,

    /// Delay between consecutive voxel materializations, in seconds
    pub materialize_interval: f32,
}

impl Default for VoxelKitConfig {
    fn default() -> Self {
        Self {
            voxel_side_length: constants::VOXEL_SIDE_LENGTH,
            max_surface_width: constants::MAX_SURFACE_WIDTH,
            max_surface_length: constants::MAX_SURFACE_LENGTH,
            resize_duration: constants::RESIZE_DURATION,
            materialize_interval: constants::MATERIALIZE_INTERVAL,
        }
    }
}

impl VoxelKitConfig {
    /// Create a configuration with the compiled-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the voxel cell edge length
    pub fn with_voxel_side_length(mut self, side_length: f32) -> Self {
        self.voxel_side_length = side_length;
        self
    }

    /// Set the maximum surface width and length
    pub fn with_surface_maxima(mut self, width: f32, length: f32) -> Self {
        self.max_surface_width = width;
        self.max_surface_length = length;
        self
    }

    /// Set the resize animation duration
    pub fn with_resize_duration(mut self, duration: f32) -> Self {
        self.resize_duration = duration;
        self
    }

    /// Set the materialization tick interval
    pub fn with_materialize_interval(mut self, interval: f32) -> Self {
        self.materialize_interval = interval;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.voxel_side_length <= 0.0 {
            return Err(format!(
                "Voxel side length must be positive, got {}",
                self.voxel_side_length
            ));
        }

        if self.max_surface_width < self.voxel_side_length {
            return Err(format!(
                "Max surface width {} cannot hold a single voxel of side {}",
                self.max_surface_width, self.voxel_side_length
            ));
        }

        if self.max_surface_length < self.voxel_side_length {
            return Err(format!(
                "Max surface length {} cannot hold a single voxel of side {}",
                self.max_surface_length, self.voxel_side_length
            ));
        }

        if self.resize_duration < 0.0 {
            return Err(format!(
                "Resize duration cannot be negative, got {}",
                self.resize_duration
            ));
        }

        if self.materialize_interval < 0.0 {
            return Err(format!(
                "Materialize interval cannot be negative, got {}",
                self.materialize_interval
            ));
        }

        Ok(())
    }

    /// Load configuration from a TOML or RON file
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to a TOML or RON file
    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
