//! Mesh configuration with RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::mesh::MAX_LEVEL;

/// Errors that can occur when loading or saving a mesh configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}

/// Parameters of an [`EarthMesh`](crate::EarthMesh).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeshConfig {
    /// Orientation of the root volume: longitude in degrees of root
    /// diamond `A`'s west corner.
    pub theta_deg: f64,
    /// Maximum supported subdivision depth. Addresses have
    /// `levelmax + 1` labels.
    pub levelmax: u32,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            theta_deg: -25.0,
            levelmax: 20,
        }
    }
}

impl MeshConfig {
    /// Check that the parameters describe a usable mesh.
    pub fn validate(&self) -> Result<(), MeshError> {
        if !self.theta_deg.is_finite() {
            return Err(MeshError::InvalidConfiguration(format!(
                "theta_deg must be finite, got {}",
                self.theta_deg
            )));
        }
        if self.levelmax == 0 {
            return Err(MeshError::InvalidConfiguration(
                "levelmax must be at least 1".to_string(),
            ));
        }
        if self.levelmax > MAX_LEVEL {
            return Err(MeshError::InvalidConfiguration(format!(
                "levelmax {} exceeds the maximum of {MAX_LEVEL}",
                self.levelmax
            )));
        }
        Ok(())
    }

    /// Load a config from a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }

    /// Save this config to a RON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::new();
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;
        std::fs::write(path, serialized).map_err(ConfigError::WriteError)
    }
}
