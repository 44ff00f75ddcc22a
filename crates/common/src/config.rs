use crate::color::{ColorParseError, Rgb};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating a galaxy configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("color error: {0}")]
    Color(#[from] ColorParseError),
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
}

/// Galaxy shape and palette parameters.
///
/// All fields have defaults matching the reference visual, so an empty
/// config file (or none at all) yields the stock galaxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalaxyConfig {
    /// Number of particles in the field.
    pub particle_count: usize,
    /// Disc radius. Cylindrical particle radius is uniform over [0, radius].
    pub radius: f32,
    /// Disc thickness. Particle height is uniform over [-thickness/2, thickness/2].
    pub thickness: f32,
    /// Color at the disc center.
    pub inner_color: Rgb,
    /// Color at the disc rim.
    pub outer_color: Rgb,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            particle_count: 10_000,
            radius: 2.0,
            thickness: 0.5,
            inner_color: Rgb::from_hex(0xff6030),
            outer_color: Rgb::from_hex(0x1b3984),
        }
    }
}

impl GalaxyConfig {
    /// Load and validate a config from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Check shape parameters. Colors are already validated by parsing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "radius",
                value: self.radius,
            });
        }
        if self.thickness < 0.0 {
            return Err(ConfigError::Negative {
                field: "thickness",
                value: self.thickness,
            });
        }
        Ok(())
    }
}
