use serde::Deserialize;
use thiserror::Error;

use crate::validation::{validate_coordinate, CoordinateError};
use crate::{Coordinate, EARTH_RADIUS_KM, NEW_DELHI};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid radius {0}: must be a finite positive number of kilometers")]
    InvalidRadius(f64),
    #[error("Invalid default location: {0}")]
    InvalidLocation(#[from] CoordinateError),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Calculator settings. Missing fields fall back to Earth's mean radius and
/// New Delhi.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalculatorConfig {
    pub radius_km: f64,
    /// Reference location in degrees.
    pub default_location: Coordinate,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            radius_km: EARTH_RADIUS_KM,
            default_location: NEW_DELHI,
        }
    }
}

impl CalculatorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.radius_km.is_finite() || self.radius_km <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius_km));
        }
        validate_coordinate(
            self.default_location.latitude,
            self.default_location.longitude,
        )?;
        Ok(())
    }
}
