pub mod config;
pub mod distance;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use config::{CalculatorConfig, ConfigError};
pub use distance::calculator::GreatCircleDistance;
pub use validation::CoordinateError;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default query location (New Delhi, India), in degrees.
pub const NEW_DELHI: Coordinate = Coordinate {
    latitude: 28.5272803,
    longitude: 77.0688994,
};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Converts a coordinate given in degrees into radians.
    pub fn to_radians(self) -> Coordinate {
        Coordinate {
            latitude: distance::central_angle::degree_to_radian(self.latitude),
            longitude: distance::central_angle::degree_to_radian(self.longitude),
        }
    }
}
