use log::{debug, trace};

use crate::config::{CalculatorConfig, ConfigError};
use crate::distance::central_angle::{central_angle, degree_to_radian, round_to_hundredths};
use crate::validation::{self, validate_coordinate, CoordinateError};
use crate::{Coordinate, EARTH_RADIUS_KM, NEW_DELHI};

/// Great-circle distance from a settable reference location, on a sphere of
/// fixed radius.
///
/// The reference location is stored in radians and starts at `(0, 0)`.
/// Updating it takes `&mut self`; use [`GreatCircleDistance::with_from_location`]
/// to derive a new calculator instead of mutating a shared one.
#[derive(Clone, Debug, PartialEq)]
pub struct GreatCircleDistance {
    radius: f64,
    from_location: Coordinate,
}

impl Default for GreatCircleDistance {
    fn default() -> Self {
        GreatCircleDistance::new(EARTH_RADIUS_KM)
    }
}

impl GreatCircleDistance {
    /// `radius` is in kilometers and stored as given.
    pub fn new(radius: f64) -> Self {
        GreatCircleDistance {
            radius,
            from_location: Coordinate::ORIGIN,
        }
    }

    pub fn from_config(config: &CalculatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let location = config.default_location;
        let calculator = GreatCircleDistance::new(config.radius_km)
            .with_from_location(location.latitude, location.longitude)?;
        Ok(calculator)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Reference location in radians.
    pub fn from_location(&self) -> Coordinate {
        self.from_location
    }

    /// Replaces the reference location. On error the previous location is kept.
    pub fn set_from_location(
        &mut self,
        latitude: f64,
        longitude: f64,
    ) -> Result<(), CoordinateError> {
        let location = validate_coordinate(latitude, longitude)?;
        self.from_location = location.to_radians();
        debug!("reference location set to ({latitude}, {longitude})");
        Ok(())
    }

    pub fn set_default_from_location(&mut self) -> Result<(), CoordinateError> {
        self.set_from_location(NEW_DELHI.latitude, NEW_DELHI.longitude)
    }

    pub fn with_from_location(
        mut self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, CoordinateError> {
        self.set_from_location(latitude, longitude)?;
        Ok(self)
    }

    pub fn is_valid_latitude(latitude: f64) -> bool {
        validation::is_valid_latitude(latitude)
    }

    pub fn is_valid_longitude(longitude: f64) -> bool {
        validation::is_valid_longitude(longitude)
    }

    pub fn degree_to_radian(value: f64) -> f64 {
        degree_to_radian(value)
    }

    /// Distance in kilometers, rounded to two decimals, from the reference
    /// location to `(latitude, longitude)` given in degrees.
    ///
    /// Only the target is validated here.
    pub fn get_distance_to_location_in_km(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<f64, CoordinateError> {
        let target = validate_coordinate(latitude, longitude)?.to_radians();
        let angle = self.get_central_angle(target.latitude, target.longitude);
        let distance = round_to_hundredths(self.radius * angle);
        trace!("distance to ({latitude}, {longitude}) = {distance} km");
        Ok(distance)
    }

    pub fn get_distance_to_default_location_in_km(&self) -> Result<f64, CoordinateError> {
        self.get_distance_to_location_in_km(NEW_DELHI.latitude, NEW_DELHI.longitude)
    }

    /// Central angle in radians to a target already expressed in radians.
    pub fn get_central_angle(&self, lat1: f64, long1: f64) -> f64 {
        central_angle(self.from_location, lat1, long1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn new_starts_at_origin() {
        let calc = GreatCircleDistance::new(1.0);
        assert_eq!(calc.radius(), 1.0);
        assert_eq!(calc.from_location(), Coordinate::ORIGIN);
        assert_eq!(GreatCircleDistance::default().radius(), 6371.0);
    }

    #[test]
    fn set_from_location_stores_radians() {
        let mut calc = GreatCircleDistance::default();
        calc.set_from_location(45.0, -90.0).unwrap();
        let loc = calc.from_location();
        assert_approx_eq!(loc.latitude, std::f64::consts::FRAC_PI_4);
        assert_approx_eq!(loc.longitude, -std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn failed_set_keeps_previous_location() {
        let mut calc = GreatCircleDistance::default();
        calc.set_from_location(10.0, 20.0).unwrap();
        let before = calc.from_location();

        let err = calc.set_from_location(91.0, 0.0).unwrap_err();
        assert!(matches!(err, CoordinateError::InvalidLatitude { .. }));
        let err = calc.set_from_location(0.0, -180.0).unwrap_err();
        assert!(matches!(err, CoordinateError::InvalidLongitude { .. }));
        assert_eq!(calc.from_location(), before);
    }

    #[test]
    fn default_location_to_itself_is_zero() {
        let mut calc = GreatCircleDistance::default();
        calc.set_default_from_location().unwrap();
        assert_eq!(calc.get_distance_to_default_location_in_km().unwrap(), 0.0);
    }

    #[test]
    fn quarter_of_equator() {
        let calc = GreatCircleDistance::default();
        assert_eq!(calc.get_distance_to_location_in_km(0.0, 90.0).unwrap(), 10007.54);
    }

    #[test]
    fn target_longitude_is_validated() {
        let calc = GreatCircleDistance::default();
        let err = calc.get_distance_to_location_in_km(0.0, 181.0).unwrap_err();
        assert_eq!(err, CoordinateError::InvalidLongitude { value: 181.0 });
    }

    #[test]
    fn with_from_location_returns_updated_copy() {
        let base = GreatCircleDistance::default();
        let moved = base.clone().with_from_location(0.0, 90.0).unwrap();
        assert_eq!(base.from_location(), Coordinate::ORIGIN);
        assert_eq!(moved.get_distance_to_location_in_km(0.0, 0.0).unwrap(), 10007.54);
    }

    #[test]
    fn from_config_applies_radius_and_location() {
        let config = CalculatorConfig {
            radius_km: 1.0,
            default_location: Coordinate::new(0.0, 0.0),
        };
        let calc = GreatCircleDistance::from_config(&config).unwrap();
        // Unit sphere: a quarter turn is pi/2 rounded.
        assert_eq!(calc.get_distance_to_location_in_km(0.0, 90.0).unwrap(), 1.57);
    }
}
