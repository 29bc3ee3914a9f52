use thiserror::Error;

use crate::Coordinate;

/// Rejected coordinate input. The message text is fixed; the offending value
/// is kept alongside for diagnostics.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("Invalid Latitude, Latitude should be in between -90 and 90!")]
    InvalidLatitude { value: f64 },
    #[error("Invalid Longitude, Longitude should be in between -180 and 180!")]
    InvalidLongitude { value: f64 },
}

impl CoordinateError {
    pub fn value(&self) -> f64 {
        match *self {
            CoordinateError::InvalidLatitude { value } => value,
            CoordinateError::InvalidLongitude { value } => value,
        }
    }
}

/// True iff `-90 < latitude < 90`.
pub fn is_valid_latitude(latitude: f64) -> bool {
    latitude > -90.0 && latitude < 90.0
}

/// True iff `-180 < longitude < 180`.
pub fn is_valid_longitude(longitude: f64) -> bool {
    longitude > -180.0 && longitude < 180.0
}

/// Checks latitude, then longitude. Only the first failure is reported.
pub fn validate_coordinate(latitude: f64, longitude: f64) -> Result<Coordinate, CoordinateError> {
    if !is_valid_latitude(latitude) {
        return Err(CoordinateError::InvalidLatitude { value: latitude });
    }
    if !is_valid_longitude(longitude) {
        return Err(CoordinateError::InvalidLongitude { value: longitude });
    }
    Ok(Coordinate::new(latitude, longitude))
}
