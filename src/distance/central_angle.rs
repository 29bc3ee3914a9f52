use std::f64::consts::PI;

use log::debug;

use crate::Coordinate;

pub fn degree_to_radian(value: f64) -> f64 {
    (value * PI) / 180.0
}

/// Central angle in radians between `from` and the target `(lat1, long1)`,
/// all in radians, by the spherical law of cosines.
///
/// The cosine is clamped to [-1, 1] before `acos`: for identical or antipodal
/// points rounding can push it just outside the domain.
pub fn central_angle(from: Coordinate, lat1: f64, long1: f64) -> f64 {
    let diff_longitudes = (from.longitude - long1).abs();
    let cosine = lat1.sin() * from.latitude.sin()
        + lat1.cos() * from.latitude.cos() * diff_longitudes.cos();

    if !(-1.0..=1.0).contains(&cosine) {
        debug!("clamping central angle cosine {cosine} into [-1, 1]");
    }
    cosine.clamp(-1.0, 1.0).acos()
}

/// Rounds half away from zero to two decimal places.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn degree_to_radian_known_values() {
        assert_eq!(degree_to_radian(0.0), 0.0);
        assert_approx_eq!(degree_to_radian(180.0), PI);
        assert_approx_eq!(degree_to_radian(-90.0), -FRAC_PI_2);
    }

    #[test]
    fn quarter_turn_along_equator() {
        let angle = central_angle(Coordinate::ORIGIN, 0.0, FRAC_PI_2);
        assert_approx_eq!(angle, FRAC_PI_2);
    }

    #[test]
    fn identical_points_do_not_produce_nan() {
        let from = Coordinate::new(28.5272803, 77.0688994).to_radians();
        let angle = central_angle(from, from.latitude, from.longitude);
        assert!(!angle.is_nan());
        assert_approx_eq!(angle, 0.0, 1e-7);
    }

    #[test]
    fn antipodal_points_give_pi() {
        let from = Coordinate::new(45.0, 10.0).to_radians();
        let target = Coordinate::new(-45.0, -170.0).to_radians();
        let angle = central_angle(from, target.latitude, target.longitude);
        assert!(!angle.is_nan());
        assert_approx_eq!(angle, PI, 1e-7);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_to_hundredths(1234.5678), 1234.57);
        assert_eq!(round_to_hundredths(1234.561), 1234.56);
        assert_eq!(round_to_hundredths(0.0), 0.0);
    }
}
