use serde::Serialize;

use super::epoch::{self, EpochError};
use crate::oem::StateVector;

/// Spherical Earth approximation; no ellipsoid model.
pub const MEAN_EARTH_RADIUS_KM: f64 = 6378.137;

/// Earth rotation in degrees per hour of epoch time.
const DEGREES_PER_HOUR: f64 = 360.0 / 24.0;
/// Rotation is measured from this hour of the day.
const ROTATION_REFERENCE_HOUR: f64 = 12.0;
/// Empirical offset aligning inertial-frame longitude to ground-fixed.
const LONGITUDE_OFFSET_DEG: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geodetic {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_km: f64,
}

/// Magnitude of the velocity vector, km/s.
pub fn speed_km_s(record: &StateVector) -> f64 {
    let [vx, vy, vz] = record.velocity;
    (vx * vx + vy * vy + vz * vz).sqrt()
}

/// Maps the inertial-frame position to latitude, longitude and altitude.
///
/// Longitude takes the raw `atan2(y, x)` angle and backs out Earth's
/// rotation since 12:00 at 15 deg/hour, plus a fixed 24 degree alignment
/// offset, from the hour and minute fields of the epoch. The correction is
/// bounded, so a single wrap always lands the result in [-180, 180].
pub fn geodetic(record: &StateVector) -> Result<Geodetic, EpochError> {
    let (hour, minute) = epoch::hour_minute(&record.epoch)?;
    let [x, y, z] = record.position;

    let latitude_deg = z.atan2((x * x + y * y).sqrt()).to_degrees();

    let rotation_deg =
        ((hour as f64 - ROTATION_REFERENCE_HOUR) + minute as f64 / 60.0) * DEGREES_PER_HOUR;
    let raw = y.atan2(x).to_degrees() - rotation_deg + LONGITUDE_OFFSET_DEG;
    let longitude_deg = if raw > 180.0 {
        raw - 360.0
    } else if raw < -180.0 {
        raw + 360.0
    } else {
        raw
    };

    let altitude_km = (x * x + y * y + z * z).sqrt() - MEAN_EARTH_RADIUS_KM;

    Ok(Geodetic {
        latitude_deg,
        longitude_deg,
        altitude_km,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn record(epoch: &str, position: [f64; 3], velocity: [f64; 3]) -> StateVector {
        StateVector {
            epoch: epoch.to_string(),
            position,
            velocity,
        }
    }

    #[test]
    fn speed_of_equatorial_sample() {
        let sv = record("2023-058T12:00:00.000Z", [6800.0, 0.0, 0.0], [0.0, 7.5, 0.0]);
        assert_approx_eq!(speed_km_s(&sv), 7.5);
    }

    #[test]
    fn speed_is_component_order_invariant_and_non_negative() {
        let a = record("2023-058T12:00:00.000Z", [0.0; 3], [1.0, -2.0, 3.0]);
        let b = record("2023-058T12:00:00.000Z", [0.0; 3], [3.0, 1.0, -2.0]);
        assert_approx_eq!(speed_km_s(&a), speed_km_s(&b));
        assert!(speed_km_s(&a) >= 0.0);
    }

    #[test]
    fn geodetic_of_equatorial_sample() {
        let sv = record("2023-058T12:00:00.000Z", [6800.0, 0.0, 0.0], [0.0, 7.5, 0.0]);
        let geo = geodetic(&sv).unwrap();
        assert_approx_eq!(geo.latitude_deg, 0.0);
        // Raw longitude 0, rotation term 0 at 12:00, fixed +24 offset.
        assert_approx_eq!(geo.longitude_deg, 24.0);
        assert_approx_eq!(geo.altitude_km, 421.863);
    }

    #[test]
    fn latitude_of_polar_sample() {
        let sv = record("2023-058T12:00:00.000Z", [0.0, 0.0, 6800.0], [7.5, 0.0, 0.0]);
        let geo = geodetic(&sv).unwrap();
        assert_approx_eq!(geo.latitude_deg, 90.0);
    }

    #[test]
    fn longitude_wraps_into_range() {
        // Early-hour epochs push the correction far positive; late-hour far
        // negative. Either way one wrap must land in [-180, 180].
        for (hour, minute) in [(0, 0), (5, 30), (12, 0), (18, 45), (23, 59)] {
            for raw_deg in [-179.0_f64, -90.0, 0.0, 90.0, 179.0] {
                let rad = raw_deg.to_radians();
                let sv = record(
                    &format!("2023-058T{hour:02}:{minute:02}:00.000Z"),
                    [6800.0 * rad.cos(), 6800.0 * rad.sin(), 0.0],
                    [0.0, 7.5, 0.0],
                );
                let geo = geodetic(&sv).unwrap();
                assert!(
                    (-180.0..=180.0).contains(&geo.longitude_deg),
                    "longitude {} out of range for hour={} minute={} raw={}",
                    geo.longitude_deg,
                    hour,
                    minute,
                    raw_deg
                );
            }
        }
    }

    #[test]
    fn geodetic_rejects_malformed_epoch() {
        let sv = record("not-an-epoch", [6800.0, 0.0, 0.0], [0.0, 7.5, 0.0]);
        assert!(geodetic(&sv).is_err());
    }
}
