//! Haversine distance estimator (fallback when no measured road data).
//!
//! Uses great-circle distance between coordinates. Less accurate than
//! measured road distances (ignores the actual road) but always available.

use crate::traits::DistanceEstimator;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two (lat, lon) points in kilometers.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Haversine-based [`DistanceEstimator`].
///
/// `road_factor` inflates the great-circle distance to approximate the
/// winding of real roads; 1.0 means straight-line distance.
#[derive(Debug, Clone)]
pub struct HaversineEstimator {
    pub road_factor: f64,
}

impl Default for HaversineEstimator {
    fn default() -> Self {
        Self { road_factor: 1.0 }
    }
}

impl HaversineEstimator {
    pub fn new(road_factor: f64) -> Self {
        Self { road_factor }
    }
}

impl DistanceEstimator for HaversineEstimator {
    fn distance_km(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        haversine_km(from, to) * self.road_factor
    }
}
