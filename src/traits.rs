//! Core seam traits for the routing engine.
//!
//! These are intentionally minimal. The solver is generic over the cost
//! model, and network builders are generic over the distance source, so
//! hosting applications can plug in their own without touching the engine.

/// Cost model applied to a single road when relaxing it during a search.
///
/// `distance_km` is the road length and `prevalence` the average disease
/// prevalence of its two endpoints. Implementations must be pure: the
/// solver may evaluate the same road any number of times.
pub trait EdgeWeighting {
    fn edge_weight(&self, distance_km: f64, prevalence: f64) -> f64;
}

/// Source of distances between coordinate pairs, for building networks
/// from locations that have no measured road distance.
pub trait DistanceEstimator {
    /// Estimated distance in kilometers between two (lat, lon) points.
    fn distance_km(&self, from: (f64, f64), to: (f64, f64)) -> f64;
}
