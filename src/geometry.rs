//! Route geometry as coordinate sequences.
//!
//! This module provides a type for working with a computed route as a
//! decoded coordinate sequence. Any encoding (polyline formats, GeoJSON)
//! happens at API boundaries, not within the routing core.

use serde::{Deserialize, Serialize};

use crate::graph::RoadNetwork;

/// A route geometry as decoded (latitude, longitude) points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    points: Vec<(f64, f64)>,
}

impl RouteGeometry {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Coordinates of each path node in visiting order. Ids missing from
    /// the network are skipped.
    pub fn from_path(network: &RoadNetwork, path: &[String]) -> Self {
        let points = path
            .iter()
            .filter_map(|id| network.node(id))
            .map(|node| node.position)
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the geometry and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}
