//! Route detail expansion and trip priority rating.

use serde::Serialize;

use crate::graph::RoadNetwork;
use crate::solver::shortest_priority_path;
use crate::weighting::DEFAULT_URGENCY;

/// One leg of a computed route, for hosting applications to display or
/// serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSegment {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub from_prevalence: f64,
    pub to_prevalence: f64,
}

/// Expand a path into one record per consecutive pair.
///
/// Solver-produced paths always have a direct road between consecutive
/// nodes; hand-assembled paths may not, in which case the distance falls
/// back to a sub-search between the pair, and to zero if even that fails.
/// Paths shorter than two nodes expand to nothing.
pub fn expand_route_details(network: &RoadNetwork, path: &[String]) -> Vec<RouteSegment> {
    if path.len() < 2 {
        return Vec::new();
    }

    path.windows(2)
        .map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            let distance_km = match network.direct_distance(from, to) {
                Some(km) => km,
                None => {
                    let hop = shortest_priority_path(network, from, to, DEFAULT_URGENCY);
                    if hop.is_routable() {
                        hop.total_distance
                    } else {
                        0.0
                    }
                }
            };

            RouteSegment {
                from: from.clone(),
                to: to.clone(),
                distance_km,
                from_prevalence: network.prevalence(from).unwrap_or(0.0),
                to_prevalence: network.prevalence(to).unwrap_or(0.0),
            }
        })
        .collect()
}

/// Score-per-km threshold below which a trip rates High.
const HIGH_SCORE_PER_KM: f64 = 1.5;
/// Score-per-km threshold below which a trip rates Medium.
const MEDIUM_SCORE_PER_KM: f64 = 3.0;

/// Delivery priority class of a computed route. Lower priority score per
/// kilometer means the route serves higher-prevalence areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TripPriority {
    High,
    Medium,
    Low,
}

impl TripPriority {
    pub fn classify(priority_score: f64, total_distance_km: f64) -> Self {
        let score_per_km = if total_distance_km > 0.0 {
            priority_score / total_distance_km
        } else {
            priority_score
        };

        if score_per_km < HIGH_SCORE_PER_KM {
            TripPriority::High
        } else if score_per_km < MEDIUM_SCORE_PER_KM {
            TripPriority::Medium
        } else {
            TripPriority::Low
        }
    }
}
