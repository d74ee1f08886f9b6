//! Greedy full-network tour constructors and tour metrics.
//!
//! Both constructors issue a fresh solver query per candidate per step,
//! O(V^2) queries overall. That is fine at the network sizes the engine
//! targets; callers routing much larger networks should precompute a
//! `PriorityMatrix` instead of re-searching.

use std::collections::HashSet;

use tracing::debug;

use crate::graph::RoadNetwork;
use crate::solver::{RoutingResult, shortest_priority_path};
use crate::weighting::{DEFAULT_URGENCY, priority_weight};

/// Road distance and priority weight summed along a tour path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourMetrics {
    pub total_distance: f64,
    pub priority_score: f64,
}

/// Nearest-neighbor tour: starting at `start`, repeatedly move to the
/// unvisited node reachable with the lowest cumulative priority weight.
///
/// Stops early when no unvisited node is reachable; partial coverage is an
/// ordinary outcome, not an error. Candidates are scanned in id order so
/// ties resolve deterministically.
pub fn nearest_priority_tour(network: &RoadNetwork, start: &str, urgency: f64) -> RoutingResult {
    let Some(start) = network.key_of(start) else {
        return RoutingResult::no_route();
    };

    let candidates = network.sorted_node_ids();
    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut path: Vec<String> = vec![start.to_string()];
    let mut current = start;

    while visited.len() < candidates.len() {
        let mut best_next: Option<&str> = None;
        let mut best_weight = f64::INFINITY;

        for &candidate in &candidates {
            if visited.contains(candidate) {
                continue;
            }

            let leg = shortest_priority_path(network, current, candidate, urgency);
            if leg.is_routable() && leg.priority_score < best_weight {
                best_weight = leg.priority_score;
                best_next = Some(candidate);
            }
        }

        let Some(next) = best_next else {
            debug!(
                current,
                unvisited = candidates.len() - visited.len(),
                "tour stopped early, remaining nodes unreachable"
            );
            break;
        };

        visited.insert(next);
        path.push(next.to_string());
        current = next;
    }

    let metrics = tour_metrics(network, &path, urgency);
    RoutingResult {
        path: Some(path),
        total_distance: metrics.total_distance,
        priority_score: metrics.priority_score,
    }
}

/// Prevalence-greedy tour: starting at `start`, repeatedly move to the
/// unvisited node maximizing `prevalence * urgency / distance`.
///
/// The inner distance query runs at neutral urgency; `urgency` applies only
/// in the outer score. Unreachable and zero-distance candidates are not
/// scored at all. Stops early when no candidate is reachable.
pub fn greedy_priority_tour(network: &RoadNetwork, start: &str, urgency: f64) -> RoutingResult {
    let Some(start) = network.key_of(start) else {
        return RoutingResult::no_route();
    };

    let candidates = network.sorted_node_ids();
    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut path: Vec<String> = vec![start.to_string()];
    let mut current = start;

    while visited.len() < candidates.len() {
        let mut best_next: Option<&str> = None;
        let mut best_priority = f64::NEG_INFINITY;

        for &candidate in &candidates {
            if visited.contains(candidate) {
                continue;
            }

            let Some(prevalence) = network.prevalence(candidate) else {
                continue;
            };

            let leg = shortest_priority_path(network, current, candidate, DEFAULT_URGENCY);
            if !leg.is_routable() || leg.total_distance <= 0.0 {
                continue;
            }

            let score = (prevalence * urgency) / leg.total_distance;
            if score > best_priority {
                best_priority = score;
                best_next = Some(candidate);
            }
        }

        let Some(next) = best_next else {
            debug!(
                current,
                unvisited = candidates.len() - visited.len(),
                "tour stopped early, remaining nodes unreachable"
            );
            break;
        };

        visited.insert(next);
        path.push(next.to_string());
        current = next;
    }

    let metrics = tour_metrics(network, &path, urgency);
    RoutingResult {
        path: Some(path),
        total_distance: metrics.total_distance,
        priority_score: metrics.priority_score,
    }
}

/// Sum distance and priority weight along an already-built tour path.
///
/// Consecutive stops joined by a direct road contribute that road's
/// distance and weight. Stops that are not adjacent are charged the full
/// connecting route via a sub-search, the same fallback policy route
/// expansion uses; a pair with no route at all contributes nothing.
pub fn tour_metrics(network: &RoadNetwork, path: &[String], urgency: f64) -> TourMetrics {
    let mut total_distance = 0.0;
    let mut priority_score = 0.0;

    for pair in path.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);

        match network.direct_distance(from, to) {
            Some(distance_km) => {
                let from_prevalence = network.prevalence(from).unwrap_or(0.0);
                let to_prevalence = network.prevalence(to).unwrap_or(0.0);
                let avg_prevalence = (from_prevalence + to_prevalence) / 2.0;

                total_distance += distance_km;
                priority_score += priority_weight(distance_km, avg_prevalence, urgency);
            }
            None => {
                let leg = shortest_priority_path(network, from, to, urgency);
                if leg.is_routable() {
                    total_distance += leg.total_distance;
                    priority_score += leg.priority_score;
                }
            }
        }
    }

    TourMetrics {
        total_distance,
        priority_score,
    }
}
