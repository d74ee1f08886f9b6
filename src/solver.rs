//! Priority shortest-path solver.
//!
//! Classic label-setting search (Dijkstra) generalized to the priority
//! weight as edge cost: each road costs
//! `weight(road distance, avg(endpoint prevalences), urgency)`. The
//! returned path is optimal with respect to cumulative priority weight,
//! not raw distance; the two can disagree, and that disagreement is the
//! point of the engine.
//!
//! Every failure mode is a sentinel result, never an error: unknown
//! endpoints, disconnected components and zero-prevalence roads all come
//! back as "no route".

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::graph::RoadNetwork;
use crate::traits::EdgeWeighting;
use crate::weighting::PrevalenceWeighting;

/// Outcome of a routing request.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingResult {
    /// Visiting order from source to destination. Absent when no route
    /// exists; callers must check before reading the numeric fields.
    pub path: Option<Vec<String>>,
    /// Cumulative road distance in kilometers.
    pub total_distance: f64,
    /// Cumulative priority weight. Lower is better.
    pub priority_score: f64,
}

impl RoutingResult {
    /// The "no route found" sentinel.
    pub fn no_route() -> Self {
        Self {
            path: None,
            total_distance: f64::INFINITY,
            priority_score: f64::INFINITY,
        }
    }

    pub fn is_routable(&self) -> bool {
        self.path.is_some()
    }
}

/// Frontier entry. Min-heap by cumulative weight; equal weights pop in
/// node id order so repeated runs settle nodes identically.
#[derive(Clone, Copy, PartialEq)]
struct Frontier<'a> {
    weight: f64,
    distance_km: f64,
    node: &'a str,
}

impl Eq for Frontier<'_> {}

impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Labels produced by a search: best cumulative weight and raw distance
/// per reached node, plus predecessor links for path reconstruction.
#[derive(Default)]
pub(crate) struct Settled<'a> {
    pub weights: HashMap<&'a str, f64>,
    pub distances: HashMap<&'a str, f64>,
    pub predecessors: HashMap<&'a str, &'a str>,
}

/// Shortest priority-weighted path from `source` to `destination`.
///
/// Unknown endpoints and unreachable destinations return the no-route
/// sentinel; `source == destination` returns the trivial single-node path.
pub fn shortest_priority_path(
    network: &RoadNetwork,
    source: &str,
    destination: &str,
    urgency: f64,
) -> RoutingResult {
    shortest_path_with(network, source, destination, &PrevalenceWeighting::new(urgency))
}

/// Same search, generic over the cost model.
pub fn shortest_path_with<W: EdgeWeighting>(
    network: &RoadNetwork,
    source: &str,
    destination: &str,
    weighting: &W,
) -> RoutingResult {
    if !network.contains(source) || !network.contains(destination) {
        debug!(source, destination, "routing endpoint not in network");
        return RoutingResult::no_route();
    }

    if source == destination {
        return RoutingResult {
            path: Some(vec![source.to_string()]),
            total_distance: 0.0,
            priority_score: 0.0,
        };
    }

    let settled = settle(network, source, Some(destination), weighting);

    if !settled.predecessors.contains_key(destination) {
        debug!(source, destination, "no route found");
        return RoutingResult::no_route();
    }

    let mut path = vec![destination.to_string()];
    let mut current = destination;
    while let Some(&prev) = settled.predecessors.get(current) {
        path.push(prev.to_string());
        current = prev;
    }
    path.reverse();

    RoutingResult {
        path: Some(path),
        total_distance: settled
            .distances
            .get(destination)
            .copied()
            .unwrap_or(f64::INFINITY),
        priority_score: settled
            .weights
            .get(destination)
            .copied()
            .unwrap_or(f64::INFINITY),
    }
}

/// Label-setting loop shared by the point-to-point search and the
/// one-to-all matrix precompute (`target: None` settles every reachable
/// node). All search state is local to the call; the network is only read.
pub(crate) fn settle<'a, W: EdgeWeighting>(
    network: &'a RoadNetwork,
    source: &str,
    target: Option<&str>,
    weighting: &W,
) -> Settled<'a> {
    let Some(source) = network.key_of(source) else {
        return Settled::default();
    };

    let mut settled = Settled::default();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut frontier = BinaryHeap::new();

    settled.weights.insert(source, 0.0);
    settled.distances.insert(source, 0.0);
    frontier.push(Frontier {
        weight: 0.0,
        distance_km: 0.0,
        node: source,
    });

    while let Some(Frontier {
        weight,
        distance_km,
        node,
    }) = frontier.pop()
    {
        // A node is finalized at most once; later queue entries are stale.
        if !visited.insert(node) {
            continue;
        }

        if target == Some(node) {
            break;
        }

        let Some(current) = network.node(node) else {
            continue;
        };

        for link in network.neighbors(node) {
            let neighbor = link.to.as_str();
            if visited.contains(neighbor) {
                continue;
            }

            let Some(next) = network.node(neighbor) else {
                continue;
            };

            let avg_prevalence = (current.prevalence + next.prevalence) / 2.0;
            let edge_weight = weighting.edge_weight(link.distance_km, avg_prevalence);
            let next_weight = weight + edge_weight;

            let best = settled
                .weights
                .get(neighbor)
                .copied()
                .unwrap_or(f64::INFINITY);
            if next_weight < best {
                settled.weights.insert(neighbor, next_weight);
                settled
                    .distances
                    .insert(neighbor, distance_km + link.distance_km);
                settled.predecessors.insert(neighbor, node);
                frontier.push(Frontier {
                    weight: next_weight,
                    distance_km: distance_km + link.distance_km,
                    node: neighbor,
                });
            }
        }
    }

    settled
}
