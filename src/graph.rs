//! Road network model.
//!
//! An immutable undirected weighted graph: administrative areas as nodes,
//! roads as edges carrying measured distances in kilometers. Built once
//! through [`RoadNetworkBuilder`], then shared read-only across routing
//! requests. No global dataset lives here; callers pass the network by
//! reference into every engine call.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::warn;

use crate::traits::DistanceEstimator;

/// A routable location (an administrative area, e.g. an LGA).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// (latitude, longitude) in degrees.
    pub position: (f64, f64),
    /// Disease prevalence in `[0, 1]`.
    pub prevalence: f64,
    pub population: u64,
}

/// One traversable direction of a road out of a node.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadLink {
    pub to: String,
    pub distance_km: f64,
}

#[derive(Debug)]
pub enum NetworkError {
    UnknownEndpoint { from: String, to: String, missing: String },
    SelfLoop { node: String },
    DuplicateRoad { from: String, to: String },
    NonPositiveDistance { from: String, to: String, distance_km: f64 },
    PrevalenceOutOfRange { node: String, prevalence: f64 },
}

/// Immutable undirected road network.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    nodes: HashMap<String, Node>,
    adjacency: HashMap<String, Vec<RoadLink>>,
    road_count: usize,
}

impl RoadNetwork {
    pub fn builder() -> RoadNetworkBuilder {
        RoadNetworkBuilder::new()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Canonical borrowed key for `id`, if the node exists. Lets searches
    /// keep per-node state keyed by `&str` borrowed from the network.
    pub(crate) fn key_of(&self, id: &str) -> Option<&str> {
        self.nodes.get_key_value(id).map(|(key, _)| key.as_str())
    }

    pub fn prevalence(&self, id: &str) -> Option<f64> {
        self.nodes.get(id).map(|node| node.prevalence)
    }

    /// Roads out of `id`. Empty for unknown nodes.
    pub fn neighbors(&self, id: &str) -> &[RoadLink] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distance of the direct road between `from` and `to`, if one exists.
    pub fn direct_distance(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .find(|link| link.to == to)
            .map(|link| link.distance_km)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn road_count(&self) -> usize {
        self.road_count
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Node ids in lexicographic order, for deterministic scans.
    pub fn sorted_node_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn is_connected(&self) -> bool {
        self.connected_components().len() <= 1
    }

    /// Partition of the node set into connected components, largest first.
    /// Component members are sorted for stable output.
    pub fn connected_components(&self) -> Vec<Vec<String>> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut components = Vec::new();

        for start in self.sorted_node_ids() {
            if seen.contains(start) {
                continue;
            }

            let mut component = Vec::new();
            let mut queue = VecDeque::from([start]);
            seen.insert(start);

            while let Some(id) = queue.pop_front() {
                component.push(id.to_string());
                for link in self.neighbors(id) {
                    if seen.insert(link.to.as_str()) {
                        queue.push_back(link.to.as_str());
                    }
                }
            }

            component.sort_unstable();
            components.push(component);
        }

        components.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        components
    }
}

enum RoadDistance {
    Measured(f64),
    Estimated(f64),
    // estimate requested before both endpoints were added
    Unresolved,
}

/// Validating builder for [`RoadNetwork`].
#[derive(Default)]
pub struct RoadNetworkBuilder {
    nodes: HashMap<String, Node>,
    roads: Vec<(String, String, RoadDistance)>,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Re-adding an id replaces the earlier attributes.
    pub fn node(
        mut self,
        id: impl Into<String>,
        position: (f64, f64),
        prevalence: f64,
        population: u64,
    ) -> Self {
        self.nodes.insert(
            id.into(),
            Node {
                position,
                prevalence,
                population,
            },
        );
        self
    }

    /// Add an undirected road with a measured distance in kilometers.
    pub fn road(mut self, a: impl Into<String>, b: impl Into<String>, distance_km: f64) -> Self {
        self.roads
            .push((a.into(), b.into(), RoadDistance::Measured(distance_km)));
        self
    }

    /// Add an undirected road whose distance is estimated from the endpoint
    /// coordinates. Both endpoints must already have been added.
    pub fn road_estimated(
        mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        estimator: &impl DistanceEstimator,
    ) -> Self {
        let a = a.into();
        let b = b.into();
        let distance = match (self.nodes.get(&a), self.nodes.get(&b)) {
            (Some(from), Some(to)) => {
                RoadDistance::Estimated(estimator.distance_km(from.position, to.position))
            }
            _ => RoadDistance::Unresolved,
        };
        self.roads.push((a, b, distance));
        self
    }

    pub fn build(self) -> Result<RoadNetwork, NetworkError> {
        for (id, node) in &self.nodes {
            if !(0.0..=1.0).contains(&node.prevalence) {
                return Err(NetworkError::PrevalenceOutOfRange {
                    node: id.clone(),
                    prevalence: node.prevalence,
                });
            }
        }

        let mut adjacency: HashMap<String, Vec<RoadLink>> = HashMap::new();
        let mut seen_pairs: HashSet<(String, String)> = HashSet::new();

        for (a, b, distance) in &self.roads {
            for endpoint in [a, b] {
                if !self.nodes.contains_key(endpoint) {
                    return Err(NetworkError::UnknownEndpoint {
                        from: a.clone(),
                        to: b.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }

            if a == b {
                return Err(NetworkError::SelfLoop { node: a.clone() });
            }

            let distance_km = match distance {
                RoadDistance::Measured(km) | RoadDistance::Estimated(km) => *km,
                // unreachable once endpoints validated above, but a road
                // added before its endpoints still needs a distance
                RoadDistance::Unresolved => 0.0,
            };

            if distance_km <= 0.0 {
                return Err(NetworkError::NonPositiveDistance {
                    from: a.clone(),
                    to: b.clone(),
                    distance_km,
                });
            }

            let pair = if a < b {
                (a.clone(), b.clone())
            } else {
                (b.clone(), a.clone())
            };
            if !seen_pairs.insert(pair) {
                return Err(NetworkError::DuplicateRoad {
                    from: a.clone(),
                    to: b.clone(),
                });
            }

            adjacency.entry(a.clone()).or_default().push(RoadLink {
                to: b.clone(),
                distance_km,
            });
            adjacency.entry(b.clone()).or_default().push(RoadLink {
                to: a.clone(),
                distance_km,
            });
        }

        for id in self.nodes.keys() {
            if !adjacency.contains_key(id) {
                warn!(node = %id, "node has no road connections");
            }
        }

        Ok(RoadNetwork {
            road_count: seen_pairs.len(),
            nodes: self.nodes,
            adjacency,
        })
    }
}
