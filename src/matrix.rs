//! All-pairs priority matrix.
//!
//! Tour construction re-searches the network once per candidate per step.
//! For repeated queries over the same network and urgency, precompute this
//! table instead: one one-to-all search per source, fanned out across
//! threads. The network is shared read-only; every search owns its local
//! state, so no synchronization is needed.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::graph::RoadNetwork;
use crate::solver;
use crate::weighting::PrevalenceWeighting;

/// Priority weight and road distance for one source/destination pair.
/// Both are infinite when the destination is unreachable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixEntry {
    pub priority_weight: f64,
    pub distance_km: f64,
}

/// Dense all-pairs table at a fixed urgency. Rows and columns follow
/// [`PriorityMatrix::ids`] order (lexicographic).
#[derive(Debug, Clone)]
pub struct PriorityMatrix {
    ids: Vec<String>,
    index: HashMap<String, usize>,
    entries: Vec<Vec<MatrixEntry>>,
    urgency: f64,
}

impl PriorityMatrix {
    pub fn compute(network: &RoadNetwork, urgency: f64) -> Self {
        let ids: Vec<String> = network
            .sorted_node_ids()
            .into_iter()
            .map(str::to_string)
            .collect();
        let weighting = PrevalenceWeighting::new(urgency);

        let entries: Vec<Vec<MatrixEntry>> = ids
            .par_iter()
            .map(|source| {
                let settled = solver::settle(network, source, None, &weighting);
                ids.iter()
                    .map(|destination| MatrixEntry {
                        priority_weight: settled
                            .weights
                            .get(destination.as_str())
                            .copied()
                            .unwrap_or(f64::INFINITY),
                        distance_km: settled
                            .distances
                            .get(destination.as_str())
                            .copied()
                            .unwrap_or(f64::INFINITY),
                    })
                    .collect()
            })
            .collect();

        let index = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();

        Self {
            ids,
            index,
            entries,
            urgency,
        }
    }

    /// Node ids in row/column order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn urgency(&self) -> f64 {
        self.urgency
    }

    /// Entry for a pair, or `None` when either id is unknown.
    pub fn between(&self, from: &str, to: &str) -> Option<MatrixEntry> {
        let row = *self.index.get(from)?;
        let col = *self.index.get(to)?;
        Some(self.entries[row][col])
    }
}
