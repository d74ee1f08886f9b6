//! medroute core engine
//!
//! Priority-weighted routing over a fixed road network: rank medical supply
//! routes by a composite of road distance and local disease prevalence.

pub mod traits;
pub mod graph;
pub mod weighting;
pub mod haversine;
pub mod solver;
pub mod route;
pub mod tour;
pub mod matrix;
pub mod geometry;
pub mod dataset;
