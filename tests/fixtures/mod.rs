//! Test fixtures for medroute.
//!
//! Provides realistic test data: a connected subset of the Nigerian LGA
//! road network with real coordinates, malaria prevalence and population.

pub mod nigeria_locations;

pub use nigeria_locations::*;
