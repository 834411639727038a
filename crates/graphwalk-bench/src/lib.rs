//! Random graph generator and benchmark utilities for graphwalk.
//!
//! This crate provides deterministic generation of directed graphs for
//! benchmarking and property-based testing of `graphwalk-core`.

pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_chain, generate_graph, to_petgraph};
