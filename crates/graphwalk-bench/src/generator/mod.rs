//! Directed graph generator.
//!
//! Produces [`AdjacencyMatrix`] instances with a controlled edge density,
//! optional acyclicity and optional cluster structure (dense blocks joined by
//! a few bridge edges), so traversals produce several trees.

pub mod topology;

use graphwalk_core::AdjacencyMatrix;
use petgraph::graph::{DiGraph, NodeIndex};
use rand::SeedableRng;
use rand::rngs::StdRng;

use topology::build_graph;

/// Configuration for the graph generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Probability that any ordered pair inside a cluster gets an edge.
    pub edge_probability: f64,
    /// Number of clusters the vertices are split into (at least 1).
    pub clusters: usize,
    /// Bridge edges added between consecutive clusters.
    pub bridges_per_cluster: usize,
    /// Only generate edges from lower to higher index.
    pub acyclic: bool,
    /// Permit `v → v` edges. Ignored when `acyclic` is set.
    pub self_loops: bool,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 64 vertices, ~10% density
    Small,
    /// 256 vertices, ~4% density
    Medium,
    /// 1024 vertices, ~1% density
    Large,
    /// 2048 vertices, ~0.5% density
    XLarge,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (vertex_count, edge_probability, clusters) = match self {
            SizeTier::Small => (64, 0.10, 2),
            SizeTier::Medium => (256, 0.04, 4),
            SizeTier::Large => (1024, 0.01, 8),
            SizeTier::XLarge => (2048, 0.005, 16),
        };
        GeneratorConfig {
            seed,
            vertex_count,
            edge_probability,
            clusters,
            bridges_per_cluster: 2,
            acyclic: false,
            self_loops: false,
        }
    }

    /// Same as [`SizeTier::config`] with only forward edges.
    pub fn dag_config(self, seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            acyclic: true,
            ..self.config(seed)
        }
    }
}

/// Generates a graph from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_graph(config: &GeneratorConfig) -> AdjacencyMatrix {
    let mut rng = StdRng::seed_from_u64(config.seed);
    build_graph(config, &mut rng)
}

/// A simple path `0 → 1 → … → n-1`, the deepest possible DFS tree.
pub fn generate_chain(vertex_count: usize) -> AdjacencyMatrix {
    let edges: Vec<(usize, usize)> = (1..vertex_count).map(|v| (v - 1, v)).collect();
    // Every endpoint is below vertex_count, so the fallback is never taken.
    AdjacencyMatrix::from_edges(vertex_count, &edges)
        .unwrap_or_else(|_| AdjacencyMatrix::new(vertex_count))
}

/// Copies `matrix` into a `petgraph` graph with the same vertex numbering,
/// for baseline comparisons against petgraph's own traversals.
pub fn to_petgraph(matrix: &AdjacencyMatrix) -> DiGraph<(), i64> {
    use graphwalk_core::Adjacency;

    let n = matrix.vertex_count();
    let mut graph = DiGraph::with_capacity(n, matrix.edge_count());
    for _ in 0..n {
        graph.add_node(());
    }
    for from in 0..n {
        for to in 0..n {
            if let Some(weight) = matrix.weight(from, to).filter(|&w| w > 0) {
                graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), weight);
            }
        }
    }
    graph
}
