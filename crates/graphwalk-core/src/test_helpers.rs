//! Shared fixtures for unit tests.
//!
//! Compiled only in test builds. Integration tests under
//! `crates/graphwalk-core/tests/` define their own helpers because they link
//! against the non-test library build.
#![allow(clippy::expect_used)]

use crate::adjacency::{AdjacencyMatrix, Vertex};

/// Builds an adjacency matrix from an edge list, panicking on bad input.
pub fn matrix(vertex_count: usize, edges: &[(Vertex, Vertex)]) -> AdjacencyMatrix {
    AdjacencyMatrix::from_edges(vertex_count, edges).expect("fixture edges are in range")
}

/// `0 → 1 → 2 → 0`.
pub fn three_cycle() -> AdjacencyMatrix {
    matrix(3, &[(0, 1), (1, 2), (2, 0)])
}

/// Two fully connected triangles `{0, 1, 2}` and `{3, 4, 5}`, no edges
/// between them.
pub fn twin_triangles() -> AdjacencyMatrix {
    let mut edges = Vec::new();
    for base in [0, 3] {
        for u in base..base + 3 {
            for v in base..base + 3 {
                if u != v {
                    edges.push((u, v));
                }
            }
        }
    }
    matrix(6, &edges)
}

/// Diamond DAG: `0 → 1`, `0 → 2`, `1 → 3`, `2 → 3`.
pub fn diamond() -> AdjacencyMatrix {
    matrix(4, &[(0, 1), (0, 2), (1, 3), (2, 3)])
}
