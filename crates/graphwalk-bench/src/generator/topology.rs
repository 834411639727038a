//! Topology strategy: dense random clusters joined by sparse bridges.

use graphwalk_core::AdjacencyMatrix;
use rand::Rng;
use rand::rngs::StdRng;

use super::GeneratorConfig;

/// Builds the full graph from the generator configuration.
///
/// Vertices are split into `clusters` contiguous index ranges. Inside a
/// cluster every ordered pair gets an edge with probability
/// `edge_probability`; then `bridges_per_cluster` random edges join each
/// cluster to the next one. With `acyclic` set, every edge is oriented from
/// the lower to the higher index.
pub fn build_graph(config: &GeneratorConfig, rng: &mut StdRng) -> AdjacencyMatrix {
    let n = config.vertex_count;
    let mut matrix = AdjacencyMatrix::new(n);
    if n == 0 {
        return matrix;
    }

    let ranges = cluster_ranges(n, config.clusters.max(1));
    let p = config.edge_probability.clamp(0.0, 1.0);

    for range in &ranges {
        for from in range.clone() {
            for to in range.clone() {
                if from == to && (config.acyclic || !config.self_loops) {
                    continue;
                }
                if config.acyclic && to < from {
                    continue;
                }
                if rng.gen_bool(p) {
                    insert(&mut matrix, from, to);
                }
            }
        }
    }

    for pair in ranges.windows(2) {
        let (left, right) = (&pair[0], &pair[1]);
        for _ in 0..config.bridges_per_cluster {
            let a = rng.gen_range(left.clone());
            let b = rng.gen_range(right.clone());
            // `a < b` always holds, so only a cyclic graph may bridge back.
            if !config.acyclic && rng.gen_bool(0.5) {
                insert(&mut matrix, b, a);
            } else {
                insert(&mut matrix, a, b);
            }
        }
    }

    matrix
}

/// Splits `0..n` into `clusters` contiguous, non-empty ranges (fewer when
/// `clusters > n`).
fn cluster_ranges(n: usize, clusters: usize) -> Vec<std::ops::Range<usize>> {
    let clusters = clusters.min(n);
    let base = n / clusters;
    let extra = n % clusters;
    let mut ranges = Vec::with_capacity(clusters);
    let mut start = 0;
    for i in 0..clusters {
        let len = base + usize::from(i < extra);
        ranges.push(start..start + len);
        start += len;
    }
    ranges
}

fn insert(matrix: &mut AdjacencyMatrix, from: usize, to: usize) {
    // Endpoints come from cluster ranges inside 0..n, so this cannot fail.
    matrix.add_edge(from, to).ok();
}
