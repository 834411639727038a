//! Property-based tests for the depth-first traversal engine.
//!
//! Generates random directed graphs (0-50 vertices, up to ~3 edges per
//! vertex, self-loops and duplicate pairs allowed) and checks the classic DFS
//! invariants, plus agreement with `petgraph`'s own cycle and SCC algorithms.
#![allow(clippy::expect_used)]

use std::collections::BTreeSet;

use graphwalk_core::{
    Adjacency, AdjacencyMatrix, Color, DepthFirstSearch, TraversalConfig, TraversalError, Vertex,
    strongly_connected_components, topological_order, weakly_connected_components,
};
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

/// A random graph as `(vertex_count, edges)`.
fn arb_graph() -> impl Strategy<Value = (usize, Vec<(Vertex, Vertex)>)> {
    (0usize..=50).prop_flat_map(|n| {
        let edges = if n == 0 {
            Just(Vec::new()).boxed()
        } else {
            proptest::collection::vec((0..n, 0..n), 0..=3 * n).boxed()
        };
        (Just(n), edges)
    })
}

/// A random DAG: every edge points from a lower to a higher index.
fn arb_dag() -> impl Strategy<Value = (usize, Vec<(Vertex, Vertex)>)> {
    arb_graph().prop_map(|(n, edges)| {
        let forward = edges
            .into_iter()
            .filter(|(u, v)| u != v)
            .map(|(u, v)| (u.min(v), u.max(v)))
            .collect();
        (n, forward)
    })
}

fn build(n: usize, edges: &[(Vertex, Vertex)]) -> AdjacencyMatrix {
    AdjacencyMatrix::from_edges(n, edges).expect("generated edges are in range")
}

fn to_petgraph(n: usize, edges: &[(Vertex, Vertex)]) -> DiGraph<(), ()> {
    let mut g = DiGraph::with_capacity(n, edges.len());
    for _ in 0..n {
        g.add_node(());
    }
    for &(u, v) in edges {
        g.update_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    g
}

fn full_run(g: &AdjacencyMatrix) -> DepthFirstSearch<&AdjacencyMatrix> {
    let mut dfs = DepthFirstSearch::with_config(g, TraversalConfig::all_collectors());
    dfs.run().expect("fresh engine runs");
    dfs
}

fn as_sets(groups: Vec<Vec<Vertex>>) -> BTreeSet<BTreeSet<Vertex>> {
    groups.into_iter().map(|g| g.into_iter().collect()).collect()
}

proptest! {
    /// Every vertex ends Black with discovery < finish, and the 2n stamps
    /// are exactly 1..=2n.
    #[test]
    fn stamps_are_unique_and_ordered((n, edges) in arb_graph()) {
        let g = build(n, &edges);
        let dfs = full_run(&g);
        let states = dfs.states().expect("ran");

        let mut stamps = Vec::with_capacity(2 * n);
        for (v, s) in states.iter().enumerate() {
            prop_assert_eq!(s.color, Color::Black, "vertex {} not finished", v);
            let d = s.discovery.expect("discovered");
            let f = s.finish.expect("finished");
            prop_assert!(d < f, "vertex {}: discovery {} !< finish {}", v, d, f);
            stamps.push(d);
            stamps.push(f);
        }
        stamps.sort_unstable();
        let expected: Vec<u64> = (1..=2 * n as u64).collect();
        prop_assert_eq!(stamps, expected);
        prop_assert_eq!(dfs.timestamp(), 2 * n as u64);
    }

    /// Intervals of any two vertices are nested or disjoint.
    #[test]
    fn parenthesis_property_holds((n, edges) in arb_graph()) {
        let g = build(n, &edges);
        let dfs = full_run(&g);
        let d = dfs.discovery_times().expect("ran");
        let f = dfs.finish_times().expect("ran");

        for u in 0..n {
            for v in (u + 1)..n {
                let disjoint = f[u] < d[v] || f[v] < d[u];
                let u_in_v = d[v] < d[u] && f[u] < f[v];
                let v_in_u = d[u] < d[v] && f[v] < f[u];
                prop_assert!(
                    disjoint || u_in_v || v_in_u,
                    "intervals of {} [{}, {}] and {} [{}, {}] overlap",
                    u, d[u], f[u], v, d[v], f[v]
                );
            }
        }
    }

    /// Predecessors form a forest of tree edges whose parents enclose their
    /// children, and every tree path ends at a recorded root.
    #[test]
    fn predecessors_form_a_forest((n, edges) in arb_graph()) {
        let g = build(n, &edges);
        let dfs = full_run(&g);
        let states = dfs.states().expect("ran");
        let roots: BTreeSet<Vertex> = dfs.tree_roots().expect("ran").iter().copied().collect();

        for v in 0..n {
            if let Some(p) = states[v].predecessor {
                prop_assert!(g.has_edge(p, v), "tree edge {} -> {} is not a graph edge", p, v);
                prop_assert!(states[p].encloses(&states[v]));
            } else {
                prop_assert!(roots.contains(&v), "{} has no predecessor but is not a root", v);
            }

            let mut cursor = v;
            let mut steps = 0;
            while let Some(p) = states[cursor].predecessor {
                cursor = p;
                steps += 1;
                prop_assert!(steps <= n, "predecessor chain from {} does not terminate", v);
            }
            prop_assert!(roots.contains(&cursor));
        }
    }

    /// On a DAG the finish-order list puts every edge's source first.
    #[test]
    fn finish_order_is_topological_on_dags((n, edges) in arb_dag()) {
        let g = build(n, &edges);
        let dfs = full_run(&g);
        let order = dfs.finish_order().expect("enabled");
        prop_assert_eq!(order.len(), n);

        let mut pos = vec![0usize; n];
        for (i, &v) in order.iter().enumerate() {
            pos[v] = i;
        }
        for &(u, v) in &edges {
            prop_assert!(pos[u] < pos[v], "edge {} -> {} out of order in {:?}", u, v, order);
        }
        prop_assert_eq!(topological_order(&g).expect("dag"), order.to_vec());
    }

    /// `topological_order` fails exactly when petgraph finds a cycle.
    #[test]
    fn cycle_detection_agrees_with_petgraph((n, edges) in arb_graph()) {
        let g = build(n, &edges);
        let cyclic = petgraph::algo::is_cyclic_directed(&to_petgraph(n, &edges));
        match topological_order(&g) {
            Ok(order) => {
                prop_assert!(!cyclic, "missed a cycle");
                prop_assert_eq!(order.len(), n);
            }
            Err(err) => {
                let TraversalError::CycleDetected { from, to } = err else {
                    return Err(TestCaseError::fail(format!("unexpected error: {err}")));
                };
                prop_assert!(cyclic, "reported cycle in an acyclic graph");
                prop_assert!(g.has_edge(from, to));
            }
        }
    }

    /// SCCs match petgraph's Kosaraju as sets of vertex sets.
    #[test]
    fn sccs_agree_with_petgraph((n, edges) in arb_graph()) {
        let g = build(n, &edges);
        let ours = as_sets(strongly_connected_components(&g).expect("runs"));
        let theirs = as_sets(
            petgraph::algo::kosaraju_scc(&to_petgraph(n, &edges))
                .into_iter()
                .map(|c| c.into_iter().map(NodeIndex::index).collect())
                .collect(),
        );
        prop_assert_eq!(ours, theirs);
    }

    /// Components from a natural-order run partition the vertex set, and
    /// weak components are unions of them.
    #[test]
    fn components_partition_vertices((n, edges) in arb_graph()) {
        let g = build(n, &edges);
        let dfs = full_run(&g);
        let groups = dfs.components().expect("enabled");
        prop_assert_eq!(groups.len(), dfs.tree_roots().expect("ran").len());

        let mut seen = vec![false; n];
        for group in groups {
            for &v in group {
                prop_assert!(!seen[v], "{} in two components", v);
                seen[v] = true;
            }
        }
        prop_assert!(seen.iter().all(|&s| s));

        let weak = weakly_connected_components(&g).expect("runs");
        prop_assert!(weak.len() <= groups.len());
        prop_assert_eq!(
            petgraph::algo::connected_components(&to_petgraph(n, &edges)),
            weak.len()
        );
    }

    /// Fresh engines over the same graph agree bit for bit.
    #[test]
    fn runs_are_deterministic((n, edges) in arb_graph()) {
        let g = build(n, &edges);
        let a = full_run(&g);
        let b = full_run(&g);
        prop_assert_eq!(a.states().expect("ran"), b.states().expect("ran"));
        prop_assert_eq!(a.finish_order().expect("enabled"), b.finish_order().expect("enabled"));
        prop_assert_eq!(a.cycle_trace().expect("enabled"), b.cycle_trace().expect("enabled"));
        prop_assert_eq!(a.components().expect("enabled"), b.components().expect("enabled"));
    }

    /// The petgraph adapter and the matrix adapter drive identical runs.
    #[test]
    fn petgraph_adapter_matches_matrix((n, edges) in arb_graph()) {
        let m = build(n, &edges);
        let p = to_petgraph(n, &edges);
        let mut via_matrix = DepthFirstSearch::new(&m);
        let mut via_petgraph = DepthFirstSearch::new(&p);
        via_matrix.run().expect("runs");
        via_petgraph.run().expect("runs");
        prop_assert_eq!(via_matrix.states().expect("ran"), via_petgraph.states().expect("ran"));
    }
}
