/// Derived algorithms built on [`DepthFirstSearch`]: topological sort,
/// strongly connected components (Kosaraju) and weakly connected components.
///
/// Each function drives one or two fresh engines through their public
/// operations only; none of them inspects engine internals.
use crate::adjacency::{Adjacency, Transposed, Undirected, Vertex};
use crate::config::{Collector, RootSelection, TraversalConfig};
use crate::dfs::DepthFirstSearch;
use crate::error::TraversalError;

/// Returns the vertices of `graph` in topological order (every edge
/// `u → v` has `u` before `v`).
///
/// The order is the engine's finish-order list. Acyclicity is decided from
/// the finish stamps: an edge `u → v` with `finish[v] >= finish[u]` is a back
/// edge. Self-loops count as cycles.
///
/// # Errors
///
/// Returns [`TraversalError::CycleDetected`] naming the first back edge in
/// row-major `(u, v)` order.
pub fn topological_order<G: Adjacency>(graph: &G) -> Result<Vec<Vertex>, TraversalError> {
    let mut dfs = DepthFirstSearch::with_config(
        graph,
        TraversalConfig::default().with(Collector::FinishOrder, true),
    );
    dfs.run()?;

    let finish = dfs.finish_times()?;
    let n = graph.vertex_count();
    for from in 0..n {
        for to in 0..n {
            if graph.has_edge(from, to) && finish[to] >= finish[from] {
                return Err(TraversalError::CycleDetected { from, to });
            }
        }
    }

    Ok(dfs.finish_order()?.to_vec())
}

/// Partitions `graph` into strongly connected components.
///
/// Kosaraju's two passes: a natural-order run collects the finish order, then
/// a run over the transposed graph takes roots from that order with
/// [`RootSelection::ByVertex`]. Each second-pass tree is one component.
/// Groups are newest-tree first, members in discovery order.
///
/// # Errors
///
/// Never fails for a well-behaved [`Adjacency`]; the `Result` carries any
/// engine precondition violation through unchanged.
pub fn strongly_connected_components<G: Adjacency>(
    graph: &G,
) -> Result<Vec<Vec<Vertex>>, TraversalError> {
    let mut first = DepthFirstSearch::with_config(
        graph,
        TraversalConfig::default().with(Collector::FinishOrder, true),
    );
    first.run()?;
    let order = first.finish_order()?;

    let mut second = DepthFirstSearch::with_config(
        Transposed::new(graph),
        TraversalConfig::default()
            .with(Collector::Components, true)
            .with_root_selection(RootSelection::ByVertex),
    );
    second.run_ordered(order)?;
    Ok(second.components()?.to_vec())
}

/// Partitions `graph` into weakly connected components: components of the
/// graph with every edge treated as undirected.
///
/// Groups are newest-tree first, members in discovery order.
///
/// # Errors
///
/// Same as [`strongly_connected_components`].
pub fn weakly_connected_components<G: Adjacency>(
    graph: &G,
) -> Result<Vec<Vec<Vertex>>, TraversalError> {
    let mut dfs = DepthFirstSearch::with_config(
        Undirected::new(graph),
        TraversalConfig::default().with(Collector::Components, true),
    );
    dfs.run()?;
    Ok(dfs.components()?.to_vec())
}
