#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod adjacency;
pub mod algorithms;
pub mod config;
pub mod dfs;
pub mod error;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use adjacency::{Adjacency, AdjacencyMatrix, MatrixError, Transposed, Undirected, Vertex};
pub use algorithms::{strongly_connected_components, topological_order, weakly_connected_components};
pub use config::{Collector, RootSelection, TraversalConfig};
pub use dfs::{Color, DepthFirstSearch, VertexState};
pub use error::TraversalError;

/// Returns the current version of the graphwalk-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
