/// Errors surfaced by the traversal engine and the algorithms built on it.
///
/// The engine has no recoverable-error taxonomy of its own: traversal over a
/// finite graph is total and deterministic. Every variant here is a
/// precondition violation by the caller (bad order, wrong call sequence), or,
/// for [`TraversalError::CycleDetected`], a property of the input graph that
/// makes a derived result meaningless.
use std::fmt;

use crate::adjacency::Vertex;
use crate::config::Collector;

/// All error conditions produced by [`crate::DepthFirstSearch`] and
/// [`crate::algorithms`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    /// A caller-supplied root order does not have one entry per vertex.
    OrderLengthMismatch {
        /// The graph's vertex count.
        expected: usize,
        /// Length of the supplied order.
        got: usize,
    },
    /// A vertex argument lies outside `0..vertex_count`.
    VertexOutOfRange {
        /// The rejected vertex.
        vertex: Vertex,
        /// The graph's vertex count.
        vertex_count: usize,
    },
    /// A run was requested on an engine that has already run. Call
    /// [`crate::DepthFirstSearch::reset`] first.
    AlreadyRun,
    /// A result accessor was called before any run completed.
    NotYetRun,
    /// A collector's result was requested but the collector was not enabled
    /// for the run.
    CollectorDisabled(Collector),
    /// The configuration was changed after a run without a reset.
    ConfigurationLocked,
    /// The graph contains the back edge `from → to`, so no topological order
    /// exists.
    CycleDetected {
        /// Source of the back edge.
        from: Vertex,
        /// Target of the back edge (an ancestor of `from`, or `from` itself).
        to: Vertex,
    },
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalError::OrderLengthMismatch { expected, got } => write!(
                f,
                "root order has {got} entries but the graph has {expected} vertices"
            ),
            TraversalError::VertexOutOfRange {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex {vertex} is out of range for a graph of {vertex_count} vertices"
            ),
            TraversalError::AlreadyRun => {
                write!(f, "traversal already ran; reset the engine before running again")
            }
            TraversalError::NotYetRun => write!(f, "traversal results are not yet available"),
            TraversalError::CollectorDisabled(collector) => {
                write!(f, "collector {collector} was not enabled for this run")
            }
            TraversalError::ConfigurationLocked => write!(
                f,
                "configuration cannot change after a run; reset the engine first"
            ),
            TraversalError::CycleDetected { from, to } => {
                write!(f, "graph is cyclic: back edge {from} -> {to}")
            }
        }
    }
}

impl std::error::Error for TraversalError {}
