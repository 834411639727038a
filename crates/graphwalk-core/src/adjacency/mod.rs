/// Graph capability consumed by the traversal engine, plus the adapters
/// shipped with the crate.
///
/// The engine never owns or builds a graph. It asks exactly two questions of
/// it through the [`Adjacency`] trait: how many vertices exist, and whether an
/// edge `u → v` exists. Both are expected to be O(1) (an adjacency matrix) or
/// cheap enough that the engine's O(n²) candidate scan is acceptable.
///
/// # Adapters
///
/// - [`AdjacencyMatrix`] — dense `n × n` matrix of `i64` weights; an edge
///   exists when its weight is strictly positive.
/// - [`Transposed`] — zero-copy view with every edge reversed.
/// - [`Undirected`] — zero-copy view of the symmetric closure.
/// - `petgraph::Graph<N, E, Directed, Ix>` — node indices are used directly
///   as vertex ids.
///
/// Self-loops and parallel edges are passed through unchanged; no adapter
/// validates graph well-formedness.
use std::fmt;

use petgraph::graph::{Graph, IndexType, NodeIndex};
use petgraph::Directed;


/// Dense vertex identifier in `0..n`.
pub type Vertex = usize;

/// The two capabilities the traversal engine requires from a graph.
///
/// Implementations must report a `vertex_count` that is stable for as long
/// as an engine borrows or owns the graph. `has_edge` must return `false`
/// (never panic) for out-of-range vertices.
pub trait Adjacency {
    /// Number of vertices; vertex ids are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// Returns `true` if the directed edge `from → to` exists.
    fn has_edge(&self, from: Vertex, to: Vertex) -> bool;
}

impl<G: Adjacency + ?Sized> Adjacency for &G {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        (**self).has_edge(from, to)
    }
}

impl<N, E, Ix: IndexType> Adjacency for Graph<N, E, Directed, Ix> {
    fn vertex_count(&self) -> usize {
        self.node_count()
    }

    fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        let count = self.node_count();
        if from >= count || to >= count {
            return false;
        }
        self.contains_edge(NodeIndex::new(from), NodeIndex::new(to))
    }
}

// ---------------------------------------------------------------------------
// MatrixError
// ---------------------------------------------------------------------------

/// Errors produced while constructing or mutating an [`AdjacencyMatrix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A row passed to [`AdjacencyMatrix::from_rows`] does not have one
    /// column per row.
    NotSquare {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of columns the row should have.
        expected: usize,
        /// Number of columns it actually has.
        got: usize,
    },
    /// An endpoint lies outside `0..vertex_count`.
    VertexOutOfRange {
        /// The rejected vertex.
        vertex: Vertex,
        /// Number of vertices in the matrix.
        vertex_count: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::NotSquare { row, expected, got } => {
                write!(f, "row {row} has {got} columns, expected {expected}")
            }
            MatrixError::VertexOutOfRange {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex {vertex} is out of range for a graph of {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for MatrixError {}

// ---------------------------------------------------------------------------
// AdjacencyMatrix
// ---------------------------------------------------------------------------

/// A dense, row-major adjacency matrix of `i64` edge weights.
///
/// Weight `0` (or any non-positive value) means "no edge". Storage is a
/// single `Vec` of `n * n` entries so `has_edge` is a bounds check and a
/// load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyMatrix {
    vertex_count: usize,
    weights: Vec<i64>,
}

impl AdjacencyMatrix {
    /// Creates an edgeless matrix over `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            weights: vec![0; vertex_count * vertex_count],
        }
    }

    /// Creates a matrix with a weight-1 edge for every `(from, to)` pair.
    ///
    /// Duplicate pairs are harmless: the weight is simply set again.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::VertexOutOfRange`] for the first pair with an
    /// endpoint outside `0..vertex_count`.
    pub fn from_edges(
        vertex_count: usize,
        edges: &[(Vertex, Vertex)],
    ) -> Result<Self, MatrixError> {
        let mut matrix = Self::new(vertex_count);
        for &(from, to) in edges {
            matrix.add_edge(from, to)?;
        }
        Ok(matrix)
    }

    /// Creates a matrix from explicit weight rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if any row's length differs from
    /// the number of rows.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, MatrixError> {
        let vertex_count = rows.len();
        let mut weights = Vec::with_capacity(vertex_count * vertex_count);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != vertex_count {
                return Err(MatrixError::NotSquare {
                    row,
                    expected: vertex_count,
                    got: values.len(),
                });
            }
            weights.extend_from_slice(values);
        }
        Ok(Self {
            vertex_count,
            weights,
        })
    }

    /// Sets the weight of `from → to`. A non-positive weight removes the edge.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::VertexOutOfRange`] if either endpoint is not a
    /// vertex of this matrix.
    pub fn set_weight(
        &mut self,
        from: Vertex,
        to: Vertex,
        weight: i64,
    ) -> Result<(), MatrixError> {
        let slot = self.slot(from, to)?;
        self.weights[slot] = weight;
        Ok(())
    }

    /// Adds the edge `from → to` with weight 1.
    ///
    /// # Errors
    ///
    /// See [`AdjacencyMatrix::set_weight`].
    pub fn add_edge(&mut self, from: Vertex, to: Vertex) -> Result<(), MatrixError> {
        self.set_weight(from, to, 1)
    }

    /// Returns the stored weight of `from → to`, or `None` when either
    /// endpoint is out of range.
    pub fn weight(&self, from: Vertex, to: Vertex) -> Option<i64> {
        self.slot(from, to).ok().map(|slot| self.weights[slot])
    }

    /// Number of `(from, to)` pairs with a positive weight.
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w > 0).count()
    }

    /// Returns a new matrix with every edge reversed.
    ///
    /// Use [`Transposed`] instead when a borrowed view is enough.
    pub fn transpose(&self) -> Self {
        let n = self.vertex_count;
        let mut weights = vec![0; n * n];
        for from in 0..n {
            for to in 0..n {
                weights[to * n + from] = self.weights[from * n + to];
            }
        }
        Self {
            vertex_count: n,
            weights,
        }
    }

    fn slot(&self, from: Vertex, to: Vertex) -> Result<usize, MatrixError> {
        for vertex in [from, to] {
            if vertex >= self.vertex_count {
                return Err(MatrixError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        Ok(from * self.vertex_count + to)
    }
}

impl Adjacency for AdjacencyMatrix {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.weight(from, to).is_some_and(|w| w > 0)
    }
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// A view of `G` with every edge reversed: `u → v` exists iff `v → u` exists
/// in the wrapped graph.
#[derive(Debug, Clone, Copy)]
pub struct Transposed<G>(G);

impl<G: Adjacency> Transposed<G> {
    /// Wraps `graph` (usually a reference) in a transposed view.
    pub fn new(graph: G) -> Self {
        Self(graph)
    }

    /// Returns the wrapped graph.
    pub fn into_inner(self) -> G {
        self.0
    }
}

impl<G: Adjacency> Adjacency for Transposed<G> {
    fn vertex_count(&self) -> usize {
        self.0.vertex_count()
    }

    fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.0.has_edge(to, from)
    }
}

/// A view of the symmetric closure of `G`: `u → v` exists iff either
/// `u → v` or `v → u` exists in the wrapped graph.
#[derive(Debug, Clone, Copy)]
pub struct Undirected<G>(G);

impl<G: Adjacency> Undirected<G> {
    /// Wraps `graph` (usually a reference) in an undirected view.
    pub fn new(graph: G) -> Self {
        Self(graph)
    }

    /// Returns the wrapped graph.
    pub fn into_inner(self) -> G {
        self.0
    }
}

impl<G: Adjacency> Adjacency for Undirected<G> {
    fn vertex_count(&self) -> usize {
        self.0.vertex_count()
    }

    fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.0.has_edge(from, to) || self.0.has_edge(to, from)
    }
}
