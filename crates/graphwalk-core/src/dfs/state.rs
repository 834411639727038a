//! Per-vertex state table: colour, discovery/finish stamps and predecessor.

use serde::{Deserialize, Serialize};

use crate::adjacency::Vertex;

/// Exploration state of a vertex.
///
/// Transitions are strictly `White → Gray → Black`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Not yet discovered.
    #[default]
    White,
    /// Discovered and still on the exploration stack.
    Gray,
    /// Fully explored.
    Black,
}

/// One row of the state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VertexState {
    /// Timestamp at which the vertex turned Gray.
    pub discovery: Option<u64>,
    /// Timestamp at which the vertex turned Black.
    pub finish: Option<u64>,
    /// The vertex whose exploration discovered this one; `None` for roots.
    pub predecessor: Option<Vertex>,
    /// Current colour.
    pub color: Color,
}

impl VertexState {
    /// Returns `true` if `self`'s `[discovery, finish]` interval contains
    /// `other`'s. Unfinished intervals never contain anything.
    pub fn encloses(&self, other: &VertexState) -> bool {
        match (self.discovery, self.finish, other.discovery, other.finish) {
            (Some(d), Some(f), Some(od), Some(of)) => d <= od && of <= f,
            _ => false,
        }
    }
}

/// Dense state table indexed by vertex, plus the shared timestamp counter.
#[derive(Debug, Clone)]
pub(crate) struct StateTable {
    rows: Vec<VertexState>,
    clock: u64,
}

impl StateTable {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            rows: vec![VertexState::default(); vertex_count],
            clock: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn rows(&self) -> &[VertexState] {
        &self.rows
    }

    pub(crate) fn clock(&self) -> u64 {
        self.clock
    }

    pub(crate) fn color(&self, v: Vertex) -> Color {
        self.rows[v].color
    }

    /// White → Gray, stamping the discovery time.
    pub(crate) fn discover(&mut self, v: Vertex, predecessor: Option<Vertex>) {
        self.clock += 1;
        let row = &mut self.rows[v];
        debug_assert_eq!(row.color, Color::White);
        row.color = Color::Gray;
        row.discovery = Some(self.clock);
        row.predecessor = predecessor;
    }

    /// Gray → Black, stamping the finish time.
    pub(crate) fn finish(&mut self, v: Vertex) {
        self.clock += 1;
        let row = &mut self.rows[v];
        debug_assert_eq!(row.color, Color::Gray);
        row.color = Color::Black;
        row.finish = Some(self.clock);
    }

    pub(crate) fn clear(&mut self) {
        self.rows.fill(VertexState::default());
        self.clock = 0;
    }
}
