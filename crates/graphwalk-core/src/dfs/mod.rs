/// Depth-first traversal engine.
///
/// [`DepthFirstSearch`] walks every vertex of an [`Adjacency`] graph, stamping
/// discovery and finish times from a single counter, recording the DFS forest
/// through predecessors, and optionally feeding three collectors:
///
/// - **finish order** — latest-finished vertex first; a topological order
///   when the graph is acyclic.
/// - **cycle trace** — vertices of the current tree in discovery order, plus
///   the target of every edge that reaches a Gray vertex.
/// - **components** — one group per DFS tree, groups ordered newest-first.
///
/// # Exploration Order
///
/// Out-edges of `u` are discovered by scanning candidates `0..n` in
/// ascending order and asking the graph whether `u → v` exists. This order,
/// not adjacency-list insertion order, fixes every timestamp and collector
/// entry.
///
/// # Explicit Stack
///
/// Exploration uses a work stack of `(vertex, next candidate)` frames instead
/// of recursion, so path length is bounded by memory rather than the thread
/// stack. Frames resume their scan exactly where the child was pushed, which
/// reproduces recursive stamp order.
///
/// # Lifecycle
///
/// Configure, then [`run`](DepthFirstSearch::run) or
/// [`run_ordered`](DepthFirstSearch::run_ordered) once. Results are readable
/// afterwards; a second run or a configuration change needs
/// [`reset`](DepthFirstSearch::reset).
use tracing::{debug, trace};

use crate::adjacency::{Adjacency, Vertex};
use crate::config::{Collector, RootSelection, TraversalConfig};
use crate::error::TraversalError;

mod collectors;
mod state;


pub use state::{Color, VertexState};

use collectors::Collectors;
use state::StateTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Ready,
    Completed,
}

/// A suspended exploration of `vertex`; `next` is the first candidate
/// successor not yet examined.
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: Vertex,
    next: Vertex,
}

/// Stateful depth-first traversal over a borrowed or owned graph.
///
/// `G` is usually a reference (`&AdjacencyMatrix`) or a view such as
/// [`crate::Transposed`].
#[derive(Debug, Clone)]
pub struct DepthFirstSearch<G> {
    graph: G,
    config: TraversalConfig,
    table: StateTable,
    collectors: Collectors,
    roots: Vec<Vertex>,
    cycle_confirmed: bool,
    phase: Phase,
}

impl<G: Adjacency> DepthFirstSearch<G> {
    /// Creates an engine with every collector disabled.
    pub fn new(graph: G) -> Self {
        Self::with_config(graph, TraversalConfig::default())
    }

    /// Creates an engine and allocates the collectors `config` enables.
    pub fn with_config(graph: G, config: TraversalConfig) -> Self {
        let table = StateTable::new(graph.vertex_count());
        Self {
            graph,
            config,
            table,
            collectors: Collectors::for_config(&config),
            roots: Vec::new(),
            cycle_confirmed: false,
            phase: Phase::Ready,
        }
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Enables (allocating an empty collector) or disables (discarding it)
    /// one collector.
    ///
    /// # Errors
    ///
    /// [`TraversalError::ConfigurationLocked`] once a run has completed.
    pub fn set_collector(
        &mut self,
        collector: Collector,
        enabled: bool,
    ) -> Result<(), TraversalError> {
        self.ensure_configurable()?;
        self.config.set(collector, enabled);
        self.collectors.toggle(collector, enabled);
        Ok(())
    }

    /// Toggles the finish-order collector.
    ///
    /// # Errors
    ///
    /// See [`DepthFirstSearch::set_collector`].
    pub fn set_collect_finish_order(&mut self, enabled: bool) -> Result<(), TraversalError> {
        self.set_collector(Collector::FinishOrder, enabled)
    }

    /// Toggles the cycle-trace collector.
    ///
    /// # Errors
    ///
    /// See [`DepthFirstSearch::set_collector`].
    pub fn set_collect_cycle_trace(&mut self, enabled: bool) -> Result<(), TraversalError> {
        self.set_collector(Collector::CycleTrace, enabled)
    }

    /// Toggles the components collector.
    ///
    /// # Errors
    ///
    /// See [`DepthFirstSearch::set_collector`].
    pub fn set_collect_components(&mut self, enabled: bool) -> Result<(), TraversalError> {
        self.set_collector(Collector::Components, enabled)
    }

    /// Sets how [`DepthFirstSearch::run_ordered`] picks tree roots.
    ///
    /// # Errors
    ///
    /// [`TraversalError::ConfigurationLocked`] once a run has completed.
    pub fn set_root_selection(
        &mut self,
        root_selection: RootSelection,
    ) -> Result<(), TraversalError> {
        self.ensure_configurable()?;
        self.config.root_selection = root_selection;
        Ok(())
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Returns the graph being traversed.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Returns every vertex to White, the clock to 0 and every enabled
    /// collector to empty. Configuration is kept.
    pub fn reset(&mut self) {
        self.table.clear();
        self.collectors = Collectors::for_config(&self.config);
        self.roots.clear();
        self.cycle_confirmed = false;
        self.phase = Phase::Ready;
    }

    fn ensure_configurable(&self) -> Result<(), TraversalError> {
        match self.phase {
            Phase::Ready => Ok(()),
            Phase::Completed => Err(TraversalError::ConfigurationLocked),
        }
    }

    // -----------------------------------------------------------------------
    // Running
    // -----------------------------------------------------------------------

    /// Traverses every vertex, taking roots in index order `0..n`.
    ///
    /// # Errors
    ///
    /// [`TraversalError::AlreadyRun`] if the engine has run since
    /// construction or the last [`reset`](DepthFirstSearch::reset).
    pub fn run(&mut self) -> Result<(), TraversalError> {
        self.begin()?;
        for root in 0..self.table.len() {
            if self.table.color(root) == Color::White {
                self.explore(root);
            }
        }
        self.complete();
        Ok(())
    }

    /// Traverses the graph taking candidate roots from `order`.
    ///
    /// Slot `i` starts a new tree under the configured [`RootSelection`]:
    /// `Positional` looks at the colour of vertex `i`, `ByVertex` at the
    /// colour of `order[i]`. Either way `order[i]` is only explored while it
    /// is still White, so a vertex is never discovered twice. Under
    /// `Positional` some vertices may therefore remain White after the run.
    ///
    /// # Errors
    ///
    /// - [`TraversalError::OrderLengthMismatch`] if `order.len()` differs
    ///   from the vertex count.
    /// - [`TraversalError::VertexOutOfRange`] for the first entry outside
    ///   `0..n`.
    /// - [`TraversalError::AlreadyRun`] as for [`DepthFirstSearch::run`].
    pub fn run_ordered(&mut self, order: &[Vertex]) -> Result<(), TraversalError> {
        let vertex_count = self.table.len();
        if order.len() != vertex_count {
            return Err(TraversalError::OrderLengthMismatch {
                expected: vertex_count,
                got: order.len(),
            });
        }
        if let Some(&vertex) = order.iter().find(|&&v| v >= vertex_count) {
            return Err(TraversalError::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        }

        self.begin()?;
        for (slot, &candidate) in order.iter().enumerate() {
            let gate = match self.config.root_selection {
                RootSelection::Positional => slot,
                RootSelection::ByVertex => candidate,
            };
            let open = self.table.color(gate) == Color::White
                && self.table.color(candidate) == Color::White;
            if open {
                self.explore(candidate);
            }
        }
        self.complete();
        Ok(())
    }

    fn begin(&mut self) -> Result<(), TraversalError> {
        if self.phase == Phase::Completed {
            return Err(TraversalError::AlreadyRun);
        }
        self.collectors.start_run();
        debug!(
            vertices = self.table.len(),
            finish_order = self.config.finish_order,
            cycle_trace = self.config.cycle_trace,
            components = self.config.components,
            "depth-first search started"
        );
        Ok(())
    }

    fn complete(&mut self) {
        self.collectors.finish_run();
        self.phase = Phase::Completed;
        debug!(
            trees = self.roots.len(),
            clock = self.table.clock(),
            "depth-first search completed"
        );
    }

    /// Explores the tree rooted at the White vertex `root`.
    fn explore(&mut self, root: Vertex) {
        trace!(root, "opening tree");
        self.roots.push(root);
        if !self.cycle_confirmed {
            self.collectors.clear_trace();
        }
        self.collectors.open_component();

        let n = self.table.len();
        let mut stack = vec![Frame {
            vertex: root,
            next: 0,
        }];
        self.discover(root, None);

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            let mut child = None;
            while frame.next < n {
                let v = frame.next;
                frame.next += 1;
                if !self.graph.has_edge(u, v) {
                    continue;
                }
                match self.table.color(v) {
                    Color::White => {
                        child = Some(v);
                        break;
                    }
                    Color::Gray => {
                        if !self.cycle_confirmed {
                            self.collectors.record_trace(v);
                        }
                    }
                    Color::Black => {}
                }
            }

            match child {
                Some(v) => {
                    self.discover(v, Some(u));
                    stack.push(Frame { vertex: v, next: 0 });
                }
                None => {
                    stack.pop();
                    self.table.finish(u);
                    self.collectors.record_finish(u);
                }
            }
        }
    }

    fn discover(&mut self, v: Vertex, predecessor: Option<Vertex>) {
        self.table.discover(v, predecessor);
        if !self.cycle_confirmed {
            self.collectors.record_trace(v);
        }
        self.collectors.record_component_member(v);
    }

    // -----------------------------------------------------------------------
    // Results
    // -----------------------------------------------------------------------

    fn completed(&self) -> Result<(), TraversalError> {
        match self.phase {
            Phase::Completed => Ok(()),
            Phase::Ready => Err(TraversalError::NotYetRun),
        }
    }

    /// Current value of the timestamp counter (`2 * visited` after a run).
    pub fn timestamp(&self) -> u64 {
        self.table.clock()
    }

    /// The full state table, indexed by vertex.
    ///
    /// # Errors
    ///
    /// [`TraversalError::NotYetRun`] before a run.
    pub fn states(&self) -> Result<&[VertexState], TraversalError> {
        self.completed()?;
        Ok(self.table.rows())
    }

    /// The state of a single vertex.
    ///
    /// # Errors
    ///
    /// [`TraversalError::NotYetRun`] before a run;
    /// [`TraversalError::VertexOutOfRange`] for an unknown vertex.
    pub fn state(&self, v: Vertex) -> Result<&VertexState, TraversalError> {
        self.states()?
            .get(v)
            .ok_or(TraversalError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.table.len(),
            })
    }

    /// Finish time of every vertex; `0` for a vertex the run never reached.
    ///
    /// # Errors
    ///
    /// [`TraversalError::NotYetRun`] before a run.
    pub fn finish_times(&self) -> Result<Vec<u64>, TraversalError> {
        Ok(self.states()?.iter().map(|s| s.finish.unwrap_or(0)).collect())
    }

    /// Discovery time of every vertex; `0` for a vertex the run never reached.
    ///
    /// # Errors
    ///
    /// [`TraversalError::NotYetRun`] before a run.
    pub fn discovery_times(&self) -> Result<Vec<u64>, TraversalError> {
        Ok(self.states()?.iter().map(|s| s.discovery.unwrap_or(0)).collect())
    }

    /// Predecessor of every vertex in the DFS forest.
    ///
    /// # Errors
    ///
    /// [`TraversalError::NotYetRun`] before a run.
    pub fn predecessors(&self) -> Result<Vec<Option<Vertex>>, TraversalError> {
        Ok(self.states()?.iter().map(|s| s.predecessor).collect())
    }

    /// Colour of every vertex.
    ///
    /// # Errors
    ///
    /// [`TraversalError::NotYetRun`] before a run.
    pub fn colors(&self) -> Result<Vec<Color>, TraversalError> {
        Ok(self.states()?.iter().map(|s| s.color).collect())
    }

    /// Tree roots in the order they were opened.
    ///
    /// # Errors
    ///
    /// [`TraversalError::NotYetRun`] before a run.
    pub fn tree_roots(&self) -> Result<&[Vertex], TraversalError> {
        self.completed()?;
        Ok(&self.roots)
    }

    /// Vertices ordered latest-finished first.
    ///
    /// # Errors
    ///
    /// [`TraversalError::NotYetRun`] before a run;
    /// [`TraversalError::CollectorDisabled`] if finish-order collection was
    /// off.
    pub fn finish_order(&self) -> Result<&[Vertex], TraversalError> {
        self.completed()?;
        self.collectors.finish_order()
    }

    /// The cycle trace left by the run.
    ///
    /// The trace is emptied whenever a new tree is opened, so after a run it
    /// holds the last tree's discovery sequence interleaved with the targets
    /// of edges that reached a Gray vertex. It is a diagnostic record, not a
    /// verified cycle; see [`DepthFirstSearch::has_cycle`].
    ///
    /// # Errors
    ///
    /// [`TraversalError::NotYetRun`] before a run;
    /// [`TraversalError::CollectorDisabled`] if cycle-trace collection was
    /// off.
    pub fn cycle_trace(&self) -> Result<&[Vertex], TraversalError> {
        self.completed()?;
        self.collectors.cycle_trace()
    }

    /// Whether the run confirmed a cycle.
    ///
    /// Nothing in the traversal confirms a cycle yet: the trace records every
    /// Gray target but no rule marks it authoritative, so this is always
    /// `false`. Use [`crate::topological_order`] for a reliable acyclicity
    /// check.
    ///
    /// # Errors
    ///
    /// [`TraversalError::NotYetRun`] before a run.
    pub fn has_cycle(&self) -> Result<bool, TraversalError> {
        self.completed()?;
        Ok(self.cycle_confirmed)
    }

    /// One group per DFS tree, newest tree first, members in discovery order.
    ///
    /// # Errors
    ///
    /// [`TraversalError::NotYetRun`] before a run;
    /// [`TraversalError::CollectorDisabled`] if component collection was off.
    pub fn components(&self) -> Result<&[Vec<Vertex>], TraversalError> {
        self.completed()?;
        self.collectors.components()
    }

    /// Number of component groups.
    ///
    /// # Errors
    ///
    /// Same as [`DepthFirstSearch::components`].
    pub fn component_count(&self) -> Result<usize, TraversalError> {
        self.components().map(<[Vec<Vertex>]>::len)
    }
}
