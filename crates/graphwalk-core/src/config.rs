/// Traversal configuration: which optional collectors are active and how a
/// caller-supplied root order is interpreted.
///
/// ```
/// use graphwalk_core::{Collector, TraversalConfig};
///
/// let cfg = TraversalConfig::default().with(Collector::FinishOrder, true);
/// assert!(cfg.finish_order);
/// assert!(!cfg.cycle_trace);
/// assert!(!cfg.components);
/// ```
use std::fmt;

use serde::{Deserialize, Serialize};

/// The optional side-collections the engine can maintain during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collector {
    /// Vertices ordered latest-finished first (topological order on a DAG).
    FinishOrder,
    /// Vertices appended while exploring the current tree, plus the targets
    /// of edges that reach a vertex still on the stack.
    CycleTrace,
    /// One group of vertices per DFS tree, in discovery order.
    Components,
}

impl Collector {
    /// All collectors, in declaration order.
    pub const ALL: [Collector; 3] = [
        Collector::FinishOrder,
        Collector::CycleTrace,
        Collector::Components,
    ];

    /// Stable `snake_case` name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Collector::FinishOrder => "finish_order",
            Collector::CycleTrace => "cycle_trace",
            Collector::Components => "components",
        }
    }
}

impl fmt::Display for Collector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How [`crate::DepthFirstSearch::run_ordered`] decides whether slot `i` of
/// the supplied order starts a new tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootSelection {
    /// Slot `i` starts a tree when vertex `i` (the position, not `order[i]`)
    /// is still White. `order[i]` is then visited if it is White too.
    #[default]
    Positional,
    /// Slot `i` starts a tree when `order[i]` is White. Required for the
    /// second pass of Kosaraju-style algorithms.
    ByVertex,
}

/// Collector toggles and root-order policy for a traversal.
///
/// Deserialization fills missing fields from [`Default`], so `{}` is a valid
/// configuration with every collector disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Collect the finish-order list. Default `false`.
    pub finish_order: bool,
    /// Collect the cycle trace. Default `false`.
    pub cycle_trace: bool,
    /// Collect per-tree component groups. Default `false`.
    pub components: bool,
    /// Root-order policy for ordered runs. Default [`RootSelection::Positional`].
    pub root_selection: RootSelection,
}

impl TraversalConfig {
    /// Returns whether `collector` is enabled.
    pub fn is_enabled(&self, collector: Collector) -> bool {
        match collector {
            Collector::FinishOrder => self.finish_order,
            Collector::CycleTrace => self.cycle_trace,
            Collector::Components => self.components,
        }
    }

    /// Enables or disables `collector` in place.
    pub fn set(&mut self, collector: Collector, enabled: bool) {
        match collector {
            Collector::FinishOrder => self.finish_order = enabled,
            Collector::CycleTrace => self.cycle_trace = enabled,
            Collector::Components => self.components = enabled,
        }
    }

    /// Builder form of [`TraversalConfig::set`].
    #[must_use]
    pub fn with(mut self, collector: Collector, enabled: bool) -> Self {
        self.set(collector, enabled);
        self
    }

    /// Builder form for the root-order policy.
    #[must_use]
    pub fn with_root_selection(mut self, root_selection: RootSelection) -> Self {
        self.root_selection = root_selection;
        self
    }

    /// Every collector enabled, positional root selection.
    pub fn all_collectors() -> Self {
        Collector::ALL
            .into_iter()
            .fold(Self::default(), |cfg, c| cfg.with(c, true))
    }
}
