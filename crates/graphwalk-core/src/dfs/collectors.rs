//! Optional side-collections fed by the traversal.
//!
//! Each collector is present (`Some`) exactly when its toggle is on. Finish
//! order and components are specified as prepend-on-event sequences; they are
//! accumulated by appending during the run and reversed once in
//! [`Collectors::finish_run`], which yields the same order.

use crate::adjacency::Vertex;
use crate::config::{Collector, TraversalConfig};
use crate::error::TraversalError;

#[derive(Debug, Clone, Default)]
pub(super) struct Collectors {
    finish_order: Option<Vec<Vertex>>,
    cycle_trace: Option<Vec<Vertex>>,
    components: Option<Vec<Vec<Vertex>>>,
}

impl Collectors {
    pub(super) fn for_config(config: &TraversalConfig) -> Self {
        let mut collectors = Self::default();
        for collector in Collector::ALL {
            collectors.toggle(collector, config.is_enabled(collector));
        }
        collectors
    }

    /// `true` allocates a fresh empty collector, `false` discards it.
    pub(super) fn toggle(&mut self, collector: Collector, enabled: bool) {
        match collector {
            Collector::FinishOrder => self.finish_order = enabled.then(Vec::new),
            Collector::CycleTrace => self.cycle_trace = enabled.then(Vec::new),
            Collector::Components => self.components = enabled.then(Vec::new),
        }
    }

    pub(super) fn start_run(&mut self) {
        if let Some(groups) = &mut self.components {
            groups.clear();
        }
    }

    pub(super) fn finish_run(&mut self) {
        if let Some(order) = &mut self.finish_order {
            order.reverse();
        }
        if let Some(groups) = &mut self.components {
            groups.reverse();
        }
    }

    pub(super) fn clear_trace(&mut self) {
        if let Some(trace) = &mut self.cycle_trace {
            trace.clear();
        }
    }

    pub(super) fn record_trace(&mut self, v: Vertex) {
        if let Some(trace) = &mut self.cycle_trace {
            trace.push(v);
        }
    }

    pub(super) fn open_component(&mut self) {
        if let Some(groups) = &mut self.components {
            groups.push(Vec::new());
        }
    }

    /// Appends `v` to the most recently opened group.
    pub(super) fn record_component_member(&mut self, v: Vertex) {
        if let Some(group) = self.components.as_mut().and_then(|groups| groups.last_mut()) {
            group.push(v);
        }
    }

    pub(super) fn record_finish(&mut self, v: Vertex) {
        if let Some(order) = &mut self.finish_order {
            order.push(v);
        }
    }

    pub(super) fn finish_order(&self) -> Result<&[Vertex], TraversalError> {
        self.finish_order
            .as_deref()
            .ok_or(TraversalError::CollectorDisabled(Collector::FinishOrder))
    }

    pub(super) fn cycle_trace(&self) -> Result<&[Vertex], TraversalError> {
        self.cycle_trace
            .as_deref()
            .ok_or(TraversalError::CollectorDisabled(Collector::CycleTrace))
    }

    pub(super) fn components(&self) -> Result<&[Vec<Vertex>], TraversalError> {
        self.components
            .as_deref()
            .ok_or(TraversalError::CollectorDisabled(Collector::Components))
    }
}
