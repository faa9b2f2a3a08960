// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::errors::{ComponentError, PortError};
use crate::ports::PortMap;
use crate::traits::reporter::{PortLabel, Reporter};

/// Owned copy of a reported event
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ConnectionReplaced { source: String, dropped: String, kept: String },
    RunStarted { component_count: usize, connection_count: usize },
    EmptyPipeline,
    SeedMismatch { component: String, unexpected: Vec<String>, missing: Vec<String> },
    ComponentCompleted { position: usize, component: String },
    ComponentFailed { position: usize, component: String, error: ComponentError },
    ValuePropagated { from: String, to: String },
    PropagationFailed { from: String, to: String, error: PortError },
    RunCompleted { component_count: usize, failed_count: usize },
}

/// Reporter that keeps every event in memory. Clones share the same event log,
/// so a test can hand one clone to the pipeline and inspect the other.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl Reporter for RecordingReporter {
    fn connection_replaced(&self, source: PortLabel<'_>, dropped: PortLabel<'_>, kept: PortLabel<'_>) {
        self.push(Event::ConnectionReplaced {
            source: source.to_string(),
            dropped: dropped.to_string(),
            kept: kept.to_string(),
        });
    }

    fn run_started(&self, component_count: usize, connection_count: usize) {
        self.push(Event::RunStarted {
            component_count,
            connection_count,
        });
    }

    fn empty_pipeline(&self) {
        self.push(Event::EmptyPipeline);
    }

    fn seed_mismatch(&self, component: &str, unexpected: &[String], missing: &[String]) {
        self.push(Event::SeedMismatch {
            component: component.to_string(),
            unexpected: unexpected.to_vec(),
            missing: missing.to_vec(),
        });
    }

    fn component_completed(&self, position: usize, component: &str, _outputs: &PortMap) {
        self.push(Event::ComponentCompleted {
            position,
            component: component.to_string(),
        });
    }

    fn component_failed(&self, position: usize, component: &str, error: &ComponentError) {
        self.push(Event::ComponentFailed {
            position,
            component: component.to_string(),
            error: error.clone(),
        });
    }

    fn value_propagated(&self, from: PortLabel<'_>, to: PortLabel<'_>) {
        self.push(Event::ValuePropagated {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    fn propagation_failed(&self, from: PortLabel<'_>, to: PortLabel<'_>, error: &PortError) {
        self.push(Event::PropagationFailed {
            from: from.to_string(),
            to: to.to_string(),
            error: error.clone(),
        });
    }

    fn run_completed(&self, component_count: usize, failed_count: usize, _duration: Duration) {
        self.push(Event::RunCompleted {
            component_count,
            failed_count,
        });
    }
}
