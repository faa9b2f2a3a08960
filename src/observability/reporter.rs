// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Duration;

use crate::errors::{ComponentError, PortError};
use crate::observability::messages::component::{StageCompleted, StageFailed};
use crate::observability::messages::pipeline::{
    ConnectionReplaced, EmptyPipelineRun, PropagationFailed, RunCompleted, RunStarted,
    SeedKeyMismatch, ValuePropagated,
};
use crate::observability::messages::StructuredLog;
use crate::ports::PortMap;
use crate::traits::reporter::{PortLabel, Reporter};

/// Default reporter: forwards every pipeline event to `tracing` as a structured message.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn connection_replaced(&self, source: PortLabel<'_>, dropped: PortLabel<'_>, kept: PortLabel<'_>) {
        ConnectionReplaced {
            source,
            dropped,
            kept,
        }
        .log();
    }

    fn run_started(&self, component_count: usize, connection_count: usize) {
        RunStarted {
            component_count,
            connection_count,
        }
        .log();
    }

    fn empty_pipeline(&self) {
        EmptyPipelineRun.log();
    }

    fn seed_mismatch(&self, component: &str, unexpected: &[String], missing: &[String]) {
        SeedKeyMismatch {
            component,
            unexpected,
            missing,
        }
        .log();
    }

    fn component_completed(&self, position: usize, component: &str, outputs: &PortMap) {
        StageCompleted {
            position,
            component,
            outputs,
        }
        .log();
    }

    fn component_failed(&self, position: usize, component: &str, error: &ComponentError) {
        StageFailed {
            position,
            component,
            error,
        }
        .log();
    }

    fn value_propagated(&self, from: PortLabel<'_>, to: PortLabel<'_>) {
        ValuePropagated { from, to }.log();
    }

    fn propagation_failed(&self, from: PortLabel<'_>, to: PortLabel<'_>, error: &PortError) {
        PropagationFailed { from, to, error }.log();
    }

    fn run_completed(&self, component_count: usize, failed_count: usize, duration: Duration) {
        RunCompleted {
            component_count,
            failed_count,
            duration,
        }
        .log();
    }
}
