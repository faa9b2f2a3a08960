// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for component execution events.
//!
//! This module contains message types for logging events related to:
//! * Components producing outputs
//! * Components skipping work because an input is still empty
//! * The pipeline's view of each stage (completed, failed)

use crate::observability::messages::StructuredLog;
use crate::ports::PortMap;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A component wrote its outputs.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_conveyor::observability::messages::component::ComponentProduced;
/// use the_conveyor::ports::{PortMap, Value};
///
/// let mut outputs = PortMap::with_keys(["length"]);
/// outputs.set("length", Value::Integer(11)).unwrap();
///
/// let msg = ComponentProduced {
///     component: "Text Length Counter",
///     outputs: &outputs,
/// };
///
/// assert_eq!(msg.to_string(), "Text Length Counter output: {length: 11}");
/// ```
pub struct ComponentProduced<'a> {
    pub component: &'a str,
    pub outputs: &'a PortMap,
}

impl Display for ComponentProduced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} output: {}", self.component, self.outputs)
    }
}

impl StructuredLog for ComponentProduced<'_> {
    fn log(&self) {
        tracing::info!(
            component = self.component,
            filled = self.outputs.filled(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "component_produced",
            span_name = name,
            component = self.component,
        )
    }
}

/// A component left its outputs untouched because a required input is empty.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct ComponentSkipped<'a> {
    pub component: &'a str,
    pub missing_input: &'a str,
}

impl Display for ComponentSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} skipped: input '{}' is empty",
            self.component, self.missing_input
        )
    }
}

impl StructuredLog for ComponentSkipped<'_> {
    fn log(&self) {
        tracing::debug!(
            component = self.component,
            missing_input = self.missing_input,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "component_skipped",
            span_name = name,
            component = self.component,
            missing_input = self.missing_input,
        )
    }
}

/// A stage finished its `execute` call without error.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct StageCompleted<'a> {
    pub position: usize,
    pub component: &'a str,
    pub outputs: &'a PortMap,
}

impl Display for StageCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stage {} '{}' completed: {}/{} outputs filled",
            self.position,
            self.component,
            self.outputs.filled(),
            self.outputs.len()
        )
    }
}

impl StructuredLog for StageCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            position = self.position,
            component = self.component,
            outputs = %self.outputs,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "stage",
            span_name = name,
            position = self.position,
            component = self.component,
        )
    }
}

/// A stage's `execute` failed; the failure is isolated and the run continues.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
///
/// # Example
/// ```
/// use the_conveyor::errors::ComponentError;
/// use the_conveyor::observability::messages::component::StageFailed;
///
/// let error = ComponentError::Unimplemented { component: "Component".to_string() };
/// let msg = StageFailed {
///     position: 1,
///     component: "Component",
///     error: &error,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Stage 1 'Component' failed, continuing with next stage: Component 'Component' does not implement execute"
/// );
/// ```
pub struct StageFailed<'a> {
    pub position: usize,
    pub component: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for StageFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stage {} '{}' failed, continuing with next stage: {}",
            self.position, self.component, self.error
        )
    }
}

impl StructuredLog for StageFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            position = self.position,
            component = self.component,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "stage_failed",
            span_name = name,
            position = self.position,
            component = self.component,
            error = %self.error,
        )
    }
}
