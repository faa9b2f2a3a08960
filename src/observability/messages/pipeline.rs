// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline wiring and run lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Run lifecycle (start, completion)
//! * Seed input handling
//! * Connection registry changes
//! * Output-to-input propagation

use crate::observability::messages::StructuredLog;
use crate::traits::reporter::PortLabel;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Pipeline run started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_conveyor::observability::messages::pipeline::RunStarted;
///
/// let msg = RunStarted {
///     component_count: 2,
///     connection_count: 1,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RunStarted {
    pub component_count: usize,
    pub connection_count: usize,
}

impl Display for RunStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting pipeline run: {} components, {} connections",
            self.component_count, self.connection_count
        )
    }
}

impl StructuredLog for RunStarted {
    fn log(&self) {
        tracing::info!(
            component_count = self.component_count,
            connection_count = self.connection_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_run",
            span_name = name,
            component_count = self.component_count,
            connection_count = self.connection_count,
        )
    }
}

/// Pipeline run finished. Every component has had its turn.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_conveyor::observability::messages::pipeline::RunCompleted;
/// use std::time::Duration;
///
/// let msg = RunCompleted {
///     component_count: 3,
///     failed_count: 1,
///     duration: Duration::from_micros(250),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RunCompleted {
    pub component_count: usize,
    pub failed_count: usize,
    pub duration: std::time::Duration,
}

impl Display for RunCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline run completed: {} components ({} failed) in {:?}",
            self.component_count, self.failed_count, self.duration
        )
    }
}

impl StructuredLog for RunCompleted {
    fn log(&self) {
        tracing::info!(
            component_count = self.component_count,
            failed_count = self.failed_count,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_run_completed",
            span_name = name,
            component_count = self.component_count,
            failed_count = self.failed_count,
            duration = ?self.duration,
        )
    }
}

/// `run` was called on a pipeline with no registered components.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct EmptyPipelineRun;

impl Display for EmptyPipelineRun {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Pipeline has no components; run produced no outputs")
    }
}

impl StructuredLog for EmptyPipelineRun {
    fn log(&self) {
        tracing::warn!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("empty_pipeline_run", span_name = name)
    }
}

/// Seed input keys do not match the first component's declared inputs.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
///
/// # Example
/// ```
/// use the_conveyor::observability::messages::pipeline::SeedKeyMismatch;
///
/// let unexpected = vec!["txt".to_string()];
/// let missing = vec!["text".to_string()];
/// let msg = SeedKeyMismatch {
///     component: "Text Normalizer",
///     unexpected: &unexpected,
///     missing: &missing,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Seed input does not match inputs of 'Text Normalizer': undeclared [txt], not supplied [text]"
/// );
/// ```
pub struct SeedKeyMismatch<'a> {
    pub component: &'a str,
    pub unexpected: &'a [String],
    pub missing: &'a [String],
}

impl Display for SeedKeyMismatch<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Seed input does not match inputs of '{}': undeclared [{}], not supplied [{}]",
            self.component,
            self.unexpected.join(", "),
            self.missing.join(", ")
        )
    }
}

impl StructuredLog for SeedKeyMismatch<'_> {
    fn log(&self) {
        tracing::warn!(
            component = self.component,
            unexpected = ?self.unexpected,
            missing = ?self.missing,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "seed_key_mismatch",
            span_name = name,
            component = self.component,
        )
    }
}

/// A new connection displaced the previous target of a source port.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct ConnectionReplaced<'a> {
    pub source: PortLabel<'a>,
    pub dropped: PortLabel<'a>,
    pub kept: PortLabel<'a>,
}

impl Display for ConnectionReplaced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Connection from '{}' now targets '{}'; previous target '{}' was dropped",
            self.source, self.kept, self.dropped
        )
    }
}

impl StructuredLog for ConnectionReplaced<'_> {
    fn log(&self) {
        tracing::warn!(
            source = %self.source,
            dropped = %self.dropped,
            kept = %self.kept,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "connection_replaced",
            span_name = name,
            source = %self.source,
        )
    }
}

/// An output value was copied into a downstream input.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct ValuePropagated<'a> {
    pub from: PortLabel<'a>,
    pub to: PortLabel<'a>,
}

impl Display for ValuePropagated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Propagated '{}' -> '{}'", self.from, self.to)
    }
}

impl StructuredLog for ValuePropagated<'_> {
    fn log(&self) {
        tracing::debug!(from = %self.from, to = %self.to, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "value_propagated",
            span_name = name,
            from = %self.from,
            to = %self.to,
        )
    }
}

/// A propagated value could not be written into the target input.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct PropagationFailed<'a> {
    pub from: PortLabel<'a>,
    pub to: PortLabel<'a>,
    pub error: &'a dyn std::error::Error,
}

impl Display for PropagationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Propagation '{}' -> '{}' failed, continuing: {}",
            self.from, self.to, self.error
        )
    }
}

impl StructuredLog for PropagationFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            from = %self.from,
            to = %self.to,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "propagation_failed",
            span_name = name,
            from = %self.from,
            to = %self.to,
        )
    }
}
