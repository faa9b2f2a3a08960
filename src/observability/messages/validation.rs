// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline definition validation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A single validation problem found in a pipeline definition.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ValidationIssue<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for ValidationIssue<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Validation error: {}", self.error)
    }
}

impl StructuredLog for ValidationIssue<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("validation_issue", span_name = name, error = %self.error)
    }
}

/// Validation passed.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
///
/// # Example
/// ```
/// use the_conveyor::observability::messages::validation::ValidationCompleted;
///
/// let msg = ValidationCompleted {
///     component_count: 2,
///     connection_count: 1,
/// };
///
/// assert_eq!(msg.to_string(), "Pipeline definition valid: 2 components, 1 connections");
/// ```
pub struct ValidationCompleted {
    pub component_count: usize,
    pub connection_count: usize,
}

impl Display for ValidationCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline definition valid: {} components, {} connections",
            self.component_count, self.connection_count
        )
    }
}

impl StructuredLog for ValidationCompleted {
    fn log(&self) {
        tracing::debug!(
            component_count = self.component_count,
            connection_count = self.connection_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "validation",
            span_name = name,
            component_count = self.component_count,
            connection_count = self.connection_count,
        )
    }
}

/// Validation failed with one or more errors.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ValidationFailed {
    pub error_count: usize,
}

impl Display for ValidationFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Pipeline definition invalid: {} errors", self.error_count)
    }
}

impl StructuredLog for ValidationFailed {
    fn log(&self) {
        tracing::error!(error_count = self.error_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "validation_failed",
            span_name = name,
            error_count = self.error_count,
        )
    }
}
