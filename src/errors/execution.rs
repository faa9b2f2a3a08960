// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while wiring and running a pipeline.

use thiserror::Error;

use crate::ports::PortDirection;

/// A write to a port key the component never declared.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortError {
    #[error("Port '{key}' is not declared (declared ports: {})", .declared.join(", "))]
    UndeclaredKey { key: String, declared: Vec<String> },
}

/// Failure reported by a component's `execute`.
///
/// The pipeline isolates these per component: they are reported and the run moves
/// on to the next stage with this stage's outputs left as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// The component relies on the trait's provided `execute` and has no behavior of its own.
    #[error("Component '{component}' does not implement execute")]
    Unimplemented { component: String },

    /// A strict component refusing to run because its preconditions are not met.
    #[error("Component '{component}' is not ready: {reason}")]
    NotReady { component: String, reason: String },

    #[error("Component '{component}' wrote to an invalid port: {source}")]
    Port {
        component: String,
        #[source]
        source: PortError,
    },
}

impl ComponentError {
    pub fn port(component: &str, source: PortError) -> Self {
        ComponentError::Port {
            component: component.to_string(),
            source,
        }
    }

    pub fn component(&self) -> &str {
        match self {
            ComponentError::Unimplemented { component }
            | ComponentError::NotReady { component, .. }
            | ComponentError::Port { component, .. } => component,
        }
    }
}

/// Errors surfaced to the caller by pipeline construction and `run`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Unknown component handle #{index}: pipeline has {component_count} components")]
    UnknownComponent { index: usize, component_count: usize },

    #[error("Invalid connection: component '{component}' has no {direction} port '{key}'")]
    InvalidConnection {
        component: String,
        key: String,
        direction: PortDirection,
    },

    #[error("Component handle #{index} was issued by a different pipeline")]
    ForeignComponent { index: usize },

    #[error("Seed input rejected for component '{component}': undeclared keys {}", .keys.join(", "))]
    SeedRejected { component: String, keys: Vec<String> },

    #[error(transparent)]
    Port(#[from] PortError),
}
