// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::errors::{FactoryError, PipelineError};

/// Errors that can occur during pipeline definition validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two components share the same ID
    DuplicateComponentId {
        /// The duplicate component ID
        component_id: String,
    },
    /// A connection endpoint is not of the form `component_id.port_key`
    MalformedEndpoint {
        /// The endpoint as written in the definition
        endpoint: String,
    },
    /// A connection references a component ID that is not defined
    UnresolvedComponent {
        /// The endpoint that holds the reference
        endpoint: String,
        /// The component ID that couldn't be resolved
        missing_component: String,
    },
    /// A component asks for a kind the local factory cannot build
    UnknownComponentKind {
        /// The component with the unknown kind
        component_id: String,
        /// The requested kind
        kind: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateComponentId { component_id } => {
                write!(f, "Duplicate component ID: '{}'", component_id)
            }
            ValidationError::MalformedEndpoint { endpoint } => {
                write!(
                    f,
                    "Connection endpoint '{}' is malformed, expected 'component_id.port_key'",
                    endpoint
                )
            }
            ValidationError::UnresolvedComponent {
                endpoint,
                missing_component,
            } => {
                write!(
                    f,
                    "Connection endpoint '{}' references component '{}' which does not exist",
                    endpoint, missing_component
                )
            }
            ValidationError::UnknownComponentKind { component_id, kind } => {
                write!(
                    f,
                    "Component '{}' has unknown kind '{}'",
                    component_id, kind
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors from loading a pipeline definition and turning it into a [`crate::engine::Pipeline`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read pipeline definition {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported pipeline definition format {path:?}: expected .yaml, .yml or .toml")]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid YAML pipeline definition: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML pipeline definition: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration validation failed:\n{}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("\n"))]
    Invalid(Vec<ValidationError>),

    #[error(transparent)]
    Factory(#[from] FactoryError),

    #[error("Failed to wire pipeline: {0}")]
    Wiring(#[from] PipelineError),
}
