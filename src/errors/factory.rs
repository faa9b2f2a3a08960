// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for component instantiation.

use std::error::Error;
use std::fmt;

/// Errors that can occur while creating components from a pipeline definition
#[derive(Debug, Clone, PartialEq)]
pub enum FactoryError {
    /// No local component is registered under the requested kind
    UnknownKind { component_id: String, kind: String },
}

impl fmt::Display for FactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactoryError::UnknownKind { component_id, kind } => {
                write!(
                    f,
                    "Failed to create component '{}': unknown kind '{}'",
                    component_id, kind
                )
            }
        }
    }
}

impl Error for FactoryError {}
