// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structural validation for pipeline definitions.
//!
//! Validation runs before any component is instantiated and checks what can be
//! checked from the definition alone:
//!
//! 1. **Uniqueness**: every component ID appears once
//! 2. **Kinds**: every component kind is known to the local factory
//! 3. **Endpoints**: every connection endpoint is `component_id.port_key` and
//!    names a defined component
//!
//! Port keys are checked later, by [`crate::engine::Pipeline::connect`], because
//! the port schema belongs to the component instances.
//!
//! # Examples
//!
//! ```rust
//! use the_conveyor::config::{validate_config, Config};
//! use the_conveyor::errors::ValidationError;
//!
//! let config: Config = serde_yaml::from_str(r#"
//! components:
//!   - id: normalizer
//!     kind: text_normalizer
//! connections:
//!   - from: normalizer.normalized
//!     to: counter.text
//! "#).unwrap();
//!
//! let errors = validate_config(&config).unwrap_err();
//! assert_eq!(
//!     errors,
//!     vec![ValidationError::UnresolvedComponent {
//!         endpoint: "counter.text".to_string(),
//!         missing_component: "counter".to_string(),
//!     }]
//! );
//! ```

use std::collections::HashSet;

use crate::backends::local::LocalComponentFactory;
use crate::config::{Config, Endpoint};
use crate::errors::ValidationError;
use crate::observability::messages::validation::{
    ValidationCompleted, ValidationFailed, ValidationIssue,
};
use crate::observability::messages::StructuredLog;

/// Validates a pipeline definition.
///
/// Errors are accumulated so that every problem is reported at once rather than
/// one per attempt.
///
/// # Returns
///
/// * `Ok(())` - Definition is structurally valid
/// * `Err(Vec<ValidationError>)` - Every validation error found, in definition order
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    errors.extend(validate_unique_component_ids(config));
    errors.extend(validate_component_kinds(config));
    errors.extend(validate_connection_endpoints(config));

    if errors.is_empty() {
        ValidationCompleted {
            component_count: config.components.len(),
            connection_count: config.connections.len(),
        }
        .log();
        Ok(())
    } else {
        for error in &errors {
            ValidationIssue { error }.log();
        }
        ValidationFailed {
            error_count: errors.len(),
        }
        .log();
        Err(errors)
    }
}

/// Each duplicate is reported once, at its second occurrence.
fn validate_unique_component_ids(config: &Config) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut errors = Vec::new();

    for component in &config.components {
        if !seen.insert(component.id.as_str()) && reported.insert(component.id.as_str()) {
            errors.push(ValidationError::DuplicateComponentId {
                component_id: component.id.clone(),
            });
        }
    }

    errors
}

fn validate_component_kinds(config: &Config) -> Vec<ValidationError> {
    config
        .components
        .iter()
        .filter(|component| !LocalComponentFactory::is_kind_available(&component.kind))
        .map(|component| ValidationError::UnknownComponentKind {
            component_id: component.id.clone(),
            kind: component.kind.clone(),
        })
        .collect()
}

fn validate_connection_endpoints(config: &Config) -> Vec<ValidationError> {
    let ids: HashSet<&str> = config.components.iter().map(|c| c.id.as_str()).collect();
    let mut errors = Vec::new();

    for connection in &config.connections {
        for raw in [&connection.from, &connection.to] {
            match Endpoint::parse(raw) {
                None => errors.push(ValidationError::MalformedEndpoint {
                    endpoint: raw.clone(),
                }),
                Some(endpoint) if !ids.contains(endpoint.component_id) => {
                    errors.push(ValidationError::UnresolvedComponent {
                        endpoint: raw.clone(),
                        missing_component: endpoint.component_id.to_string(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    errors
}
