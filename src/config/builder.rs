// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::backends::local::LocalComponentFactory;
use crate::config::{validate_config, Config, Endpoint};
use crate::engine::{ComponentId, Pipeline};
use crate::errors::{ConfigError, ValidationError};
use crate::observability::TracingReporter;
use crate::traits::Reporter;

/// Pipeline builder - turns a pipeline definition into a wired [`Pipeline`].
///
/// Components are registered in definition order, so definition order is also
/// execution order. Connections are applied in definition order through
/// [`Pipeline::connect`], which checks the port keys against the instantiated
/// components.
///
/// # Examples
///
/// ```
/// use the_conveyor::config::{Config, PipelineBuilder};
/// use the_conveyor::ports::Value;
///
/// let config: Config = serde_yaml::from_str(r#"
/// components:
///   - id: normalizer
///     kind: text_normalizer
///   - id: counter
///     kind: length_counter
/// connections:
///   - from: normalizer.normalized
///     to: counter.text
/// "#).unwrap();
///
/// let mut pipeline = PipelineBuilder::from_config(&config).unwrap();
/// let seed = [("text".to_string(), Value::from("Two  Words"))].into();
/// let outputs = pipeline.run(seed).unwrap();
///
/// assert_eq!(outputs.value("counter", "length"), Some(&Value::Integer(9)));
/// ```
pub struct PipelineBuilder;

impl PipelineBuilder {
    /// Build a pipeline that reports through `tracing`.
    pub fn from_config(cfg: &Config) -> Result<Pipeline, ConfigError> {
        Self::from_config_with_reporter(cfg, Box::new(TracingReporter))
    }

    /// Build a pipeline that reports to `reporter`.
    ///
    /// The definition is validated first; every structural problem is returned
    /// together as [`ConfigError::Invalid`].
    pub fn from_config_with_reporter(
        cfg: &Config,
        reporter: Box<dyn Reporter>,
    ) -> Result<Pipeline, ConfigError> {
        validate_config(cfg).map_err(ConfigError::Invalid)?;

        let mut pipeline = Pipeline::with_options(cfg.options).with_reporter(reporter);
        let mut handles: HashMap<&str, ComponentId> = HashMap::new();

        for component_config in &cfg.components {
            let component = LocalComponentFactory::create_component(component_config)?;
            handles.insert(component_config.id.as_str(), pipeline.add_component(component));
        }

        for connection in &cfg.connections {
            let from = resolve(&handles, &connection.from)?;
            let to = resolve(&handles, &connection.to)?;
            pipeline.connect(from.0, from.1, to.0, to.1)?;
        }

        Ok(pipeline)
    }
}

/// Map a `component_id.port_key` endpoint onto a registered component.
fn resolve<'a>(
    handles: &HashMap<&str, ComponentId>,
    raw: &'a str,
) -> Result<(ComponentId, &'a str), ConfigError> {
    let endpoint = Endpoint::parse(raw).ok_or_else(|| {
        ConfigError::Invalid(vec![ValidationError::MalformedEndpoint {
            endpoint: raw.to_string(),
        }])
    })?;

    handles
        .get(endpoint.component_id)
        .map(|id| (*id, endpoint.key))
        .ok_or_else(|| {
            ConfigError::Invalid(vec![ValidationError::UnresolvedComponent {
                endpoint: raw.to_string(),
                missing_component: endpoint.component_id.to_string(),
            }])
        })
}
