// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ConfigError;
use crate::ports::Value;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Main configuration structure for a pipeline definition.
///
/// Describes the components in execution order, the connections between their
/// ports, engine options and an optional default seed for the first component.
/// It is typically loaded from a YAML or TOML file.
///
/// # Fields
/// * `options` - Engine behavior (optional, see [`PipelineOptions`])
/// * `components` - Components in registration (= execution) order
/// * `connections` - Output-to-input wiring (optional)
/// * `seed` - Default seed input for the first component (optional)
///
/// # Example
/// ```yaml
/// options:
///   seed_policy: warn
///   connection_policy: replace
/// components:
///   - id: normalizer
///     kind: text_normalizer
///   - id: counter
///     kind: length_counter
/// connections:
///   - from: normalizer.normalized
///     to: counter.text
/// seed:
///   text: "HelLo WorLD"
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: PipelineOptions,
    pub components: Vec<ComponentConfig>,
    #[serde(default)]
    pub connections: Vec<ConnectionConfig>,
    #[serde(default)]
    pub seed: BTreeMap<String, Value>,
}

/// Engine behavior switches.
///
/// # Fields
/// * `seed_policy` - What to do with seed keys the first component does not declare
/// * `connection_policy` - What to do when a source port is connected a second time
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    #[serde(default)]
    pub seed_policy: SeedPolicy,
    #[serde(default)]
    pub connection_policy: ConnectionPolicy,
}

/// Handling of seed input keys the first component does not declare.
///
/// # Variants
/// * `Warn` - Report the mismatch, skip the undeclared keys, apply the rest
/// * `Reject` - Fail the run before any component executes
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    #[default]
    Warn,
    Reject,
}

/// Handling of a second connection from an already wired source port.
///
/// # Variants
/// * `Replace` - The newest connection wins; the previous target is dropped
/// * `FanOut` - Every connected target receives the value
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionPolicy {
    #[default]
    Replace,
    FanOut,
}

/// Configuration for a single component.
///
/// # Fields
/// * `id` - Unique identifier used by connection endpoints
/// * `kind` - Local component implementation (see `LocalComponentFactory`)
/// * `name` - Display name; defaults to `id`
///
/// # Example
/// ```yaml
/// id: gate
/// kind: threshold_comparator
/// name: "Length Gate"
/// ```
#[derive(Debug, Deserialize, Clone)]
pub struct ComponentConfig {
    pub id: String,
    pub kind: String,
    pub name: Option<String>,
}

impl ComponentConfig {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Configuration for a single connection, written as `component_id.port_key` endpoints.
#[derive(Debug, Deserialize, Clone)]
pub struct ConnectionConfig {
    pub from: String,
    pub to: String,
}

/// A parsed `component_id.port_key` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    pub component_id: &'a str,
    pub key: &'a str,
}

impl<'a> Endpoint<'a> {
    /// Split at the first `.`; both halves must be non-empty.
    ///
    /// ```
    /// use the_conveyor::config::Endpoint;
    ///
    /// let endpoint = Endpoint::parse("normalizer.normalized").unwrap();
    /// assert_eq!(endpoint.component_id, "normalizer");
    /// assert_eq!(endpoint.key, "normalized");
    ///
    /// assert!(Endpoint::parse("normalizer").is_none());
    /// ```
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (component_id, key) = raw.split_once('.')?;
        let (component_id, key) = (component_id.trim(), key.trim());
        if component_id.is_empty() || key.is_empty() {
            return None;
        }
        Some(Self { component_id, key })
    }
}

/// Load a pipeline definition from a YAML (`.yaml`, `.yml`) or TOML (`.toml`) file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
        Some("toml") => Ok(toml::from_str(&content)?),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Load and validate a pipeline definition
///
/// All validation errors are collected and returned together.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
components:
  - id: normalizer
    kind: text_normalizer
  - id: counter
    kind: length_counter
    name: Counter
connections:
  - from: normalizer.normalized
    to: counter.text
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.components.len(), 2);
        assert_eq!(cfg.components[0].display_name(), "normalizer");
        assert_eq!(cfg.components[1].display_name(), "Counter");
        assert_eq!(cfg.connections[0].to, "counter.text");
        assert_eq!(cfg.options, PipelineOptions::default());
        assert!(cfg.seed.is_empty());
    }

    #[test]
    fn test_parse_options_and_seed() {
        let yaml = r#"
options:
  seed_policy: reject
  connection_policy: fan_out
components:
  - id: gate
    kind: threshold_comparator
seed:
  text: "hello"
  threshold: 3
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.options.seed_policy, SeedPolicy::Reject);
        assert_eq!(cfg.options.connection_policy, ConnectionPolicy::FanOut);
        assert_eq!(cfg.seed.get("text"), Some(&Value::from("hello")));
        assert_eq!(cfg.seed.get("threshold"), Some(&Value::Integer(3)));
    }

    #[test]
    fn test_partial_options_use_defaults() {
        let yaml = r#"
options:
  connection_policy: fan_out
components: []
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.options.seed_policy, SeedPolicy::Warn);
        assert_eq!(cfg.options.connection_policy, ConnectionPolicy::FanOut);
    }

    #[test]
    fn test_load_toml_config() {
        let file = write_temp(
            ".toml",
            r#"
[options]
seed_policy = "warn"

[[components]]
id = "normalizer"
kind = "text_normalizer"

[[components]]
id = "counter"
kind = "length_counter"

[[connections]]
from = "normalizer.normalized"
to = "counter.text"

[seed]
text = "Some Text"
"#,
        );

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.components.len(), 2);
        assert_eq!(cfg.connections.len(), 1);
        assert_eq!(cfg.seed.get("text"), Some(&Value::from("Some Text")));
    }

    #[test]
    fn test_load_and_validate_valid_yaml() {
        let file = write_temp(
            ".yaml",
            r#"
components:
  - id: normalizer
    kind: text_normalizer
  - id: counter
    kind: length_counter
connections:
  - from: normalizer.normalized
    to: counter.text
"#,
        );

        assert!(load_and_validate_config(file.path()).is_ok());
    }

    #[test]
    fn test_load_and_validate_reports_all_errors() {
        let file = write_temp(
            ".yml",
            r#"
components:
  - id: normalizer
    kind: text_normalizer
  - id: normalizer
    kind: shouting_component
connections:
  - from: normalizer.normalized
    to: nowhere.text
"#,
        );

        let err = load_and_validate_config(file.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Configuration validation failed"));
        assert!(message.contains("Duplicate component ID: 'normalizer'"));
        assert!(message.contains("unknown kind 'shouting_component'"));
        assert!(message.contains("references component 'nowhere' which does not exist"));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_temp(".json", "{}");

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("configs/does-not-exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_endpoint_parse_edge_cases() {
        assert_eq!(
            Endpoint::parse("a.b.c"),
            Some(Endpoint {
                component_id: "a",
                key: "b.c"
            })
        );
        assert!(Endpoint::parse(".key").is_none());
        assert!(Endpoint::parse("component.").is_none());
        assert!(Endpoint::parse("").is_none());
    }
}
