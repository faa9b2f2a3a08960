// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::stub::AbstractComponent;
use crate::config::ComponentConfig;
use crate::errors::FactoryError;
use crate::traits::Component;

use super::components::*;

/// Factory for creating local (in-process) component instances
pub struct LocalComponentFactory;

impl LocalComponentFactory {
    /// Create a component instance from configuration
    ///
    /// The `kind` field in the config determines which component to create:
    /// - "text_normalizer" -> TextNormalizer
    /// - "length_counter" -> LengthCounter
    /// - "threshold_comparator" -> ThresholdComparator
    /// - "abstract" -> AbstractComponent (no behavior, every run fails it)
    ///
    /// The component is named after `name`, falling back to `id`.
    pub fn create_component(config: &ComponentConfig) -> Result<Box<dyn Component>, FactoryError> {
        let name = config.display_name();

        match config.kind.as_str() {
            "text_normalizer" => Ok(Box::new(TextNormalizer::new(name))),
            "length_counter" => Ok(Box::new(LengthCounter::new(name))),
            "threshold_comparator" => Ok(Box::new(ThresholdComparator::new(name))),
            "abstract" => Ok(Box::new(AbstractComponent::new(name))),
            _ => Err(FactoryError::UnknownKind {
                component_id: config.id.clone(),
                kind: config.kind.clone(),
            }),
        }
    }

    /// List all available local component kinds
    pub fn list_available_kinds() -> Vec<&'static str> {
        vec![
            "text_normalizer",
            "length_counter",
            "threshold_comparator",
            "abstract",
        ]
    }

    /// Check if a kind is available
    pub fn is_kind_available(kind: &str) -> bool {
        Self::list_available_kinds().contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ComponentError;
    use crate::ports::Value;

    fn create_test_config(id: &str, kind: &str) -> ComponentConfig {
        ComponentConfig {
            id: id.to_string(),
            kind: kind.to_string(),
            name: None,
        }
    }

    #[test]
    fn test_create_components_with_declared_ports() {
        let test_cases = vec![
            ("text_normalizer", vec!["text"], vec!["normalized"]),
            ("length_counter", vec!["text"], vec!["length"]),
            (
                "threshold_comparator",
                vec!["text", "threshold"],
                vec!["text", "threshold"],
            ),
        ];

        for (kind, inputs, outputs) in test_cases {
            let component = LocalComponentFactory::create_component(&create_test_config("c", kind))
                .unwrap_or_else(|e| panic!("Failed to create component {}: {}", kind, e));

            assert_eq!(component.inputs().keys().collect::<Vec<_>>(), inputs, "kind: {}", kind);
            assert_eq!(component.outputs().keys().collect::<Vec<_>>(), outputs, "kind: {}", kind);
        }
    }

    #[test]
    fn test_name_falls_back_to_id() {
        let component =
            LocalComponentFactory::create_component(&create_test_config("counter", "length_counter"))
                .unwrap();
        assert_eq!(component.name(), "counter");

        let mut config = create_test_config("counter", "length_counter");
        config.name = Some("Character Counter".to_string());
        let component = LocalComponentFactory::create_component(&config).unwrap();
        assert_eq!(component.name(), "Character Counter");
    }

    #[test]
    fn test_created_component_executes() {
        let mut component =
            LocalComponentFactory::create_component(&create_test_config("n", "text_normalizer"))
                .unwrap();

        component
            .inputs_mut()
            .set("text", Value::from("  MiXeD   Case "))
            .unwrap();
        component.execute().unwrap();

        assert_eq!(component.outputs().text("normalized"), Some("mixed case"));
    }

    #[test]
    fn test_abstract_kind_fails_on_execute() {
        let mut component =
            LocalComponentFactory::create_component(&create_test_config("base", "abstract"))
                .unwrap();

        assert_eq!(
            component.execute(),
            Err(ComponentError::Unimplemented {
                component: "base".to_string(),
            })
        );
    }

    #[test]
    fn test_create_component_unknown_kind() {
        let result =
            LocalComponentFactory::create_component(&create_test_config("test", "unknown_component"));

        let err = result.err().unwrap();
        assert_eq!(
            err,
            FactoryError::UnknownKind {
                component_id: "test".to_string(),
                kind: "unknown_component".to_string(),
            }
        );
        assert!(err.to_string().contains("unknown kind 'unknown_component'"));
    }

    #[test]
    fn test_is_kind_available() {
        assert!(LocalComponentFactory::is_kind_available("text_normalizer"));
        assert!(LocalComponentFactory::is_kind_available("abstract"));
        assert!(!LocalComponentFactory::is_kind_available("reverse_text"));
        assert_eq!(LocalComponentFactory::list_available_kinds().len(), 4);
    }
}
