// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ComponentError;
use crate::observability::messages::component::{ComponentProduced, ComponentSkipped};
use crate::observability::messages::StructuredLog;
use crate::ports::{PortMap, Value};
use crate::traits::Component;

/// Threshold Comparator - passes text and threshold through when the text is longer
/// than the threshold, otherwise empties both outputs
pub struct ThresholdComparator {
    name: String,
    inputs: PortMap,
    outputs: PortMap,
}

impl ThresholdComparator {
    pub const TEXT: &'static str = "text";
    pub const THRESHOLD: &'static str = "threshold";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: PortMap::with_keys([Self::TEXT, Self::THRESHOLD]),
            outputs: PortMap::with_keys([Self::TEXT, Self::THRESHOLD]),
        }
    }

    fn skip(&self, missing_input: &str) -> Result<(), ComponentError> {
        ComponentSkipped {
            component: &self.name,
            missing_input,
        }
        .log();
        Ok(())
    }
}

impl Default for ThresholdComparator {
    fn default() -> Self {
        Self::new("Threshold Comparator")
    }
}

impl Component for ThresholdComparator {
    fn name(&self) -> &str {
        &self.name
    }

    fn inputs(&self) -> &PortMap {
        &self.inputs
    }

    fn inputs_mut(&mut self) -> &mut PortMap {
        &mut self.inputs
    }

    fn outputs(&self) -> &PortMap {
        &self.outputs
    }

    fn execute(&mut self) -> Result<(), ComponentError> {
        let Some(text) = self.inputs.text(Self::TEXT).map(str::to_string) else {
            return self.skip(Self::TEXT);
        };
        let Some(threshold) = self.inputs.integer(Self::THRESHOLD) else {
            return self.skip(Self::THRESHOLD);
        };

        if text.chars().count() as i64 > threshold {
            self.outputs
                .set(Self::TEXT, Value::Text(text))
                .and_then(|_| self.outputs.set(Self::THRESHOLD, Value::Integer(threshold)))
                .map_err(|source| ComponentError::port(&self.name, source))?;
        } else {
            self.outputs.reset();
        }

        ComponentProduced {
            component: &self.name,
            outputs: &self.outputs,
        }
        .log();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(text: Option<&str>, threshold: Option<i64>) -> ThresholdComparator {
        let mut comparator = ThresholdComparator::default();
        if let Some(text) = text {
            comparator.inputs_mut().set("text", Value::from(text)).unwrap();
        }
        if let Some(threshold) = threshold {
            comparator
                .inputs_mut()
                .set("threshold", Value::Integer(threshold))
                .unwrap();
        }
        comparator.execute().unwrap();
        comparator
    }

    #[test]
    fn test_longer_text_passes_through() {
        let comparator = compare(Some("fifteen chars!!"), Some(10));

        assert_eq!(comparator.outputs().text("text"), Some("fifteen chars!!"));
        assert_eq!(comparator.outputs().integer("threshold"), Some(10));
    }

    #[test]
    fn test_short_text_empties_outputs() {
        let comparator = compare(Some("hello"), Some(10));

        assert_eq!(comparator.outputs().filled(), 0);
    }

    #[test]
    fn test_equal_length_is_not_greater() {
        let comparator = compare(Some("0123456789"), Some(10));

        assert_eq!(comparator.outputs().filled(), 0);
    }

    #[test]
    fn test_short_text_clears_previous_pass() {
        let mut comparator = compare(Some("fifteen chars!!"), Some(10));
        comparator.inputs_mut().set("text", Value::from("short")).unwrap();
        comparator.execute().unwrap();

        assert_eq!(comparator.outputs().get("text"), None);
        assert_eq!(comparator.outputs().get("threshold"), None);
    }

    #[test]
    fn test_missing_inputs_are_a_no_op() {
        assert_eq!(compare(None, Some(10)).outputs().filled(), 0);
        assert_eq!(compare(Some("long enough text"), None).outputs().filled(), 0);
        assert_eq!(compare(None, None).outputs().filled(), 0);
    }
}
