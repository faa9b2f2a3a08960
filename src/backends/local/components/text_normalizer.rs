// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ComponentError;
use crate::observability::messages::component::{ComponentProduced, ComponentSkipped};
use crate::observability::messages::StructuredLog;
use crate::ports::{PortMap, Value};
use crate::traits::Component;

/// Text Normalizer - lowercases text and collapses whitespace runs to a single space
pub struct TextNormalizer {
    name: String,
    inputs: PortMap,
    outputs: PortMap,
}

impl TextNormalizer {
    pub const INPUT: &'static str = "text";
    pub const OUTPUT: &'static str = "normalized";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: PortMap::with_keys([Self::INPUT]),
            outputs: PortMap::with_keys([Self::OUTPUT]),
        }
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new("Text Normalizer")
    }
}

/// Lowercase, trim, and join words with single spaces.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

impl Component for TextNormalizer {
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
        let Some(text) = self.inputs.text(Self::INPUT) else {
            ComponentSkipped {
                component: &self.name,
                missing_input: Self::INPUT,
            }
            .log();
            return Ok(());
        };

        let normalized = normalize(text);
        self.outputs
            .set(Self::OUTPUT, Value::Text(normalized))
            .map_err(|source| ComponentError::port(&self.name, source))?;

        ComponentProduced {
            component: &self.name,
            outputs: &self.outputs,
        }
        .log();

        Ok(())
    }
}
