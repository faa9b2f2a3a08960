// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ComponentError;
use crate::observability::messages::component::{ComponentProduced, ComponentSkipped};
use crate::observability::messages::StructuredLog;
use crate::ports::{PortMap, Value};
use crate::traits::Component;

/// Text Length Counter - counts the characters (Unicode scalar values) of its input text
pub struct LengthCounter {
    name: String,
    inputs: PortMap,
    outputs: PortMap,
}

impl LengthCounter {
    pub const INPUT: &'static str = "text";
    pub const OUTPUT: &'static str = "length";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: PortMap::with_keys([Self::INPUT]),
            outputs: PortMap::with_keys([Self::OUTPUT]),
        }
    }
}

impl Default for LengthCounter {
    fn default() -> Self {
        Self::new("Text Length Counter")
    }
}

impl Component for LengthCounter {
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

        let length = text.chars().count() as i64;
        self.outputs
            .set(Self::OUTPUT, Value::Integer(length))
            .map_err(|source| ComponentError::port(&self.name, source))?;

        ComponentProduced {
            component: &self.name,
            outputs: &self.outputs,
        }
        .log();

        Ok(())
    }
}
