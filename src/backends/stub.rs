// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::ports::PortMap;
use crate::traits::Component;
#[cfg(test)]
use crate::{errors::ComponentError, ports::Value};

/// A component with ports but no behavior of its own.
///
/// It keeps the provided [`Component::execute`], so every run records it as a
/// failed stage while the rest of the pipeline carries on.
pub struct AbstractComponent {
    name: String,
    inputs: PortMap,
    outputs: PortMap,
}

impl AbstractComponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: PortMap::with_keys(["text"]),
            outputs: PortMap::with_keys(["text"]),
        }
    }
}

impl Component for AbstractComponent {
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
}

/// Copies `text` through, failing instead of skipping when the input is empty
#[cfg(test)]
pub struct StrictEcho {
    name: String,
    inputs: PortMap,
    outputs: PortMap,
}

#[cfg(test)]
impl StrictEcho {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: PortMap::with_keys(["text"]),
            outputs: PortMap::with_keys(["text"]),
        }
    }
}

#[cfg(test)]
impl Component for StrictEcho {
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
        let text = self
            .inputs
            .text("text")
            .map(str::to_string)
            .ok_or_else(|| ComponentError::NotReady {
                component: self.name.clone(),
                reason: "input 'text' is empty".to_string(),
            })?;

        self.outputs
            .set("text", Value::Text(text))
            .map_err(|source| ComponentError::port(&self.name, source))
    }
}
