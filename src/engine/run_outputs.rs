// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::collections::BTreeMap;

use crate::ports::{PortValues, Value};

/// Final state of one stage after a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageOutputs {
    pub component: String,
    pub outputs: PortValues,
    /// Set when `execute` failed and the failure was isolated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Post-run outputs of every stage, in execution order.
///
/// Lookups by name resolve to the last registered component with that name,
/// matching what [`RunOutputs::into_map`] keeps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunOutputs {
    stages: Vec<StageOutputs>,
}

impl RunOutputs {
    pub(crate) fn push(&mut self, stage: StageOutputs) {
        self.stages.push(stage);
    }

    pub fn stages(&self) -> &[StageOutputs] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn get(&self, component: &str) -> Option<&PortValues> {
        self.stages
            .iter()
            .rev()
            .find(|stage| stage.component == component)
            .map(|stage| &stage.outputs)
    }

    /// Value of one output slot; `None` when the component, the key or the value is absent.
    pub fn value(&self, component: &str, key: &str) -> Option<&Value> {
        self.get(component)
            .and_then(|outputs| outputs.get(key))
            .and_then(Option::as_ref)
    }

    /// Stages whose `execute` failed during the run
    pub fn failed(&self) -> impl Iterator<Item = &StageOutputs> {
        self.stages.iter().filter(|stage| stage.error.is_some())
    }

    /// Component name to outputs. Later stages overwrite earlier ones with the same name.
    pub fn into_map(self) -> BTreeMap<String, PortValues> {
        self.stages
            .into_iter()
            .map(|stage| (stage.component, stage.outputs))
            .collect()
    }
}
