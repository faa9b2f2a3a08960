// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use crate::config::ConnectionPolicy;

/// Handle to a component registered with a [`crate::engine::Pipeline`].
///
/// A handle carries the identity of the pipeline that issued it plus the
/// registration position, so two components with the same name are still
/// distinct endpoints and a handle from another pipeline never resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId {
    pub(crate) pipeline: u64,
    pub(crate) position: usize,
}

impl ComponentId {
    pub(crate) fn new(pipeline: u64, position: usize) -> Self {
        Self { pipeline, position }
    }

    /// Registration (= execution) position
    pub fn position(&self) -> usize {
        self.position
    }
}

/// One port on one registered component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortRef {
    pub component: ComponentId,
    pub key: String,
}

impl PortRef {
    pub fn new(component: ComponentId, key: impl Into<String>) -> Self {
        Self {
            component,
            key: key.into(),
        }
    }
}

/// Connection registry keyed by source port.
///
/// Under [`ConnectionPolicy::Replace`] a source port drives at most one target and
/// a later `insert` for the same source replaces the earlier target. Under
/// [`ConnectionPolicy::FanOut`] targets accumulate in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Connections {
    policy: ConnectionPolicy,
    routes: BTreeMap<PortRef, Vec<PortRef>>,
}

impl Connections {
    pub fn new(policy: ConnectionPolicy) -> Self {
        Self {
            policy,
            routes: BTreeMap::new(),
        }
    }

    pub fn policy(&self) -> ConnectionPolicy {
        self.policy
    }

    /// Record `source -> target`. Returns the target that was displaced, if any.
    pub fn insert(&mut self, source: PortRef, target: PortRef) -> Option<PortRef> {
        let targets = self.routes.entry(source).or_default();
        match self.policy {
            ConnectionPolicy::Replace => {
                let dropped = targets.pop().filter(|previous| *previous != target);
                targets.clear();
                targets.push(target);
                dropped
            }
            ConnectionPolicy::FanOut => {
                if !targets.contains(&target) {
                    targets.push(target);
                }
                None
            }
        }
    }

    pub fn targets(&self, source: &PortRef) -> &[PortRef] {
        self.routes.get(source).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every `(source, target)` edge whose source port belongs to `component`.
    pub fn routes_from(&self, component: ComponentId) -> impl Iterator<Item = (&PortRef, &PortRef)> {
        self.routes
            .iter()
            .filter(move |(source, _)| source.component == component)
            .flat_map(|(source, targets)| targets.iter().map(move |target| (source, target)))
    }

    /// Total number of edges
    pub fn len(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
