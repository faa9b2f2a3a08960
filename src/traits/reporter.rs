// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::time::Duration;

use crate::errors::{ComponentError, PortError};
use crate::ports::PortMap;

/// A port identified by its owning component's name and its key, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortLabel<'a> {
    pub component: &'a str,
    pub key: &'a str,
}

impl fmt::Display for PortLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.component, self.key)
    }
}

/// Observer for pipeline lifecycle events.
///
/// A reporter is handed to the pipeline when it is built and receives every
/// diagnostic the engine produces, including warnings that do not abort a run.
/// All methods default to doing nothing.
pub trait Reporter {
    /// A connection for an already wired source port replaced the previous target.
    fn connection_replaced(&self, _source: PortLabel<'_>, _dropped: PortLabel<'_>, _kept: PortLabel<'_>) {}

    fn run_started(&self, _component_count: usize, _connection_count: usize) {}

    /// `run` was called on a pipeline without components.
    fn empty_pipeline(&self) {}

    /// Seed keys did not line up with the first component's declared inputs.
    fn seed_mismatch(&self, _component: &str, _unexpected: &[String], _missing: &[String]) {}

    fn component_completed(&self, _position: usize, _component: &str, _outputs: &PortMap) {}

    fn component_failed(&self, _position: usize, _component: &str, _error: &ComponentError) {}

    fn value_propagated(&self, _from: PortLabel<'_>, _to: PortLabel<'_>) {}

    /// The target refused a propagated value; the run moves on to the next connection.
    fn propagation_failed(&self, _from: PortLabel<'_>, _to: PortLabel<'_>, _error: &PortError) {}

    fn run_completed(&self, _component_count: usize, _failed_count: usize, _duration: Duration) {}
}
