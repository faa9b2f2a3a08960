// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod connections;
pub mod pipeline;
pub mod run_outputs;
#[cfg(test)]
mod integration_tests;

pub use connections::{ComponentId, Connections, PortRef};
pub use pipeline::{Pipeline, Seed};
pub use run_outputs::{RunOutputs, StageOutputs};
