// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod execution;
mod factory;

pub use config::{ConfigError, ValidationError};
pub use execution::{ComponentError, PipelineError, PortError};
pub use factory::FactoryError;
