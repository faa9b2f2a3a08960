// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod builder;
mod loader;
mod validation;


pub use builder::PipelineBuilder;
pub use loader::{
    load_and_validate_config, load_config, ComponentConfig, Config, ConnectionConfig,
    ConnectionPolicy, Endpoint, PipelineOptions, SeedPolicy,
};
pub use validation::validate_config;
