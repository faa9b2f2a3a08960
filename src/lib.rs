// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // component implementations
pub mod config;     // pipeline definitions + builder
pub mod engine;     // pipeline execution
pub mod errors;     // error handling
pub mod observability;
pub mod ports;      // values and port maps
pub mod traits;     // component and reporter abstractions
