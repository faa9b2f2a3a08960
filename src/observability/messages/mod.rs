// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit the same event with typed `tracing` fields.
//!
//! # Organization
//!
//! * `pipeline` - Pipeline wiring and run lifecycle events
//! * `component` - Component execution events
//! * `validation` - Pipeline definition validation events
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_conveyor::observability::messages::pipeline::RunStarted;
//! use the_conveyor::observability::messages::StructuredLog;
//!
//! let msg = RunStarted {
//!     component_count: 3,
//!     connection_count: 2,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod component;
pub mod pipeline;
pub mod validation;

/// Emit a message as a structured `tracing` event, or open a span carrying its fields.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
