// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging in the pipeline engine, plus the default [`TracingReporter`] that the
//! pipeline uses to surface its lifecycle events.
//!
//! Message types follow a struct-based pattern with `Display` implementations to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep the human-readable text and the structured fields of an event together
//! * Provide consistent, structured logging output
//!
//! The engine itself never installs a subscriber. Binaries decide where the
//! events go (see `main.rs`).

pub mod messages;
#[cfg(test)]
pub mod recording;
pub mod reporter;

pub use reporter::TracingReporter;
