// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Component implementations for The Conveyor.
//!
//! # Available Backends
//!
//! ## Local Backend
//! In-process Rust components, instantiated by kind through [`local::LocalComponentFactory`]:
//! - **TextNormalizer**: lowercases text and collapses whitespace
//! - **LengthCounter**: counts characters
//! - **ThresholdComparator**: passes text on only when it is longer than a threshold
//!
//! ## Stub Backend
//! - **AbstractComponent**: declares ports but never implements `execute`, useful for
//!   placeholders and for exercising failure isolation
//!
//! # Examples
//!
//! ```rust
//! use the_conveyor::backends::local::LocalComponentFactory;
//! use the_conveyor::config::ComponentConfig;
//!
//! let config = ComponentConfig {
//!     id: "counter".to_string(),
//!     kind: "length_counter".to_string(),
//!     name: None,
//! };
//!
//! let component = LocalComponentFactory::create_component(&config)?;
//! assert_eq!(component.name(), "counter");
//! # Ok::<(), the_conveyor::errors::FactoryError>(())
//! ```

pub mod local;
pub mod stub;
