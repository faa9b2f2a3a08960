// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Keyed port slots shared by every component.
//!
//! A component declares its input and output keys once, at construction, as two
//! [`PortMap`]s. Each slot holds at most one [`Value`] and starts out empty.

mod port_map;
mod value;

use std::fmt;

pub use port_map::{PortMap, PortValues};
pub use value::Value;

/// Which side of a component a port key lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    Input,
    Output,
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortDirection::Input => write!(f, "input"),
            PortDirection::Output => write!(f, "output"),
        }
    }
}
