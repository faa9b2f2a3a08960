// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod component;
pub mod reporter;

pub use component::Component;
pub use reporter::Reporter;
