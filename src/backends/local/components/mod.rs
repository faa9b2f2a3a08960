// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod length_counter;
pub mod text_normalizer;
pub mod threshold_comparator;

pub use length_counter::LengthCounter;
pub use text_normalizer::TextNormalizer;
pub use threshold_comparator::ThresholdComparator;
