// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors reported by the segmented switch.
///
/// Gesture-derived indices are always clamped internally, so these only
/// surface from programmatic calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SegmentError {
    /// A programmatic selection named an index past the last segment.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The number of configured segments.
        len: usize,
    },
    /// A layout parameter was negative or not finite.
    InvalidConfiguration(&'static str),
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "segment index {index} is out of range for {len} segments")
            }
            Self::InvalidConfiguration(what) => write!(f, "invalid configuration: {what}"),
        }
    }
}

impl core::error::Error for SegmentError {}
