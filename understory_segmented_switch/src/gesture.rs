// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classified pointer input and the transient drag session.
//!
//! Raw pointer recognition happens in the host. The switch only consumes the
//! classified events below, in container coordinates.

use kurbo::{Point, Rect, Vec2};

/// Minimum horizontal speed, in units per second, that counts as a flick.
pub const FLICK_VELOCITY: f64 = 500.0;

/// A classified gesture delivered to the switch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SwitchGesture {
    /// A tap at a point.
    Tap(Point),
    /// A pan started at a point.
    PanBegan(Point),
    /// A pan moved; `translation` is measured from the pan's start point.
    PanChanged {
        /// Offset from the start of the pan.
        translation: Vec2,
    },
    /// A pan finished.
    PanEnded {
        /// Release velocity in units per second.
        velocity: Vec2,
    },
    /// The host cancelled the pan; settles like a release with no velocity.
    PanCancelled,
}

/// State captured when a drag of the highlight begins.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    start_frame: Rect,
    start_point: Point,
}

impl DragSession {
    pub(crate) fn new(start_frame: Rect, start_point: Point) -> Self {
        Self {
            start_frame,
            start_point,
        }
    }

    /// Highlight frame when the drag began.
    #[must_use]
    pub fn start_frame(&self) -> Rect {
        self.start_frame
    }

    /// Pointer location that began the drag.
    #[must_use]
    pub fn start_point(&self) -> Point {
        self.start_point
    }
}
