// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure geometry for a single row of equally sized segments.
//!
//! Every query takes the segment count explicitly and returns `None` when it
//! is zero, so a [`SegmentLayout`] can be used on its own without a
//! [`SegmentModel`](crate::SegmentModel).

use kurbo::{Point, Rect, Size};

use crate::SegmentError;

/// Default inset between a segment's edges and the selection highlight.
pub const DEFAULT_INSET: f64 = 2.0;

/// Container size plus the inset of the selection highlight.
///
/// Derived values, for `n` segments:
/// - `segment_width = width / n`
/// - `highlight_width = segment_width - 2 * inset`
/// - `highlight_height = height - 2 * inset`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentLayout {
    size: Size,
    inset: f64,
}

impl Default for SegmentLayout {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            inset: DEFAULT_INSET,
        }
    }
}

impl SegmentLayout {
    /// Creates a layout for a container of `size` with the given highlight `inset`.
    pub fn new(size: Size, inset: f64) -> Result<Self, SegmentError> {
        let mut layout = Self::default();
        layout.set_size(size)?;
        layout.set_inset(inset)?;
        Ok(layout)
    }

    /// Returns the container size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the highlight inset.
    #[must_use]
    pub fn inset(&self) -> f64 {
        self.inset
    }

    /// Sets the container size.
    ///
    /// Both dimensions must be finite and non-negative.
    pub fn set_size(&mut self, size: Size) -> Result<(), SegmentError> {
        if !(size.is_finite() && size.width >= 0.0 && size.height >= 0.0) {
            return Err(SegmentError::InvalidConfiguration(
                "container size must be finite and non-negative",
            ));
        }
        self.size = size;
        Ok(())
    }

    /// Sets the highlight inset.
    ///
    /// The inset must be finite and non-negative.
    pub fn set_inset(&mut self, inset: f64) -> Result<(), SegmentError> {
        if !(inset.is_finite() && inset >= 0.0) {
            return Err(SegmentError::InvalidConfiguration(
                "inset must be finite and non-negative",
            ));
        }
        self.inset = inset;
        Ok(())
    }

    /// Width of one segment slot.
    #[must_use]
    pub fn segment_width(&self, count: usize) -> Option<f64> {
        (count > 0).then(|| self.size.width / count as f64)
    }

    /// Size of the selection highlight.
    #[must_use]
    pub fn highlight_size(&self, count: usize) -> Option<Size> {
        let segment_width = self.segment_width(count)?;
        Some(Size::new(
            segment_width - 2.0 * self.inset,
            self.size.height - 2.0 * self.inset,
        ))
    }

    /// Settled highlight frame for the segment at `index`.
    ///
    /// Returns `None` when `index >= count`.
    #[must_use]
    pub fn frame_for_index(&self, index: usize, count: usize) -> Option<Rect> {
        if index >= count {
            return None;
        }
        let highlight = self.highlight_size(count)?;
        let x = self.inset + index as f64 * (highlight.width + 2.0 * self.inset);
        let y = self.inset;
        Some(Rect::new(x, y, x + highlight.width, y + highlight.height))
    }

    /// Index of the segment slot containing `x`, clamped to `[0, count - 1]`.
    ///
    /// Used both for tap locations and for the center of a dragged highlight.
    #[must_use]
    pub fn index_at_x(&self, x: f64, count: usize) -> Option<usize> {
        let segment_width = self.segment_width(count)?;
        let slot = {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "Truncation matches floor for non-negative slots; the result is clamped immediately after"
            )]
            {
                (x / segment_width) as isize
            }
        };
        let last = count - 1;
        Some(usize::try_from(slot).map_or(0, |slot| slot.min(last)))
    }

    /// Clamps a dragged highlight's `x` origin so a highlight of `width`
    /// stays within `[inset, container_width - inset - width]`.
    ///
    /// When the container is too narrow for the highlight, the lower bound wins.
    #[must_use]
    pub fn clamp_highlight_x(&self, x: f64, width: f64) -> f64 {
        let max_x = self.size.width - self.inset - width;
        x.min(max_x).max(self.inset)
    }

    /// Frame of the title label for the segment at `index`.
    ///
    /// Labels span the highlight's size and start on the (floored) left edge
    /// of their slot, vertically centered in the container.
    #[must_use]
    pub fn title_frame(&self, index: usize, count: usize) -> Option<Rect> {
        if index >= count {
            return None;
        }
        let segment_width = self.segment_width(count)?;
        let label = self.highlight_size(count)?;
        let origin = Point::new(
            segment_width * index as f64,
            (self.size.height - label.height) / 2.0,
        )
        .floor();
        Some(Rect::new(
            origin.x,
            origin.y,
            origin.x + label.width,
            origin.y + label.height,
        ))
    }
}
