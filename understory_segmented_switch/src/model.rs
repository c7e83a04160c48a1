// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment titles, the selected index, and layout parameters.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::{SegmentError, SegmentLayout};

/// A borrowed view of one configured segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Zero-based position in the row.
    pub index: usize,
    /// Title shown in the segment.
    pub title: &'a str,
}

/// Titles, selection, and layout of a segmented switch.
///
/// The model is plain data plus geometry: it knows nothing about gestures or
/// animation. With zero segments every geometry query returns `None`.
#[derive(Clone, Debug, Default)]
pub struct SegmentModel {
    titles: Vec<String>,
    selected_index: usize,
    layout: SegmentLayout,
}

impl SegmentModel {
    /// Creates a model with no segments and the default layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model with the given titles.
    #[must_use]
    pub fn with_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut model = Self::new();
        model.configure(titles);
        model
    }

    /// Replaces the segment set and resets the selection to the first segment.
    ///
    /// An empty set is allowed; it disables interaction until segments are
    /// configured again.
    pub fn configure<I, S>(&mut self, titles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.titles.clear();
        self.titles.extend(titles.into_iter().map(Into::into));
        self.selected_index = 0;
    }

    /// Returns the configured titles in order.
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Returns the title of the segment at `index`.
    #[must_use]
    pub fn title(&self, index: usize) -> Option<&str> {
        self.titles.get(index).map(String::as_str)
    }

    /// Iterates the configured segments in order.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> + '_ {
        self.titles
            .iter()
            .enumerate()
            .map(|(index, title)| Segment { index, title })
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn number_of_segments(&self) -> usize {
        self.titles.len()
    }

    /// Returns `true` when no segments are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Returns the selected index.
    ///
    /// This is `0` when no segments are configured.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Returns the layout parameters.
    #[must_use]
    pub fn layout(&self) -> &SegmentLayout {
        &self.layout
    }

    /// Sets the container size.
    pub fn set_size(&mut self, size: Size) -> Result<(), SegmentError> {
        self.layout.set_size(size)
    }

    /// Sets the inset between each segment slot and the selection highlight.
    pub fn set_inset(&mut self, inset: f64) -> Result<(), SegmentError> {
        self.layout.set_inset(inset)
    }

    /// Settled highlight frame for the segment at `index`.
    #[must_use]
    pub fn frame_for_index(&self, index: usize) -> Option<Rect> {
        self.layout
            .frame_for_index(index, self.number_of_segments())
    }

    /// Settled highlight frame for the selected segment.
    #[must_use]
    pub fn selected_frame(&self) -> Option<Rect> {
        self.frame_for_index(self.selected_index)
    }

    /// Index of the segment under a dragged highlight whose center is at `center_x`.
    #[must_use]
    pub fn index_for_highlight_center_x(&self, center_x: f64) -> Option<usize> {
        self.layout.index_at_x(center_x, self.number_of_segments())
    }

    /// Index of the segment under a tap at `tap_x`.
    #[must_use]
    pub fn index_for_tap_x(&self, tap_x: f64) -> Option<usize> {
        self.layout.index_at_x(tap_x, self.number_of_segments())
    }

    /// Frame of the title label for the segment at `index`.
    ///
    /// The same frame is used for the plain and the selected title rows.
    #[must_use]
    pub fn title_frame(&self, index: usize) -> Option<Rect> {
        self.layout.title_frame(index, self.number_of_segments())
    }

    /// Iterates the title label frames in segment order.
    pub fn title_frames(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.number_of_segments()).filter_map(move |index| self.title_frame(index))
    }

    /// Makes `index` the selected segment.
    pub(crate) fn select(&mut self, index: usize) -> Result<(), SegmentError> {
        let len = self.number_of_segments();
        if index >= len {
            return Err(SegmentError::IndexOutOfRange { index, len });
        }
        self.selected_index = index;
        Ok(())
    }
}
