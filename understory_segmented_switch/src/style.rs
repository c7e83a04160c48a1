// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pass-through appearance values.
//!
//! The switch stores these for the render layer and never interprets them,
//! apart from [`SwitchStyle::corner_radius`].

use kurbo::Rect;
use peniko::Color;

/// Colors, title font, and highlight shape of a segmented switch.
///
/// `F` is the host's font handle; the switch only stores it.
#[derive(Clone, Debug, PartialEq)]
pub struct SwitchStyle<F = ()> {
    /// Fill behind the whole switch.
    pub background_color: Color,
    /// Fill of the selection highlight.
    pub selected_background_color: Color,
    /// Color of titles outside the highlight.
    pub title_color: Color,
    /// Color of titles revealed inside the highlight.
    pub selected_title_color: Color,
    /// Font used for both title rows.
    pub title_font: Option<F>,
    /// Round the switch and its highlight into capsules.
    pub capsule: bool,
}

impl<F> Default for SwitchStyle<F> {
    fn default() -> Self {
        Self {
            background_color: Color::BLACK,
            selected_background_color: Color::WHITE,
            title_color: Color::WHITE,
            selected_title_color: Color::BLACK,
            title_font: None,
            capsule: true,
        }
    }
}

impl<F> SwitchStyle<F> {
    /// Returns a copy with the given highlight color.
    #[must_use]
    pub fn with_selected_background_color(mut self, color: Color) -> Self {
        self.selected_background_color = color;
        self
    }

    /// Returns a copy with the given switch background color.
    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Returns a copy with the given plain and selected title colors.
    #[must_use]
    pub fn with_title_colors(mut self, title: Color, selected_title: Color) -> Self {
        self.title_color = title;
        self.selected_title_color = selected_title;
        self
    }

    /// Returns a copy with the given title font.
    #[must_use]
    pub fn with_title_font(mut self, font: F) -> Self {
        self.title_font = Some(font);
        self
    }

    /// Corner radius for a layer occupying `frame`.
    ///
    /// Capsules use half the frame height; otherwise corners are square.
    #[must_use]
    pub fn corner_radius(&self, frame: Rect) -> f64 {
        if self.capsule {
            frame.height() / 2.0
        } else {
            0.0
        }
    }
}
