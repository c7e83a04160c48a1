// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing facade bundling model, controller, animator, and style.

use alloc::string::String;

use kurbo::{Rect, RoundedRect, Size};

use crate::{
    FrameAnimator, SegmentError, SegmentModel, SelectionChanged, SelectionController,
    SpringAnimation, SubscriptionId, SwitchGesture, SwitchStyle, TransitionId,
};

/// A complete segmented switch.
///
/// Owns a [`SegmentModel`], a [`SelectionController`], the host's
/// [`FrameAnimator`], and the pass-through [`SwitchStyle`]. Layout changes made
/// through this type re-settle the highlight automatically.
#[derive(Debug)]
pub struct SegmentedSwitch<A, F = ()> {
    model: SegmentModel,
    controller: SelectionController,
    animator: A,
    style: SwitchStyle<F>,
}

impl<A: FrameAnimator> SegmentedSwitch<A> {
    /// Creates a switch with the given titles and the default style.
    pub fn new<I, S>(titles: I, animator: A) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_style(titles, animator, SwitchStyle::default())
    }

    /// Creates a two-segment switch.
    pub fn from_pair(left: impl Into<String>, right: impl Into<String>, animator: A) -> Self {
        Self::new([left.into(), right.into()], animator)
    }
}

impl<A: FrameAnimator, F> SegmentedSwitch<A, F> {
    /// Creates a switch with the given titles and style.
    pub fn with_style<I, S>(titles: I, animator: A, style: SwitchStyle<F>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut switch = Self {
            model: SegmentModel::new(),
            controller: SelectionController::new(),
            animator,
            style,
        };
        switch.configure(titles);
        switch
    }

    /// Replaces the segments and selects the first one, without notifying.
    pub fn configure<I, S>(&mut self, titles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.controller
            .configure(&mut self.model, &mut self.animator, titles);
    }

    /// Returns the segment titles.
    #[must_use]
    pub fn titles(&self) -> &[String] {
        self.model.titles()
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn number_of_segments(&self) -> usize {
        self.model.number_of_segments()
    }

    /// Returns the selected index.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.model.selected_index()
    }

    /// Selects `index`; see [`SelectionController::set_selected_index`].
    pub fn set_selected_index(&mut self, index: usize, animated: bool) -> Result<(), SegmentError> {
        self.controller
            .set_selected_index(&mut self.model, &mut self.animator, index, animated)
    }

    /// Routes a classified gesture. Returns `true` if it was consumed.
    pub fn handle_gesture(&mut self, gesture: SwitchGesture) -> bool {
        self.controller
            .handle_gesture(&mut self.model, &mut self.animator, gesture)
    }

    /// Reports the end of an animated transition started by this switch.
    pub fn finish_transition(&mut self, transition: TransitionId, finished: bool) -> bool {
        self.controller
            .finish_transition(&self.model, transition, finished)
    }

    /// Registers a selection-changed listener.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&SelectionChanged) + 'static,
    ) -> SubscriptionId {
        self.controller.subscribe(listener)
    }

    /// Removes a selection-changed listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.controller.unsubscribe(id)
    }

    /// Returns the container size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.model.layout().size()
    }

    /// Resizes the container and re-settles the highlight.
    pub fn set_size(&mut self, size: Size) -> Result<(), SegmentError> {
        self.model.set_size(size)?;
        self.controller.relayout(&self.model, &mut self.animator);
        Ok(())
    }

    /// Returns the inset between segment slots and the highlight.
    #[must_use]
    pub fn selected_background_inset(&self) -> f64 {
        self.model.layout().inset()
    }

    /// Sets the highlight inset and re-settles the highlight.
    pub fn set_selected_background_inset(&mut self, inset: f64) -> Result<(), SegmentError> {
        self.model.set_inset(inset)?;
        self.controller.relayout(&self.model, &mut self.animator);
        Ok(())
    }

    /// Spring timing used for animated transitions.
    #[must_use]
    pub fn animation(&self) -> &SpringAnimation {
        self.controller.spring()
    }

    /// Sets the spring timing for subsequent transitions.
    pub fn set_animation(&mut self, spring: SpringAnimation) {
        self.controller.set_spring(spring);
    }

    /// Returns the style.
    #[must_use]
    pub fn style(&self) -> &SwitchStyle<F> {
        &self.style
    }

    /// Returns the style for modification.
    pub fn style_mut(&mut self) -> &mut SwitchStyle<F> {
        &mut self.style
    }

    /// The highlight frame most recently applied.
    #[must_use]
    pub fn highlight_frame(&self) -> Rect {
        self.controller.highlight_frame()
    }

    /// The highlight (and title mask) outline, rounded per the style.
    #[must_use]
    pub fn highlight_shape(&self) -> RoundedRect {
        let frame = self.highlight_frame();
        frame.to_rounded_rect(self.style.corner_radius(frame))
    }

    /// The outline of the whole switch, rounded per the style.
    #[must_use]
    pub fn background_shape(&self) -> RoundedRect {
        let bounds = self.size().to_rect();
        bounds.to_rounded_rect(self.style.corner_radius(bounds))
    }

    /// Iterates the title label frames in segment order.
    pub fn title_frames(&self) -> impl Iterator<Item = Rect> + '_ {
        self.model.title_frames()
    }

    /// Returns the model.
    #[must_use]
    pub fn model(&self) -> &SegmentModel {
        &self.model
    }

    /// Returns the controller.
    #[must_use]
    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    /// Returns the animator.
    #[must_use]
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Returns the animator for modification.
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }
}
