// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary to the host's animation engine.
//!
//! The switch never interpolates frames itself. It hands an animator the start
//! and end frames of a transition, tagged with a [`TransitionId`], and expects
//! the host to report back through
//! [`SelectionController::finish_transition`](crate::SelectionController::finish_transition)
//! once the transition has run (or been interrupted).

use core::time::Duration;

use kurbo::Rect;

/// Identifies one animated highlight transition.
///
/// Ids are allocated in increasing order by the controller that started the
/// transition and are never reused by that controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionId(u64);

impl TransitionId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// The two surfaces that always share the highlight frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HighlightLayer {
    /// The filled selection indicator drawn behind the titles.
    Background,
    /// The mask revealing the selected-color titles above the indicator.
    TitleMask,
}

impl HighlightLayer {
    /// Both layers, in the order they are updated.
    pub const ALL: [Self; 2] = [Self::Background, Self::TitleMask];
}

/// Spring timing handed to the animator for every animated transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringAnimation {
    /// Total duration of the transition.
    pub duration: Duration,
    /// Damping ratio; `1.0` settles without oscillation.
    pub damping: f64,
    /// Initial velocity, relative to the total distance travelled.
    pub initial_velocity: f64,
}

impl Default for SpringAnimation {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            damping: 0.75,
            initial_velocity: 0.0,
        }
    }
}

impl SpringAnimation {
    /// Returns a copy with the given duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Returns a copy with the given damping ratio.
    #[must_use]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Returns a copy with the given initial velocity.
    #[must_use]
    pub fn with_initial_velocity(mut self, initial_velocity: f64) -> Self {
        self.initial_velocity = initial_velocity;
        self
    }
}

/// Host animation and render service for the highlight.
///
/// Every frame change is issued for both [`HighlightLayer`]s back to back, so
/// the title mask never lags the background.
///
/// For animated changes the animator receives one [`animate`](Self::animate)
/// call per layer carrying the same [`TransitionId`]. It should report that id
/// once; reports after the first are ignored. A newer selection supersedes
/// the pending transition, so animators may drop replaced animations without
/// reporting them.
pub trait FrameAnimator {
    /// Applies `frame` to `layer` without animation.
    fn set_frame_immediate(&mut self, layer: HighlightLayer, frame: Rect);

    /// Starts animating `layer` from `from` to `to`.
    ///
    /// `from` is the last frame the controller applied. Animators that track
    /// an in-flight presentation frame may start from that instead.
    fn animate(
        &mut self,
        layer: HighlightLayer,
        transition: TransitionId,
        from: Rect,
        to: Rect,
        spring: &SpringAnimation,
    );
}

impl<A: FrameAnimator + ?Sized> FrameAnimator for &mut A {
    fn set_frame_immediate(&mut self, layer: HighlightLayer, frame: Rect) {
        (**self).set_frame_immediate(layer, frame);
    }

    fn animate(
        &mut self,
        layer: HighlightLayer,
        transition: TransitionId,
        from: Rect,
        to: Rect,
        spring: &SpringAnimation,
    ) {
        (**self).animate(layer, transition, from, to, spring);
    }
}
