// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture interpretation and highlight transitions.
//!
//! ## Drag state machine
//!
//! - **Idle** → `PanBegan` inside the current highlight → **Dragging**.
//!   A pan that begins elsewhere is rejected and changes nothing.
//! - **Dragging** → `PanChanged` moves the highlight with the pointer, clamped
//!   to the row, without animation.
//! - **Dragging** → `PanEnded`/`PanCancelled` settles on a segment and returns
//!   to **Idle**.
//! - **Idle** → `Tap` selects the segment under the tap.
//!
//! ## Settling a drag
//!
//! With `touched` the segment under the highlight's center:
//! 1. If `touched` differs from the selection, select it.
//! 2. Otherwise a flick faster than [`FLICK_VELOCITY`] to the right selects
//!    the next segment,
//! 3. a flick to the left selects the previous one,
//! 4. and anything slower snaps back to `touched`.
//!
//! ## Notifications
//!
//! [`SelectionController::set_selected_index`] updates the selection at once.
//! Animated changes notify only when the host reports the transition as
//! finished and the selection still names the same segment, so a selection
//! superseded mid-animation is never announced.
//!
//! Only the most recent transition is tracked. Any later selection, animated
//! or not, supersedes it, so returning to an earlier index (1 → 2 → 1) is
//! announced once, by the last transition.

use kurbo::{Point, Rect};

use crate::{
    DragSession, FLICK_VELOCITY, FrameAnimator, HighlightLayer, SegmentError, SegmentModel,
    SelectionChanged, SelectionListeners, SpringAnimation, SubscriptionId, SwitchGesture,
    TransitionId,
};

/// Drives the highlight of a [`SegmentModel`] from gestures and programmatic
/// selection.
///
/// The controller borrows the model and the host animator for each call
/// rather than owning them.
#[derive(Debug, Default)]
pub struct SelectionController {
    highlight_frame: Rect,
    drag: Option<DragSession>,
    in_flight: Option<(TransitionId, usize)>,
    next_transition: u64,
    spring: SpringAnimation,
    listeners: SelectionListeners,
}

impl SelectionController {
    /// Creates an idle controller with the default spring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The highlight frame most recently applied.
    ///
    /// While an animation runs this is already its end frame.
    #[must_use]
    pub fn highlight_frame(&self) -> Rect {
        self.highlight_frame
    }

    /// The active drag, if any.
    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The animated transition still awaiting its completion report, if any.
    #[must_use]
    pub fn pending_transition(&self) -> Option<TransitionId> {
        self.in_flight.map(|(id, _)| id)
    }

    /// Spring timing used for animated transitions.
    #[must_use]
    pub fn spring(&self) -> &SpringAnimation {
        &self.spring
    }

    /// Sets the spring timing for subsequent transitions.
    pub fn set_spring(&mut self, spring: SpringAnimation) {
        self.spring = spring;
    }

    /// Registers a selection-changed listener.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&SelectionChanged) + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    /// Removes a selection-changed listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Replaces the model's segments and re-settles the highlight.
    ///
    /// Any drag in progress ends without settling, and completions of earlier
    /// transitions are ignored from here on.
    pub fn configure<A, I, S>(&mut self, model: &mut SegmentModel, animator: &mut A, titles: I)
    where
        A: FrameAnimator + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<alloc::string::String>,
    {
        model.configure(titles);
        self.in_flight = None;
        self.relayout(model, animator);
    }

    /// Re-applies the selected segment's frame after a layout change.
    ///
    /// No animation runs and no notification is emitted. A drag in progress
    /// is dropped, since its start frame no longer matches the layout.
    pub fn relayout<A>(&mut self, model: &SegmentModel, animator: &mut A)
    where
        A: FrameAnimator + ?Sized,
    {
        if self.drag.take().is_some() {
            tracing::debug!("layout changed during drag; drag session dropped");
        }
        if let Some(frame) = model.selected_frame() {
            self.apply_frame(animator, frame);
        }
    }

    /// Selects `index`, animating the highlight when `animated` is set.
    ///
    /// The model's selection changes immediately. Listeners are notified
    /// right away for immediate changes and on
    /// [`finish_transition`](Self::finish_transition) for animated ones.
    ///
    /// With zero segments this does nothing.
    pub fn set_selected_index<A>(
        &mut self,
        model: &mut SegmentModel,
        animator: &mut A,
        index: usize,
        animated: bool,
    ) -> Result<(), SegmentError>
    where
        A: FrameAnimator + ?Sized,
    {
        if model.is_empty() {
            tracing::debug!(index, "selection ignored; no segments configured");
            return Ok(());
        }
        model.select(index)?;
        let Some(target) = model.frame_for_index(index) else {
            return Ok(());
        };
        if let Some((superseded, _)) = self.in_flight.take() {
            tracing::debug!(transition = superseded.get(), "transition superseded");
        }

        if animated {
            let transition = TransitionId::new(self.next_transition);
            self.next_transition += 1;
            self.in_flight = Some((transition, index));
            let from = self.highlight_frame;
            self.highlight_frame = target;
            for layer in HighlightLayer::ALL {
                animator.animate(layer, transition, from, target, &self.spring);
            }
            tracing::trace!(index, transition = transition.get(), "highlight transition started");
        } else {
            self.apply_frame(animator, target);
            self.notify(index);
        }
        Ok(())
    }

    /// Reports the end of an animated transition.
    ///
    /// `finished` is `false` when the animation was interrupted. Returns
    /// `true` if listeners were notified.
    ///
    /// Only the latest transition can notify, and only if the selection
    /// still names its segment. Ids of superseded transitions are ignored.
    pub fn finish_transition(
        &mut self,
        model: &SegmentModel,
        transition: TransitionId,
        finished: bool,
    ) -> bool {
        let index = match self.in_flight {
            Some((id, index)) if id == transition => index,
            _ => {
                tracing::debug!(transition = transition.get(), "unknown or superseded transition completed");
                return false;
            }
        };
        self.in_flight = None;

        if !finished {
            tracing::debug!(index, "transition interrupted; no notification");
            return false;
        }
        if model.selected_index() != index {
            tracing::debug!(
                index,
                selected = model.selected_index(),
                "stale transition completed; no notification"
            );
            return false;
        }
        self.notify(index);
        true
    }

    /// Whether a pan starting at `point` may drag the highlight.
    #[must_use]
    pub fn should_begin_drag(&self, model: &SegmentModel, point: Point) -> bool {
        !model.is_empty() && self.highlight_frame.contains(point)
    }

    /// Begins dragging the highlight. Returns `false` if the pan was rejected.
    pub fn drag_began(&mut self, model: &SegmentModel, point: Point) -> bool {
        if !self.should_begin_drag(model, point) {
            tracing::debug!(x = point.x, y = point.y, "pan outside highlight rejected");
            return false;
        }
        self.drag = Some(DragSession::new(self.highlight_frame, point));
        true
    }

    /// Moves the dragged highlight by `translation_x` from its start frame.
    ///
    /// Returns `false` if no drag is active.
    pub fn drag_changed<A>(
        &mut self,
        model: &SegmentModel,
        animator: &mut A,
        translation_x: f64,
    ) -> bool
    where
        A: FrameAnimator + ?Sized,
    {
        let Some(session) = self.drag else {
            tracing::debug!("pan change without a drag session ignored");
            return false;
        };
        let start = session.start_frame();
        let x = model
            .layout()
            .clamp_highlight_x(start.x0 + translation_x, start.width());
        self.apply_frame(animator, start.with_origin((x, start.y0)));
        true
    }

    /// Ends the drag and settles on a segment.
    ///
    /// Returns the newly selected index, or `None` if no drag was active.
    pub fn drag_ended<A>(
        &mut self,
        model: &mut SegmentModel,
        animator: &mut A,
        velocity_x: f64,
    ) -> Option<usize>
    where
        A: FrameAnimator + ?Sized,
    {
        if self.drag.take().is_none() {
            tracing::debug!("pan end without a drag session ignored");
            return None;
        }
        let touched = model.index_for_highlight_center_x(self.highlight_frame.center().x)?;
        let selected = model.selected_index();
        let last = model.number_of_segments() - 1;

        let target = if touched != selected {
            touched
        } else if velocity_x > FLICK_VELOCITY {
            (selected + 1).min(last)
        } else if velocity_x < -FLICK_VELOCITY {
            selected.saturating_sub(1)
        } else {
            touched
        };
        self.select_clamped(model, animator, target);
        Some(target)
    }

    /// Cancels the drag; settles exactly like a release without velocity.
    pub fn drag_cancelled<A>(&mut self, model: &mut SegmentModel, animator: &mut A) -> Option<usize>
    where
        A: FrameAnimator + ?Sized,
    {
        self.drag_ended(model, animator, 0.0)
    }

    /// Selects the segment under a tap at `point`.
    ///
    /// Taps are ignored while a drag is in progress. Returns the selected
    /// index when the tap was handled.
    pub fn tap<A>(&mut self, model: &mut SegmentModel, animator: &mut A, point: Point) -> Option<usize>
    where
        A: FrameAnimator + ?Sized,
    {
        if self.is_dragging() {
            tracing::debug!("tap during drag ignored");
            return None;
        }
        let target = model.index_for_tap_x(point.x)?;
        self.select_clamped(model, animator, target);
        Some(target)
    }

    /// Routes a classified gesture. Returns `true` if it was consumed.
    pub fn handle_gesture<A>(
        &mut self,
        model: &mut SegmentModel,
        animator: &mut A,
        gesture: SwitchGesture,
    ) -> bool
    where
        A: FrameAnimator + ?Sized,
    {
        match gesture {
            SwitchGesture::Tap(point) => self.tap(model, animator, point).is_some(),
            SwitchGesture::PanBegan(point) => self.drag_began(model, point),
            SwitchGesture::PanChanged { translation } => {
                self.drag_changed(model, animator, translation.x)
            }
            SwitchGesture::PanEnded { velocity } => {
                self.drag_ended(model, animator, velocity.x).is_some()
            }
            SwitchGesture::PanCancelled => self.drag_cancelled(model, animator).is_some(),
        }
    }

    /// Animated selection of an index already clamped into range.
    fn select_clamped<A>(&mut self, model: &mut SegmentModel, animator: &mut A, index: usize)
    where
        A: FrameAnimator + ?Sized,
    {
        if let Err(err) = self.set_selected_index(model, animator, index, true) {
            debug_assert!(false, "gesture produced an invalid index: {err}");
        }
    }

    fn apply_frame<A>(&mut self, animator: &mut A, frame: Rect)
    where
        A: FrameAnimator + ?Sized,
    {
        self.highlight_frame = frame;
        for layer in HighlightLayer::ALL {
            animator.set_frame_immediate(layer, frame);
        }
        tracing::trace!(x = frame.x0, width = frame.width(), "highlight frame applied");
    }

    fn notify(&mut self, index: usize) {
        tracing::debug!(index, "selection changed");
        self.listeners.emit(&SelectionChanged { index });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::Size;

    /// Records immediate frames and collects animated transitions for manual completion.
    #[derive(Debug, Default)]
    struct Recorder {
        immediate: Vec<(HighlightLayer, Rect)>,
        animated: Vec<(HighlightLayer, TransitionId, Rect, Rect)>,
    }

    impl FrameAnimator for Recorder {
        fn set_frame_immediate(&mut self, layer: HighlightLayer, frame: Rect) {
            self.immediate.push((layer, frame));
        }

        fn animate(
            &mut self,
            layer: HighlightLayer,
            transition: TransitionId,
            from: Rect,
            to: Rect,
            _spring: &SpringAnimation,
        ) {
            self.animated.push((layer, transition, from, to));
        }
    }

    impl Recorder {
        fn last_transition(&self) -> TransitionId {
            self.animated.last().map(|(_, id, _, _)| *id).unwrap()
        }
    }

    struct Fixture {
        model: SegmentModel,
        controller: SelectionController,
        animator: Recorder,
        notified: Rc<RefCell<Vec<usize>>>,
    }

    fn fixture(count: usize, width: f64, inset: f64) -> Fixture {
        let mut model = SegmentModel::with_titles((0..count).map(|i| alloc::format!("S{i}")));
        model.set_size(Size::new(width, 40.0)).unwrap();
        model.set_inset(inset).unwrap();
        let mut controller = SelectionController::new();
        let mut animator = Recorder::default();
        controller.relayout(&model, &mut animator);
        let notified = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&notified);
        controller.subscribe(move |e| sink.borrow_mut().push(e.index));
        Fixture {
            model,
            controller,
            animator,
            notified,
        }
    }

    impl Fixture {
        fn select(&mut self, index: usize, animated: bool) -> Result<(), SegmentError> {
            self.controller
                .set_selected_index(&mut self.model, &mut self.animator, index, animated)
        }

        fn finish_last(&mut self, finished: bool) -> bool {
            let id = self.animator.last_transition();
            self.controller.finish_transition(&self.model, id, finished)
        }

        fn gesture(&mut self, gesture: SwitchGesture) -> bool {
            self.controller
                .handle_gesture(&mut self.model, &mut self.animator, gesture)
        }

        fn notified(&self) -> Vec<usize> {
            self.notified.borrow().clone()
        }
    }

    #[test]
    fn relayout_mirrors_frame_to_both_layers() {
        let f = fixture(3, 300.0, 2.0);
        let expected = Rect::new(2.0, 2.0, 98.0, 38.0);
        assert_eq!(
            f.animator.immediate,
            [
                (HighlightLayer::Background, expected),
                (HighlightLayer::TitleMask, expected),
            ]
        );
        assert_eq!(f.controller.highlight_frame(), expected);
        assert!(f.notified().is_empty());
    }

    #[test]
    fn immediate_selection_notifies_every_call() {
        let mut f = fixture(3, 300.0, 2.0);
        f.select(2, false).unwrap();
        let first = f.controller.highlight_frame();
        f.select(2, false).unwrap();

        assert_eq!(f.controller.highlight_frame(), first);
        assert_eq!(f.notified(), [2, 2]);
    }

    #[test]
    fn animated_selection_notifies_on_finish() {
        let mut f = fixture(3, 300.0, 2.0);
        f.select(1, true).unwrap();

        assert_eq!(f.model.selected_index(), 1);
        assert!(f.notified().is_empty());
        assert_eq!(
            f.controller.pending_transition(),
            Some(f.animator.last_transition())
        );
        assert_eq!(f.animator.animated.len(), 2);

        assert!(f.finish_last(true));
        assert_eq!(f.notified(), [1]);
        assert_eq!(f.controller.pending_transition(), None);
    }

    #[test]
    fn animated_transition_runs_from_previous_frame() {
        let mut f = fixture(3, 300.0, 2.0);
        f.select(2, true).unwrap();
        let (_, _, from, to) = f.animator.animated[0];
        assert_eq!(from, Rect::new(2.0, 2.0, 98.0, 38.0));
        assert_eq!(to, Rect::new(202.0, 2.0, 298.0, 38.0));
        assert_eq!(f.controller.highlight_frame(), to);
    }

    #[test]
    fn superseded_transition_is_not_announced() {
        let mut f = fixture(3, 300.0, 2.0);
        f.select(1, true).unwrap();
        let stale = f.animator.last_transition();
        f.select(2, false).unwrap();

        assert!(!f.controller.finish_transition(&f.model, stale, true));
        assert_eq!(f.notified(), [2]);
    }

    #[test]
    fn returning_to_an_earlier_index_is_announced_once() {
        let mut f = fixture(3, 300.0, 2.0);
        f.select(1, true).unwrap();
        let first = f.animator.last_transition();
        f.select(2, true).unwrap();
        let second = f.animator.last_transition();
        f.select(1, true).unwrap();
        let third = f.animator.last_transition();

        assert!(!f.controller.finish_transition(&f.model, first, true));
        assert!(!f.controller.finish_transition(&f.model, second, true));
        assert!(f.controller.finish_transition(&f.model, third, true));
        assert_eq!(f.notified(), [1]);
    }

    #[test]
    fn unreported_transitions_do_not_accumulate() {
        let mut f = fixture(3, 300.0, 2.0);
        for i in 0..100 {
            f.select(i % 3, true).unwrap();
        }
        f.select(0, false).unwrap();

        assert_eq!(f.controller.pending_transition(), None);
        assert_eq!(f.notified(), [0]);
    }

    #[test]
    fn interrupted_transition_is_not_announced() {
        let mut f = fixture(3, 300.0, 2.0);
        f.select(1, true).unwrap();
        assert!(!f.finish_last(false));
        assert!(f.notified().is_empty());
    }

    #[test]
    fn completion_is_reported_at_most_once() {
        let mut f = fixture(3, 300.0, 2.0);
        f.select(1, true).unwrap();
        assert!(f.finish_last(true));
        assert!(!f.finish_last(true));
        assert_eq!(f.notified(), [1]);
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut f = fixture(3, 300.0, 2.0);
        assert_eq!(
            f.select(3, false),
            Err(SegmentError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(f.model.selected_index(), 0);
        assert!(f.notified().is_empty());
    }

    #[test]
    fn empty_model_ignores_selection_and_gestures() {
        let mut f = fixture(0, 300.0, 2.0);
        assert_eq!(f.select(4, false), Ok(()));
        assert!(!f.gesture(SwitchGesture::Tap(Point::new(10.0, 10.0))));
        assert!(!f.gesture(SwitchGesture::PanBegan(Point::new(0.0, 0.0))));
        assert!(f.animator.immediate.is_empty());
        assert!(f.notified().is_empty());
    }

    #[test]
    fn pan_outside_highlight_never_starts() {
        let mut f = fixture(3, 300.0, 2.0);
        let before = f.animator.immediate.len();
        assert!(!f.gesture(SwitchGesture::PanBegan(Point::new(150.0, 20.0))));
        assert!(!f.controller.is_dragging());
        assert!(!f.gesture(SwitchGesture::PanChanged {
            translation: kurbo::Vec2::new(40.0, 0.0),
        }));
        assert_eq!(f.animator.immediate.len(), before);
    }

    #[test]
    fn drag_clamps_to_both_edges() {
        let mut f = fixture(3, 300.0, 2.0);
        assert!(f.gesture(SwitchGesture::PanBegan(Point::new(50.0, 20.0))));

        f.gesture(SwitchGesture::PanChanged {
            translation: kurbo::Vec2::new(-30.0, 0.0),
        });
        assert_eq!(f.controller.highlight_frame().x0, 2.0);

        f.gesture(SwitchGesture::PanChanged {
            translation: kurbo::Vec2::new(1_000.0, 0.0),
        });
        assert_eq!(f.controller.highlight_frame().x0, 300.0 - 2.0 - 96.0);
        assert_eq!(f.controller.highlight_frame().width(), 96.0);
        assert!(f.animator.animated.is_empty());
    }

    #[test]
    fn drag_onto_another_segment_selects_it() {
        let mut f = fixture(3, 300.0, 2.0);
        f.gesture(SwitchGesture::PanBegan(Point::new(50.0, 20.0)));
        f.gesture(SwitchGesture::PanChanged {
            translation: kurbo::Vec2::new(110.0, 0.0),
        });
        assert!(f.gesture(SwitchGesture::PanEnded {
            velocity: kurbo::Vec2::new(-900.0, 0.0),
        }));

        assert_eq!(f.model.selected_index(), 1);
        assert!(!f.controller.is_dragging());
        f.finish_last(true);
        assert_eq!(f.notified(), [1]);
    }

    fn flick(velocity_x: f64) -> Fixture {
        let mut f = fixture(4, 400.0, 2.0);
        f.select(1, false).unwrap();
        f.notified.borrow_mut().clear();
        assert!(f.gesture(SwitchGesture::PanBegan(Point::new(150.0, 20.0))));
        f.gesture(SwitchGesture::PanEnded {
            velocity: kurbo::Vec2::new(velocity_x, 0.0),
        });
        f
    }

    #[test]
    fn flick_right_advances() {
        assert_eq!(flick(600.0).model.selected_index(), 2);
    }

    #[test]
    fn flick_left_retreats() {
        assert_eq!(flick(-600.0).model.selected_index(), 0);
    }

    #[test]
    fn slow_release_snaps_back() {
        let mut f = flick(499.0);
        assert_eq!(f.model.selected_index(), 1);
        f.finish_last(true);
        assert_eq!(f.notified(), [1]);
    }

    #[test]
    fn flick_past_the_ends_stays_in_range() {
        let mut f = fixture(2, 200.0, 2.0);
        f.gesture(SwitchGesture::PanBegan(Point::new(50.0, 20.0)));
        f.gesture(SwitchGesture::PanEnded {
            velocity: kurbo::Vec2::new(-2_000.0, 0.0),
        });
        assert_eq!(f.model.selected_index(), 0);

        f.select(1, false).unwrap();
        f.gesture(SwitchGesture::PanBegan(Point::new(150.0, 20.0)));
        f.gesture(SwitchGesture::PanEnded {
            velocity: kurbo::Vec2::new(2_000.0, 0.0),
        });
        assert_eq!(f.model.selected_index(), 1);
    }

    #[test]
    fn cancel_settles_like_release() {
        let mut f = fixture(3, 300.0, 2.0);
        f.gesture(SwitchGesture::PanBegan(Point::new(50.0, 20.0)));
        f.gesture(SwitchGesture::PanChanged {
            translation: kurbo::Vec2::new(200.0, 0.0),
        });
        assert!(f.gesture(SwitchGesture::PanCancelled));
        assert_eq!(f.model.selected_index(), 2);
        assert!(!f.controller.is_dragging());
    }

    #[test]
    fn release_without_begin_is_ignored() {
        let mut f = fixture(3, 300.0, 2.0);
        assert!(!f.gesture(SwitchGesture::PanEnded {
            velocity: kurbo::Vec2::new(900.0, 0.0),
        }));
        assert!(!f.gesture(SwitchGesture::PanCancelled));
        assert_eq!(f.model.selected_index(), 0);
        assert!(f.animator.animated.is_empty());
    }

    #[test]
    fn tap_selects_segment_under_pointer() {
        let mut f = fixture(2, 200.0, 2.0);
        assert!(f.gesture(SwitchGesture::Tap(Point::new(150.0, 10.0))));
        assert_eq!(f.model.selected_index(), 1);
        assert!(f.notified().is_empty());
        f.finish_last(true);
        assert_eq!(f.notified(), [1]);
    }

    #[test]
    fn tap_during_drag_is_ignored() {
        let mut f = fixture(2, 200.0, 2.0);
        f.gesture(SwitchGesture::PanBegan(Point::new(50.0, 20.0)));
        assert!(!f.gesture(SwitchGesture::Tap(Point::new(150.0, 10.0))));
        assert_eq!(f.model.selected_index(), 0);
        assert!(f.controller.is_dragging());
    }

    #[test]
    fn configure_discards_pending_transitions() {
        let mut f = fixture(3, 300.0, 2.0);
        f.select(2, true).unwrap();
        let stale = f.animator.last_transition();

        f.controller
            .configure(&mut f.model, &mut f.animator, ["A", "B", "C"]);

        assert_eq!(f.controller.pending_transition(), None);
        assert!(!f.controller.finish_transition(&f.model, stale, true));
        assert_eq!(f.model.selected_index(), 0);
        assert_eq!(
            f.controller.highlight_frame(),
            Rect::new(2.0, 2.0, 98.0, 38.0)
        );
        assert!(f.notified().is_empty());
    }

    #[test]
    fn relayout_drops_drag_and_stays_silent() {
        let mut f = fixture(3, 300.0, 2.0);
        f.select(1, false).unwrap();
        f.gesture(SwitchGesture::PanBegan(Point::new(150.0, 20.0)));
        f.model.set_size(Size::new(600.0, 40.0)).unwrap();

        f.controller.relayout(&f.model, &mut f.animator);

        assert!(!f.controller.is_dragging());
        assert_eq!(
            f.controller.highlight_frame(),
            Rect::new(202.0, 2.0, 398.0, 38.0)
        );
        assert_eq!(f.notified(), [1]);
    }
}
