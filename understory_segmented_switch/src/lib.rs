// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_segmented_switch --heading-base-level=0

//! Understory Segmented Switch: a headless segmented selector.
//!
//! A segmented switch is a row of mutually exclusive titled segments with a
//! highlight behind the selected one. The highlight can be tapped to, dragged,
//! or flicked, and slides between segments with a spring animation.
//!
//! This crate owns the logic only:
//! - [`SegmentModel`]: titles, the selected index, and the row geometry
//!   (see [`SegmentLayout`]).
//! - [`SelectionController`]: tap/drag/flick interpretation and highlight
//!   transitions, with [`SelectionChanged`] notifications gated on the
//!   transition completing.
//! - [`SegmentedSwitch`]: a facade owning both plus the host's animator and
//!   the pass-through [`SwitchStyle`].
//!
//! Drawing, gesture recognition, and frame interpolation belong to the host.
//! The host delivers classified [`SwitchGesture`]s, implements
//! [`FrameAnimator`], and reports finished transitions back by
//! [`TransitionId`].
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect, Size};
//! use understory_segmented_switch::{
//!     FrameAnimator, HighlightLayer, SegmentedSwitch, SpringAnimation, SwitchGesture,
//!     TransitionId,
//! };
//!
//! /// Queues transitions so the host loop can complete them later.
//! #[derive(Default)]
//! struct Animations {
//!     pending: Vec<TransitionId>,
//! }
//!
//! impl FrameAnimator for Animations {
//!     fn set_frame_immediate(&mut self, _layer: HighlightLayer, _frame: Rect) {}
//!
//!     fn animate(
//!         &mut self,
//!         layer: HighlightLayer,
//!         transition: TransitionId,
//!         _from: Rect,
//!         _to: Rect,
//!         _spring: &SpringAnimation,
//!     ) {
//!         if layer == HighlightLayer::Background {
//!             self.pending.push(transition);
//!         }
//!     }
//! }
//!
//! let mut switch = SegmentedSwitch::from_pair("Weekly", "Monthly", Animations::default());
//! switch.set_size(Size::new(200.0, 32.0)).unwrap();
//!
//! let last = Rc::new(Cell::new(None));
//! let sink = Rc::clone(&last);
//! switch.subscribe(move |event| sink.set(Some(event.index)));
//!
//! // Tapping the right half selects the second segment right away...
//! assert!(switch.handle_gesture(SwitchGesture::Tap(Point::new(150.0, 16.0))));
//! assert_eq!(switch.selected_index(), 1);
//! assert_eq!(last.get(), None);
//!
//! // ...and announces it once the highlight has arrived.
//! let transition = switch.animator_mut().pending.pop().unwrap();
//! switch.finish_transition(transition, true);
//! assert_eq!(last.get(), Some(1));
//! ```
//!
//! ## Features
//!
//! - `std` (default): build `kurbo`, `peniko`, and `tracing` with `std`.
//! - `libm`: use `libm` for float math in `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animation;
mod controller;
mod error;
mod gesture;
mod layout;
mod listeners;
mod model;
mod style;
mod switch;

pub use animation::{FrameAnimator, HighlightLayer, SpringAnimation, TransitionId};
pub use controller::SelectionController;
pub use error::SegmentError;
pub use gesture::{DragSession, FLICK_VELOCITY, SwitchGesture};
pub use layout::{DEFAULT_INSET, SegmentLayout};
pub use listeners::{SelectionChanged, SelectionListeners, SubscriptionId};
pub use model::{Segment, SegmentModel};
pub use style::SwitchStyle;
pub use switch::SegmentedSwitch;
