// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed selection-changed notifications.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Emitted when a selection settles on `index`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectionChanged {
    /// The newly settled segment.
    pub index: usize,
}

/// Handle returned by [`SelectionListeners::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SelectionChanged)>;

/// Subscribers to [`SelectionChanged`], called in subscription order.
#[derive(Default)]
pub struct SelectionListeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl fmt::Debug for SelectionListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionListeners")
            .field("next_id", &self.next_id)
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl SelectionListeners {
    /// Creates an empty listener list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` and returns a handle for removing it.
    pub fn subscribe(&mut self, listener: impl FnMut(&SelectionChanged) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Number of subscribed listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn emit(&mut self, event: &SelectionChanged) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }
}
