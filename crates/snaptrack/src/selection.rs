#![forbid(unsafe_code)]

//! Selection state and change notification.
//!
//! Two indices: `current` is the authoritative selection, `last_notified`
//! gates the listener so it fires exactly once per actual change and
//! never for repeats. The listener is a single function slot (last
//! registration wins), invoked synchronously on the execution context
//! that detected the change. No queuing, no batching.

use std::fmt;

/// The change listener callback: receives the newly selected index.
pub type PositionListener = Box<dyn FnMut(usize)>;

/// Outcome of a selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetResult {
    /// Index was out of range; state untouched.
    OutOfRange,
    /// Index applied but equals the previous selection; no notification.
    Unchanged,
    /// Selection moved; the listener (if any) was invoked once.
    Changed,
}

/// Current/last-notified selection pair plus the listener slot.
#[derive(Default)]
pub struct Selection {
    current: usize,
    last_notified: usize,
    listener: Option<PositionListener>,
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("current", &self.current)
            .field("last_notified", &self.last_notified)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The authoritative selected index.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Install the listener. At most one is held; a later registration
    /// replaces the earlier one.
    pub fn set_listener(&mut self, listener: PositionListener) {
        self.listener = Some(listener);
    }

    /// Request selection of `index` out of `len` stops.
    ///
    /// Out-of-range requests are silently ignored, a defensive policy
    /// rather than an error. An in-range change invokes the listener exactly once
    /// with the new index before recording it as notified.
    pub fn set(&mut self, index: usize, len: usize) -> SetResult {
        if index >= len {
            return SetResult::OutOfRange;
        }
        self.current = index;
        if self.current == self.last_notified {
            return SetResult::Unchanged;
        }
        if let Some(listener) = self.listener.as_mut() {
            listener(self.current);
        }
        self.last_notified = self.current;
        SetResult::Changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording() -> (Selection, Rc<RefCell<Vec<usize>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut selection = Selection::new();
        selection.set_listener(Box::new(move |i| sink.borrow_mut().push(i)));
        (selection, seen)
    }

    // --- Round trip ---

    #[test]
    fn valid_set_round_trips() {
        let mut selection = Selection::new();
        for i in 0..5 {
            assert_ne!(selection.set(i, 5), SetResult::OutOfRange);
            assert_eq!(selection.current(), i);
        }
    }

    #[test]
    fn out_of_range_is_a_silent_no_op() {
        let (mut selection, seen) = recording();
        selection.set(1, 3);
        assert_eq!(selection.set(3, 3), SetResult::OutOfRange);
        assert_eq!(selection.set(99, 3), SetResult::OutOfRange);
        assert_eq!(selection.current(), 1);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    // --- Notification ---

    #[test]
    fn listener_fires_once_per_distinct_change() {
        let (mut selection, seen) = recording();
        assert_eq!(selection.set(2, 4), SetResult::Changed);
        assert_eq!(selection.set(2, 4), SetResult::Unchanged);
        assert_eq!(selection.set(2, 4), SetResult::Unchanged);
        assert_eq!(selection.set(1, 4), SetResult::Changed);
        assert_eq!(*seen.borrow(), vec![2, 1]);
    }

    #[test]
    fn initial_selection_does_not_fire_for_index_zero() {
        let (mut selection, seen) = recording();
        assert_eq!(selection.set(0, 4), SetResult::Unchanged);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn change_is_tracked_without_a_listener() {
        let mut selection = Selection::new();
        assert_eq!(selection.set(2, 4), SetResult::Changed);
        // the change was recorded, so re-selecting is quiet
        assert_eq!(selection.set(2, 4), SetResult::Unchanged);
    }

    #[test]
    fn last_listener_registration_wins() {
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));
        let mut selection = Selection::new();
        let sink = Rc::clone(&first);
        selection.set_listener(Box::new(move |i| sink.borrow_mut().push(i)));
        let sink = Rc::clone(&second);
        selection.set_listener(Box::new(move |i| sink.borrow_mut().push(i)));
        selection.set(3, 5);
        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), vec![3]);
    }
}
