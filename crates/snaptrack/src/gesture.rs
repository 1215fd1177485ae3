#![forbid(unsafe_code)]

//! Drag gesture state and per-event outcomes.

/// Phase of the thumb drag gesture.
///
/// The machine is deliberately two-state: a pointer-down enters
/// `Dragging`, the matching pointer-up returns to `Idle`. There is no
/// distinct released state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Pointer is down; the thumb tracks it.
    Dragging,
}

impl DragPhase {
    /// Returns true while a gesture is in progress.
    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }

    /// Returns the stable string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging => "dragging",
        }
    }
}

/// Result of feeding one pointer event to the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderEvent {
    /// Event not relevant (move or up without a preceding down, or a
    /// degenerate widget); nothing changed.
    Ignored,
    /// The thumb moved without a selection change.
    ThumbMoved,
    /// The selection changed to the given index mid-drag.
    Selected(usize),
    /// The gesture ended and the thumb snapped; carries the resting
    /// selection.
    Released(usize),
}

impl SliderEvent {
    /// Whether the host should schedule a redraw after this outcome.
    #[must_use]
    pub fn needs_redraw(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
