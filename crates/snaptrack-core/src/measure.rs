#![forbid(unsafe_code)]

//! Intrinsic-size negotiation with the host layout pass.
//!
//! The hosting framework asks the widget for concrete dimensions given a
//! per-axis constraint. The rule is the one fixed-configuration selectors
//! follow everywhere: an exactly-constrained axis is honored as given, any
//! other axis answers the widget's intrinsic size.

use serde::{Deserialize, Serialize};

/// Constraint mode for one axis of a measure request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasureMode {
    /// The host has decided the size; the widget must use it.
    Exactly,
    /// The host offers an upper bound; the widget answers its intrinsic
    /// size.
    AtMost,
    /// The host imposes nothing; the widget answers its intrinsic size.
    Unspecified,
}

/// A single-axis measurement constraint from the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: f32,
}

impl MeasureSpec {
    #[must_use]
    pub const fn exactly(size: f32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    #[must_use]
    pub const fn at_most(size: f32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    #[must_use]
    pub const fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: 0.0,
        }
    }

    /// Resolve this constraint against the widget's intrinsic size for
    /// the axis.
    #[must_use]
    pub fn resolve(self, intrinsic: f32) -> f32 {
        match self.mode {
            MeasureMode::Exactly => self.size,
            MeasureMode::AtMost | MeasureMode::Unspecified => intrinsic,
        }
    }
}
