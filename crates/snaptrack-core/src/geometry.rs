#![forbid(unsafe_code)]

//! Geometry scalars shared by the widget and its host.

use serde::{Deserialize, Serialize};

/// A point in widget-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A zero-area size, the state before the first measure pass.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };
}

/// Fixed padding around the widget content, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Equal padding on all four sides.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Combined left + right padding.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Combined top + bottom padding.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Display density: device pixels per design unit.
///
/// Style lengths are written in density-independent design units and
/// converted once at draw time, so one style works across displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Density(pub f32);

impl Density {
    #[must_use]
    pub const fn new(scale: f32) -> Self {
        Self(scale)
    }

    /// Convert design units to device pixels, rounded to the nearest
    /// whole pixel.
    #[must_use]
    pub fn dips(&self, design_units: f32) -> f32 {
        (design_units * self.0 + 0.5).floor()
    }
}

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insets_sums() {
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(insets.horizontal(), 4.0);
        assert_eq!(insets.vertical(), 6.0);
    }

    #[test]
    fn insets_uniform() {
        let insets = Insets::uniform(5.0);
        assert_eq!(insets.horizontal(), 10.0);
        assert_eq!(insets.vertical(), 10.0);
    }

    #[test]
    fn density_identity_at_one() {
        assert_eq!(Density::default().dips(18.0), 18.0);
    }

    #[test]
    fn density_rounds_to_nearest_pixel() {
        // 2dp at 1.5x is 3px; 13dp at 2.625x is 34.125 -> 34px
        assert_eq!(Density::new(1.5).dips(2.0), 3.0);
        assert_eq!(Density::new(2.625).dips(13.0), 34.0);
    }

    #[test]
    fn density_half_rounds_up() {
        assert_eq!(Density::new(0.5).dips(3.0), 2.0);
    }
}
