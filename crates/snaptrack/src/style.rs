#![forbid(unsafe_code)]

//! Visual configuration for the slider.
//!
//! All lengths here are density-independent design units; the widget
//! converts them through its [`Density`](snaptrack_core::geometry::Density)
//! when drawing. The defaults are the classic red-accent look: a red
//! track and selected label over gray idle labels.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }
}

/// Accent red used for the track line and the selected label.
const ACCENT: Rgba = Rgba::rgb(0xdd, 0x00, 0x00);
/// Idle label gray.
const IDLE_TEXT: Rgba = Rgba::rgb(0x66, 0x66, 0x66);

/// Stroke style for the track line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Rgba,
    /// Stroke width in design units.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: ACCENT,
            width: 2.0,
        }
    }
}

/// Label text style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub color: Rgba,
    pub selected_color: Rgba,
    /// Text size in design units.
    pub size: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            color: IDLE_TEXT,
            selected_color: ACCENT,
            size: 13.0,
        }
    }
}

/// Full visual configuration for a [`StopSlider`](crate::StopSlider).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderStyle {
    pub line: LineStyle,
    pub label: LabelStyle,
    /// Vertical gap between the label row and the track line, in design
    /// units.
    pub track_gap: f32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderStyle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            line: LineStyle::default(),
            label: LabelStyle::default(),
            track_gap: 18.0,
        }
    }

    #[must_use]
    pub fn line_color(mut self, color: Rgba) -> Self {
        self.line.color = color;
        self
    }

    #[must_use]
    pub fn line_width(mut self, width: f32) -> Self {
        self.line.width = width;
        self
    }

    #[must_use]
    pub fn label_color(mut self, color: Rgba) -> Self {
        self.label.color = color;
        self
    }

    #[must_use]
    pub fn selected_label_color(mut self, color: Rgba) -> Self {
        self.label.selected_color = color;
        self
    }

    #[must_use]
    pub fn label_size(mut self, size: f32) -> Self {
        self.label.size = size;
        self
    }

    #[must_use]
    pub fn track_gap(mut self, gap: f32) -> Self {
        self.track_gap = gap;
        self
    }
}
