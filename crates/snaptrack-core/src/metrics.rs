#![forbid(unsafe_code)]

//! Text measurement contract and fallback implementation.
//!
//! Stop layout depends on label widths and the label line height, both of
//! which belong to the host's text stack. [`TextMetrics`] is that seam.
//! [`MonoMetrics`] is a self-contained fallback for hosts without a real
//! shaper (and for deterministic tests): display columns from Unicode data
//! tables, times a fixed pixel advance.

use unicode_display_width::width as unicode_display_width;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Text measurement provided by the host's text stack.
pub trait TextMetrics {
    /// Width of `text` in pixels when drawn in the label font.
    fn text_width(&self, text: &str) -> f32;

    /// Full line height (ascent + descent) of the label font in pixels.
    fn line_height(&self) -> f32;
}

/// Monospace fallback metrics: display columns times a fixed advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonoMetrics {
    advance: f32,
    line_height: f32,
    cjk_wide: bool,
}

impl MonoMetrics {
    /// Metrics with the given per-column advance and line height, both in
    /// pixels.
    #[must_use]
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
            cjk_wide: false,
        }
    }

    /// Treat East Asian ambiguous-width characters as two columns.
    #[must_use]
    pub const fn cjk_wide(mut self, wide: bool) -> Self {
        self.cjk_wide = wide;
        self
    }

    fn columns(&self, text: &str) -> usize {
        if let Some(columns) = ascii_columns(text) {
            return columns;
        }
        if self.cjk_wide {
            return text.width_cjk();
        }
        text.graphemes(true)
            .map(|g| unicode_display_width(g) as usize)
            .sum()
    }
}

impl TextMetrics for MonoMetrics {
    fn text_width(&self, text: &str) -> f32 {
        self.columns(text) as f32 * self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// Fast-path column count for pure printable ASCII.
fn ascii_columns(text: &str) -> Option<usize> {
    if text.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
        Some(text.len())
    } else {
        None
    }
}

/// Fixed-width metrics for deterministic tests: every non-empty string
/// measures the same.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    pub label_width: f32,
    pub line_height: f32,
}

#[cfg(any(test, feature = "test-helpers"))]
impl FixedMetrics {
    #[must_use]
    pub const fn new(label_width: f32, line_height: f32) -> Self {
        Self {
            label_width,
            line_height,
        }
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl TextMetrics for FixedMetrics {
    fn text_width(&self, text: &str) -> f32 {
        if text.is_empty() {
            0.0
        } else {
            self.label_width
        }
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_width_is_chars_times_advance() {
        let metrics = MonoMetrics::new(8.0, 16.0);
        assert_eq!(metrics.text_width("Small"), 40.0);
        assert_eq!(metrics.text_width(""), 0.0);
    }

    #[test]
    fn line_height_is_reported() {
        let metrics = MonoMetrics::new(8.0, 16.0);
        assert_eq!(metrics.line_height(), 16.0);
    }

    #[test]
    fn wide_graphemes_count_double() {
        let metrics = MonoMetrics::new(10.0, 16.0);
        // CJK ideographs are two columns wide regardless of policy.
        assert_eq!(metrics.text_width("\u{5927}"), 20.0);
    }

    #[test]
    fn combining_marks_do_not_add_columns() {
        let metrics = MonoMetrics::new(10.0, 16.0);
        // "e" + combining acute is one grapheme, one column.
        assert_eq!(metrics.text_width("e\u{0301}"), 10.0);
    }

    #[test]
    fn fixed_metrics_ignore_content() {
        let metrics = FixedMetrics::new(10.0, 16.0);
        assert_eq!(metrics.text_width("A"), 10.0);
        assert_eq!(metrics.text_width("Large"), 10.0);
        assert_eq!(metrics.text_width(""), 0.0);
    }
}
