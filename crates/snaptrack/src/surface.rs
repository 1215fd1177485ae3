#![forbid(unsafe_code)]

//! Host drawing abstraction.
//!
//! The widget never touches a platform canvas. It renders through
//! [`Surface`], three primitives a host adapter implements over its own
//! drawing API. Image resources stay host-side too: the host loads the
//! thumb bitmap and hands the widget a [`Sprite`] descriptor (an opaque
//! id plus pixel dimensions) which the widget passes back verbatim in
//! [`Surface::draw_sprite`].

use serde::{Deserialize, Serialize};
use snaptrack_core::geometry::{Point, Size};

use crate::style::Rgba;

/// Opaque handle to a host-loaded image resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteId(pub u64);

/// Descriptor for a host-loaded bitmap: its handle and pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub id: SpriteId,
    pub size: Size,
}

impl Sprite {
    #[must_use]
    pub const fn new(id: SpriteId, size: Size) -> Self {
        Self { id, size }
    }
}

/// Drawing primitives the widget renders through.
pub trait Surface {
    /// Stroke a line from `from` to `to`. `width` is in device pixels.
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba, width: f32);

    /// Draw `text` with the left end of its baseline at `origin`.
    /// `size` is the text size in device pixels.
    fn draw_text(&mut self, text: &str, origin: Point, color: Rgba, size: f32);

    /// Blit a sprite with its top-left corner at `origin`.
    fn draw_sprite(&mut self, sprite: SpriteId, origin: Point);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        width: f32,
    },
    Text {
        text: String,
        origin: Point,
        color: Rgba,
        size: f32,
    },
    Sprite {
        sprite: SpriteId,
        origin: Point,
    },
}

/// A [`Surface`] that records every call, for tests and host debugging.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded calls, keeping the allocation.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// The recorded text draws, in call order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The origin of the single sprite draw, if exactly one happened.
    #[must_use]
    pub fn sprite_origin(&self) -> Option<Point> {
        let mut origins = self.ops.iter().filter_map(|op| match op {
            DrawOp::Sprite { origin, .. } => Some(*origin),
            _ => None,
        });
        let first = origins.next();
        if origins.next().is_some() { None } else { first }
    }
}

impl Surface for RecordingSurface {
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba, width: f32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, color: Rgba, size: f32) {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            origin,
            color,
            size,
        });
    }

    fn draw_sprite(&mut self, sprite: SpriteId, origin: Point) {
        self.ops.push(DrawOp::Sprite { sprite, origin });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_preserves_call_order() {
        let mut surface = RecordingSurface::new();
        surface.draw_text("A", Point::new(0.0, 10.0), Rgba::rgb(0, 0, 0), 13.0);
        surface.draw_line(
            Point::new(0.0, 20.0),
            Point::new(50.0, 20.0),
            Rgba::rgb(0xdd, 0, 0),
            2.0,
        );
        surface.draw_sprite(SpriteId(7), Point::new(5.0, 12.0));
        assert_eq!(surface.ops.len(), 3);
        assert_eq!(surface.texts(), vec!["A"]);
        assert_eq!(surface.sprite_origin(), Some(Point::new(5.0, 12.0)));
    }

    #[test]
    fn sprite_origin_requires_exactly_one_sprite() {
        let mut surface = RecordingSurface::new();
        assert_eq!(surface.sprite_origin(), None);
        surface.draw_sprite(SpriteId(1), Point::new(0.0, 0.0));
        surface.draw_sprite(SpriteId(1), Point::new(1.0, 0.0));
        assert_eq!(surface.sprite_origin(), None);
    }

    #[test]
    fn clear_keeps_the_surface_reusable() {
        let mut surface = RecordingSurface::new();
        surface.draw_sprite(SpriteId(1), Point::new(0.0, 0.0));
        surface.clear();
        assert!(surface.ops.is_empty());
    }
}
