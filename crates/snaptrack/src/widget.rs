#![forbid(unsafe_code)]

//! The stop slider widget.
//!
//! [`StopSlider`] ties the pieces together: it owns the label list, the
//! computed [`TrackLayout`], the selection state, and the drag machine,
//! and talks to the host through the measure protocol, pointer events,
//! and the [`Surface`] trait.
//!
//! # Lifecycle
//! 1. Construct with the labels, the host-loaded thumb [`Sprite`], and a
//!    [`TextMetrics`] implementation.
//! 2. The host measure pass calls [`StopSlider::measure`]; stop positions
//!    exist from then on and any pending default selection is applied.
//! 3. Pointer events go through [`StopSlider::handle_pointer`]; the
//!    returned [`SliderEvent`] says whether to redraw and whether the
//!    selection moved.
//! 4. [`StopSlider::render`] recomputes the layout and issues draw calls.
//!
//! Layout is recomputed on every render and measure pass rather than
//! cached against invalidation; the walk is O(N) over a handful of
//! labels.

use snaptrack_core::event::{PointerEvent, PointerPhase};
use snaptrack_core::geometry::{Density, Insets, Point, Size};
use snaptrack_core::measure::MeasureSpec;
use snaptrack_core::metrics::TextMetrics;

use crate::gesture::{DragPhase, SliderEvent};
use crate::hit::{clamp_thumb, nearest_stop};
use crate::layout::{DegenerateLabels, TrackLayout};
use crate::selection::{Selection, SetResult};
use crate::style::SliderStyle;
use crate::surface::{Sprite, Surface};

/// How a degenerate label list (fewer than two entries) is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Panic with the layout error. For development builds that want
    /// misconfiguration to fail loudly.
    Strict,
    /// Log the error (with the `tracing` feature) and degrade to an
    /// empty layout, so a misconfigured host UI keeps running.
    #[default]
    Lenient,
}

/// A horizontal labeled-stop snap slider.
#[derive(Debug)]
pub struct StopSlider<M> {
    labels: Vec<String>,
    thumb: Sprite,
    metrics: M,
    style: SliderStyle,
    padding: Insets,
    density: Density,
    strictness: Strictness,
    selection: Selection,
    drag: DragPhase,
    layout: TrackLayout,
    measured: Size,
    thumb_x: f32,
    pending_default: Option<usize>,
}

impl<M: TextMetrics> StopSlider<M> {
    /// Create a slider over `labels`, drawing `thumb` as the indicator
    /// and measuring text through `metrics`.
    ///
    /// The initial selection is stop 0, applied (thumb included) after
    /// the first measure pass like any other default position request.
    pub fn new<I, S>(labels: I, thumb: Sprite, metrics: M) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            thumb,
            metrics,
            style: SliderStyle::new(),
            padding: Insets::default(),
            density: Density::default(),
            strictness: Strictness::default(),
            selection: Selection::new(),
            drag: DragPhase::Idle,
            layout: TrackLayout::default(),
            measured: Size::ZERO,
            thumb_x: 0.0,
            pending_default: Some(0),
        }
    }

    #[must_use]
    pub fn style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    #[must_use]
    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Install the position-changed listener. One slot; a later
    /// registration replaces the earlier one. Invoked synchronously,
    /// exactly once per actual selection change.
    pub fn on_position_changed(&mut self, listener: impl FnMut(usize) + 'static) {
        self.selection.set_listener(Box::new(listener));
    }

    /// The labels, in stop order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The currently selected stop index.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selection.current()
    }

    /// Current gesture phase.
    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.drag
    }

    /// Left edge of the thumb, in widget-local pixels.
    #[must_use]
    pub fn thumb_x(&self) -> f32 {
        self.thumb_x
    }

    /// The most recently computed track layout. Empty before the first
    /// measure pass and after a degraded degenerate input.
    #[must_use]
    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// The size answered by the last measure pass.
    #[must_use]
    pub fn measured(&self) -> Size {
        self.measured
    }

    /// Answer the host's measure request and run a layout pass.
    ///
    /// Intrinsic width is the thumb diameter plus horizontal padding;
    /// intrinsic height stacks padding, the label line, the configured
    /// track gap, and the thumb. Each axis resolves independently per
    /// [`MeasureSpec::resolve`]. A pending default position is consumed
    /// once stops exist.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let size = Size::new(
            width.resolve(self.intrinsic_width()),
            height.resolve(self.intrinsic_height()),
        );
        self.measured = size;
        self.relayout();
        self.apply_pending();
        size
    }

    /// Select `index` once the next layout pass has produced stop
    /// positions.
    ///
    /// When a measured width already exists the layout pass runs
    /// synchronously right here and the request is consumed before
    /// returning; otherwise it waits for the first [`measure`] or
    /// [`render`] call. Out-of-range requests are dropped at apply time.
    ///
    /// [`measure`]: StopSlider::measure
    /// [`render`]: StopSlider::render
    pub fn set_default_position(&mut self, index: usize) {
        self.pending_default = Some(index);
        if self.measured.width > 0.0 {
            self.relayout();
            self.apply_pending();
        }
    }

    /// Programmatic selection. Out-of-range indices are silently
    /// ignored; the listener fires only on an actual change; the thumb
    /// snaps to the stop when a layout exists.
    pub fn select(&mut self, index: usize) {
        if self.selection.set(index, self.labels.len()) == SetResult::OutOfRange {
            return;
        }
        self.snap_thumb_to(index);
    }

    /// Feed one pointer event through the drag state machine.
    ///
    /// Before the first measure pass (or on a degraded degenerate
    /// widget) there is no track to hit, so everything is ignored. A
    /// move or up without a preceding down is ignored too.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> SliderEvent {
        if self.layout.is_empty() {
            return SliderEvent::Ignored;
        }
        let half_width = self.thumb.size.width / 2.0;
        match event.phase {
            PointerPhase::Down => {
                self.drag = DragPhase::Dragging;
                self.thumb_x = clamp_thumb(event.x, &self.layout, half_width);
                SliderEvent::ThumbMoved
            }
            PointerPhase::Move => {
                if !self.drag.is_dragging() {
                    return SliderEvent::Ignored;
                }
                let changed = match nearest_stop(event.x, &self.layout, &self.labels, &self.metrics)
                {
                    Some(index) => {
                        self.selection.set(index, self.labels.len()) == SetResult::Changed
                    }
                    None => false,
                };
                self.thumb_x = clamp_thumb(event.x, &self.layout, half_width);
                if changed {
                    SliderEvent::Selected(self.selection.current())
                } else {
                    SliderEvent::ThumbMoved
                }
            }
            PointerPhase::Up => {
                if !self.drag.is_dragging() {
                    return SliderEvent::Ignored;
                }
                self.drag = DragPhase::Idle;
                match nearest_stop(event.x, &self.layout, &self.labels, &self.metrics) {
                    Some(index) => {
                        self.selection.set(index, self.labels.len());
                        self.snap_thumb_to(index);
                    }
                    None => {
                        // Dead-zone release: the thumb comes home to the
                        // current selection instead of resting off-stop.
                        self.snap_thumb_to(self.selection.current());
                    }
                }
                SliderEvent::Released(self.selection.current())
            }
        }
    }

    /// Recompute the layout and draw the widget: label row, track line,
    /// then the thumb sprite.
    pub fn render(&mut self, surface: &mut impl Surface) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "StopSlider",
            labels = self.labels.len(),
            selected = self.selection.current()
        )
        .entered();

        self.relayout();
        self.apply_pending();
        let (Some(first), Some(last)) = (self.layout.first(), self.layout.last()) else {
            return;
        };

        let text_y = self.padding.top + self.metrics.line_height();
        for (i, label) in self.labels.iter().enumerate() {
            if label.is_empty() {
                continue;
            }
            let Some(stop) = self.layout.get(i) else {
                continue;
            };
            let width = self.metrics.text_width(label);
            let color = if i == self.selection.current() {
                self.style.label.selected_color
            } else {
                self.style.label.color
            };
            surface.draw_text(
                label,
                Point::new(stop - width / 2.0, text_y),
                color,
                self.density.dips(self.style.label.size),
            );
        }

        let line_y = text_y + self.density.dips(self.style.track_gap) + self.thumb.size.height / 2.0;
        surface.draw_line(
            Point::new(first, line_y),
            Point::new(last, line_y),
            self.style.line.color,
            self.density.dips(self.style.line.width),
        );

        surface.draw_sprite(
            self.thumb.id,
            Point::new(self.thumb_x, line_y - self.thumb.size.height / 2.0),
        );
    }

    /// Recompute the layout, surfacing the degenerate-labels error
    /// regardless of the configured strictness.
    pub fn try_layout(&mut self) -> Result<(), DegenerateLabels> {
        match self.compute_layout() {
            Ok(layout) => {
                self.layout = layout;
                Ok(())
            }
            Err(err) => {
                self.layout = TrackLayout::default();
                Err(err)
            }
        }
    }

    fn intrinsic_width(&self) -> f32 {
        self.thumb.size.width + self.padding.horizontal()
    }

    fn intrinsic_height(&self) -> f32 {
        self.thumb.size.height
            + self.padding.vertical()
            + self.metrics.line_height()
            + self.density.dips(self.style.track_gap)
    }

    /// Left edge of the track: the first stop may sit half a thumb in
    /// from the padding so the thumb never pokes outside it.
    fn track_origin(&self) -> f32 {
        self.padding.left + self.thumb.size.width / 2.0
    }

    /// Usable track width after padding and the thumb diameter.
    fn available_width(&self) -> f32 {
        self.measured.width - self.padding.horizontal() - self.thumb.size.width
    }

    fn compute_layout(&self) -> Result<TrackLayout, DegenerateLabels> {
        TrackLayout::compute(
            &self.labels,
            self.track_origin(),
            self.available_width(),
            &self.metrics,
        )
    }

    fn relayout(&mut self) {
        match self.compute_layout() {
            Ok(layout) => self.layout = layout,
            Err(err) => {
                if self.strictness == Strictness::Strict {
                    panic!("{err}");
                }
                report_degenerate(err);
                self.layout = TrackLayout::default();
            }
        }
    }

    fn apply_pending(&mut self) {
        if self.layout.is_empty() {
            return;
        }
        if let Some(index) = self.pending_default.take() {
            self.select(index);
        }
    }

    fn snap_thumb_to(&mut self, index: usize) {
        if let Some(stop) = self.layout.get(index) {
            self.thumb_x = stop - self.thumb.size.width / 2.0;
        }
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn report_degenerate(err: DegenerateLabels) {
    #[cfg(feature = "tracing")]
    tracing::error!(count = err.count, "stop slider degraded: {err}");
}
