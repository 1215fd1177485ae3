#![forbid(unsafe_code)]

//! Track layout solver.
//!
//! Turns a run of labels plus the usable track width into N stop centers
//! and the shared inter-item gap. The result is derived data: it is
//! recomputed in full whenever the width changes and on every render
//! pass, never patched incrementally. The walk is O(N) over a handful of
//! labels, so recomputation is cheaper than cache invalidation would be.

use std::fmt;

use snaptrack_core::metrics::TextMetrics;

/// Error: a track needs at least two labeled stops.
///
/// A single stop has nowhere to slide to and no gap to derive, so layout
/// refuses rather than inventing geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegenerateLabels {
    /// Number of labels that were supplied.
    pub count: usize,
}

impl fmt::Display for DegenerateLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "track layout needs at least 2 labels, got {}",
            self.count
        )
    }
}

impl std::error::Error for DegenerateLabels {}

/// Computed stop geometry for one track.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackLayout {
    stops: Vec<f32>,
    item_gap: f32,
}

impl TrackLayout {
    /// Compute stop centers for `labels` across `available_width` pixels
    /// of track, starting at `origin`.
    ///
    /// `available_width` is the usable width after the caller subtracts
    /// fixed decorations (padding and the thumb diameter). The gap is
    /// `(available_width - Σ label widths) / (N - 1)`; it goes negative
    /// when the labels overflow the width, and is deliberately not
    /// clamped; rendering may overlap in that case.
    ///
    /// Every label owns exactly one stop, in order. An empty label
    /// contributes zero width but still consumes a gap and a stop, so
    /// stop indices always line up with label indices; empty labels are
    /// excluded from hit-testing instead (see [`crate::hit`]).
    pub fn compute<S, M>(
        labels: &[S],
        origin: f32,
        available_width: f32,
        metrics: &M,
    ) -> Result<Self, DegenerateLabels>
    where
        S: AsRef<str>,
        M: TextMetrics,
    {
        if labels.len() < 2 {
            return Err(DegenerateLabels {
                count: labels.len(),
            });
        }

        let widths: Vec<f32> = labels.iter().map(|l| label_width(l.as_ref(), metrics)).collect();
        let total: f32 = widths.iter().sum();
        let item_gap = (available_width - total) / (labels.len() - 1) as f32;

        let mut stops = Vec::with_capacity(labels.len());
        let mut x = origin;
        for width in widths {
            stops.push(x + width / 2.0);
            x += width + item_gap;
        }

        Ok(Self { stops, item_gap })
    }

    /// Stop centers, one per label, left to right.
    #[must_use]
    pub fn stops(&self) -> &[f32] {
        &self.stops
    }

    /// The shared inter-item gap. May be negative on overflow.
    #[must_use]
    pub fn item_gap(&self) -> f32 {
        self.item_gap
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// True for the empty layout produced before the first measure pass
    /// or after a degenerate input was degraded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Center of stop `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.stops.get(index).copied()
    }

    /// Center of the leftmost stop.
    #[must_use]
    pub fn first(&self) -> Option<f32> {
        self.stops.first().copied()
    }

    /// Center of the rightmost stop.
    #[must_use]
    pub fn last(&self) -> Option<f32> {
        self.stops.last().copied()
    }
}

/// Width a label occupies on the track. Empty labels collapse to a
/// point regardless of what the host metrics report for "".
fn label_width<M: TextMetrics>(label: &str, metrics: &M) -> f32 {
    if label.is_empty() {
        0.0
    } else {
        metrics.text_width(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use snaptrack_core::metrics::FixedMetrics;

    const M10: FixedMetrics = FixedMetrics::new(10.0, 16.0);

    // --- Walk algorithm ---

    #[test]
    fn three_labels_across_hundred() {
        let labels = ["A", "B", "C"];
        let layout = TrackLayout::compute(&labels, 0.0, 100.0, &M10).unwrap();
        // gap = (100 - 30) / 2 = 35; centers at 5, 50, 95
        assert_eq!(layout.item_gap(), 35.0);
        assert_eq!(layout.stops(), &[5.0, 50.0, 95.0]);
    }

    #[test]
    fn origin_shifts_every_stop() {
        let labels = ["A", "B", "C"];
        let layout = TrackLayout::compute(&labels, 12.0, 100.0, &M10).unwrap();
        assert_eq!(layout.stops(), &[17.0, 62.0, 107.0]);
    }

    #[test]
    fn two_labels_use_full_span() {
        let labels = ["lo", "hi"];
        let layout = TrackLayout::compute(&labels, 0.0, 60.0, &M10).unwrap();
        // gap = (60 - 20) / 1 = 40; centers at 5 and 55
        assert_eq!(layout.item_gap(), 40.0);
        assert_eq!(layout.stops(), &[5.0, 55.0]);
    }

    #[test]
    fn gap_goes_negative_on_overflow() {
        let labels = ["A", "B", "C"];
        let layout = TrackLayout::compute(&labels, 0.0, 20.0, &M10).unwrap();
        assert_eq!(layout.item_gap(), -5.0);
        assert_eq!(layout.len(), 3);
    }

    // --- Empty labels ---

    #[test]
    fn empty_label_still_owns_a_stop() {
        let labels = ["A", "", "C"];
        let layout = TrackLayout::compute(&labels, 0.0, 100.0, &M10).unwrap();
        // widths 10, 0, 10; gap = 80 / 2 = 40
        assert_eq!(layout.item_gap(), 40.0);
        assert_eq!(layout.stops(), &[5.0, 50.0, 95.0]);
    }

    #[test]
    fn empty_label_width_overrides_metrics() {
        // FixedMetrics already reports 0 for "", so use a metrics that
        // does not, proving layout collapses empties itself.
        struct Sloppy;
        impl snaptrack_core::metrics::TextMetrics for Sloppy {
            fn text_width(&self, _text: &str) -> f32 {
                10.0
            }
            fn line_height(&self) -> f32 {
                16.0
            }
        }
        let labels = ["A", "", "C"];
        let layout = TrackLayout::compute(&labels, 0.0, 100.0, &Sloppy).unwrap();
        assert_eq!(layout.stops(), &[5.0, 50.0, 95.0]);
    }

    // --- Degenerate inputs ---

    #[test]
    fn one_label_is_degenerate() {
        let err = TrackLayout::compute(&["only"], 0.0, 100.0, &M10).unwrap_err();
        assert_eq!(err, DegenerateLabels { count: 1 });
        assert_eq!(
            err.to_string(),
            "track layout needs at least 2 labels, got 1"
        );
    }

    #[test]
    fn zero_labels_are_degenerate() {
        let labels: [&str; 0] = [];
        let err = TrackLayout::compute(&labels, 0.0, 100.0, &M10).unwrap_err();
        assert_eq!(err.count, 0);
    }

    // --- Properties ---

    proptest! {
        #[test]
        fn stop_count_matches_label_count(
            n in 2usize..12,
            width in 0.0f32..4000.0,
        ) {
            let labels = vec!["ab"; n];
            let layout = TrackLayout::compute(&labels, 0.0, width, &M10).unwrap();
            prop_assert_eq!(layout.len(), n);
        }

        #[test]
        fn stops_strictly_increase_when_gap_is_nonnegative(
            n in 2usize..12,
            slack in 0.0f32..1000.0,
        ) {
            let labels = vec!["ab"; n];
            let width = 10.0 * n as f32 + slack;
            let layout = TrackLayout::compute(&labels, 0.0, width, &M10).unwrap();
            prop_assert!(layout.item_gap() >= 0.0);
            for pair in layout.stops().windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }

        #[test]
        fn recomputation_is_deterministic(
            n in 2usize..8,
            width in 0.0f32..2000.0,
        ) {
            let labels = vec!["xy"; n];
            let a = TrackLayout::compute(&labels, 0.0, width, &M10).unwrap();
            let b = TrackLayout::compute(&labels, 0.0, width, &M10).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
