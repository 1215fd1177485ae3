#![forbid(unsafe_code)]

//! Pointer-to-stop resolution and thumb clamping.

use snaptrack_core::metrics::TextMetrics;

use crate::layout::TrackLayout;

/// Resolve a pointer x-coordinate to the nearest stop.
///
/// Stop `i` is a hit when `|stops[i] - x|` is strictly inside half of
/// `label_width + item_gap`: each stop's tolerance band covers its label
/// plus half the gap on either side. Empty labels are never hit. The scan
/// runs in index order and the first match wins, which is also the
/// tie-break for x-coordinates on a shared band edge.
///
/// Returns `None` when `x` falls in a dead zone between bands or outside
/// the track entirely; callers must check before indexing.
#[must_use]
pub fn nearest_stop<S, M>(
    x: f32,
    layout: &TrackLayout,
    labels: &[S],
    metrics: &M,
) -> Option<usize>
where
    S: AsRef<str>,
    M: TextMetrics,
{
    for (i, stop) in layout.stops().iter().enumerate() {
        let label = labels.get(i).map(S::as_ref).unwrap_or("");
        if label.is_empty() {
            continue;
        }
        let tolerance = (metrics.text_width(label) + layout.item_gap()) / 2.0;
        if (stop - x).abs() < tolerance {
            return Some(i);
        }
    }
    None
}

/// Clamp a thumb left-edge x-coordinate to the track.
///
/// The bounds are the first and last stop centers, each shifted left by
/// `half_width` so a thumb of width `2 * half_width` drawn at the result
/// stays centered over the track ends instead of overshooting them. An
/// empty layout has no track, so `x` passes through unchanged.
#[must_use]
pub fn clamp_thumb(x: f32, layout: &TrackLayout, half_width: f32) -> f32 {
    let (Some(first), Some(last)) = (layout.first(), layout.last()) else {
        return x;
    };
    x.clamp(first - half_width, last - half_width)
}
