//! Measurement and layout math shared by the carousel and the reveal gate.
//!
//! Everything here is pure: the carousel and the reveal engine own the
//! state, this module only turns measurements into numbers.

use serde::{Deserialize, Serialize};

/// Named viewport-width bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakpointTier {
    NarrowPhone,
    Phone,
    Tablet,
    Desktop,
}

impl BreakpointTier {
    pub fn label(&self) -> &'static str {
        match self {
            BreakpointTier::NarrowPhone => "narrow phone",
            BreakpointTier::Phone => "phone",
            BreakpointTier::Tablet => "tablet",
            BreakpointTier::Desktop => "desktop",
        }
    }
}

/// One row of the breakpoint table: viewports narrower than `max_width_px`
/// fall into `tier`. `None` marks the open-ended last tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub tier: BreakpointTier,
    #[serde(default)]
    pub max_width_px: Option<f64>,
    pub advance_px: f64,
}

impl Breakpoint {
    pub fn new(tier: BreakpointTier, max_width_px: Option<f64>, advance_px: f64) -> Self {
        Self {
            tier,
            max_width_px,
            advance_px,
        }
    }
}

/// Breakpoint rows sorted by threshold, open-ended row last
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointTable {
    rows: Vec<Breakpoint>,
}

impl BreakpointTable {
    pub fn new(rows: &[Breakpoint]) -> Self {
        let mut rows = rows.to_vec();
        rows.sort_by(|a, b| match (a.max_width_px, b.max_width_px) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        Self { rows }
    }

    /// Find the row for a viewport width. Widths past every threshold use the
    /// widest row even when the table has no open-ended entry.
    pub fn resolve(&self, viewport_width_px: f64) -> Option<Breakpoint> {
        self.rows
            .iter()
            .find(|row| match row.max_width_px {
                Some(max) => viewport_width_px < max,
                None => true,
            })
            .or_else(|| self.rows.last())
            .copied()
    }

    pub fn rows(&self) -> &[Breakpoint] {
        &self.rows
    }
}

/// Viewport dimensions as reported by the environment
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width_px: f64,
    pub height_px: f64,
}

impl ViewportSize {
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// The visible window as a rect anchored at the origin
    pub fn as_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width_px, self.height_px)
    }
}

/// Axis-aligned box in viewport coordinates (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Vertical visibility test used for headings: any overlap between the
    /// element's top/bottom and the viewport counts.
    pub fn intersects_viewport(&self, viewport: ViewportSize) -> bool {
        self.top() < viewport.height_px && self.bottom() > 0.0
    }
}

/// Derived carousel measurements, recomputed on every resize
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetric {
    pub container_width_px: f64,
    pub per_item_advance_px: f64,
}

impl ViewportMetric {
    pub fn new(container_width_px: f64, per_item_advance_px: f64) -> Self {
        Self {
            container_width_px,
            per_item_advance_px,
        }
    }

    /// Width the strip may fill before the trailing fade. Negative when the
    /// container is narrower than the padding, which widens the max offset.
    pub fn visible_width(&self, fixed_padding_px: f64) -> f64 {
        self.container_width_px - fixed_padding_px
    }
}

/// Largest translation that keeps the last card's trailing edge inside the
/// visible width
pub fn max_offset(item_count: usize, metric: ViewportMetric, fixed_padding_px: f64) -> f64 {
    let strip = item_count as f64 * metric.per_item_advance_px;
    (strip - metric.visible_width(fixed_padding_px)).max(0.0)
}

/// Translation of the strip for a given position. The first card sits flush
/// against the leading edge and the strip never slides past its own end.
pub fn compute_offset(
    current_index: usize,
    item_count: usize,
    metric: ViewportMetric,
    fixed_padding_px: f64,
) -> f64 {
    if item_count <= 1 || current_index == 0 {
        return 0.0;
    }
    let raw = current_index as f64 * metric.per_item_advance_px;
    raw.min(max_offset(item_count, metric, fixed_padding_px))
}

/// Indices of cards that overlap `[offset, offset + container_width)`
pub fn visible_range(
    offset: f64,
    item_count: usize,
    metric: ViewportMetric,
) -> std::ops::Range<usize> {
    if item_count == 0 || metric.per_item_advance_px <= 0.0 {
        return 0..0;
    }
    let advance = metric.per_item_advance_px;
    let first = (offset / advance).floor().max(0.0) as usize;
    let end = ((offset + metric.container_width_px) / advance).ceil().max(0.0) as usize;
    let first = first.min(item_count - 1);
    let end = end.clamp(first + 1, item_count);
    first..end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> BreakpointTable {
        BreakpointTable::new(&[
            Breakpoint::new(BreakpointTier::Desktop, None, 680.0),
            Breakpoint::new(BreakpointTier::Phone, Some(768.0), 380.0),
            Breakpoint::new(BreakpointTier::NarrowPhone, Some(480.0), 300.0),
            Breakpoint::new(BreakpointTier::Tablet, Some(1200.0), 520.0),
        ])
    }

    #[test]
    fn test_table_sorted_and_resolved() {
        let table = table();
        assert_eq!(table.rows()[0].tier, BreakpointTier::NarrowPhone);
        assert_eq!(table.rows()[3].tier, BreakpointTier::Desktop);

        assert_eq!(table.resolve(320.0).unwrap().tier, BreakpointTier::NarrowPhone);
        assert_eq!(table.resolve(480.0).unwrap().tier, BreakpointTier::Phone);
        assert_eq!(table.resolve(1000.0).unwrap().tier, BreakpointTier::Tablet);
        assert_eq!(table.resolve(1920.0).unwrap().advance_px, 680.0);
    }

    #[test]
    fn test_resolve_without_open_row_uses_widest() {
        let table = BreakpointTable::new(&[Breakpoint::new(BreakpointTier::Phone, Some(768.0), 380.0)]);
        assert_eq!(table.resolve(4000.0).unwrap().tier, BreakpointTier::Phone);
        assert!(BreakpointTable::new(&[]).resolve(100.0).is_none());
    }

    #[test]
    fn test_offset_zero_at_start_or_single_item() {
        let metric = ViewportMetric::new(1600.0, 680.0);
        assert_eq!(compute_offset(0, 7, metric, 50.0), 0.0);
        assert_eq!(compute_offset(3, 1, metric, 50.0), 0.0);
        assert_eq!(compute_offset(3, 0, metric, 50.0), 0.0);
    }

    #[test]
    fn test_desktop_last_index_clamps_to_max_offset() {
        let metric = ViewportMetric::new(1600.0, 680.0);
        assert_eq!(compute_offset(6, 7, metric, 50.0), 3210.0);
        assert_eq!(compute_offset(1, 7, metric, 50.0), 680.0);
    }

    #[test]
    fn test_offset_monotonic_and_bounded() {
        for &(width, advance) in &[(1600.0, 680.0), (1000.0, 520.0), (375.0, 300.0), (3000.0, 680.0)] {
            let metric = ViewportMetric::new(width, advance);
            for n in 0..12 {
                let bound = max_offset(n, metric, 50.0);
                let mut prev = 0.0;
                for i in 0..n.max(1) {
                    let offset = compute_offset(i, n, metric, 50.0);
                    assert!(offset >= prev, "n={} i={}", n, i);
                    assert!(offset <= bound, "n={} i={}", n, i);
                    prev = offset;
                }
            }
        }
    }

    #[test]
    fn test_strip_narrower_than_container_never_moves() {
        let metric = ViewportMetric::new(3000.0, 680.0);
        assert_eq!(compute_offset(2, 3, metric, 50.0), 0.0);
    }

    #[test]
    fn test_container_narrower_than_padding() {
        let metric = ViewportMetric::new(30.0, 300.0);
        assert_eq!(metric.visible_width(50.0), -20.0);
        assert_eq!(max_offset(2, metric, 50.0), 620.0);
        assert_eq!(compute_offset(1, 2, metric, 50.0), 300.0);
    }

    #[test]
    fn test_visible_range() {
        let metric = ViewportMetric::new(1600.0, 680.0);
        assert_eq!(visible_range(0.0, 7, metric), 0..3);
        assert_eq!(visible_range(3210.0, 7, metric), 4..7);
        assert_eq!(visible_range(0.0, 0, metric), 0..0);
        assert_eq!(visible_range(0.0, 1, metric), 0..1);
    }

    #[test]
    fn test_rect_viewport_intersection() {
        let viewport = ViewportSize::new(1200.0, 800.0);
        assert!(Rect::new(0.0, 100.0, 300.0, 40.0).intersects_viewport(viewport));
        assert!(Rect::new(0.0, -30.0, 300.0, 40.0).intersects_viewport(viewport));
        assert!(!Rect::new(0.0, 800.0, 300.0, 40.0).intersects_viewport(viewport));
        assert!(!Rect::new(0.0, -40.0, 300.0, 40.0).intersects_viewport(viewport));
    }
}
