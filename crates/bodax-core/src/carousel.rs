//! Responsive carousel controller.
//!
//! Presents an ordered list of items as a horizontally translated strip.
//! Position is one index per item; [`CarouselController::compute_offset`]
//! turns it into a pixel translation that never overshoots the last card.
//! Layout metrics are recomputed from the breakpoint table whenever the
//! viewport reports a resize, without touching the position.

use std::cell::Cell;
use std::ops::Range;
use std::rc::Rc;

use tracing::{debug, info, trace};

use crate::clock::Millis;
use crate::config::CarouselConfig;
use crate::geometry::{self, BreakpointTable, BreakpointTier, ViewportMetric, ViewportSize};
use crate::signal::Subscription;
use crate::slide::SlideAnimator;
use crate::viewport::{Measure, Viewport};

/// Record shown by a carousel. Only the key is ever inspected.
pub trait DisplayItem {
    fn key(&self) -> &str;
}

/// Caller-supplied card renderer
pub trait ItemRenderer<T> {
    type Output;

    fn render(&mut self, item: &T, is_active: bool) -> Self::Output;
}

impl<T, O, F> ItemRenderer<T> for F
where
    F: FnMut(&T, bool) -> O,
{
    type Output = O;

    fn render(&mut self, item: &T, is_active: bool) -> O {
        self(item, is_active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    Uninitialized,
    Ready,
    Disposed,
}

/// One position indicator under the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

/// Layout state shared with the resize callback
#[derive(Debug, Default)]
struct LayoutCell {
    metric: Cell<ViewportMetric>,
    tier: Cell<Option<BreakpointTier>>,
    generation: Cell<u64>,
    disposed: Cell<bool>,
}

impl LayoutCell {
    fn recompute(&self, table: &BreakpointTable, viewport: ViewportSize, container: &dyn Measure) {
        if self.disposed.get() {
            return;
        }
        let Some(row) = table.resolve(viewport.width_px) else {
            return;
        };
        let metric = ViewportMetric::new(container.width_px(), row.advance_px);
        if metric == self.metric.get() {
            return;
        }
        if self.tier.get() != Some(row.tier) {
            debug!(
                tier = row.tier.label(),
                advance_px = row.advance_px,
                "Carousel breakpoint tier changed"
            );
        }
        self.metric.set(metric);
        self.tier.set(Some(row.tier));
        self.generation.set(self.generation.get() + 1);
    }
}

pub struct CarouselController<T: DisplayItem> {
    table: BreakpointTable,
    fixed_padding_px: f64,
    items: Vec<T>,
    current_index: usize,
    phase: CarouselPhase,
    layout: Rc<LayoutCell>,
    resize_subscription: Option<Subscription>,
    slide: SlideAnimator,
}

impl<T: DisplayItem> CarouselController<T> {
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            table: BreakpointTable::new(&config.breakpoints),
            fixed_padding_px: config.fixed_padding_px,
            items: Vec::new(),
            current_index: 0,
            phase: CarouselPhase::Uninitialized,
            layout: Rc::new(LayoutCell::default()),
            resize_subscription: None,
            slide: SlideAnimator::new(config.slide_duration_ms, config.easing),
        }
    }

    /// Capture the items and the container, measure, and subscribe to
    /// viewport resizes. Calling it again re-initializes in place.
    pub fn initialize(&mut self, items: Vec<T>, container: Rc<dyn Measure>, viewport: &Viewport) {
        if self.phase == CarouselPhase::Disposed {
            return;
        }
        self.resize_subscription = None;
        self.items = items;
        self.current_index = 0;

        self.layout
            .recompute(&self.table, viewport.size(), container.as_ref());

        let layout = Rc::clone(&self.layout);
        let table = self.table.clone();
        self.resize_subscription = Some(viewport.on_resize(move |size| {
            layout.recompute(&table, *size, container.as_ref());
        }));

        self.slide.snap(self.compute_offset());
        self.phase = CarouselPhase::Ready;
        info!(
            items = self.items.len(),
            tier = self.tier().map(|t| t.label()).unwrap_or("unknown"),
            "Carousel initialized"
        );
    }

    /// Swap in a new snapshot. The position resets only when the ordered
    /// keys differ from the current list.
    pub fn replace_items(&mut self, items: Vec<T>) {
        if self.phase == CarouselPhase::Disposed {
            return;
        }
        let same_identity = items.len() == self.items.len()
            && items
                .iter()
                .zip(self.items.iter())
                .all(|(a, b)| a.key() == b.key());
        self.items = items;
        if !same_identity {
            trace!(items = self.items.len(), "Carousel items replaced, position reset");
            self.current_index = 0;
            self.slide.snap(self.compute_offset());
        }
    }

    pub fn next(&mut self) {
        self.set_index(self.current_index.saturating_add(1));
    }

    pub fn previous(&mut self) {
        self.set_index(self.current_index.saturating_sub(1));
    }

    /// Jump to `index`, clamped into range
    pub fn go_to(&mut self, index: usize) {
        self.set_index(index);
    }

    fn set_index(&mut self, index: usize) {
        if self.phase == CarouselPhase::Disposed {
            return;
        }
        let clamped = index.min(self.max_index());
        if clamped != self.current_index {
            self.current_index = clamped;
            self.slide.request();
        }
    }

    /// Target translation for the current position
    pub fn compute_offset(&self) -> f64 {
        geometry::compute_offset(
            self.current_index,
            self.items.len(),
            self.layout.metric.get(),
            self.fixed_padding_px,
        )
    }

    pub fn max_offset(&self) -> f64 {
        geometry::max_offset(self.items.len(), self.layout.metric.get(), self.fixed_padding_px)
    }

    /// Advance the slide animation and return the on-screen offset
    pub fn update(&mut self, now: Millis) -> f64 {
        if self.phase == CarouselPhase::Disposed {
            return self.slide.current();
        }
        let target = self.compute_offset();
        self.slide.update(now, target, self.layout.generation.get())
    }

    /// Offset as of the last `update`
    pub fn visual_offset(&self) -> f64 {
        self.slide.current()
    }

    pub fn needs_update(&self) -> bool {
        self.phase == CarouselPhase::Ready && self.slide.needs_update()
    }

    /// Cards overlapping the container at the on-screen offset
    pub fn visible_range(&self) -> Range<usize> {
        geometry::visible_range(self.visual_offset(), self.items.len(), self.layout.metric.get())
    }

    /// Render every visible card through `renderer`
    pub fn render<R: ItemRenderer<T>>(&self, renderer: &mut R) -> Vec<R::Output> {
        let current = self.current_index;
        self.visible_range()
            .map(|idx| renderer.render(&self.items[idx], idx == current))
            .collect()
    }

    pub fn dots(&self) -> Vec<Dot> {
        (0..self.items.len())
            .map(|index| Dot {
                index,
                active: index == self.current_index,
            })
            .collect()
    }

    /// "current / total" as shown between the arrows
    pub fn counter_label(&self) -> String {
        if self.items.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.current_index + 1, self.items.len())
    }

    pub fn can_go_previous(&self) -> bool {
        self.phase == CarouselPhase::Ready && self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.phase == CarouselPhase::Ready && self.current_index < self.max_index()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn max_index(&self) -> usize {
        self.items.len().saturating_sub(1)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn active_item(&self) -> Option<&T> {
        self.items.get(self.current_index)
    }

    pub fn metric(&self) -> ViewportMetric {
        self.layout.metric.get()
    }

    pub fn tier(&self) -> Option<BreakpointTier> {
        self.layout.tier.get()
    }

    pub fn fixed_padding_px(&self) -> f64 {
        self.fixed_padding_px
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    /// Release the resize subscription. Further calls change nothing.
    pub fn dispose(&mut self) {
        self.layout.disposed.set(true);
        self.resize_subscription = None;
        self.phase = CarouselPhase::Disposed;
    }
}

impl<T: DisplayItem> Drop for CarouselController<T> {
    fn drop(&mut self) {
        self.layout.disposed.set(true);
    }
}
