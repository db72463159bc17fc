//! Environment handles: the viewport that reports resizes, the container a
//! carousel measures, and the host elements whose visibility gates a reveal.

use std::cell::Cell;
use std::rc::Rc;

use crate::clock::Millis;
use crate::geometry::{Rect, ViewportSize};
use crate::signal::{Signal, Subscription};

/// The window the site is drawn into. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    size: Rc<Cell<ViewportSize>>,
    resized: Signal<ViewportSize>,
}

impl Viewport {
    pub fn new(size: ViewportSize) -> Self {
        Self {
            size: Rc::new(Cell::new(size)),
            resized: Signal::new(),
        }
    }

    pub fn size(&self) -> ViewportSize {
        self.size.get()
    }

    /// Record a new size and notify subscribers. Repeated identical sizes
    /// are not re-broadcast.
    pub fn resize(&self, size: ViewportSize) {
        if self.size.get() == size {
            return;
        }
        self.size.set(size);
        self.resized.emit(&size);
    }

    pub fn on_resize(&self, callback: impl FnMut(&ViewportSize) + 'static) -> Subscription {
        self.resized.subscribe(callback)
    }

    pub fn subscriber_count(&self) -> usize {
        self.resized.subscriber_count()
    }
}

/// Something whose width can be measured directly, e.g. the scrolling
/// container of a carousel
pub trait Measure {
    fn width_px(&self) -> f64;
}

/// Container whose width tracks the viewport minus fixed side gutters
#[derive(Debug, Clone)]
pub struct ViewportContainer {
    viewport: Viewport,
    gutter_px: f64,
}

impl ViewportContainer {
    pub fn new(viewport: Viewport, gutter_px: f64) -> Self {
        Self {
            viewport,
            gutter_px,
        }
    }
}

impl Measure for ViewportContainer {
    fn width_px(&self) -> f64 {
        (self.viewport.size().width_px - self.gutter_px * 2.0).max(0.0)
    }
}

/// Fixed-width container, mostly for tests and previews
#[derive(Debug, Clone, Copy)]
pub struct FixedContainer(pub f64);

impl Measure for FixedContainer {
    fn width_px(&self) -> f64 {
        self.0
    }
}

/// Visibility transition reported for a host element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub visible: bool,
    pub at_ms: Millis,
}

/// An element that can be checked for visibility right now and observed
/// for future transitions
pub trait VisibilityHost {
    fn bounding_rect(&self) -> Rect;

    fn observe(&self, callback: Box<dyn FnMut(&Visibility)>) -> Subscription;

    fn is_visible_in(&self, viewport: ViewportSize) -> bool {
        self.bounding_rect().intersects_viewport(viewport)
    }
}

/// Layout-tracked element. The page layout updates its rect every frame;
/// the element emits a [`Visibility`] only when the visible state flips.
#[derive(Debug, Clone, Default)]
pub struct ElementHandle {
    rect: Rc<Cell<Rect>>,
    visible: Rc<Cell<bool>>,
    changes: Signal<Visibility>,
}

impl ElementHandle {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: Rc::new(Cell::new(rect)),
            visible: Rc::new(Cell::new(false)),
            changes: Signal::new(),
        }
    }

    /// Move the element and report a transition if it crossed the viewport
    /// edge
    pub fn place(&self, rect: Rect, viewport: ViewportSize, now: Millis) {
        self.rect.set(rect);
        let visible = rect.intersects_viewport(viewport);
        if visible != self.visible.get() {
            self.visible.set(visible);
            self.changes.emit(&Visibility {
                visible,
                at_ms: now,
            });
        }
    }

    pub fn observer_count(&self) -> usize {
        self.changes.subscriber_count()
    }
}

impl VisibilityHost for ElementHandle {
    fn bounding_rect(&self) -> Rect {
        self.rect.get()
    }

    fn observe(&self, callback: Box<dyn FnMut(&Visibility)>) -> Subscription {
        self.changes.subscribe(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_resize_notifies_only_on_change() {
        let viewport = Viewport::new(ViewportSize::new(800.0, 600.0));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = Rc::clone(&seen);
            viewport.on_resize(move |size| seen.borrow_mut().push(size.width_px))
        };

        viewport.resize(ViewportSize::new(800.0, 600.0));
        viewport.resize(ViewportSize::new(1300.0, 600.0));
        assert_eq!(*seen.borrow(), vec![1300.0]);
        assert_eq!(viewport.size().width_px, 1300.0);
    }

    #[test]
    fn test_viewport_container_tracks_width() {
        let viewport = Viewport::new(ViewportSize::new(1640.0, 900.0));
        let container = ViewportContainer::new(viewport.clone(), 20.0);
        assert_eq!(container.width_px(), 1600.0);
        viewport.resize(ViewportSize::new(30.0, 900.0));
        assert_eq!(container.width_px(), 0.0);
    }

    #[test]
    fn test_element_reports_transitions() {
        let viewport = ViewportSize::new(1000.0, 500.0);
        let element = ElementHandle::new(Rect::new(0.0, 900.0, 200.0, 20.0));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = Rc::clone(&seen);
            element.observe(Box::new(move |v: &Visibility| seen.borrow_mut().push(*v)))
        };

        element.place(Rect::new(0.0, 700.0, 200.0, 20.0), viewport, 1);
        element.place(Rect::new(0.0, 300.0, 200.0, 20.0), viewport, 2);
        element.place(Rect::new(0.0, 200.0, 200.0, 20.0), viewport, 3);
        element.place(Rect::new(0.0, -50.0, 200.0, 20.0), viewport, 4);

        assert_eq!(
            *seen.borrow(),
            vec![
                Visibility { visible: true, at_ms: 2 },
                Visibility { visible: false, at_ms: 4 },
            ]
        );
        assert!(!element.is_visible_in(viewport));
    }
}
