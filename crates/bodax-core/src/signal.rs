//! Single-threaded notification channel with RAII subscriptions.
//!
//! Resize and visibility notifications reach the carousel and the reveal
//! engine through a [`Signal`]. Subscribing returns a [`Subscription`];
//! dropping it removes the callback, so an owner that goes away can never be
//! called back.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Box<dyn FnMut(&T)>;

struct Inner<T> {
    next_id: u64,
    listeners: Vec<(u64, Callback<T>)>,
    emitting: bool,
    removed_while_emitting: Vec<u64>,
}

/// Broadcasts values to registered callbacks in registration order
pub struct Signal<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                next_id: 0,
                listeners: Vec::new(),
                emitting: false,
                removed_while_emitting: Vec::new(),
            })),
        }
    }

    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription
    where
        T: 'static,
    {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.listeners.push((id, Box::new(callback)));

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            remove: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let mut inner = inner.borrow_mut();
                    inner.listeners.retain(|(lid, _)| *lid != id);
                    if inner.emitting {
                        inner.removed_while_emitting.push(id);
                    }
                }
            })),
        }
    }

    /// Deliver `value` to every subscriber. Callbacks may subscribe or drop
    /// subscriptions while being notified.
    pub fn emit(&self, value: &T) {
        let mut running = {
            let mut inner = self.inner.borrow_mut();
            if inner.emitting {
                tracing::warn!("Nested signal emit ignored");
                return;
            }
            inner.emitting = true;
            std::mem::take(&mut inner.listeners)
        };

        for (id, callback) in running.iter_mut() {
            let removed = self.inner.borrow().removed_while_emitting.contains(id);
            if !removed {
                callback(value);
            }
        }

        let mut inner = self.inner.borrow_mut();
        let removed = std::mem::take(&mut inner.removed_while_emitting);
        running.retain(|(id, _)| !removed.contains(id));
        running.append(&mut inner.listeners);
        inner.listeners = running;
        inner.emitting = false;
    }

    pub fn subscriber_count(&self) -> usize {
        match self.inner.try_borrow() {
            Ok(inner) => inner.listeners.len(),
            Err(_) => 0,
        }
    }
}

/// Disposer handle returned by [`Signal::subscribe`]
pub struct Subscription {
    remove: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Remove the callback now
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.remove.is_some())
            .finish()
    }
}
