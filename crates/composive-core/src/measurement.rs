//! Window size measurement shared between a platform sensor and its readers.
//!
//! Sensors own a [`WindowSizeState`] and publish into it; the theming layer
//! subscribes and re-resolves when the size class actually changes.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::watchers::{Subscription, WatcherList};
use crate::window_size::WindowSizeClass;

struct WindowSizeStateInner {
    current: Cell<WindowSizeClass>,
    watchers: WatcherList<WindowSizeClass>,
}

#[derive(Clone)]
pub struct WindowSizeState {
    inner: Rc<WindowSizeStateInner>,
}

impl WindowSizeState {
    pub fn new(initial: WindowSizeClass) -> Self {
        Self {
            inner: Rc::new(WindowSizeStateInner {
                current: Cell::new(initial),
                watchers: WatcherList::new(),
            }),
        }
    }

    pub fn get(&self) -> WindowSizeClass {
        self.inner.current.get()
    }

    /// Publishes a new measurement. Watchers only hear about real changes;
    /// returns whether one happened.
    pub fn set(&self, window: WindowSizeClass) -> bool {
        if self.inner.current.get() == window {
            return false;
        }
        self.inner.current.set(window);
        log::trace!("window size class changed to {window:?}");
        self.inner.watchers.notify(&window);
        true
    }

    pub fn subscribe(&self, watcher: impl Fn(WindowSizeClass) + 'static) -> Subscription {
        self.inner.watchers.register(move |window| watcher(*window))
    }

    pub fn watcher_count(&self) -> usize {
        self.inner.watchers.len()
    }
}

impl PartialEq for WindowSizeState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for WindowSizeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowSizeState")
            .field("current", &self.get())
            .field("watchers", &self.watcher_count())
            .finish()
    }
}

/// A per-target window measurement sensor.
pub trait WindowSizeSource {
    fn window_size_state(&self) -> &WindowSizeState;

    fn window_size_class(&self) -> WindowSizeClass {
        self.window_size_state().get()
    }
}

impl WindowSizeSource for WindowSizeState {
    fn window_size_state(&self) -> &WindowSizeState {
        self
    }
}

#[cfg(test)]
#[path = "tests/measurement_tests.rs"]
mod tests;
