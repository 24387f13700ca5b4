//! Render scheduling for hosts built on `std` threads and event loops.
//!
//! A theme host calls [`composive_core::RenderScheduler::schedule_render`]
//! whenever a resolved value changes. [`StdScheduler`] folds those calls into
//! one pending flag that the event loop takes before redrawing. Loops that
//! block while idle can install a waker to be nudged out of their wait.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use composive_core::RenderScheduler;

type RenderWaker = Arc<dyn Fn() + Send + Sync + 'static>;

/// Pending-render flag shared between theme hosts and the event loop.
pub struct StdScheduler {
    render_requested: AtomicBool,
    requests: AtomicU64,
    render_waker: RwLock<Option<RenderWaker>>,
}

impl StdScheduler {
    pub fn new() -> Self {
        Self {
            render_requested: AtomicBool::new(false),
            requests: AtomicU64::new(0),
            render_waker: RwLock::new(None),
        }
    }

    /// Clears the pending flag, returning whether a redraw is owed.
    pub fn take_render_request(&self) -> bool {
        self.render_requested.swap(false, Ordering::SeqCst)
    }

    /// Every `schedule_render` call so far, including ones folded into a
    /// flag that was already set.
    pub fn request_count(&self) -> u64 {
        self.requests.load(Ordering::SeqCst)
    }

    /// Installs the callback that wakes a sleeping event loop. It runs on
    /// the thread that scheduled the render, once per request.
    pub fn set_render_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        *self.render_waker.write().unwrap() = Some(Arc::new(waker));
    }

    /// Removes the wake callback; requests still set the pending flag.
    pub fn clear_render_waker(&self) {
        *self.render_waker.write().unwrap() = None;
    }

    fn wake(&self) {
        let waker = self.render_waker.read().unwrap().clone();
        match waker {
            Some(waker) => waker(),
            None => log::trace!("render requested with no waker registered"),
        }
    }
}

impl Default for StdScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StdScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdScheduler")
            .field(
                "render_requested",
                &self.render_requested.load(Ordering::SeqCst),
            )
            .field("requests", &self.request_count())
            .finish()
    }
}

impl RenderScheduler for StdScheduler {
    fn schedule_render(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.render_requested.store(true, Ordering::SeqCst);
        self.wake();
    }
}
