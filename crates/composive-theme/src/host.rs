//! Keeps a resolved theme in sync with a window sensor.
//!
//! The host re-resolves from a single measurement snapshot whenever the
//! window size class or the theme changes, then notifies only the watchers of
//! concerns whose values changed and asks the scheduler for a render.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use composive_core::{
    RenderScheduler, Subscription, WatcherList, WindowSizeSource, WindowSizeState,
};

use crate::configuration::ResponsiveConfiguration;
use crate::locals::provide_resolved_theme;
use crate::resolver::{ResolvedTheme, ThemeConcern};
use crate::theme::ComposiveTheme;

struct ThemeHostInner {
    theme: RefCell<ComposiveTheme>,
    window: WindowSizeState,
    resolved: RefCell<Rc<ResolvedTheme>>,
    versions: RefCell<HashMap<ThemeConcern, u64>>,
    watchers: RefCell<HashMap<ThemeConcern, WatcherList<ResolvedTheme>>>,
    resolutions: Cell<u64>,
    notifying: Cell<bool>,
    refresh_pending: Cell<bool>,
    scheduler: Arc<dyn RenderScheduler>,
}

/// Clears the notifying flag when a pass ends, also when a watcher unwinds.
struct NotifyPass<'a>(&'a Cell<bool>);

impl<'a> NotifyPass<'a> {
    fn begin(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for NotifyPass<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl ThemeHostInner {
    /// Re-resolves and notifies. A refresh requested by a watcher runs after
    /// the current pass has reached every watcher, so each pass hands out
    /// the snapshot that is installed while it runs.
    fn refresh(&self) -> Vec<ThemeConcern> {
        if self.notifying.get() {
            self.refresh_pending.set(true);
            log::trace!("theme refresh requested during notification, deferred");
            return Vec::new();
        }

        let mut changed = self.resolve_and_notify();
        while self.refresh_pending.replace(false) {
            for concern in self.resolve_and_notify() {
                if !changed.contains(&concern) {
                    changed.push(concern);
                }
            }
        }

        if !changed.is_empty() {
            self.scheduler.schedule_render();
        }
        changed
    }

    fn resolve_and_notify(&self) -> Vec<ThemeConcern> {
        let window = self.window.get();
        let next = Rc::new(self.theme.borrow().resolve(window));
        self.resolutions.set(self.resolutions.get() + 1);

        let previous = self.resolved.replace(Rc::clone(&next));
        let changed = next.changed_concerns(&previous);
        if changed.is_empty() {
            return changed;
        }
        log::debug!(
            "theme re-resolved for {:?} ({:?}), changed: {:?}",
            window,
            next.device_configuration,
            changed
        );

        {
            let mut versions = self.versions.borrow_mut();
            for concern in &changed {
                *versions.entry(*concern).or_insert(0) += 1;
            }
        }

        let lists: Vec<WatcherList<ResolvedTheme>> = {
            let watchers = self.watchers.borrow();
            changed
                .iter()
                .filter_map(|concern| watchers.get(concern).cloned())
                .collect()
        };
        let _pass = NotifyPass::begin(&self.notifying);
        for list in lists {
            list.notify(&next);
        }
        changed
    }
}

pub struct ThemeHost {
    inner: Rc<ThemeHostInner>,
    _window_subscription: Subscription,
}

impl ThemeHost {
    pub fn new(
        theme: ComposiveTheme,
        source: &impl WindowSizeSource,
        scheduler: Arc<dyn RenderScheduler>,
    ) -> Self {
        let window = source.window_size_state().clone();
        let resolved = Rc::new(theme.resolve(window.get()));
        let inner = Rc::new(ThemeHostInner {
            theme: RefCell::new(theme),
            window: window.clone(),
            resolved: RefCell::new(resolved),
            versions: RefCell::new(HashMap::new()),
            watchers: RefCell::new(HashMap::new()),
            resolutions: Cell::new(1),
            notifying: Cell::new(false),
            refresh_pending: Cell::new(false),
            scheduler,
        });

        let weak: Weak<ThemeHostInner> = Rc::downgrade(&inner);
        let subscription = window.subscribe(move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.refresh();
            }
        });

        Self {
            inner,
            _window_subscription: subscription,
        }
    }

    /// The current snapshot. Hold on to it for a whole render pass.
    pub fn resolved(&self) -> Rc<ResolvedTheme> {
        Rc::clone(&self.inner.resolved.borrow())
    }

    pub fn theme(&self) -> ComposiveTheme {
        self.inner.theme.borrow().clone()
    }

    /// How many times `concern` has changed since the host was created.
    pub fn version(&self, concern: ThemeConcern) -> u64 {
        self.inner
            .versions
            .borrow()
            .get(&concern)
            .copied()
            .unwrap_or(0)
    }

    /// Number of resolutions performed, including the initial one.
    pub fn resolution_count(&self) -> u64 {
        self.inner.resolutions.get()
    }

    pub fn watch(
        &self,
        concern: ThemeConcern,
        watcher: impl Fn(&ResolvedTheme) + 'static,
    ) -> Subscription {
        let list = self
            .inner
            .watchers
            .borrow_mut()
            .entry(concern)
            .or_default()
            .clone();
        list.register(watcher)
    }

    /// Runs `content` inside the current snapshot's scope.
    pub fn render<R>(&self, content: impl FnOnce() -> R) -> R {
        let resolved = self.resolved();
        provide_resolved_theme(&resolved, content)
    }

    /// Substitutes the whole theme and re-resolves.
    ///
    /// Called from inside a watcher, the new theme is stored at once but its
    /// resolution waits for the running pass to finish, and this returns an
    /// empty list.
    pub fn set_theme(&self, theme: ComposiveTheme) -> Vec<ThemeConcern> {
        self.inner.theme.replace(theme);
        self.inner.refresh()
    }

    pub fn set_configuration(&self, configuration: ResponsiveConfiguration) -> Vec<ThemeConcern> {
        let theme = self.theme().with_configuration(configuration);
        self.set_theme(theme)
    }

    pub fn set_dark_theme(&self, dark_theme: bool) -> Vec<ThemeConcern> {
        let theme = self.theme().with_dark_theme(dark_theme);
        self.set_theme(theme)
    }
}

impl fmt::Debug for ThemeHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolved = self.resolved();
        f.debug_struct("ThemeHost")
            .field("window_size_class", &resolved.window_size_class)
            .field("theme_type", &resolved.theme_type)
            .field("dark_theme", &resolved.dark_theme)
            .field("resolutions", &self.resolution_count())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/host_tests.rs"]
mod tests;
