use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type WatcherId = u64;
type Watcher<T> = Rc<dyn Fn(&T)>;

struct WatcherListInner<T> {
    watchers: RefCell<Vec<(WatcherId, Watcher<T>)>>,
    next_id: Cell<WatcherId>,
}

/// Callbacks interested in a value of type `T`. Clones share one list.
pub struct WatcherList<T: 'static> {
    inner: Rc<WatcherListInner<T>>,
}

impl<T: 'static> WatcherList<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(WatcherListInner {
                watchers: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
            }),
        }
    }

    pub fn register(&self, watcher: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .watchers
            .borrow_mut()
            .push((id, Rc::new(watcher)));

        let list: Weak<WatcherListInner<T>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(list) = list.upgrade() {
                list.watchers.borrow_mut().retain(|(other, _)| *other != id);
            }
        })
    }

    pub fn len(&self) -> usize {
        self.inner.watchers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Watchers may register or cancel while being notified; the set notified
    /// is the one present when the call started.
    pub fn notify(&self, value: &T) {
        let watchers: Vec<Watcher<T>> = self
            .inner
            .watchers
            .borrow()
            .iter()
            .map(|(_, watcher)| Rc::clone(watcher))
            .collect();
        for watcher in watchers {
            watcher(value);
        }
    }
}

impl<T: 'static> Clone for WatcherList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Default for WatcherList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> fmt::Debug for WatcherList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatcherList")
            .field("len", &self.len())
            .finish()
    }
}

/// Keeps a watcher registered until dropped or cancelled.
#[must_use = "dropping a Subscription unregisters its watcher"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn inactive() -> Self {
        Self { cancel: None }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
