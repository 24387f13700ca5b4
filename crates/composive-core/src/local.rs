//! Ambient values scoped to a call tree.
//!
//! A [`Local`] names one concern. [`LocalProvider`] makes a set of values
//! visible to everything its `content` closure calls, innermost provider
//! winning. Reads that find no provider fall back to the local's default, or
//! fail with [`LocalError::NotProvided`] when the local has none.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

type LocalKey = usize;

static NEXT_LOCAL_KEY: AtomicUsize = AtomicUsize::new(1);

fn next_local_key() -> LocalKey {
    NEXT_LOCAL_KEY.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocalError {
    #[error("{name} not provided")]
    NotProvided { name: &'static str },
    #[error("{name} holds a value of an unexpected type")]
    TypeMismatch { name: &'static str },
}

#[derive(Default)]
struct LocalContext {
    values: HashMap<LocalKey, Rc<dyn Any>>,
}

thread_local! {
    static LOCAL_STACK: RefCell<Vec<LocalContext>> = const { RefCell::new(Vec::new()) };
}

/// Pops the frame pushed by [`LocalProvider`], also when `content` unwinds.
struct LocalFrameGuard;

impl Drop for LocalFrameGuard {
    fn drop(&mut self) {
        LOCAL_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

pub struct ProvidedValue {
    key: LocalKey,
    name: &'static str,
    value: Rc<dyn Any>,
}

impl ProvidedValue {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for ProvidedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvidedValue")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[allow(non_snake_case)]
pub fn LocalProvider<R>(
    values: impl IntoIterator<Item = ProvidedValue>,
    content: impl FnOnce() -> R,
) -> R {
    let mut context = LocalContext::default();
    for provided in values {
        context.values.insert(provided.key, provided.value);
    }
    if context.values.is_empty() {
        return content();
    }
    LOCAL_STACK.with(|stack| stack.borrow_mut().push(context));
    let _guard = LocalFrameGuard;
    content()
}

/// Key for one ambient concern. Declared as a `static`.
pub struct Local<T: 'static> {
    name: &'static str,
    key: OnceLock<LocalKey>,
    default: Option<fn() -> T>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Clone + 'static> Local<T> {
    /// A local whose reads outside any provider return `default()`.
    pub const fn with_default(name: &'static str, default: fn() -> T) -> Self {
        Self {
            name,
            key: OnceLock::new(),
            default: Some(default),
            _marker: PhantomData,
        }
    }

    /// A local that must be provided before it is read.
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            key: OnceLock::new(),
            default: None,
            _marker: PhantomData,
        }
    }

    fn key(&self) -> LocalKey {
        *self.key.get_or_init(next_local_key)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn provides(&self, value: T) -> ProvidedValue {
        ProvidedValue {
            key: self.key(),
            name: self.name,
            value: Rc::new(value),
        }
    }

    pub fn default_value(&self) -> Option<T> {
        self.default.map(|default| default())
    }

    pub fn is_provided(&self) -> bool {
        self.lookup().is_some()
    }

    fn lookup(&self) -> Option<Rc<dyn Any>> {
        let key = self.key();
        LOCAL_STACK.with(|stack| {
            stack
                .borrow()
                .iter()
                .rev()
                .find_map(|context| context.values.get(&key).cloned())
        })
    }

    pub fn try_current(&self) -> Result<T, LocalError> {
        match self.lookup() {
            Some(entry) => entry
                .downcast::<T>()
                .map(|value| (*value).clone())
                .map_err(|_| LocalError::TypeMismatch { name: self.name }),
            None => self
                .default_value()
                .ok_or(LocalError::NotProvided { name: self.name }),
        }
    }

    /// Panics with the [`LocalError`] message when the value is missing.
    pub fn current(&self) -> T {
        match self.try_current() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: 'static> fmt::Debug for Local<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Local")
            .field("name", &self.name)
            .field("has_default", &self.default.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/local_tests.rs"]
mod tests;
