//! Fixed platform descriptors, independent of the host running the tests.

use std::sync::Arc;

use composive_core::Platform;

pub fn android() -> Arc<Platform> {
    Arc::new(Platform::android("14"))
}

pub fn ios() -> Arc<Platform> {
    Arc::new(Platform::ios("17.4"))
}

pub fn desktop() -> Arc<Platform> {
    Arc::new(Platform::desktop("Linux", "6.8"))
}

pub fn web() -> Arc<Platform> {
    Arc::new(Platform::web())
}
