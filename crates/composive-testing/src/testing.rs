use std::sync::atomic::{AtomicUsize, Ordering};

use composive_core::{
    RenderScheduler, WindowHeightSizeClass, WindowSizeClass, WindowSizeSource, WindowSizeState,
    WindowWidthSizeClass,
};
use composive_ui_graphics::{Dp, DpSize};

/// A window sensor driven by the test instead of a platform.
#[derive(Debug, Clone)]
pub struct TestWindow {
    size: DpSize,
    state: WindowSizeState,
}

impl TestWindow {
    pub fn new(width: f32, height: f32) -> Self {
        let size = DpSize::new(Dp(width), Dp(height));
        Self {
            size,
            state: WindowSizeState::new(WindowSizeClass::calculate_from_size(size)),
        }
    }

    /// 411x891, a typical phone held upright.
    pub fn phone() -> Self {
        Self::new(411.0, 891.0)
    }

    /// 800x1280, a tablet held upright.
    pub fn tablet() -> Self {
        Self::new(800.0, 1280.0)
    }

    pub fn desktop() -> Self {
        Self::new(1440.0, 960.0)
    }

    pub fn size(&self) -> DpSize {
        self.size
    }

    /// Returns whether the size class changed.
    pub fn resize_dp(&mut self, width: f32, height: f32) -> bool {
        self.size = DpSize::new(Dp(width), Dp(height));
        self.state.set(WindowSizeClass::calculate_from_size(self.size))
    }

    pub fn set_size_classes(
        &self,
        width: WindowWidthSizeClass,
        height: WindowHeightSizeClass,
    ) -> bool {
        self.state.set(WindowSizeClass::new(width, height))
    }
}

impl WindowSizeSource for TestWindow {
    fn window_size_state(&self) -> &WindowSizeState {
        &self.state
    }
}

/// Counts render requests.
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    requests: AtomicUsize,
}

impl RecordingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Returns the number of requests since the last call.
    pub fn take_requests(&self) -> usize {
        self.requests.swap(0, Ordering::SeqCst)
    }
}

impl RenderScheduler for RecordingScheduler {
    fn schedule_render(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

/// Every width/height size class pair.
pub fn all_size_classes() -> Vec<WindowSizeClass> {
    WindowSizeClass::all().collect()
}

#[track_caller]
pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}
