//! Feeds winit window events into a [`WindowSizeState`].

use composive_core::{WindowSizeClass, WindowSizeSource, WindowSizeState};
use composive_ui_graphics::{Dp, DpSize};
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::window::Window;

pub struct DesktopWinitWindowSize {
    scale_factor: f64,
    physical_size: PhysicalSize<u32>,
    state: WindowSizeState,
}

impl DesktopWinitWindowSize {
    pub fn new(physical_size: PhysicalSize<u32>, scale_factor: f64) -> Self {
        let window = Self::classify(physical_size, scale_factor);
        Self {
            scale_factor,
            physical_size,
            state: WindowSizeState::new(window),
        }
    }

    pub fn from_window(window: &Window) -> Self {
        Self::new(window.inner_size(), window.scale_factor())
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn logical_size(&self) -> DpSize {
        Self::to_dp(self.physical_size, self.scale_factor)
    }

    /// Returns whether the size class changed.
    pub fn set_scale_factor(&mut self, factor: f64) -> bool {
        self.scale_factor = factor;
        self.publish()
    }

    /// Returns whether the size class changed.
    pub fn resize(&mut self, physical_size: PhysicalSize<u32>) -> bool {
        self.physical_size = physical_size;
        self.publish()
    }

    /// Handles the events that affect window size; ignores everything else.
    /// Returns whether the size class changed.
    pub fn handle_window_event(&mut self, event: &WindowEvent<'_>) -> bool {
        match event {
            WindowEvent::Resized(size) => self.resize(*size),
            WindowEvent::ScaleFactorChanged {
                scale_factor,
                new_inner_size,
            } => {
                self.scale_factor = *scale_factor;
                self.physical_size = **new_inner_size;
                self.publish()
            }
            _ => false,
        }
    }

    fn publish(&self) -> bool {
        let window = Self::classify(self.physical_size, self.scale_factor);
        let changed = self.state.set(window);
        if changed {
            log::debug!(
                "desktop window {:?} at {}x classified as {:?}",
                self.physical_size,
                self.scale_factor,
                window
            );
        }
        changed
    }

    fn to_dp(size: PhysicalSize<u32>, scale_factor: f64) -> DpSize {
        let logical = size.to_logical::<f64>(scale_factor);
        DpSize::new(Dp(logical.width as f32), Dp(logical.height as f32))
    }

    fn classify(size: PhysicalSize<u32>, scale_factor: f64) -> WindowSizeClass {
        WindowSizeClass::calculate_from_size(Self::to_dp(size, scale_factor))
    }
}

impl WindowSizeSource for DesktopWinitWindowSize {
    fn window_size_state(&self) -> &WindowSizeState {
        &self.state
    }
}

impl Default for DesktopWinitWindowSize {
    fn default() -> Self {
        Self::new(PhysicalSize::new(1280, 800), 1.0)
    }
}
