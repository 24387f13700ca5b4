//! Three-way window size buckets reported independently for width and height.
//!
//! Thresholds follow the Material window size class guidance.

use composive_ui_graphics::{Dp, DpSize};

const WIDTH_MEDIUM_MIN: f32 = 600.0;
const WIDTH_EXPANDED_MIN: f32 = 840.0;
const HEIGHT_MEDIUM_MIN: f32 = 480.0;
const HEIGHT_EXPANDED_MIN: f32 = 900.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowWidthSizeClass {
    Compact,
    Medium,
    Expanded,
}

impl WindowWidthSizeClass {
    pub const ALL: [WindowWidthSizeClass; 3] = [Self::Compact, Self::Medium, Self::Expanded];

    pub fn from_width(width: Dp) -> Self {
        if width.0 < WIDTH_MEDIUM_MIN {
            Self::Compact
        } else if width.0 < WIDTH_EXPANDED_MIN {
            Self::Medium
        } else {
            Self::Expanded
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowHeightSizeClass {
    Compact,
    Medium,
    Expanded,
}

impl WindowHeightSizeClass {
    pub const ALL: [WindowHeightSizeClass; 3] = [Self::Compact, Self::Medium, Self::Expanded];

    pub fn from_height(height: Dp) -> Self {
        if height.0 < HEIGHT_MEDIUM_MIN {
            Self::Compact
        } else if height.0 < HEIGHT_EXPANDED_MIN {
            Self::Medium
        } else {
            Self::Expanded
        }
    }
}

/// The raw measurement every classification in this crate starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowSizeClass {
    pub width: WindowWidthSizeClass,
    pub height: WindowHeightSizeClass,
}

impl WindowSizeClass {
    pub const fn new(width: WindowWidthSizeClass, height: WindowHeightSizeClass) -> Self {
        Self { width, height }
    }

    pub fn calculate_from_size(size: DpSize) -> Self {
        Self {
            width: WindowWidthSizeClass::from_width(size.width),
            height: WindowHeightSizeClass::from_height(size.height),
        }
    }

    /// Every width/height combination, width-major.
    pub fn all() -> impl Iterator<Item = WindowSizeClass> {
        WindowWidthSizeClass::ALL.into_iter().flat_map(|width| {
            WindowHeightSizeClass::ALL
                .into_iter()
                .map(move |height| WindowSizeClass::new(width, height))
        })
    }
}

/// Physical window bounds as reported by a host window or screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowMetrics {
    pub width_px: f32,
    pub height_px: f32,
    pub density: f32,
}

impl WindowMetrics {
    pub fn new(width_px: f32, height_px: f32, density: f32) -> Self {
        Self {
            width_px,
            height_px,
            density,
        }
    }

    pub fn size_dp(&self) -> DpSize {
        DpSize::new(
            Dp::from_px(self.width_px, self.density),
            Dp::from_px(self.height_px, self.density),
        )
    }

    pub fn size_class(&self) -> WindowSizeClass {
        WindowSizeClass::calculate_from_size(self.size_dp())
    }
}

#[cfg(test)]
#[path = "tests/window_size_tests.rs"]
mod tests;
