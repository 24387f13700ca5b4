//! Mapping from window size classes to the four responsive tiers.

use composive_core::{Orientation, WindowHeightSizeClass, WindowSizeClass, WindowWidthSizeClass};
use composive_foundation::ResponsiveSize;

/// A size class bucket seen through the tier mapping. Both axes share it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeBucket {
    Compact,
    Medium,
    Expanded,
}

impl From<WindowWidthSizeClass> for SizeBucket {
    fn from(width: WindowWidthSizeClass) -> Self {
        match width {
            WindowWidthSizeClass::Compact => SizeBucket::Compact,
            WindowWidthSizeClass::Medium => SizeBucket::Medium,
            WindowWidthSizeClass::Expanded => SizeBucket::Expanded,
        }
    }
}

impl From<WindowHeightSizeClass> for SizeBucket {
    fn from(height: WindowHeightSizeClass) -> Self {
        match height {
            WindowHeightSizeClass::Compact => SizeBucket::Compact,
            WindowHeightSizeClass::Medium => SizeBucket::Medium,
            WindowHeightSizeClass::Expanded => SizeBucket::Expanded,
        }
    }
}

/// Shifts a bucket one tier down: Compact is `Small`, Expanded is `Medium`.
///
/// The `Large` tier is reserved for a bucket wider than Expanded; none of
/// the current size classes map onto it.
pub fn responsive_size_of(bucket: impl Into<SizeBucket>) -> ResponsiveSize {
    match bucket.into() {
        SizeBucket::Compact => ResponsiveSize::Small,
        SizeBucket::Medium => ResponsiveSize::Compact,
        SizeBucket::Expanded => ResponsiveSize::Medium,
    }
}

/// Portrait windows are sized by width, every other orientation by height.
pub fn responsive_size_for(window: WindowSizeClass, orientation: Orientation) -> ResponsiveSize {
    match orientation {
        Orientation::Portrait => responsive_size_of(window.width),
        Orientation::Landscape | Orientation::Square => responsive_size_of(window.height),
    }
}
