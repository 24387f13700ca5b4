//! Breakpoint classification of a window into one of five layout categories.

use crate::platform::{Platform, PlatformType};
use crate::window_size::{WindowHeightSizeClass, WindowSizeClass, WindowWidthSizeClass};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceConfiguration {
    MobilePortrait,
    MobileLandscape,
    TabletPortrait,
    TabletLandscape,
    Desktop,
}

impl DeviceConfiguration {
    pub const ALL: [DeviceConfiguration; 5] = [
        Self::MobilePortrait,
        Self::MobileLandscape,
        Self::TabletPortrait,
        Self::TabletLandscape,
        Self::Desktop,
    ];

    pub fn is_mobile(self) -> bool {
        matches!(self, Self::MobilePortrait | Self::MobileLandscape)
    }

    pub fn is_tablet(self) -> bool {
        matches!(self, Self::TabletPortrait | Self::TabletLandscape)
    }

    pub fn is_desktop(self) -> bool {
        self == Self::Desktop
    }

    /// Desktop counts as portrait here. [`crate::Orientation`] may still
    /// report the same window as landscape.
    pub fn is_portrait(self) -> bool {
        matches!(
            self,
            Self::MobilePortrait | Self::TabletPortrait | Self::Desktop
        )
    }

    pub fn is_landscape(self) -> bool {
        matches!(self, Self::MobileLandscape | Self::TabletLandscape)
    }

    pub fn recommended_columns(self) -> u32 {
        match self {
            Self::MobilePortrait => 1,
            Self::MobileLandscape => 2,
            Self::TabletPortrait => 2,
            Self::TabletLandscape => 3,
            Self::Desktop => 4,
        }
    }

    pub fn from_window_size_class(window: WindowSizeClass) -> Self {
        Self::from_size_classes(window.width, window.height)
    }

    /// Ordered rules, first match wins. The trailing width-only arms restate
    /// the earlier pairs and stay as a net for any bucket added later.
    #[allow(unreachable_patterns)]
    pub fn from_size_classes(
        width: WindowWidthSizeClass,
        height: WindowHeightSizeClass,
    ) -> Self {
        use WindowHeightSizeClass as H;
        use WindowWidthSizeClass as W;

        match (width, height) {
            (W::Expanded, H::Expanded) => Self::Desktop,
            (W::Compact, H::Compact) => Self::MobileLandscape,
            (W::Compact, _) => Self::MobilePortrait,
            (W::Medium, H::Compact) => Self::MobileLandscape,
            (W::Medium, H::Expanded) => Self::TabletPortrait,
            (W::Expanded, H::Medium) => Self::TabletLandscape,
            (W::Medium, H::Medium) => Self::TabletPortrait,
            (W::Expanded, H::Compact) => Self::TabletLandscape,
            (W::Expanded, h) => {
                if h == H::Expanded {
                    Self::Desktop
                } else {
                    Self::TabletLandscape
                }
            }
            (W::Medium, h) => {
                if h == H::Compact {
                    Self::MobileLandscape
                } else {
                    Self::TabletPortrait
                }
            }
            _ => Self::Desktop,
        }
    }

    /// Desktop platforms stay responsive to a shrunk window: only an expanded
    /// width yields [`DeviceConfiguration::Desktop`]. Other platforms use
    /// [`DeviceConfiguration::from_window_size_class`].
    pub fn from_platform_and_window_size(platform: &Platform, window: WindowSizeClass) -> Self {
        if platform.platform_type() != PlatformType::Desktop {
            return Self::from_window_size_class(window);
        }

        let compact_height = window.height == WindowHeightSizeClass::Compact;
        match window.width {
            WindowWidthSizeClass::Compact if compact_height => Self::MobileLandscape,
            WindowWidthSizeClass::Compact => Self::MobilePortrait,
            WindowWidthSizeClass::Medium if compact_height => Self::MobileLandscape,
            WindowWidthSizeClass::Medium => Self::TabletPortrait,
            WindowWidthSizeClass::Expanded => Self::Desktop,
        }
    }
}

#[cfg(test)]
#[path = "tests/device_configuration_tests.rs"]
mod tests;
