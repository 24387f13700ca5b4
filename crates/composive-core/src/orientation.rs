use crate::window_size::{WindowHeightSizeClass, WindowSizeClass, WindowWidthSizeClass};

/// Logical orientation, derived from the raw measurement rather than from
/// [`crate::DeviceConfiguration`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
    /// Never produced by [`Orientation::from_size_classes`]; available for manual use.
    Square,
}

impl Orientation {
    pub fn from_window_size_class(window: WindowSizeClass) -> Self {
        Self::from_size_classes(window.width, window.height)
    }

    pub fn from_size_classes(width: WindowWidthSizeClass, height: WindowHeightSizeClass) -> Self {
        match (width, height) {
            (WindowWidthSizeClass::Expanded, _) => Orientation::Landscape,
            (WindowWidthSizeClass::Medium, WindowHeightSizeClass::Compact) => {
                Orientation::Landscape
            }
            _ => Orientation::Portrait,
        }
    }

    pub fn is_portrait(self) -> bool {
        self == Orientation::Portrait
    }

    pub fn is_landscape(self) -> bool {
        self == Orientation::Landscape
    }
}
