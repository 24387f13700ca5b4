#![doc = r"Core pieces of the Composive responsive engine: window size classes, device classification, platform facts and ambient locals."]

pub mod device_configuration;
pub mod local;
pub mod measurement;
pub mod orientation;
pub mod platform;
pub mod scheduler;
pub mod watchers;
pub mod window_size;

pub use device_configuration::DeviceConfiguration;
pub use local::{Local, LocalError, LocalProvider, ProvidedValue};
pub use measurement::{WindowSizeSource, WindowSizeState};
pub use orientation::Orientation;
pub use platform::{Platform, PlatformType, ThemeType};
pub use scheduler::{NoopRenderScheduler, RenderScheduler};
pub use watchers::{Subscription, WatcherList};
pub use window_size::{WindowHeightSizeClass, WindowMetrics, WindowSizeClass, WindowWidthSizeClass};

pub mod prelude {
    pub use crate::device_configuration::DeviceConfiguration;
    pub use crate::orientation::Orientation;
    pub use crate::platform::{Platform, PlatformType, ThemeType};
    pub use crate::window_size::{WindowHeightSizeClass, WindowSizeClass, WindowWidthSizeClass};
}
