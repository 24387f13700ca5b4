//! Responsive theme resolution for Composive
//!
//! A [`ComposiveTheme`] turns a window size class into a [`ResolvedTheme`]:
//! the dimension, font weight, typography and color bundles for that window,
//! plus the effective theme family. [`provide_resolved_theme`] exposes the
//! bundle to a call tree through one ambient channel per concern, and
//! [`ThemeHost`] keeps it current while the window changes.

pub mod configuration;
pub mod host;
pub mod locals;
pub mod resolver;
pub mod selector;
pub mod size;
pub mod theme;

pub use configuration::*;
pub use host::ThemeHost;
pub use locals::{provide_resolved_theme, provide_window_size_class};
pub use resolver::{
    resolve_color_schemes, resolve_theme, resolve_theme_type, AdaptiveThemeSpec,
    CupertinoThemeSpec, MaterialThemeSpec, ResolvedTheme, ThemeConcern,
};
pub use selector::{scale_dimensions, select, SelectedValues};
pub use size::{responsive_size_for, responsive_size_of};
pub use theme::{AppTheme, ComposiveTheme};

pub mod prelude {
    pub use crate::configuration::ResponsiveConfiguration;
    pub use crate::host::ThemeHost;
    pub use crate::resolver::{ResolvedTheme, ThemeConcern};
    pub use crate::theme::{AppTheme, ComposiveTheme};
    pub use composive_core::prelude::*;
    pub use composive_foundation::prelude::*;
}
