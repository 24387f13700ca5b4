//! One ambient channel per concern.
//!
//! Dimensions, orientation, platform and configuration have defaults so
//! previews and tests can read them without a theme. The remaining channels
//! must be provided by a theme scope; reading them outside one panics with
//! the channel name.

use std::sync::Arc;

use composive_core::{
    Local, LocalProvider, Orientation, Platform, ThemeType, WindowSizeClass,
};
use composive_foundation::{
    CupertinoColorScheme, CupertinoTypography, Dimensions, MaterialColorScheme,
    MaterialTypography, ResponsiveFontWeights,
};

use crate::configuration::ResponsiveConfiguration;
use crate::resolver::ResolvedTheme;

pub static LOCAL_WINDOW_SIZE_CLASS: Local<WindowSizeClass> = Local::required("WindowSizeClass");
pub static LOCAL_DIMENSIONS: Local<Dimensions> = Local::with_default("Dimensions", Dimensions::small);
pub static LOCAL_ORIENTATION: Local<Orientation> =
    Local::with_default("Orientation", Orientation::default);
pub static LOCAL_FONT_WEIGHTS: Local<ResponsiveFontWeights> = Local::required("FontWeights");
pub static LOCAL_MATERIAL_TYPOGRAPHY: Local<MaterialTypography> =
    Local::required("MaterialTypography");
pub static LOCAL_CUPERTINO_TYPOGRAPHY: Local<CupertinoTypography> =
    Local::required("CupertinoTypography");
pub static LOCAL_MATERIAL_COLORS: Local<MaterialColorScheme> = Local::required("MaterialColors");
pub static LOCAL_CUPERTINO_COLORS: Local<CupertinoColorScheme> =
    Local::required("CupertinoColors");
pub static LOCAL_THEME_TYPE: Local<ThemeType> = Local::required("ThemeType");
pub static LOCAL_PLATFORM: Local<Arc<Platform>> = Local::with_default("Platform", Platform::current);
pub static LOCAL_RESPONSIVE_CONFIGURATION: Local<Arc<ResponsiveConfiguration>> =
    Local::with_default("ResponsiveConfiguration", default_configuration);

fn default_configuration() -> Arc<ResponsiveConfiguration> {
    Arc::new(ResponsiveConfiguration::default())
}

/// Makes every channel of `resolved` visible to `content` at once.
pub fn provide_resolved_theme<R>(resolved: &ResolvedTheme, content: impl FnOnce() -> R) -> R {
    LocalProvider(
        [
            LOCAL_WINDOW_SIZE_CLASS.provides(resolved.window_size_class),
            LOCAL_DIMENSIONS.provides(resolved.dimensions.clone()),
            LOCAL_ORIENTATION.provides(resolved.orientation),
            LOCAL_FONT_WEIGHTS.provides(resolved.font_weights),
            LOCAL_MATERIAL_TYPOGRAPHY.provides(resolved.material_typography.clone()),
            LOCAL_CUPERTINO_TYPOGRAPHY.provides(resolved.cupertino_typography.clone()),
            LOCAL_MATERIAL_COLORS.provides(resolved.material_colors),
            LOCAL_CUPERTINO_COLORS.provides(resolved.cupertino_colors),
            LOCAL_THEME_TYPE.provides(resolved.theme_type),
            LOCAL_PLATFORM.provides(Arc::clone(&resolved.platform)),
            LOCAL_RESPONSIVE_CONFIGURATION.provides(Arc::clone(&resolved.configuration)),
        ],
        content,
    )
}

/// Makes a window size class visible to `content` without resolving a theme.
pub fn provide_window_size_class<R>(window: WindowSizeClass, content: impl FnOnce() -> R) -> R {
    LocalProvider([LOCAL_WINDOW_SIZE_CLASS.provides(window)], content)
}

#[cfg(test)]
#[path = "tests/locals_tests.rs"]
mod tests;
