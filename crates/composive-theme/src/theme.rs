//! Theming entry point and the readers leaf UI uses.

use std::sync::Arc;

use composive_core::{
    DeviceConfiguration, Orientation, Platform, ThemeType, WindowSizeClass, WindowSizeSource,
};
use composive_foundation::{
    CupertinoColorScheme, CupertinoTypography, Dimensions, MaterialColorScheme,
    MaterialTypography, ResponsiveFontWeights,
};

use crate::configuration::ResponsiveConfiguration;
use crate::locals::*;
use crate::resolver::{resolve_theme, ResolvedTheme};

/// A theming scope: a configuration plus the inputs that do not come from
/// the window.
#[derive(Clone, Debug, PartialEq)]
pub struct ComposiveTheme {
    configuration: Arc<ResponsiveConfiguration>,
    platform: Arc<Platform>,
    dark_theme: bool,
    theme_type: Option<ThemeType>,
}

impl ComposiveTheme {
    pub fn new(configuration: ResponsiveConfiguration) -> Self {
        Self {
            configuration: Arc::new(configuration),
            platform: Platform::current(),
            dark_theme: false,
            theme_type: None,
        }
    }

    pub fn with_platform(mut self, platform: Arc<Platform>) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_dark_theme(mut self, dark_theme: bool) -> Self {
        self.dark_theme = dark_theme;
        self
    }

    /// Forces a theme family, overriding configuration and platform.
    pub fn with_theme_type(mut self, theme_type: Option<ThemeType>) -> Self {
        self.theme_type = theme_type;
        self
    }

    pub fn with_configuration(mut self, configuration: ResponsiveConfiguration) -> Self {
        self.configuration = Arc::new(configuration);
        self
    }

    pub fn configuration(&self) -> &Arc<ResponsiveConfiguration> {
        &self.configuration
    }

    pub fn platform(&self) -> &Arc<Platform> {
        &self.platform
    }

    pub fn dark_theme(&self) -> bool {
        self.dark_theme
    }

    pub fn theme_type(&self) -> Option<ThemeType> {
        self.theme_type
    }

    pub fn resolve(&self, window: WindowSizeClass) -> ResolvedTheme {
        resolve_theme(
            &self.configuration,
            window,
            &self.platform,
            self.dark_theme,
            self.theme_type,
        )
    }

    /// Resolves against `window` and runs `content` inside the resulting scope.
    pub fn render<R>(&self, window: WindowSizeClass, content: impl FnOnce() -> R) -> R {
        let resolved = self.resolve(window);
        provide_resolved_theme(&resolved, content)
    }

    pub fn render_with_source<R>(
        &self,
        source: &impl WindowSizeSource,
        content: impl FnOnce() -> R,
    ) -> R {
        self.render(source.window_size_class(), content)
    }
}

impl Default for ComposiveTheme {
    fn default() -> Self {
        Self::new(ResponsiveConfiguration::default())
    }
}

/// Readers for the ambient theme values.
///
/// Typography, font weights, colors, theme type and the window size class
/// panic outside a theme scope; see [`crate::locals`] for fallible reads.
pub struct AppTheme;

impl AppTheme {
    pub fn dimensions() -> Dimensions {
        LOCAL_DIMENSIONS.current()
    }

    pub fn orientation() -> Orientation {
        LOCAL_ORIENTATION.current()
    }

    pub fn font_weights() -> ResponsiveFontWeights {
        LOCAL_FONT_WEIGHTS.current()
    }

    pub fn material_typography() -> MaterialTypography {
        LOCAL_MATERIAL_TYPOGRAPHY.current()
    }

    pub fn cupertino_typography() -> CupertinoTypography {
        LOCAL_CUPERTINO_TYPOGRAPHY.current()
    }

    pub fn material_colors() -> MaterialColorScheme {
        LOCAL_MATERIAL_COLORS.current()
    }

    pub fn cupertino_colors() -> CupertinoColorScheme {
        LOCAL_CUPERTINO_COLORS.current()
    }

    pub fn theme_type() -> ThemeType {
        LOCAL_THEME_TYPE.current()
    }

    pub fn platform() -> Arc<Platform> {
        LOCAL_PLATFORM.current()
    }

    pub fn configuration() -> Arc<ResponsiveConfiguration> {
        LOCAL_RESPONSIVE_CONFIGURATION.current()
    }

    pub fn window_size_class() -> WindowSizeClass {
        LOCAL_WINDOW_SIZE_CLASS.current()
    }

    pub fn device_configuration() -> DeviceConfiguration {
        DeviceConfiguration::from_window_size_class(Self::window_size_class())
    }

    pub fn device_configuration_with_platform() -> DeviceConfiguration {
        DeviceConfiguration::from_platform_and_window_size(
            &Self::platform(),
            Self::window_size_class(),
        )
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
