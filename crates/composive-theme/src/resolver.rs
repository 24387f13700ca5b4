//! Merges a configuration, a measurement and platform facts into one
//! resolved snapshot.
//!
//! Everything here is pure: the same five inputs always produce an equal
//! [`ResolvedTheme`].

use std::sync::Arc;

use composive_core::{
    DeviceConfiguration, Orientation, Platform, ThemeType, WindowSizeClass,
};
use composive_foundation::{
    CupertinoColorScheme, CupertinoTypography, Dimensions, MaterialColorScheme,
    MaterialTypography, ResponsiveFontWeights, ResponsiveSize, Shapes,
};

use crate::configuration::ResponsiveConfiguration;
use crate::selector::{select, SelectedValues};
use crate::size::responsive_size_for;

/// Precedence, highest first: the explicit argument, the platform preference
/// when the configuration enables it, the configuration default, and finally
/// the platform's recommended theme.
pub fn resolve_theme_type(
    configuration: &ResponsiveConfiguration,
    explicit_theme: Option<ThemeType>,
    platform: &Platform,
) -> ThemeType {
    if let Some(theme) = explicit_theme {
        return theme;
    }
    if configuration.enable_platform_theme_preference {
        return platform.preferred_theme();
    }
    configuration
        .default_theme_type
        .unwrap_or_else(|| platform.recommended_theme())
}

pub fn resolve_color_schemes(
    configuration: &ResponsiveConfiguration,
    dark_theme: bool,
) -> (MaterialColorScheme, CupertinoColorScheme) {
    let material = match configuration.custom_material_colors.as_deref() {
        Some(colors) => *colors.select(dark_theme),
        None if dark_theme => MaterialColorScheme::dark(),
        None => MaterialColorScheme::light(),
    };
    let cupertino = match configuration.custom_cupertino_colors.as_deref() {
        Some(colors) => *colors.select(dark_theme),
        None if dark_theme => CupertinoColorScheme::dark(),
        None => CupertinoColorScheme::light(),
    };
    (material, cupertino)
}

/// One ambient channel of a [`ResolvedTheme`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeConcern {
    WindowSizeClass,
    DeviceConfiguration,
    Orientation,
    Dimensions,
    FontWeights,
    MaterialTypography,
    CupertinoTypography,
    MaterialColors,
    CupertinoColors,
    ThemeType,
    Platform,
    Configuration,
}

impl ThemeConcern {
    pub const ALL: [ThemeConcern; 12] = [
        Self::WindowSizeClass,
        Self::DeviceConfiguration,
        Self::Orientation,
        Self::Dimensions,
        Self::FontWeights,
        Self::MaterialTypography,
        Self::CupertinoTypography,
        Self::MaterialColors,
        Self::CupertinoColors,
        Self::ThemeType,
        Self::Platform,
        Self::Configuration,
    ];
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTheme {
    pub window_size_class: WindowSizeClass,
    pub device_configuration: DeviceConfiguration,
    pub orientation: Orientation,
    pub size: ResponsiveSize,
    pub theme_type: ThemeType,
    pub dark_theme: bool,
    pub dimensions: Dimensions,
    pub font_weights: ResponsiveFontWeights,
    pub material_typography: MaterialTypography,
    pub cupertino_typography: CupertinoTypography,
    pub material_colors: MaterialColorScheme,
    pub cupertino_colors: CupertinoColorScheme,
    pub platform: Arc<Platform>,
    pub configuration: Arc<ResponsiveConfiguration>,
}

pub fn resolve_theme(
    configuration: &Arc<ResponsiveConfiguration>,
    window: WindowSizeClass,
    platform: &Arc<Platform>,
    dark_theme: bool,
    explicit_theme: Option<ThemeType>,
) -> ResolvedTheme {
    let orientation = Orientation::from_window_size_class(window);
    let size = responsive_size_for(window, orientation);
    let SelectedValues {
        dimensions,
        font_weights,
        material_typography,
        cupertino_typography,
        ..
    } = select(size, configuration, platform);
    let (material_colors, cupertino_colors) = resolve_color_schemes(configuration, dark_theme);

    ResolvedTheme {
        window_size_class: window,
        device_configuration: DeviceConfiguration::from_window_size_class(window),
        orientation,
        size,
        theme_type: resolve_theme_type(configuration, explicit_theme, platform),
        dark_theme,
        dimensions,
        font_weights,
        material_typography,
        cupertino_typography,
        material_colors,
        cupertino_colors,
        platform: Arc::clone(platform),
        configuration: Arc::clone(configuration),
    }
}

impl ResolvedTheme {
    /// Concerns whose value differs from `previous`, in [`ThemeConcern::ALL`] order.
    pub fn changed_concerns(&self, previous: &ResolvedTheme) -> Vec<ThemeConcern> {
        ThemeConcern::ALL
            .into_iter()
            .filter(|concern| !self.same_concern(previous, *concern))
            .collect()
    }

    fn same_concern(&self, other: &ResolvedTheme, concern: ThemeConcern) -> bool {
        match concern {
            ThemeConcern::WindowSizeClass => self.window_size_class == other.window_size_class,
            ThemeConcern::DeviceConfiguration => {
                self.device_configuration == other.device_configuration
            }
            ThemeConcern::Orientation => self.orientation == other.orientation,
            ThemeConcern::Dimensions => self.dimensions == other.dimensions,
            ThemeConcern::FontWeights => self.font_weights == other.font_weights,
            ThemeConcern::MaterialTypography => {
                self.material_typography == other.material_typography
            }
            ThemeConcern::CupertinoTypography => {
                self.cupertino_typography == other.cupertino_typography
            }
            ThemeConcern::MaterialColors => self.material_colors == other.material_colors,
            ThemeConcern::CupertinoColors => self.cupertino_colors == other.cupertino_colors,
            ThemeConcern::ThemeType => self.theme_type == other.theme_type,
            ThemeConcern::Platform => {
                Arc::ptr_eq(&self.platform, &other.platform) || self.platform == other.platform
            }
            ThemeConcern::Configuration => {
                Arc::ptr_eq(&self.configuration, &other.configuration)
                    || self.configuration == other.configuration
            }
        }
    }

    pub fn device_configuration_with_platform(&self) -> DeviceConfiguration {
        DeviceConfiguration::from_platform_and_window_size(&self.platform, self.window_size_class)
    }

    pub fn material_spec(&self) -> MaterialThemeSpec<'_> {
        MaterialThemeSpec {
            color_scheme: &self.material_colors,
            typography: &self.material_typography,
            shapes: Shapes::material(),
        }
    }

    pub fn cupertino_spec(&self) -> CupertinoThemeSpec<'_> {
        CupertinoThemeSpec {
            color_scheme: &self.cupertino_colors,
            typography: &self.cupertino_typography,
            shapes: Shapes::cupertino(),
        }
    }

    /// Colors, typography and shapes of the effective theme family.
    pub fn adaptive_spec(&self) -> AdaptiveThemeSpec<'_> {
        match self.theme_type {
            ThemeType::Material3 => AdaptiveThemeSpec::Material(self.material_spec()),
            ThemeType::Cupertino => AdaptiveThemeSpec::Cupertino(self.cupertino_spec()),
        }
    }
}

/// What a Material renderer needs to style its widgets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialThemeSpec<'a> {
    pub color_scheme: &'a MaterialColorScheme,
    pub typography: &'a MaterialTypography,
    pub shapes: Shapes,
}

/// What a Cupertino renderer needs to style its widgets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CupertinoThemeSpec<'a> {
    pub color_scheme: &'a CupertinoColorScheme,
    pub typography: &'a CupertinoTypography,
    pub shapes: Shapes,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AdaptiveThemeSpec<'a> {
    Material(MaterialThemeSpec<'a>),
    Cupertino(CupertinoThemeSpec<'a>),
}

impl AdaptiveThemeSpec<'_> {
    pub fn theme_type(&self) -> ThemeType {
        match self {
            AdaptiveThemeSpec::Material(_) => ThemeType::Material3,
            AdaptiveThemeSpec::Cupertino(_) => ThemeType::Cupertino,
        }
    }

    pub fn shapes(&self) -> Shapes {
        match self {
            AdaptiveThemeSpec::Material(spec) => spec.shapes,
            AdaptiveThemeSpec::Cupertino(spec) => spec.shapes,
        }
    }
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
