//! The user-facing request object for a theming scope.
//!
//! Every override is optional and independent; a missing override falls back
//! to the compiled table for that concern. Values are immutable once built:
//! each `with_*` call consumes the configuration and returns a new one.

use std::sync::Arc;

use composive_core::ThemeType;
use composive_foundation::{
    ColorSchemePair, CupertinoColorScheme, CupertinoFontResources, CupertinoTypography, Dimensions,
    MaterialColorScheme, MaterialFontResources, MaterialTypography, ResponsiveFontWeights, TierSet,
};
use composive_ui_graphics::FontFamily;

pub type ResponsiveDimensions = TierSet<Dimensions>;
pub type ResponsiveFontWeightTiers = TierSet<ResponsiveFontWeights>;
pub type ResponsiveMaterialTypography = TierSet<MaterialTypography>;
pub type ResponsiveCupertinoTypography = TierSet<CupertinoTypography>;
pub type ResponsiveMaterialColors = ColorSchemePair<MaterialColorScheme>;
pub type ResponsiveCupertinoColors = ColorSchemePair<CupertinoColorScheme>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponsiveConfiguration {
    pub custom_dimensions: Option<Arc<ResponsiveDimensions>>,
    pub custom_font_weights: Option<Arc<ResponsiveFontWeightTiers>>,
    pub custom_material_fonts: Option<Arc<MaterialFontResources>>,
    pub custom_cupertino_fonts: Option<Arc<CupertinoFontResources>>,
    /// Takes precedence over `custom_material_fonts`.
    pub custom_material_typography: Option<Arc<ResponsiveMaterialTypography>>,
    /// Takes precedence over `custom_cupertino_fonts`.
    pub custom_cupertino_typography: Option<Arc<ResponsiveCupertinoTypography>>,
    pub custom_material_colors: Option<Arc<ResponsiveMaterialColors>>,
    pub custom_cupertino_colors: Option<Arc<ResponsiveCupertinoColors>>,
    /// `None` defers to the platform's recommended theme.
    pub default_theme_type: Option<ThemeType>,
    pub enable_platform_theme_preference: bool,
}

impl ResponsiveConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn material() -> Self {
        Self::default().with_material_theme()
    }

    pub fn cupertino() -> Self {
        Self::default().with_cupertino_theme()
    }

    /// Lets the platform's preferred theme win over `default_theme_type`.
    pub fn platform_adaptive() -> Self {
        Self::default().with_platform_theme_adaptation(true)
    }

    pub fn with_material_theme(mut self) -> Self {
        self.default_theme_type = Some(ThemeType::Material3);
        self
    }

    pub fn with_cupertino_theme(mut self) -> Self {
        self.default_theme_type = Some(ThemeType::Cupertino);
        self
    }

    pub fn with_platform_default_theme(mut self) -> Self {
        self.default_theme_type = None;
        self
    }

    pub fn with_default_theme_type(mut self, theme: ThemeType) -> Self {
        self.default_theme_type = Some(theme);
        self
    }

    pub fn with_platform_theme_adaptation(mut self, enabled: bool) -> Self {
        self.enable_platform_theme_preference = enabled;
        self
    }

    pub fn with_material_fonts(mut self, fonts: MaterialFontResources) -> Self {
        self.custom_material_fonts = Some(Arc::new(fonts));
        self
    }

    pub fn with_cupertino_fonts(mut self, fonts: CupertinoFontResources) -> Self {
        self.custom_cupertino_fonts = Some(Arc::new(fonts));
        self
    }

    pub fn with_uniform_material_font(self, font: FontFamily) -> Self {
        self.with_material_fonts(MaterialFontResources::uniform(font))
    }

    pub fn with_uniform_cupertino_font(self, font: FontFamily) -> Self {
        self.with_cupertino_fonts(CupertinoFontResources::uniform(font))
    }

    pub fn with_material_reading_display_fonts(
        self,
        reading: FontFamily,
        display: FontFamily,
    ) -> Self {
        self.with_material_fonts(MaterialFontResources::reading_display(reading, display))
    }

    pub fn with_cupertino_reading_display_fonts(
        self,
        reading: FontFamily,
        display: FontFamily,
    ) -> Self {
        self.with_cupertino_fonts(CupertinoFontResources::reading_display(reading, display))
    }

    /// One family for every text role of both theme families.
    pub fn with_universal_font(self, font: FontFamily) -> Self {
        self.with_uniform_material_font(font.clone())
            .with_uniform_cupertino_font(font)
    }

    pub fn with_dimensions(mut self, dimensions: ResponsiveDimensions) -> Self {
        self.custom_dimensions = Some(Arc::new(dimensions));
        self
    }

    pub fn with_font_weights(mut self, weights: ResponsiveFontWeightTiers) -> Self {
        self.custom_font_weights = Some(Arc::new(weights));
        self
    }

    pub fn with_material_typography(mut self, typography: ResponsiveMaterialTypography) -> Self {
        self.custom_material_typography = Some(Arc::new(typography));
        self
    }

    pub fn with_cupertino_typography(mut self, typography: ResponsiveCupertinoTypography) -> Self {
        self.custom_cupertino_typography = Some(Arc::new(typography));
        self
    }

    pub fn with_material_colors(
        mut self,
        light: MaterialColorScheme,
        dark: MaterialColorScheme,
    ) -> Self {
        self.custom_material_colors = Some(Arc::new(ColorSchemePair::new(light, dark)));
        self
    }

    pub fn with_cupertino_colors(
        mut self,
        light: CupertinoColorScheme,
        dark: CupertinoColorScheme,
    ) -> Self {
        self.custom_cupertino_colors = Some(Arc::new(ColorSchemePair::new(light, dark)));
        self
    }
}

#[cfg(test)]
#[path = "tests/configuration_tests.rs"]
mod tests;
