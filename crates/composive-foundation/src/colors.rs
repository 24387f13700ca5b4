//! Baseline light and dark color schemes for both theme families.

use composive_ui_graphics::Color;

/// A light scheme and its dark counterpart.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorSchemePair<T> {
    pub light: T,
    pub dark: T,
}

impl<T> ColorSchemePair<T> {
    pub fn new(light: T, dark: T) -> Self {
        Self { light, dark }
    }

    pub fn select(&self, dark_theme: bool) -> &T {
        if dark_theme {
            &self.dark
        } else {
            &self.light
        }
    }
}

/// Material 3 baseline roles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialColorScheme {
    pub primary: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,
    pub secondary: Color,
    pub on_secondary: Color,
    pub secondary_container: Color,
    pub on_secondary_container: Color,
    pub tertiary: Color,
    pub on_tertiary: Color,
    pub tertiary_container: Color,
    pub on_tertiary_container: Color,
    pub background: Color,
    pub on_background: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub surface_variant: Color,
    pub on_surface_variant: Color,
    pub error: Color,
    pub on_error: Color,
    pub error_container: Color,
    pub on_error_container: Color,
    pub outline: Color,
    pub outline_variant: Color,
    pub inverse_surface: Color,
    pub inverse_on_surface: Color,
    pub inverse_primary: Color,
    pub scrim: Color,
}

impl MaterialColorScheme {
    pub fn light() -> Self {
        Self {
            primary: Color::from_argb(0xFF6750A4),
            on_primary: Color::from_argb(0xFFFFFFFF),
            primary_container: Color::from_argb(0xFFEADDFF),
            on_primary_container: Color::from_argb(0xFF21005D),
            secondary: Color::from_argb(0xFF625B71),
            on_secondary: Color::from_argb(0xFFFFFFFF),
            secondary_container: Color::from_argb(0xFFE8DEF8),
            on_secondary_container: Color::from_argb(0xFF1D192B),
            tertiary: Color::from_argb(0xFF7D5260),
            on_tertiary: Color::from_argb(0xFFFFFFFF),
            tertiary_container: Color::from_argb(0xFFFFD8E4),
            on_tertiary_container: Color::from_argb(0xFF31111D),
            background: Color::from_argb(0xFFFFFBFE),
            on_background: Color::from_argb(0xFF1C1B1F),
            surface: Color::from_argb(0xFFFFFBFE),
            on_surface: Color::from_argb(0xFF1C1B1F),
            surface_variant: Color::from_argb(0xFFE7E0EC),
            on_surface_variant: Color::from_argb(0xFF49454F),
            error: Color::from_argb(0xFFB3261E),
            on_error: Color::from_argb(0xFFFFFFFF),
            error_container: Color::from_argb(0xFFF9DEDC),
            on_error_container: Color::from_argb(0xFF410E0B),
            outline: Color::from_argb(0xFF79747E),
            outline_variant: Color::from_argb(0xFFCAC4D0),
            inverse_surface: Color::from_argb(0xFF313033),
            inverse_on_surface: Color::from_argb(0xFFF4EFF4),
            inverse_primary: Color::from_argb(0xFFD0BCFF),
            scrim: Color::from_argb(0xFF000000),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Color::from_argb(0xFFD0BCFF),
            on_primary: Color::from_argb(0xFF381E72),
            primary_container: Color::from_argb(0xFF4F378B),
            on_primary_container: Color::from_argb(0xFFEADDFF),
            secondary: Color::from_argb(0xFFCCC2DC),
            on_secondary: Color::from_argb(0xFF332D41),
            secondary_container: Color::from_argb(0xFF4A4458),
            on_secondary_container: Color::from_argb(0xFFE8DEF8),
            tertiary: Color::from_argb(0xFFEFB8C8),
            on_tertiary: Color::from_argb(0xFF492532),
            tertiary_container: Color::from_argb(0xFF633B48),
            on_tertiary_container: Color::from_argb(0xFFFFD8E4),
            background: Color::from_argb(0xFF1C1B1F),
            on_background: Color::from_argb(0xFFE6E1E5),
            surface: Color::from_argb(0xFF1C1B1F),
            on_surface: Color::from_argb(0xFFE6E1E5),
            surface_variant: Color::from_argb(0xFF49454F),
            on_surface_variant: Color::from_argb(0xFFCAC4D0),
            error: Color::from_argb(0xFFF2B8B5),
            on_error: Color::from_argb(0xFF601410),
            error_container: Color::from_argb(0xFF8C1D18),
            on_error_container: Color::from_argb(0xFFF9DEDC),
            outline: Color::from_argb(0xFF938F99),
            outline_variant: Color::from_argb(0xFF49454F),
            inverse_surface: Color::from_argb(0xFFE6E1E5),
            inverse_on_surface: Color::from_argb(0xFF313033),
            inverse_primary: Color::from_argb(0xFF6750A4),
            scrim: Color::from_argb(0xFF000000),
        }
    }

    pub fn defaults() -> ColorSchemePair<Self> {
        ColorSchemePair::new(Self::light(), Self::dark())
    }
}

/// iOS system colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CupertinoColorScheme {
    pub accent: Color,
    pub label: Color,
    pub secondary_label: Color,
    pub tertiary_label: Color,
    pub quaternary_label: Color,
    pub system_fill: Color,
    pub secondary_system_fill: Color,
    pub system_background: Color,
    pub secondary_system_background: Color,
    pub tertiary_system_background: Color,
    pub system_grouped_background: Color,
    pub separator: Color,
    pub opaque_separator: Color,
    pub link: Color,
    pub system_red: Color,
    pub system_green: Color,
    pub system_orange: Color,
    pub system_gray: Color,
}

impl CupertinoColorScheme {
    pub fn light() -> Self {
        Self {
            accent: Color::from_argb(0xFF007AFF),
            label: Color::from_argb(0xFF000000),
            secondary_label: Color::from_argb(0x993C3C43),
            tertiary_label: Color::from_argb(0x4D3C3C43),
            quaternary_label: Color::from_argb(0x2E3C3C43),
            system_fill: Color::from_argb(0x33787880),
            secondary_system_fill: Color::from_argb(0x29787880),
            system_background: Color::from_argb(0xFFFFFFFF),
            secondary_system_background: Color::from_argb(0xFFF2F2F7),
            tertiary_system_background: Color::from_argb(0xFFFFFFFF),
            system_grouped_background: Color::from_argb(0xFFF2F2F7),
            separator: Color::from_argb(0x4A3C3C43),
            opaque_separator: Color::from_argb(0xFFC6C6C8),
            link: Color::from_argb(0xFF007AFF),
            system_red: Color::from_argb(0xFFFF3B30),
            system_green: Color::from_argb(0xFF34C759),
            system_orange: Color::from_argb(0xFFFF9500),
            system_gray: Color::from_argb(0xFF8E8E93),
        }
    }

    pub fn dark() -> Self {
        Self {
            accent: Color::from_argb(0xFF0A84FF),
            label: Color::from_argb(0xFFFFFFFF),
            secondary_label: Color::from_argb(0x99EBEBF5),
            tertiary_label: Color::from_argb(0x4DEBEBF5),
            quaternary_label: Color::from_argb(0x29EBEBF5),
            system_fill: Color::from_argb(0x5C787880),
            secondary_system_fill: Color::from_argb(0x52787880),
            system_background: Color::from_argb(0xFF000000),
            secondary_system_background: Color::from_argb(0xFF1C1C1E),
            tertiary_system_background: Color::from_argb(0xFF2C2C2E),
            system_grouped_background: Color::from_argb(0xFF000000),
            separator: Color::from_argb(0x99545458),
            opaque_separator: Color::from_argb(0xFF38383A),
            link: Color::from_argb(0xFF0984FF),
            system_red: Color::from_argb(0xFFFF453A),
            system_green: Color::from_argb(0xFF30D158),
            system_orange: Color::from_argb(0xFFFF9F0A),
            system_gray: Color::from_argb(0xFF8E8E93),
        }
    }

    pub fn defaults() -> ColorSchemePair<Self> {
        ColorSchemePair::new(Self::light(), Self::dark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_picks_by_dark_flag() {
        let pair = MaterialColorScheme::defaults();
        assert_eq!(pair.select(false).primary.to_argb(), 0xFF6750A4);
        assert_eq!(pair.select(true).primary.to_argb(), 0xFFD0BCFF);
    }

    #[test]
    fn cupertino_dark_background_is_black() {
        let dark = CupertinoColorScheme::dark();
        assert_eq!(dark.system_background, Color::BLACK);
        assert_eq!(CupertinoColorScheme::light().system_background, Color::WHITE);
    }
}
