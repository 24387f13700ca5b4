//! Material and Cupertino type scales with optional per-role font families.

use composive_ui_graphics::{FontFamily, FontWeight, Sp, TextStyle};

use crate::tier::{ResponsiveSize, TierSet};

fn style(size: f32) -> TextStyle {
    TextStyle::new(None, FontWeight::NORMAL, Sp(size))
}

/// Font family per Material text role. `None` keeps the renderer default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialFontResources {
    pub display: Option<FontFamily>,
    pub headline: Option<FontFamily>,
    pub title: Option<FontFamily>,
    pub body: Option<FontFamily>,
    pub label: Option<FontFamily>,
}

impl MaterialFontResources {
    pub fn uniform(font: FontFamily) -> Self {
        Self {
            display: Some(font.clone()),
            headline: Some(font.clone()),
            title: Some(font.clone()),
            body: Some(font.clone()),
            label: Some(font),
        }
    }

    /// `reading` for body and label text, `display` for everything larger.
    pub fn reading_display(reading: FontFamily, display: FontFamily) -> Self {
        Self {
            display: Some(display.clone()),
            headline: Some(display.clone()),
            title: Some(display),
            body: Some(reading.clone()),
            label: Some(reading),
        }
    }
}

/// Font family per Cupertino text role. `None` keeps the renderer default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CupertinoFontResources {
    pub large_title: Option<FontFamily>,
    pub title: Option<FontFamily>,
    pub headline: Option<FontFamily>,
    pub body: Option<FontFamily>,
    pub caption: Option<FontFamily>,
}

impl CupertinoFontResources {
    pub fn uniform(font: FontFamily) -> Self {
        Self {
            large_title: Some(font.clone()),
            title: Some(font.clone()),
            headline: Some(font.clone()),
            body: Some(font.clone()),
            caption: Some(font),
        }
    }

    /// `reading` for body and caption text, `display` for titles and headlines.
    pub fn reading_display(reading: FontFamily, display: FontFamily) -> Self {
        Self {
            large_title: Some(display.clone()),
            title: Some(display.clone()),
            headline: Some(display),
            body: Some(reading.clone()),
            caption: Some(reading),
        }
    }
}

/// The fifteen Material 3 text styles.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialTypography {
    pub body_large: TextStyle,
    pub body_medium: TextStyle,
    pub body_small: TextStyle,
    pub title_large: TextStyle,
    pub title_medium: TextStyle,
    pub title_small: TextStyle,
    pub headline_large: TextStyle,
    pub headline_medium: TextStyle,
    pub headline_small: TextStyle,
    pub display_large: TextStyle,
    pub display_medium: TextStyle,
    pub display_small: TextStyle,
    pub label_large: TextStyle,
    pub label_medium: TextStyle,
    pub label_small: TextStyle,
}

impl MaterialTypography {
    pub fn for_size(size: ResponsiveSize) -> Self {
        match size {
            ResponsiveSize::Small => Self::small(),
            ResponsiveSize::Compact => Self::compact(),
            ResponsiveSize::Medium => Self::medium(),
            ResponsiveSize::Large => Self::large(),
        }
    }

    pub fn small() -> Self {
        Self {
            body_large: style(16.0),
            body_medium: style(14.0),
            body_small: style(12.0),
            title_large: style(20.0),
            title_medium: style(18.0),
            title_small: style(16.0),
            headline_large: style(30.0),
            headline_medium: style(28.0),
            headline_small: style(26.0),
            display_large: style(23.0),
            display_medium: style(21.0),
            display_small: style(19.0),
            label_large: style(14.0),
            label_medium: style(12.0),
            label_small: style(10.0),
        }
    }

    pub fn compact() -> Self {
        Self {
            body_large: style(18.0),
            body_medium: style(16.0),
            body_small: style(14.0),
            title_large: style(23.0),
            title_medium: style(21.0),
            title_small: style(19.0),
            headline_large: style(35.0),
            headline_medium: style(32.0),
            headline_small: style(29.0),
            display_large: style(26.0),
            display_medium: style(24.0),
            display_small: style(22.0),
            label_large: style(16.0),
            label_medium: style(14.0),
            label_small: style(12.0),
        }
    }

    pub fn medium() -> Self {
        Self {
            body_large: style(20.0),
            body_medium: style(18.0),
            body_small: style(16.0),
            title_large: style(27.0),
            title_medium: style(24.0),
            title_small: style(21.0),
            headline_large: style(40.0),
            headline_medium: style(35.0),
            headline_small: style(32.0),
            display_large: style(30.0),
            display_medium: style(28.0),
            display_small: style(26.0),
            label_large: style(18.0),
            label_medium: style(16.0),
            label_small: style(14.0),
        }
    }

    pub fn large() -> Self {
        Self {
            body_large: style(29.0),
            body_medium: style(26.0),
            body_small: style(23.0),
            title_large: style(36.0),
            title_medium: style(32.0),
            title_small: style(28.0),
            headline_large: style(50.0),
            headline_medium: style(45.0),
            headline_small: style(42.0),
            display_large: style(39.0),
            display_medium: style(36.0),
            display_small: style(33.0),
            label_large: style(24.0),
            label_medium: style(20.0),
            label_small: style(18.0),
        }
    }

    /// Replaces the family of every style with the family of its role.
    pub fn with_fonts(mut self, fonts: &MaterialFontResources) -> Self {
        self.body_large.font_family = fonts.body.clone();
        self.body_medium.font_family = fonts.body.clone();
        self.body_small.font_family = fonts.body.clone();
        self.title_large.font_family = fonts.title.clone();
        self.title_medium.font_family = fonts.title.clone();
        self.title_small.font_family = fonts.title.clone();
        self.headline_large.font_family = fonts.headline.clone();
        self.headline_medium.font_family = fonts.headline.clone();
        self.headline_small.font_family = fonts.headline.clone();
        self.display_large.font_family = fonts.display.clone();
        self.display_medium.font_family = fonts.display.clone();
        self.display_small.font_family = fonts.display.clone();
        self.label_large.font_family = fonts.label.clone();
        self.label_medium.font_family = fonts.label.clone();
        self.label_small.font_family = fonts.label.clone();
        self
    }
}

/// The eleven iOS text styles. `headline` is the only semibold one.
#[derive(Clone, Debug, PartialEq)]
pub struct CupertinoTypography {
    pub large_title: TextStyle,
    pub title1: TextStyle,
    pub title2: TextStyle,
    pub title3: TextStyle,
    pub headline: TextStyle,
    pub body: TextStyle,
    pub callout: TextStyle,
    pub subhead: TextStyle,
    pub footnote: TextStyle,
    pub caption1: TextStyle,
    pub caption2: TextStyle,
}

impl CupertinoTypography {
    pub fn for_size(size: ResponsiveSize) -> Self {
        match size {
            ResponsiveSize::Small => Self::small(),
            ResponsiveSize::Compact => Self::compact(),
            ResponsiveSize::Medium => Self::medium(),
            ResponsiveSize::Large => Self::large(),
        }
    }

    pub fn small() -> Self {
        Self {
            large_title: style(30.0),
            title1: style(26.0),
            title2: style(20.0),
            title3: style(18.0),
            headline: TextStyle::new(None, FontWeight::SEMI_BOLD, Sp(16.0)),
            body: style(16.0),
            callout: style(15.0),
            subhead: style(14.0),
            footnote: style(12.0),
            caption1: style(11.0),
            caption2: style(10.0),
        }
    }

    pub fn compact() -> Self {
        Self {
            large_title: style(35.0),
            title1: style(30.0),
            title2: style(23.0),
            title3: style(21.0),
            headline: TextStyle::new(None, FontWeight::SEMI_BOLD, Sp(18.0)),
            body: style(18.0),
            callout: style(17.0),
            subhead: style(16.0),
            footnote: style(14.0),
            caption1: style(13.0),
            caption2: style(12.0),
        }
    }

    pub fn medium() -> Self {
        Self {
            large_title: style(40.0),
            title1: style(34.0),
            title2: style(27.0),
            title3: style(24.0),
            headline: TextStyle::new(None, FontWeight::SEMI_BOLD, Sp(20.0)),
            body: style(20.0),
            callout: style(19.0),
            subhead: style(18.0),
            footnote: style(16.0),
            caption1: style(15.0),
            caption2: style(14.0),
        }
    }

    pub fn large() -> Self {
        Self {
            large_title: style(50.0),
            title1: style(42.0),
            title2: style(36.0),
            title3: style(32.0),
            headline: TextStyle::new(None, FontWeight::SEMI_BOLD, Sp(26.0)),
            body: style(26.0),
            callout: style(24.0),
            subhead: style(23.0),
            footnote: style(20.0),
            caption1: style(18.0),
            caption2: style(17.0),
        }
    }

    /// Replaces the family of every style with the family of its role.
    pub fn with_fonts(mut self, fonts: &CupertinoFontResources) -> Self {
        self.large_title.font_family = fonts.large_title.clone();
        self.title1.font_family = fonts.title.clone();
        self.title2.font_family = fonts.title.clone();
        self.title3.font_family = fonts.title.clone();
        self.headline.font_family = fonts.headline.clone();
        self.body.font_family = fonts.body.clone();
        self.callout.font_family = fonts.body.clone();
        self.subhead.font_family = fonts.body.clone();
        self.footnote.font_family = fonts.caption.clone();
        self.caption1.font_family = fonts.caption.clone();
        self.caption2.font_family = fonts.caption.clone();
        self
    }
}

pub fn default_material_typography() -> TierSet<MaterialTypography> {
    TierSet::new(
        MaterialTypography::small(),
        MaterialTypography::compact(),
        MaterialTypography::medium(),
        MaterialTypography::large(),
    )
}

pub fn default_cupertino_typography() -> TierSet<CupertinoTypography> {
    TierSet::new(
        CupertinoTypography::small(),
        CupertinoTypography::compact(),
        CupertinoTypography::medium(),
        CupertinoTypography::large(),
    )
}

/// The compiled Material scale with `fonts` applied to every tier.
pub fn create_material_typography(fonts: &MaterialFontResources) -> TierSet<MaterialTypography> {
    default_material_typography().map(|typography| typography.clone().with_fonts(fonts))
}

/// The compiled Cupertino scale with `fonts` applied to every tier.
pub fn create_cupertino_typography(fonts: &CupertinoFontResources) -> TierSet<CupertinoTypography> {
    default_cupertino_typography().map(|typography| typography.clone().with_fonts(fonts))
}

#[cfg(test)]
#[path = "tests/typography_tests.rs"]
mod tests;
