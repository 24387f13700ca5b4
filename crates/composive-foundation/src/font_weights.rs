use composive_ui_graphics::FontWeight;

use crate::tier::{ResponsiveSize, TierSet};

/// Absolute weights plus the semantic weights text roles should use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResponsiveFontWeights {
    pub light: FontWeight,
    pub normal: FontWeight,
    pub medium: FontWeight,
    pub semi_bold: FontWeight,
    pub bold: FontWeight,
    pub extra_bold: FontWeight,

    pub body: FontWeight,
    pub emphasis: FontWeight,
    pub heading: FontWeight,
    pub display: FontWeight,
    pub button: FontWeight,
    pub caption: FontWeight,
}

impl ResponsiveFontWeights {
    pub const fn for_size(size: ResponsiveSize) -> Self {
        match size {
            ResponsiveSize::Small => Self::small(),
            ResponsiveSize::Compact => Self::compact(),
            ResponsiveSize::Medium => Self::medium(),
            ResponsiveSize::Large => Self::large(),
        }
    }

    const fn with_roles(
        body: FontWeight,
        emphasis: FontWeight,
        heading: FontWeight,
        display: FontWeight,
        button: FontWeight,
        caption: FontWeight,
    ) -> Self {
        Self {
            light: FontWeight::LIGHT,
            normal: FontWeight::NORMAL,
            medium: FontWeight::MEDIUM,
            semi_bold: FontWeight::SEMI_BOLD,
            bold: FontWeight::BOLD,
            extra_bold: FontWeight::EXTRA_BOLD,
            body,
            emphasis,
            heading,
            display,
            button,
            caption,
        }
    }

    pub const fn small() -> Self {
        Self::with_roles(
            FontWeight::NORMAL,
            FontWeight::MEDIUM,
            FontWeight::SEMI_BOLD,
            FontWeight::BOLD,
            FontWeight::MEDIUM,
            FontWeight::NORMAL,
        )
    }

    pub const fn compact() -> Self {
        Self::with_roles(
            FontWeight::NORMAL,
            FontWeight::SEMI_BOLD,
            FontWeight::BOLD,
            FontWeight::EXTRA_BOLD,
            FontWeight::SEMI_BOLD,
            FontWeight::NORMAL,
        )
    }

    pub const fn medium() -> Self {
        Self::with_roles(
            FontWeight::NORMAL,
            FontWeight::SEMI_BOLD,
            FontWeight::BOLD,
            FontWeight::EXTRA_BOLD,
            FontWeight::SEMI_BOLD,
            FontWeight::MEDIUM,
        )
    }

    pub const fn large() -> Self {
        Self::with_roles(
            FontWeight::NORMAL,
            FontWeight::BOLD,
            FontWeight::EXTRA_BOLD,
            FontWeight::EXTRA_BOLD,
            FontWeight::BOLD,
            FontWeight::MEDIUM,
        )
    }
}

pub fn default_font_weights() -> TierSet<ResponsiveFontWeights> {
    TierSet::new(
        ResponsiveFontWeights::small(),
        ResponsiveFontWeights::compact(),
        ResponsiveFontWeights::medium(),
        ResponsiveFontWeights::large(),
    )
}
