//! Picks the tier bundle of every size-dependent concern.

use std::borrow::Cow;

use composive_core::Platform;
use composive_foundation::{
    CupertinoTypography, Dimensions, MaterialTypography, ResponsiveFontWeights, ResponsiveSize,
    TierSet,
};

use crate::configuration::ResponsiveConfiguration;

/// Size-dependent values for one tier.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedValues {
    pub size: ResponsiveSize,
    pub dimensions: Dimensions,
    pub font_weights: ResponsiveFontWeights,
    pub material_typography: MaterialTypography,
    pub cupertino_typography: CupertinoTypography,
}

/// Applies the platform density scale to every field. A scale of exactly
/// `1.0` borrows `base` unchanged.
pub fn scale_dimensions(base: &Dimensions, density_scale: f32) -> Cow<'_, Dimensions> {
    if density_scale == 1.0 {
        Cow::Borrowed(base)
    } else {
        Cow::Owned(base.scaled(density_scale))
    }
}

fn tier_or_default<T: Clone>(
    custom: Option<&TierSet<T>>,
    size: ResponsiveSize,
    default: impl FnOnce() -> T,
) -> T {
    match custom {
        Some(tiers) => tiers.get(size).clone(),
        None => default(),
    }
}

pub fn select_dimensions(
    size: ResponsiveSize,
    configuration: &ResponsiveConfiguration,
    platform: &Platform,
) -> Dimensions {
    let scale = platform.density_scale();
    match configuration.custom_dimensions.as_deref() {
        Some(custom) => scale_dimensions(custom.get(size), scale).into_owned(),
        None => scale_dimensions(&Dimensions::for_size(size), scale).into_owned(),
    }
}

pub fn select_font_weights(
    size: ResponsiveSize,
    configuration: &ResponsiveConfiguration,
) -> ResponsiveFontWeights {
    tier_or_default(configuration.custom_font_weights.as_deref(), size, || {
        ResponsiveFontWeights::for_size(size)
    })
}

pub fn select_material_typography(
    size: ResponsiveSize,
    configuration: &ResponsiveConfiguration,
) -> MaterialTypography {
    tier_or_default(
        configuration.custom_material_typography.as_deref(),
        size,
        || {
            let typography = MaterialTypography::for_size(size);
            match configuration.custom_material_fonts.as_deref() {
                Some(fonts) => typography.with_fonts(fonts),
                None => typography,
            }
        },
    )
}

pub fn select_cupertino_typography(
    size: ResponsiveSize,
    configuration: &ResponsiveConfiguration,
) -> CupertinoTypography {
    tier_or_default(
        configuration.custom_cupertino_typography.as_deref(),
        size,
        || {
            let typography = CupertinoTypography::for_size(size);
            match configuration.custom_cupertino_fonts.as_deref() {
                Some(fonts) => typography.with_fonts(fonts),
                None => typography,
            }
        },
    )
}

pub fn select(
    size: ResponsiveSize,
    configuration: &ResponsiveConfiguration,
    platform: &Platform,
) -> SelectedValues {
    SelectedValues {
        size,
        dimensions: select_dimensions(size, configuration, platform),
        font_weights: select_font_weights(size, configuration),
        material_typography: select_material_typography(size, configuration),
        cupertino_typography: select_cupertino_typography(size, configuration),
    }
}

#[cfg(test)]
#[path = "tests/selector_tests.rs"]
mod tests;
