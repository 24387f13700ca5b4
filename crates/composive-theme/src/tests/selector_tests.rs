use composive_foundation::{default_dimensions, CupertinoFontResources, MaterialFontResources};
use composive_ui_graphics::{Dp, FontFamily, FontWeight, Sp};

use super::*;

fn assert_scaled(scaled: &Dimensions, base: &Dimensions, factor: f32) {
    let mut expected = Vec::new();
    base.for_each(|name, value| expected.push((name, value.0 * factor)));
    let mut actual = Vec::new();
    scaled.for_each(|_, value| actual.push(value.0));

    assert_eq!(expected.len(), actual.len());
    for ((name, want), got) in expected.into_iter().zip(actual) {
        assert!((want - got).abs() < 1e-4, "{name}: expected {want}, got {got}");
    }
}

#[test]
fn identity_scale_borrows_base() {
    let base = Dimensions::compact();
    let scaled = scale_dimensions(&base, 1.0);
    assert!(matches!(scaled, Cow::Borrowed(_)));
    assert_eq!(*scaled, base);
}

#[test]
fn desktop_scale_multiplies_every_dimension() {
    let base = Dimensions::small();
    let scaled = scale_dimensions(&base, 1.2);
    assert!(matches!(scaled, Cow::Owned(_)));
    assert_scaled(&scaled, &base, 1.2);
}

#[test]
fn compiled_tier_is_used_without_overrides() {
    let android = Platform::android("14");
    let selected = select(ResponsiveSize::Compact, &ResponsiveConfiguration::default(), &android);

    assert_eq!(selected.dimensions, Dimensions::compact());
    assert_eq!(selected.font_weights, ResponsiveFontWeights::compact());
    assert_eq!(selected.material_typography, MaterialTypography::compact());
    assert_eq!(selected.cupertino_typography, CupertinoTypography::compact());
}

#[test]
fn desktop_platform_scales_selected_dimensions() {
    let desktop = Platform::desktop("Linux", "6.8");
    let dimensions = select_dimensions(
        ResponsiveSize::Medium,
        &ResponsiveConfiguration::default(),
        &desktop,
    );
    assert_scaled(&dimensions, &Dimensions::medium(), 1.2);
}

#[test]
fn custom_dimensions_replace_whole_tier_and_are_scaled() {
    let mut custom = default_dimensions();
    custom.small.space4 = Dp(10.0);
    let configuration = ResponsiveConfiguration::new().with_dimensions(custom);

    let platform = Platform::ios("17").with_density_scale(2.0);
    let dimensions = select_dimensions(ResponsiveSize::Small, &configuration, &platform);
    assert_eq!(dimensions.space4, Dp(20.0));
    assert_eq!(dimensions.icon_tiny, Dp(28.0));
}

#[test]
fn custom_font_weights_override_compiled_ones() {
    let mut weights = composive_foundation::default_font_weights();
    weights.medium.heading = FontWeight::BLACK;
    let configuration = ResponsiveConfiguration::new().with_font_weights(weights);

    assert_eq!(
        select_font_weights(ResponsiveSize::Medium, &configuration).heading,
        FontWeight::BLACK
    );
    assert_eq!(
        select_font_weights(ResponsiveSize::Small, &configuration),
        ResponsiveFontWeights::small()
    );
}

#[test]
fn font_resources_apply_to_compiled_typography() {
    let brand = FontFamily::named("Brand");
    let configuration = ResponsiveConfiguration::new()
        .with_material_fonts(MaterialFontResources {
            display: Some(brand.clone()),
            ..Default::default()
        })
        .with_cupertino_fonts(CupertinoFontResources {
            large_title: Some(brand.clone()),
            ..Default::default()
        });

    let material = select_material_typography(ResponsiveSize::Small, &configuration);
    assert_eq!(material.display_small.font_family, Some(brand.clone()));
    assert_eq!(material.body_large.font_family, None);

    let cupertino = select_cupertino_typography(ResponsiveSize::Small, &configuration);
    assert_eq!(cupertino.large_title.font_family, Some(brand));
    assert_eq!(cupertino.title1.font_family, None);
}

#[test]
fn custom_typography_wins_over_font_resources() {
    let mut typography = composive_foundation::default_material_typography();
    typography.small.body_large.font_size = Sp(99.0);
    let configuration = ResponsiveConfiguration::new()
        .with_uniform_material_font(FontFamily::named("Ignored"))
        .with_material_typography(typography);

    let selected = select_material_typography(ResponsiveSize::Small, &configuration);
    assert_eq!(selected.body_large.font_size, Sp(99.0));
    assert_eq!(selected.body_large.font_family, None);
}
