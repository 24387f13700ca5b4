use composive_core::{PlatformType, WindowHeightSizeClass, WindowWidthSizeClass};
use composive_testing::platforms;
use composive_ui_graphics::Color;

use super::*;

use WindowHeightSizeClass as H;
use WindowWidthSizeClass as W;

fn material_preferring_platform() -> Platform {
    Platform::new(
        "Handheld 3",
        PlatformType::Android,
        true,
        ThemeType::Material3,
        true,
        true,
        1.0,
        false,
    )
}

#[test]
fn platform_preference_beats_configuration_default() {
    let configuration = ResponsiveConfiguration::new()
        .with_cupertino_theme()
        .with_platform_theme_adaptation(true);
    let platform = material_preferring_platform();

    assert_eq!(
        resolve_theme_type(&configuration, None, &platform),
        ThemeType::Material3
    );
}

#[test]
fn explicit_theme_beats_everything() {
    let configuration = ResponsiveConfiguration::new()
        .with_material_theme()
        .with_platform_theme_adaptation(true);
    let platform = material_preferring_platform();

    assert_eq!(
        resolve_theme_type(&configuration, Some(ThemeType::Cupertino), &platform),
        ThemeType::Cupertino
    );
}

#[test]
fn configuration_default_applies_without_platform_preference() {
    let platform = material_preferring_platform();
    assert_eq!(
        resolve_theme_type(&ResponsiveConfiguration::cupertino(), None, &platform),
        ThemeType::Cupertino
    );
}

#[test]
fn platform_recommendation_is_the_last_resort() {
    let configuration = ResponsiveConfiguration::default();
    assert_eq!(
        resolve_theme_type(&configuration, None, &platforms::android()),
        ThemeType::Material3
    );
    assert_eq!(
        resolve_theme_type(&configuration, None, &platforms::ios()),
        ThemeType::Cupertino
    );
    assert_eq!(
        resolve_theme_type(&configuration, None, &platforms::desktop()),
        ThemeType::Cupertino
    );
}

#[test]
fn colors_fall_back_to_compiled_schemes() {
    let configuration = ResponsiveConfiguration::default();
    let (material, cupertino) = resolve_color_schemes(&configuration, false);
    assert_eq!(material, MaterialColorScheme::light());
    assert_eq!(cupertino, CupertinoColorScheme::light());

    let (material, cupertino) = resolve_color_schemes(&configuration, true);
    assert_eq!(material, MaterialColorScheme::dark());
    assert_eq!(cupertino, CupertinoColorScheme::dark());
}

#[test]
fn custom_colors_are_chosen_by_dark_flag() {
    let mut light = MaterialColorScheme::light();
    light.primary = Color::from_argb(0xFF00FF00);
    let mut dark = MaterialColorScheme::dark();
    dark.primary = Color::from_argb(0xFF004400);
    let configuration = ResponsiveConfiguration::new().with_material_colors(light, dark);

    let (material, cupertino) = resolve_color_schemes(&configuration, true);
    assert_eq!(material.primary.to_argb(), 0xFF004400);
    assert_eq!(cupertino, CupertinoColorScheme::dark());

    let (material, _) = resolve_color_schemes(&configuration, false);
    assert_eq!(material.primary.to_argb(), 0xFF00FF00);
}

#[test]
fn android_phone_resolves_to_small_material_theme() {
    let configuration = Arc::new(ResponsiveConfiguration::default());
    let window = WindowSizeClass::new(W::Compact, H::Expanded);
    let platform = platforms::android();

    let resolved = resolve_theme(&configuration, window, &platform, false, None);

    assert_eq!(resolved.device_configuration, DeviceConfiguration::MobilePortrait);
    assert_eq!(resolved.orientation, Orientation::Portrait);
    assert_eq!(resolved.theme_type, ThemeType::Material3);
    assert_eq!(resolved.size, ResponsiveSize::Small);
    assert_eq!(resolved.dimensions, Dimensions::small());
    assert_eq!(resolved.material_colors, MaterialColorScheme::light());
}

#[test]
fn resolution_is_deterministic_over_every_window() {
    let configuration = Arc::new(ResponsiveConfiguration::platform_adaptive());
    let platform = platforms::desktop();

    for window in WindowSizeClass::all() {
        for dark in [false, true] {
            let first = resolve_theme(&configuration, window, &platform, dark, None);
            let second = resolve_theme(&configuration, window, &platform, dark, None);
            assert_eq!(first, second, "{window:?} dark={dark}");
        }
    }
}

#[test]
fn landscape_tablet_is_sized_by_height() {
    let configuration = Arc::new(ResponsiveConfiguration::default());
    let window = WindowSizeClass::new(W::Expanded, H::Medium);
    let resolved = resolve_theme(&configuration, window, &platforms::android(), false, None);

    assert_eq!(resolved.orientation, Orientation::Landscape);
    assert_eq!(resolved.size, ResponsiveSize::Compact);
    assert_eq!(resolved.device_configuration, DeviceConfiguration::TabletLandscape);
}

#[test]
fn changed_concerns_lists_only_differences() {
    let configuration = Arc::new(ResponsiveConfiguration::default());
    let platform = platforms::android();
    let phone = resolve_theme(
        &configuration,
        WindowSizeClass::new(W::Compact, H::Expanded),
        &platform,
        false,
        None,
    );
    let taller_phone = resolve_theme(
        &configuration,
        WindowSizeClass::new(W::Compact, H::Medium),
        &platform,
        false,
        None,
    );
    assert_eq!(
        taller_phone.changed_concerns(&phone),
        vec![ThemeConcern::WindowSizeClass]
    );

    let dark_phone = resolve_theme(
        &configuration,
        WindowSizeClass::new(W::Compact, H::Expanded),
        &platform,
        true,
        None,
    );
    assert_eq!(
        dark_phone.changed_concerns(&phone),
        vec![ThemeConcern::MaterialColors, ThemeConcern::CupertinoColors]
    );
    assert!(phone.changed_concerns(&phone).is_empty());
}

#[test]
fn adaptive_spec_follows_theme_type() {
    let configuration = Arc::new(ResponsiveConfiguration::cupertino());
    let resolved = resolve_theme(
        &configuration,
        WindowSizeClass::new(W::Medium, H::Expanded),
        &platforms::android(),
        false,
        None,
    );

    let spec = resolved.adaptive_spec();
    assert_eq!(spec.theme_type(), ThemeType::Cupertino);
    assert_eq!(spec.shapes(), Shapes::cupertino());
    match spec {
        AdaptiveThemeSpec::Cupertino(cupertino) => {
            assert_eq!(cupertino.typography, &CupertinoTypography::compact());
        }
        AdaptiveThemeSpec::Material(_) => panic!("expected a Cupertino spec"),
    }
}

#[test]
fn device_configuration_with_platform_uses_desktop_rules() {
    let configuration = Arc::new(ResponsiveConfiguration::default());
    let resolved = resolve_theme(
        &configuration,
        WindowSizeClass::new(W::Expanded, H::Compact),
        &platforms::desktop(),
        false,
        None,
    );
    assert_eq!(resolved.device_configuration, DeviceConfiguration::TabletLandscape);
    assert_eq!(
        resolved.device_configuration_with_platform(),
        DeviceConfiguration::Desktop
    );
}
