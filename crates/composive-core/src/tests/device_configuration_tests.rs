use super::*;
use crate::platform::Platform;

use WindowHeightSizeClass as H;
use WindowWidthSizeClass as W;

#[test]
fn classification_table_covers_every_pair() {
    let expected = [
        (W::Compact, H::Compact, DeviceConfiguration::MobileLandscape),
        (W::Compact, H::Medium, DeviceConfiguration::MobilePortrait),
        (W::Compact, H::Expanded, DeviceConfiguration::MobilePortrait),
        (W::Medium, H::Compact, DeviceConfiguration::MobileLandscape),
        (W::Medium, H::Medium, DeviceConfiguration::TabletPortrait),
        (W::Medium, H::Expanded, DeviceConfiguration::TabletPortrait),
        (W::Expanded, H::Compact, DeviceConfiguration::TabletLandscape),
        (W::Expanded, H::Medium, DeviceConfiguration::TabletLandscape),
        (W::Expanded, H::Expanded, DeviceConfiguration::Desktop),
    ];

    for (width, height, configuration) in expected {
        assert_eq!(
            DeviceConfiguration::from_size_classes(width, height),
            configuration,
            "width={width:?} height={height:?}"
        );
    }
    assert_eq!(WindowSizeClass::all().count(), expected.len());
}

#[test]
fn form_factor_predicates_are_exclusive() {
    for configuration in DeviceConfiguration::ALL {
        let hits = [
            configuration.is_mobile(),
            configuration.is_tablet(),
            configuration.is_desktop(),
        ]
        .into_iter()
        .filter(|hit| *hit)
        .count();
        assert_eq!(hits, 1, "{configuration:?}");
    }
}

#[test]
fn orientation_predicates_match_variants() {
    let portrait: Vec<_> = DeviceConfiguration::ALL
        .into_iter()
        .filter(|c| c.is_portrait())
        .collect();
    assert_eq!(
        portrait,
        vec![
            DeviceConfiguration::MobilePortrait,
            DeviceConfiguration::TabletPortrait,
            DeviceConfiguration::Desktop,
        ]
    );
    for configuration in DeviceConfiguration::ALL {
        assert_ne!(configuration.is_portrait(), configuration.is_landscape());
    }
}

#[test]
fn recommended_columns_grow_with_form_factor() {
    let columns: Vec<u32> = DeviceConfiguration::ALL
        .into_iter()
        .map(DeviceConfiguration::recommended_columns)
        .collect();
    assert_eq!(columns, vec![1, 2, 2, 3, 4]);
}

#[test]
fn desktop_platform_follows_a_shrunk_window() {
    let desktop = Platform::desktop("Linux", "6.1");
    let classify = |width, height| {
        DeviceConfiguration::from_platform_and_window_size(
            &desktop,
            WindowSizeClass::new(width, height),
        )
    };

    assert_eq!(classify(W::Compact, H::Compact), DeviceConfiguration::MobileLandscape);
    assert_eq!(classify(W::Compact, H::Expanded), DeviceConfiguration::MobilePortrait);
    assert_eq!(classify(W::Medium, H::Compact), DeviceConfiguration::MobileLandscape);
    assert_eq!(classify(W::Medium, H::Expanded), DeviceConfiguration::TabletPortrait);
    assert_eq!(classify(W::Expanded, H::Compact), DeviceConfiguration::Desktop);
    assert_eq!(classify(W::Expanded, H::Expanded), DeviceConfiguration::Desktop);
}

#[test]
fn mobile_platforms_use_the_standard_table() {
    let android = Platform::android("14");
    for window in WindowSizeClass::all() {
        assert_eq!(
            DeviceConfiguration::from_platform_and_window_size(&android, window),
            DeviceConfiguration::from_window_size_class(window),
        );
    }
}
