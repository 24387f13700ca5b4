use super::*;

#[test]
fn spacing_scale_is_shared_by_all_tiers() {
    for (_, dimensions) in default_dimensions().iter() {
        assert_eq!(dimensions.space1, Dp(4.0));
        assert_eq!(dimensions.space4, Dp(16.0));
        assert_eq!(dimensions.space16, Dp(64.0));
    }
}

#[test]
fn component_sizes_grow_from_small_to_large() {
    let tiers = default_dimensions();
    assert!(tiers.small.button_height_medium < tiers.large.button_height_medium);
    assert!(tiers.small.dialog_max_width < tiers.compact.dialog_max_width);
    assert!(tiers.compact.dialog_max_width < tiers.medium.dialog_max_width);
    assert!(tiers.medium.dialog_max_width < tiers.large.dialog_max_width);
    assert_eq!(tiers.small.image_hero, Dp(280.0));
    assert_eq!(tiers.large.image_hero, Dp(440.0));
}

#[test]
fn scaled_multiplies_every_field() {
    let base = Dimensions::medium();
    let scaled = base.scaled(1.2);

    let mut base_values = Vec::new();
    base.for_each(|name, value| base_values.push((name, value)));
    let mut scaled_values = Vec::new();
    scaled.for_each(|name, value| scaled_values.push((name, value)));

    assert_eq!(base_values.len(), 42);
    for ((name, original), (_, value)) in base_values.iter().zip(&scaled_values) {
        assert!(
            (value.0 - original.0 * 1.2).abs() < 1e-4,
            "{name}: {value:?} vs {original:?}"
        );
    }
}

#[test]
fn default_is_small_tier() {
    assert_eq!(Dimensions::default(), Dimensions::small());
}
