//! Spacing and component size scale, one complete bundle per tier.

use composive_ui_graphics::Dp;

use crate::tier::{ResponsiveSize, TierSet};

/// Every size the responsive layer hands to leaf UI, in dp.
#[derive(Clone, Debug, PartialEq)]
pub struct Dimensions {
    // Spacing scale
    pub space1: Dp,
    pub space2: Dp,
    pub space3: Dp,
    pub space4: Dp,
    pub space5: Dp,
    pub space6: Dp,
    pub space8: Dp,
    pub space10: Dp,
    pub space12: Dp,
    pub space16: Dp,
    // Content and screen padding
    pub content_padding_small: Dp,
    pub content_padding_medium: Dp,
    pub content_padding_large: Dp,
    pub screen_padding_horizontal: Dp,
    pub screen_padding_vertical: Dp,
    pub section_spacing: Dp,
    pub item_spacing: Dp,
    // Icons
    pub icon_tiny: Dp,
    pub icon_small: Dp,
    pub icon_medium: Dp,
    pub icon_large: Dp,
    // Avatars
    pub avatar_small: Dp,
    pub avatar_medium: Dp,
    pub avatar_large: Dp,
    pub avatar_xlarge: Dp,
    // Images
    pub image_thumb: Dp,
    pub image_small: Dp,
    pub image_medium: Dp,
    pub image_large: Dp,
    pub image_hero: Dp,
    // Buttons and inputs
    pub button_height_small: Dp,
    pub button_height_medium: Dp,
    pub button_height_large: Dp,
    pub button_min_width: Dp,
    pub input_height: Dp,
    pub input_min_width: Dp,
    // Cards and surfaces
    pub card_padding: Dp,
    pub card_spacing: Dp,
    pub card_elevation: Dp,
    pub bottom_sheet_peek_height: Dp,
    pub dialog_max_width: Dp,
    pub dialog_padding: Dp,
}

impl Dimensions {
    pub fn for_size(size: ResponsiveSize) -> Self {
        match size {
            ResponsiveSize::Small => Self::small(),
            ResponsiveSize::Compact => Self::compact(),
            ResponsiveSize::Medium => Self::medium(),
            ResponsiveSize::Large => Self::large(),
        }
    }

    /// Multiplies every field by `factor`.
    pub fn scaled(&self, factor: f32) -> Dimensions {
        Dimensions {
            space1: self.space1 * factor,
            space2: self.space2 * factor,
            space3: self.space3 * factor,
            space4: self.space4 * factor,
            space5: self.space5 * factor,
            space6: self.space6 * factor,
            space8: self.space8 * factor,
            space10: self.space10 * factor,
            space12: self.space12 * factor,
            space16: self.space16 * factor,
            content_padding_small: self.content_padding_small * factor,
            content_padding_medium: self.content_padding_medium * factor,
            content_padding_large: self.content_padding_large * factor,
            screen_padding_horizontal: self.screen_padding_horizontal * factor,
            screen_padding_vertical: self.screen_padding_vertical * factor,
            section_spacing: self.section_spacing * factor,
            item_spacing: self.item_spacing * factor,
            icon_tiny: self.icon_tiny * factor,
            icon_small: self.icon_small * factor,
            icon_medium: self.icon_medium * factor,
            icon_large: self.icon_large * factor,
            avatar_small: self.avatar_small * factor,
            avatar_medium: self.avatar_medium * factor,
            avatar_large: self.avatar_large * factor,
            avatar_xlarge: self.avatar_xlarge * factor,
            image_thumb: self.image_thumb * factor,
            image_small: self.image_small * factor,
            image_medium: self.image_medium * factor,
            image_large: self.image_large * factor,
            image_hero: self.image_hero * factor,
            button_height_small: self.button_height_small * factor,
            button_height_medium: self.button_height_medium * factor,
            button_height_large: self.button_height_large * factor,
            button_min_width: self.button_min_width * factor,
            input_height: self.input_height * factor,
            input_min_width: self.input_min_width * factor,
            card_padding: self.card_padding * factor,
            card_spacing: self.card_spacing * factor,
            card_elevation: self.card_elevation * factor,
            bottom_sheet_peek_height: self.bottom_sheet_peek_height * factor,
            dialog_max_width: self.dialog_max_width * factor,
            dialog_padding: self.dialog_padding * factor,
        }
    }

    /// Visits every field in declaration order.
    pub fn for_each(&self, mut visit: impl FnMut(&'static str, Dp)) {
        visit("space1", self.space1);
        visit("space2", self.space2);
        visit("space3", self.space3);
        visit("space4", self.space4);
        visit("space5", self.space5);
        visit("space6", self.space6);
        visit("space8", self.space8);
        visit("space10", self.space10);
        visit("space12", self.space12);
        visit("space16", self.space16);
        visit("content_padding_small", self.content_padding_small);
        visit("content_padding_medium", self.content_padding_medium);
        visit("content_padding_large", self.content_padding_large);
        visit("screen_padding_horizontal", self.screen_padding_horizontal);
        visit("screen_padding_vertical", self.screen_padding_vertical);
        visit("section_spacing", self.section_spacing);
        visit("item_spacing", self.item_spacing);
        visit("icon_tiny", self.icon_tiny);
        visit("icon_small", self.icon_small);
        visit("icon_medium", self.icon_medium);
        visit("icon_large", self.icon_large);
        visit("avatar_small", self.avatar_small);
        visit("avatar_medium", self.avatar_medium);
        visit("avatar_large", self.avatar_large);
        visit("avatar_xlarge", self.avatar_xlarge);
        visit("image_thumb", self.image_thumb);
        visit("image_small", self.image_small);
        visit("image_medium", self.image_medium);
        visit("image_large", self.image_large);
        visit("image_hero", self.image_hero);
        visit("button_height_small", self.button_height_small);
        visit("button_height_medium", self.button_height_medium);
        visit("button_height_large", self.button_height_large);
        visit("button_min_width", self.button_min_width);
        visit("input_height", self.input_height);
        visit("input_min_width", self.input_min_width);
        visit("card_padding", self.card_padding);
        visit("card_spacing", self.card_spacing);
        visit("card_elevation", self.card_elevation);
        visit("bottom_sheet_peek_height", self.bottom_sheet_peek_height);
        visit("dialog_max_width", self.dialog_max_width);
        visit("dialog_padding", self.dialog_padding);
    }

    pub fn small() -> Self {
        Self {
            space1: Dp(4.0),
            space2: Dp(8.0),
            space3: Dp(12.0),
            space4: Dp(16.0),
            space5: Dp(20.0),
            space6: Dp(24.0),
            space8: Dp(32.0),
            space10: Dp(40.0),
            space12: Dp(48.0),
            space16: Dp(64.0),
            content_padding_small: Dp(8.0),
            content_padding_medium: Dp(12.0),
            content_padding_large: Dp(16.0),
            screen_padding_horizontal: Dp(16.0),
            screen_padding_vertical: Dp(8.0),
            section_spacing: Dp(24.0),
            item_spacing: Dp(8.0),
            icon_tiny: Dp(14.0),
            icon_small: Dp(20.0),
            icon_medium: Dp(28.0),
            icon_large: Dp(40.0),
            avatar_small: Dp(28.0),
            avatar_medium: Dp(40.0),
            avatar_large: Dp(56.0),
            avatar_xlarge: Dp(80.0),
            image_thumb: Dp(64.0),
            image_small: Dp(96.0),
            image_medium: Dp(160.0),
            image_large: Dp(240.0),
            image_hero: Dp(280.0),
            button_height_small: Dp(36.0),
            button_height_medium: Dp(44.0),
            button_height_large: Dp(52.0),
            button_min_width: Dp(88.0),
            input_height: Dp(44.0),
            input_min_width: Dp(120.0),
            card_padding: Dp(12.0),
            card_spacing: Dp(8.0),
            card_elevation: Dp(2.0),
            bottom_sheet_peek_height: Dp(56.0),
            dialog_max_width: Dp(280.0),
            dialog_padding: Dp(16.0),
        }
    }

    pub fn compact() -> Self {
        Self {
            space1: Dp(4.0),
            space2: Dp(8.0),
            space3: Dp(12.0),
            space4: Dp(16.0),
            space5: Dp(20.0),
            space6: Dp(24.0),
            space8: Dp(32.0),
            space10: Dp(40.0),
            space12: Dp(48.0),
            space16: Dp(64.0),
            content_padding_small: Dp(16.0),
            content_padding_medium: Dp(20.0),
            content_padding_large: Dp(24.0),
            screen_padding_horizontal: Dp(24.0),
            screen_padding_vertical: Dp(16.0),
            section_spacing: Dp(32.0),
            item_spacing: Dp(16.0),
            icon_tiny: Dp(18.0),
            icon_small: Dp(26.0),
            icon_medium: Dp(34.0),
            icon_large: Dp(50.0),
            avatar_small: Dp(36.0),
            avatar_medium: Dp(52.0),
            avatar_large: Dp(68.0),
            avatar_xlarge: Dp(100.0),
            image_thumb: Dp(88.0),
            image_small: Dp(130.0),
            image_medium: Dp(220.0),
            image_large: Dp(320.0),
            image_hero: Dp(350.0),
            button_height_small: Dp(44.0),
            button_height_medium: Dp(52.0),
            button_height_large: Dp(60.0),
            button_min_width: Dp(104.0),
            input_height: Dp(52.0),
            input_min_width: Dp(150.0),
            card_padding: Dp(18.0),
            card_spacing: Dp(14.0),
            card_elevation: Dp(4.0),
            bottom_sheet_peek_height: Dp(68.0),
            dialog_max_width: Dp(340.0),
            dialog_padding: Dp(22.0),
        }
    }

    pub fn medium() -> Self {
        Self {
            space1: Dp(4.0),
            space2: Dp(8.0),
            space3: Dp(12.0),
            space4: Dp(16.0),
            space5: Dp(20.0),
            space6: Dp(24.0),
            space8: Dp(32.0),
            space10: Dp(40.0),
            space12: Dp(48.0),
            space16: Dp(64.0),
            content_padding_small: Dp(16.0),
            content_padding_medium: Dp(20.0),
            content_padding_large: Dp(24.0),
            screen_padding_horizontal: Dp(24.0),
            screen_padding_vertical: Dp(16.0),
            section_spacing: Dp(40.0),
            item_spacing: Dp(16.0),
            icon_tiny: Dp(16.0),
            icon_small: Dp(24.0),
            icon_medium: Dp(32.0),
            icon_large: Dp(48.0),
            avatar_small: Dp(36.0),
            avatar_medium: Dp(52.0),
            avatar_large: Dp(72.0),
            avatar_xlarge: Dp(108.0),
            image_thumb: Dp(96.0),
            image_small: Dp(140.0),
            image_medium: Dp(240.0),
            image_large: Dp(360.0),
            image_hero: Dp(380.0),
            button_height_small: Dp(44.0),
            button_height_medium: Dp(52.0),
            button_height_large: Dp(60.0),
            button_min_width: Dp(112.0),
            input_height: Dp(52.0),
            input_min_width: Dp(160.0),
            card_padding: Dp(20.0),
            card_spacing: Dp(16.0),
            card_elevation: Dp(4.0),
            bottom_sheet_peek_height: Dp(72.0),
            dialog_max_width: Dp(400.0),
            dialog_padding: Dp(24.0),
        }
    }

    pub fn large() -> Self {
        Self {
            space1: Dp(4.0),
            space2: Dp(8.0),
            space3: Dp(12.0),
            space4: Dp(16.0),
            space5: Dp(20.0),
            space6: Dp(24.0),
            space8: Dp(32.0),
            space10: Dp(40.0),
            space12: Dp(48.0),
            space16: Dp(64.0),
            content_padding_small: Dp(20.0),
            content_padding_medium: Dp(24.0),
            content_padding_large: Dp(32.0),
            screen_padding_horizontal: Dp(32.0),
            screen_padding_vertical: Dp(20.0),
            section_spacing: Dp(48.0),
            item_spacing: Dp(20.0),
            icon_tiny: Dp(18.0),
            icon_small: Dp(28.0),
            icon_medium: Dp(36.0),
            icon_large: Dp(56.0),
            avatar_small: Dp(40.0),
            avatar_medium: Dp(56.0),
            avatar_large: Dp(80.0),
            avatar_xlarge: Dp(120.0),
            image_thumb: Dp(112.0),
            image_small: Dp(160.0),
            image_medium: Dp(280.0),
            image_large: Dp(420.0),
            image_hero: Dp(440.0),
            button_height_small: Dp(48.0),
            button_height_medium: Dp(56.0),
            button_height_large: Dp(64.0),
            button_min_width: Dp(128.0),
            input_height: Dp(56.0),
            input_min_width: Dp(180.0),
            card_padding: Dp(24.0),
            card_spacing: Dp(20.0),
            card_elevation: Dp(6.0),
            bottom_sheet_peek_height: Dp(80.0),
            dialog_max_width: Dp(480.0),
            dialog_padding: Dp(32.0),
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::small()
    }
}

/// The compiled dimension scale.
pub fn default_dimensions() -> TierSet<Dimensions> {
    TierSet::new(
        Dimensions::small(),
        Dimensions::compact(),
        Dimensions::medium(),
        Dimensions::large(),
    )
}

#[cfg(test)]
#[path = "tests/dimensions_tests.rs"]
mod tests;
