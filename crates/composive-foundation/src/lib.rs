//! Compiled responsive tables for Composive
//!
//! Every concern is available for each of the four [`ResponsiveSize`] tiers.
//! The tables are plain data; choosing a tier is done by `composive-theme`.

mod colors;
mod dimensions;
mod font_weights;
mod shapes;
mod tier;
mod typography;

pub use colors::*;
pub use dimensions::*;
pub use font_weights::*;
pub use shapes::*;
pub use tier::*;
pub use typography::*;

pub mod prelude {
    pub use crate::colors::{ColorSchemePair, CupertinoColorScheme, MaterialColorScheme};
    pub use crate::dimensions::Dimensions;
    pub use crate::font_weights::ResponsiveFontWeights;
    pub use crate::tier::{ResponsiveSize, TierSet};
    pub use crate::typography::{
        CupertinoFontResources, CupertinoTypography, MaterialFontResources, MaterialTypography,
    };
}
