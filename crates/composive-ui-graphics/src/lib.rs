//! Pure data for units, colors, shapes and text styles in Composive
//!
//! Nothing in this crate knows about window sizes or themes; it only holds
//! the value types the responsive tables are built from.

mod color;
mod geometry;
mod typography;
mod unit;

pub use color::*;
pub use geometry::*;
pub use typography::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{CornerRadii, RoundedCornerShape};
    pub use crate::typography::{FontFamily, FontWeight, TextStyle};
    pub use crate::unit::{Dp, DpSize, Sp};
}
