use std::fmt;
use std::sync::Arc;

use crate::unit::Sp;

/// Numeric font weight on the usual 100..=900 scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const THIN: FontWeight = FontWeight(100);
    pub const EXTRA_LIGHT: FontWeight = FontWeight(200);
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const SEMI_BOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);
    pub const EXTRA_BOLD: FontWeight = FontWeight(800);
    pub const BLACK: FontWeight = FontWeight(900);
}

impl Default for FontWeight {
    fn default() -> Self {
        FontWeight::NORMAL
    }
}

/// Named font family. Resolving the name to glyph data is left to the renderer.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FontFamily(Arc<str>);

impl FontFamily {
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FontFamily").field(&&*self.0).finish()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// `None` means the renderer's default family.
    pub font_family: Option<FontFamily>,
    pub font_weight: FontWeight,
    pub font_size: Sp,
}

impl TextStyle {
    pub fn new(font_family: Option<FontFamily>, font_weight: FontWeight, font_size: Sp) -> Self {
        Self {
            font_family,
            font_weight,
            font_size,
        }
    }

    pub fn with_font_family(mut self, family: Option<FontFamily>) -> Self {
        self.font_family = family;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(None, FontWeight::NORMAL, Sp(14.0))
    }
}
