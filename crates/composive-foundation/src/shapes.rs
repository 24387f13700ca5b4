use composive_ui_graphics::RoundedCornerShape;

/// Corner shapes for small, medium and large surfaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shapes {
    pub small: RoundedCornerShape,
    pub medium: RoundedCornerShape,
    pub large: RoundedCornerShape,
}

impl Shapes {
    /// 4, 6 and 8 dp corners.
    pub fn material() -> Self {
        Self::rounded(4.0, 6.0, 8.0)
    }

    /// 4, 6 and 8 dp corners, matching [`Shapes::material`].
    pub fn cupertino() -> Self {
        Self::rounded(4.0, 6.0, 8.0)
    }

    fn rounded(small: f32, medium: f32, large: f32) -> Self {
        Self {
            small: RoundedCornerShape::uniform(small),
            medium: RoundedCornerShape::uniform(medium),
            large: RoundedCornerShape::uniform(large),
        }
    }
}
