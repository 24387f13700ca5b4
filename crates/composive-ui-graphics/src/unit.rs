use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Density-independent pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Dp = Dp(0.0);

    pub fn value(self) -> f32 {
        self.0
    }

    /// Converts to physical pixels for the given density.
    pub fn to_px(self, density: f32) -> f32 {
        self.0 * density
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        if density <= 0.0 {
            return Dp(px);
        }
        Dp(px / density)
    }
}

impl Mul<f32> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f32) -> Dp {
        Dp(self.0 * rhs)
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Dp) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.dp", self.0)
    }
}

/// Scale-independent pixels, used for font sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Sp(pub f32);

impl Sp {
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Mul<f32> for Sp {
    type Output = Sp;

    fn mul(self, rhs: f32) -> Sp {
        Sp(self.0 * rhs)
    }
}

impl fmt::Display for Sp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.sp", self.0)
    }
}

/// Width and height of a window in [`Dp`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DpSize {
    pub width: Dp,
    pub height: Dp,
}

impl DpSize {
    pub const fn new(width: Dp, height: Dp) -> Self {
        Self { width, height }
    }
}
