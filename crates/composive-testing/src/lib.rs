//! Testing utilities and fake window sensors for Composive

pub mod platforms;
pub mod testing;

pub use testing::*;

pub mod prelude {
    pub use crate::platforms;
    pub use crate::testing::*;
}
