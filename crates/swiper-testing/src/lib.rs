//! Testing utilities and harness for Swiper

pub mod assertions;
pub mod fixtures;
pub mod robot;

pub use fixtures::*;
pub use robot::*;

pub mod prelude {
    pub use crate::assertions;
    pub use crate::fixtures::*;
    pub use crate::robot::*;
}
