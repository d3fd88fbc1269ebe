pub mod constants;
pub mod cell;
pub mod color;
pub mod error;
pub mod palette;

pub use constants::*;
pub use cell::*;
pub use color::*;
pub use error::*;
pub use palette::*;
