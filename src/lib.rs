pub mod mbd;
pub mod color;
pub mod field;
pub mod image;

pub use mbd::*;
pub use color::*;
pub use field::*;
pub use image::*;
