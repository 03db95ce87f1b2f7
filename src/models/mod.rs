pub mod image;
pub mod logo;

pub use image::*;
pub use logo::*;
