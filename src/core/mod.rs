pub mod color;
pub mod scene;

pub use color::Color;
pub use scene::*;
