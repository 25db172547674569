pub mod constants;
pub mod cursor;
pub mod field;
pub mod glyph;
pub mod particle;

pub use constants::*;
pub use cursor::*;
pub use field::*;
pub use glyph::*;
pub use particle::*;
