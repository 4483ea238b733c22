//! Terminal rendering of classified lines

pub mod palette;
pub mod writer;

pub use palette::Palette;
pub use writer::ColorWriter;
