//! Style and formatting value types.

pub mod color;

pub use color::RGBColor;
