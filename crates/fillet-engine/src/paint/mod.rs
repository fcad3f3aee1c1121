//! Color model shared by textures, tints and rasterized output.
//!
//! All colors are linear with premultiplied alpha.

pub mod color;

pub use color::Color;
