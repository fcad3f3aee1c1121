//! CPU rasterization.
//!
//! Renders a [`Graphic`](crate::ui::Graphic) through its material into a
//! [`Pixmap`], sampling an optional atlas [`Texture`].

mod pixmap;
mod rasterizer;
mod texture;

pub use pixmap::Pixmap;
pub use rasterizer::{RasterConfig, Rasterizer, MAX_OUTPUT_SIDE};
pub use texture::Texture;
