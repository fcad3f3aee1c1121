//! Coordinate and geometry types shared by the coverage evaluator, materials
//! and the rasterizer.
//!
//! Spaces:
//! - rect-local logical pixels, origin top-left, +X right, +Y down
//! - normalized sample UV, `(0, 0)` at the top-left corner of the rect
//! - atlas UV, addressed through an [`UvRect`]

mod rect;
mod uv_rect;
mod vec2;

pub use rect::Rect;
pub use uv_rect::UvRect;
pub use vec2::Vec2;
