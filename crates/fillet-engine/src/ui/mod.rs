//! UI surfaces and the rounded-corners component that drives them.

mod graphic;
mod rounded_corners;

pub use graphic::{Graphic, Sprite};
pub use rounded_corners::{RoundedCorners, DEFAULT_RADIUS};
