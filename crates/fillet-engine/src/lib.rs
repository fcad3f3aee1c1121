//! Fillet engine crate.
//!
//! Rounded-corner coverage for UI images: the signed-distance evaluator,
//! the material parameter block and program cache that feed it, the
//! component that keeps a graphic's material in sync with its layout, and a
//! CPU rasterizer.

pub mod coords;
pub mod error;
pub mod logging;
pub mod material;
pub mod paint;
pub mod raster;
pub mod shape;
pub mod ui;

pub use error::{Error, Result};
