//! Resolution-independent shape coverage.
//!
//! Shapes are described by signed distance fields and converted to coverage
//! with a one-sample anti-aliasing band. Evaluators are plain values with no
//! interior state, so they can be shared freely across threads.

mod rounded_rect;

pub use rounded_rect::{sd_rounded_box, RoundedRectCoverage, Shade};
