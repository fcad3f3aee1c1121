//! Materials: named programs plus their parameter blocks.
//!
//! - `program`: the process-wide, name-keyed program cache
//! - `params`: the uniform block pushed on every layout change
//! - `instance`: a program instance shared between an owner and a graphic

mod instance;
mod params;
pub mod program;

pub use instance::{Material, MaterialId};
pub use params::{MaterialParams, RADIUS_SCALE};
pub use program::{BoundProgram, Program, ProgramCache, ProgramKind};
