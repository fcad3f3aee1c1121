use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use state::InitCell;

use crate::coords::{UvRect, Vec2};
use crate::error::{Error, Result};
use crate::shape::{RoundedRectCoverage, Shade};

use super::MaterialParams;

/// Name of the rounded-corners program.
pub const ROUNDED_CORNERS: &str = "UI/RoundedCorners/RoundedCorners";

/// Name of the pass-through program used by graphics without a material.
pub const DEFAULT: &str = "UI/Default";

/// Built-in program behaviors.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ProgramKind {
    /// Full coverage over the rect; texture sampled through the outer UV.
    Default,
    /// Rounded-rect coverage driven by [`MaterialParams`].
    RoundedCorners,
}

impl ProgramKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            DEFAULT => Some(ProgramKind::Default),
            ROUNDED_CORNERS => Some(ProgramKind::RoundedCorners),
            _ => None,
        }
    }
}

/// A named shading program.
///
/// Programs are immutable and shared between every material that uses them.
#[derive(Debug, PartialEq)]
pub struct Program {
    name: String,
    kind: ProgramKind,
}

impl Program {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> ProgramKind {
        self.kind
    }

    /// Resolves `params` once for a whole pass.
    ///
    /// This is where parameter validation happens; the returned value is
    /// infallible per sample.
    pub fn bind(&self, params: &MaterialParams, pixel_width: f32) -> Result<BoundProgram> {
        Ok(match self.kind {
            ProgramKind::Default => BoundProgram::Full(params.outer_uv()),
            ProgramKind::RoundedCorners => BoundProgram::Rounded(params.coverage(pixel_width)?),
        })
    }
}

/// A program with its parameters applied, ready to shade samples.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BoundProgram {
    Full(UvRect),
    Rounded(RoundedRectCoverage),
}

impl BoundProgram {
    #[inline]
    pub fn shade(&self, sample_uv: Vec2) -> Shade {
        match self {
            BoundProgram::Full(uv) => {
                let inside = (0.0..=1.0).contains(&sample_uv.x) && (0.0..=1.0).contains(&sample_uv.y);
                Shade {
                    coverage: if inside { 1.0 } else { 0.0 },
                    tex_uv: uv.map(sample_uv),
                }
            }
            BoundProgram::Rounded(cov) => cov.evaluate(sample_uv),
        }
    }
}

/// Name-keyed program cache.
///
/// Entries are created on first lookup and never replaced afterwards.
#[derive(Debug, Default)]
pub struct ProgramCache {
    programs: RwLock<HashMap<String, Arc<Program>>>,
}

impl ProgramCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached program, creating it on first use.
    pub fn find(&self, name: &str) -> Result<Arc<Program>> {
        if let Some(program) = self.programs.read().get(name) {
            return Ok(Arc::clone(program));
        }

        let kind = ProgramKind::from_name(name)
            .ok_or_else(|| Error::UnknownProgram(name.to_owned()))?;

        // Another thread may have won the race between the two locks.
        let mut programs = self.programs.write();
        let program = programs.entry(name.to_owned()).or_insert_with(|| {
            log::debug!("program `{name}` loaded");
            Arc::new(Program { name: name.to_owned(), kind })
        });
        Ok(Arc::clone(program))
    }

    pub fn len(&self) -> usize {
        self.programs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static GLOBAL: InitCell<ProgramCache> = InitCell::new();

/// Process-wide cache shared by every material.
pub fn global() -> &'static ProgramCache {
    GLOBAL.get_or_init(ProgramCache::new)
}

/// Looks up `name` in the process-wide cache.
pub fn find(name: &str) -> Result<Arc<Program>> {
    global().find(name)
}
