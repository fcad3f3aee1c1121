use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;

use super::program::{BoundProgram, Program};
use super::MaterialParams;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique material identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MaterialId(u64);

/// A program instance with its own parameter block.
///
/// Shared as `Arc<Material>` between the component that owns it and the
/// graphic it is attached to. Parameters are written by the owner and read by
/// renderers.
#[derive(Debug)]
pub struct Material {
    id: MaterialId,
    program: Arc<Program>,
    params: RwLock<MaterialParams>,
}

impl Material {
    pub fn new(program: Arc<Program>) -> Arc<Self> {
        let id = MaterialId(NEXT_ID.fetch_add(1, Ordering::Relaxed));
        log::debug!("material {:?} created from `{}`", id, program.name());
        Arc::new(Self {
            id,
            program,
            params: RwLock::new(MaterialParams::default()),
        })
    }

    #[inline]
    pub fn id(&self) -> MaterialId {
        self.id
    }

    #[inline]
    pub fn program(&self) -> &Arc<Program> {
        &self.program
    }

    #[inline]
    pub fn params(&self) -> MaterialParams {
        *self.params.read()
    }

    #[inline]
    pub fn set_params(&self, params: MaterialParams) {
        *self.params.write() = params;
    }

    /// Snapshots the current parameters into a bound program.
    pub fn bind(&self, pixel_width: f32) -> Result<BoundProgram> {
        self.program.bind(&self.params(), pixel_width)
    }
}

impl Drop for Material {
    fn drop(&mut self) {
        log::debug!("material {:?} released", self.id);
    }
}
