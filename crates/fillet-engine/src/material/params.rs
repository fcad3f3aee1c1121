use bytemuck::{Pod, Zeroable};

use crate::coords::{UvRect, Vec2};
use crate::error::Result;
use crate::shape::RoundedRectCoverage;

/// Factor applied to the component radius before it reaches the shader.
///
/// Kept for compatibility with the independent-corners variant, which reads
/// its radii at twice this scale.
pub const RADIUS_SCALE: f32 = 2.0;

/// Uniform block consumed by the rounded-corners program.
///
/// Layout (32 bytes, std140 compatible):
///
///  offset  0  width_height_radius [f32; 4]  (w, h, radius * 2, unused)
///  offset 16  outer_uv            [f32; 4]  (u_min, v_min, u_max, v_max)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MaterialParams {
    pub width_height_radius: [f32; 4],
    pub outer_uv: [f32; 4],
}

impl MaterialParams {
    /// Packs a component radius; the stored radius is `radius * RADIUS_SCALE`.
    pub fn new(extents: Vec2, radius: f32, outer_uv: UvRect) -> Self {
        Self {
            width_height_radius: [extents.x, extents.y, radius * RADIUS_SCALE, 0.0],
            outer_uv: outer_uv.to_array(),
        }
    }

    #[inline]
    pub fn extents(&self) -> Vec2 {
        Vec2::new(self.width_height_radius[0], self.width_height_radius[1])
    }

    /// Radius as the shader sees it (already scaled).
    #[inline]
    pub fn shader_radius(&self) -> f32 {
        self.width_height_radius[2]
    }

    #[inline]
    pub fn outer_uv(&self) -> UvRect {
        UvRect::from_array(self.outer_uv)
    }

    /// Raw bytes for upload into a uniform buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Builds the coverage evaluator this block describes.
    pub fn coverage(&self, pixel_width: f32) -> Result<RoundedRectCoverage> {
        RoundedRectCoverage::new(self.extents(), self.shader_radius(), self.outer_uv(), pixel_width)
    }
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self::new(Vec2::zero(), 0.0, UvRect::UNIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn radius_is_doubled() {
        let p = MaterialParams::new(Vec2::new(200.0, 100.0), 40.0, UvRect::UNIT);
        assert_eq!(p.width_height_radius, [200.0, 100.0, 80.0, 0.0]);
        assert_eq!(p.outer_uv, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn block_is_32_bytes() {
        let p = MaterialParams::default();
        assert_eq!(p.as_bytes().len(), 32);
        assert_eq!(std::mem::size_of::<MaterialParams>(), 32);
    }

    #[test]
    fn bytes_are_little_floats_in_order() {
        let p = MaterialParams::new(Vec2::new(1.0, 2.0), 1.5, UvRect::new(0.0, 0.25, 0.5, 1.0));
        let floats: &[f32] = bytemuck::cast_slice(p.as_bytes());
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 0.0, 0.25, 0.5, 1.0]);
    }

    #[test]
    fn coverage_uses_scaled_radius() {
        let p = MaterialParams::new(Vec2::new(100.0, 100.0), 10.0, UvRect::UNIT);
        let cov = p.coverage(1.0).unwrap();
        assert_eq!(cov.radius(), 20.0);
        assert_eq!(cov.extents(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn negative_radius_in_block_is_rejected() {
        let p = MaterialParams::new(Vec2::new(10.0, 10.0), -1.0, UvRect::UNIT);
        assert!(matches!(p.coverage(1.0), Err(Error::InvalidParameter { .. })));
    }
}
