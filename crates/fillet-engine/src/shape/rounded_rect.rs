use crate::coords::{UvRect, Vec2};
use crate::error::{check_radius, Result};

/// Narrowest anti-aliasing band accepted; anything smaller is a hard edge.
const MIN_AA_BAND: f32 = 1e-6;

/// Signed distance from `p` to a rounded box centered at the origin.
///
/// Negative inside, positive outside, zero on the boundary. `radius` must
/// already be clamped to `half_size.min_elem()`.
#[inline]
pub fn sd_rounded_box(p: Vec2, half_size: Vec2, radius: f32) -> f32 {
    let q = p.abs() - half_size + Vec2::splat(radius);
    q.max(Vec2::zero()).length() + q.max_elem().min(0.0) - radius
}

/// Result of evaluating one sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shade {
    /// Fraction of the sample covered by the shape, in `[0, 1]`.
    pub coverage: f32,
    /// Where to sample the atlas texture for this sample.
    pub tex_uv: Vec2,
}

/// Anti-aliased coverage of a rounded rectangle, evaluated in normalized
/// sample space.
///
/// The evaluator is immutable and `Copy`; build a new one whenever the
/// extents, radius or outer UV change. `radius` is taken in final pixel
/// units, see [`crate::material::MaterialParams`] for the doubling applied
/// by the component layer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoundedRectCoverage {
    extents: Vec2,
    radius: f32,
    outer_uv: UvRect,
    aa_band: f32,
    degenerate: bool,
}

impl RoundedRectCoverage {
    /// Fails only for a negative (or NaN) radius. Everything else is clamped:
    /// - radius is limited to half the smaller extent
    /// - zero, negative or non-finite extents produce an empty shape
    /// - `pixel_width` is limited to `[min(1e-6, w, h), min(w, h)]`
    pub fn new(extents: Vec2, radius: f32, outer_uv: UvRect, pixel_width: f32) -> Result<Self> {
        let radius = check_radius(radius)?;

        let degenerate = !(extents.x > 0.0 && extents.y > 0.0) || !extents.is_finite();
        if degenerate {
            return Ok(Self {
                extents: Vec2::zero(),
                radius: 0.0,
                outer_uv,
                aa_band: MIN_AA_BAND,
                degenerate,
            });
        }

        let half = extents * 0.5;
        let radius = radius.min(half.min_elem());

        // A band wider than the rect would dim its center below full coverage.
        let narrowest = extents.min_elem();
        let floor = MIN_AA_BAND.min(narrowest);
        let aa_band = if pixel_width.is_nan() {
            floor
        } else {
            pixel_width.clamp(floor, narrowest)
        };

        Ok(Self { extents, radius, outer_uv, aa_band, degenerate })
    }

    #[inline]
    pub fn extents(&self) -> Vec2 {
        self.extents
    }

    /// Radius after clamping to the rect.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn outer_uv(&self) -> UvRect {
        self.outer_uv
    }

    /// Signed distance, in rect units, from the sample to the rounded edge.
    #[inline]
    pub fn signed_distance(&self, sample_uv: Vec2) -> f32 {
        if self.degenerate {
            return f32::INFINITY;
        }
        let half = self.extents * 0.5;
        let p = sample_uv.mul_elem(self.extents) - half;
        sd_rounded_box(p, half, self.radius)
    }

    /// Coverage in `[0, 1]`. Samples outside the unit square are never covered.
    #[inline]
    pub fn coverage(&self, sample_uv: Vec2) -> f32 {
        if self.degenerate || !in_unit_square(sample_uv) {
            return 0.0;
        }
        let d = self.signed_distance(sample_uv);
        (0.5 - d / self.aa_band).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn evaluate(&self, sample_uv: Vec2) -> Shade {
        Shade {
            coverage: self.coverage(sample_uv),
            tex_uv: self.outer_uv.map(sample_uv),
        }
    }
}

#[inline]
fn in_unit_square(p: Vec2) -> bool {
    (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)
}
