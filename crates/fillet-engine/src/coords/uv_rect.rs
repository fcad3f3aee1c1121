use super::Vec2;

/// Outer UV rectangle of a sprite inside a shared atlas texture.
///
/// Invariant: `0 <= min <= max <= 1` on both axes. [`UvRect::new`] enforces
/// it by clamping and reordering rather than failing, so a bad atlas entry
/// never aborts a layout pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UvRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl UvRect {
    /// The whole texture: `(0, 0, 1, 1)`.
    pub const UNIT: UvRect = UvRect {
        min: Vec2::new(0.0, 0.0),
        max: Vec2::new(1.0, 1.0),
    };

    pub fn new(u_min: f32, v_min: f32, u_max: f32, v_max: f32) -> Self {
        if u_min > u_max || v_min > v_max {
            log::warn!(
                "unordered outer uv ({u_min}, {v_min}, {u_max}, {v_max}); swapping bounds"
            );
        }
        let (u0, u1) = ordered(clamp_unit(u_min), clamp_unit(u_max));
        let (v0, v1) = ordered(clamp_unit(v_min), clamp_unit(v_max));
        Self {
            min: Vec2::new(u0, v0),
            max: Vec2::new(u1, v1),
        }
    }

    /// Packs as `(u_min, v_min, u_max, v_max)`, the layout shaders expect.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }

    #[inline]
    pub fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    /// Maps a normalized sample into the atlas sub-region.
    #[inline]
    pub fn map(self, sample_uv: Vec2) -> Vec2 {
        self.min + sample_uv.mul_elem(self.size())
    }
}

impl Default for UvRect {
    fn default() -> Self {
        Self::UNIT
    }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    // NaN collapses to 0.
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[inline]
fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}
