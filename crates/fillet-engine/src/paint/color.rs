/// Premultiplied RGBA color.
///
/// Invariant: `r`, `g` and `b` are already multiplied by `a`. Coverage and
/// bilinear filtering are plain component-wise scales in this form.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_premul(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// From straight-alpha components, clamped to `[0, 1]`.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// From straight-alpha 8-bit RGBA, as stored in PNG files.
    #[inline]
    pub fn from_rgba8(px: [u8; 4]) -> Self {
        let f = |v: u8| v as f32 / 255.0;
        Self::from_straight(f(px[0]), f(px[1]), f(px[2]), f(px[3]))
    }

    /// Back to straight-alpha 8-bit RGBA.
    pub fn to_rgba8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(r), q(g), q(b), q(a)]
    }

    /// Straight-alpha components. RGB is 0 when `a == 0`.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Scales every channel, e.g. by coverage.
    #[inline]
    pub fn scale(self, k: f32) -> Self {
        Self::from_premul(self.r * k, self.g * k, self.b * k, self.a * k)
    }

    /// Component-wise product (tinting).
    #[inline]
    pub fn modulate(self, other: Color) -> Self {
        Self::from_premul(self.r * other.r, self.g * other.g, self.b * other.b, self.a * other.a)
    }

    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let m = |a: f32, b: f32| a + (b - a) * t;
        Self::from_premul(m(self.r, other.r), m(self.g, other.g), m(self.b, other.b), m(self.a, other.a))
    }
}
