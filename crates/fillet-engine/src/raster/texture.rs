use crate::coords::Vec2;
use crate::error::{Error, Result};
use crate::paint::Color;

/// CPU texture (premultiplied, row-major, top row first).
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    width: u32,
    height: u32,
    texels: Vec<Color>,
}

impl Texture {
    /// From straight-alpha RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(Error::TextureSize { expected, actual: bytes.len() });
        }
        let texels = bytes
            .chunks_exact(4)
            .map(|px| Color::from_rgba8([px[0], px[1], px[2], px[3]]))
            .collect();
        Ok(Self { width, height, texels })
    }

    /// Texture filled with one color.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            texels: vec![color; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    #[inline]
    fn texel(&self, x: i64, y: i64) -> Color {
        let x = x.clamp(0, self.width as i64 - 1) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;
        self.texels[y * self.width as usize + x]
    }

    /// Bilinear sample with clamp-to-edge addressing. Empty textures sample
    /// as transparent.
    pub fn sample(&self, uv: Vec2) -> Color {
        if self.width == 0 || self.height == 0 || !uv.is_finite() {
            return Color::TRANSPARENT;
        }
        let x = uv.x * self.width as f32 - 0.5;
        let y = uv.y * self.height as f32 - 0.5;
        let x0 = x.floor();
        let y0 = y.floor();
        let (tx, ty) = (x - x0, y - y0);
        let (x0, y0) = (x0 as i64, y0 as i64);

        let top = self.texel(x0, y0).lerp(self.texel(x0 + 1, y0), tx);
        let bottom = self.texel(x0, y0 + 1).lerp(self.texel(x0 + 1, y0 + 1), tx);
        top.lerp(bottom, ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Texture {
        // 2x2: red, green / blue, white
        let bytes = [
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 255, 255, 255, 255,
        ];
        Texture::from_rgba8(2, 2, &bytes).unwrap()
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = Texture::from_rgba8(2, 2, &[0; 15]).unwrap_err();
        assert_eq!(err, Error::TextureSize { expected: 16, actual: 15 });
    }

    #[test]
    fn texel_centers_sample_exactly() {
        let t = checker();
        assert_eq!(t.sample(Vec2::new(0.25, 0.25)).to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(t.sample(Vec2::new(0.75, 0.25)).to_rgba8(), [0, 255, 0, 255]);
        assert_eq!(t.sample(Vec2::new(0.25, 0.75)).to_rgba8(), [0, 0, 255, 255]);
        assert_eq!(t.sample(Vec2::new(0.75, 0.75)).to_rgba8(), [255, 255, 255, 255]);
    }

    #[test]
    fn edges_clamp() {
        let t = checker();
        assert_eq!(t.sample(Vec2::new(0.0, 0.0)).to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(t.sample(Vec2::new(1.0, 1.0)).to_rgba8(), [255, 255, 255, 255]);
    }

    #[test]
    fn center_blends_all_four() {
        let c = checker().sample(Vec2::new(0.5, 0.5));
        assert_eq!(c.to_rgba8(), [128, 128, 128, 255]);
    }

    #[test]
    fn empty_texture_is_transparent() {
        let t = Texture::solid(0, 0, Color::WHITE);
        assert_eq!(t.sample(Vec2::new(0.5, 0.5)), Color::TRANSPARENT);
    }
}
