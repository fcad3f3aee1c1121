use rayon::prelude::*;

use crate::coords::{Rect, UvRect, Vec2};
use crate::error::{Error, Result};
use crate::material::{program, MaterialParams};
use crate::paint::Color;
use crate::ui::Graphic;

use super::{Pixmap, Texture};

/// Largest output width or height, in pixels.
pub const MAX_OUTPUT_SIDE: u32 = 16_384;

/// Rasterizer configuration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RasterConfig {
    /// Output pixels per logical pixel.
    ///
    /// Also sizes the anti-aliasing band: one output pixel is `1 / scale`
    /// logical pixels wide.
    pub scale: f32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

/// Data-parallel CPU renderer for graphics.
///
/// Each output pixel is shaded independently from its center sample, rows
/// are distributed across the rayon pool.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    scale: f32,
}

impl Rasterizer {
    pub fn new(config: RasterConfig) -> Self {
        let scale = if config.scale > 0.0 && config.scale.is_finite() {
            config.scale
        } else {
            log::warn!("invalid raster scale {}; using 1.0", config.scale);
            1.0
        };
        Self { scale }
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Output size in pixels for a graphic of `extents` logical pixels.
    ///
    /// Empty or non-finite extents give `(0, 0)`. Either side above
    /// [`MAX_OUTPUT_SIDE`] fails with `OutputTooLarge`.
    pub fn output_size(&self, extents: Vec2) -> Result<(u32, u32)> {
        if Rect::from_size(extents).is_empty() || !extents.is_finite() {
            return Ok((0, 0));
        }
        let px = |v: f32| (f64::from(v) * f64::from(self.scale)).ceil();
        let (width, height) = (px(extents.x), px(extents.y));
        let limit = f64::from(MAX_OUTPUT_SIDE);
        if width > limit || height > limit {
            return Err(Error::OutputTooLarge { width, height, limit: MAX_OUTPUT_SIDE });
        }
        Ok((width as u32, height as u32))
    }

    /// Renders `graphic` with its attached material.
    ///
    /// Pixel color is `texture(tex_uv) * tint * coverage`; without a
    /// texture the sample is white. Graphics without a material use the
    /// default program, which covers the whole rect.
    pub fn render(&self, graphic: &Graphic, texture: Option<&Texture>, tint: Color) -> Result<Pixmap> {
        let extents = graphic.rect().size;
        let (width, height) = self.output_size(extents)?;
        let mut pixmap = Pixmap::new(width, height);
        if pixmap.is_empty() {
            log::debug!("skipping empty graphic {:?}", extents);
            return Ok(pixmap);
        }

        let pixel_width = 1.0 / self.scale;
        let bound = match graphic.material() {
            Some(material) => material.bind(pixel_width)?,
            None => {
                let outer_uv = graphic.sprite().map_or(UvRect::UNIT, |s| s.outer_uv());
                let params = MaterialParams::new(extents, 0.0, outer_uv);
                program::find(program::DEFAULT)?.bind(&params, pixel_width)?
            }
        };

        let inv = Vec2::new(1.0 / (extents.x * self.scale), 1.0 / (extents.y * self.scale));
        pixmap
            .pixels_mut()
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                let v = (y as f32 + 0.5) * inv.y;
                for (x, out) in row.iter_mut().enumerate() {
                    let u = (x as f32 + 0.5) * inv.x;
                    let shade = bound.shade(Vec2::new(u, v));
                    if shade.coverage <= 0.0 {
                        continue;
                    }
                    let base = texture.map_or(Color::WHITE, |t| t.sample(shade.tex_uv));
                    *out = base.modulate(tint).scale(shade.coverage);
                }
            });

        log::debug!("rasterized {width}x{height} at scale {}", self.scale);
        Ok(pixmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{RoundedCorners, Sprite};

    fn graphic(w: f32, h: f32) -> Graphic {
        Graphic::new(Rect::new(0.0, 0.0, w, h))
    }

    #[test]
    fn output_size_rounds_up() {
        let r = Rasterizer::new(RasterConfig { scale: 2.0 });
        assert_eq!(r.output_size(Vec2::new(10.25, 3.0)), Ok((21, 6)));
        assert_eq!(r.output_size(Vec2::new(0.0, 3.0)), Ok((0, 0)));
    }

    #[test]
    fn non_finite_extents_are_empty() {
        let r = Rasterizer::new(RasterConfig::default());
        assert_eq!(r.output_size(Vec2::new(f32::INFINITY, 1.0)), Ok((0, 0)));
        assert_eq!(r.output_size(Vec2::new(4.0, f32::NAN)), Ok((0, 0)));
    }

    #[test]
    fn oversized_output_is_rejected() {
        let r = Rasterizer::new(RasterConfig::default());
        assert!(matches!(
            r.output_size(Vec2::new(1e12, 1e12)),
            Err(Error::OutputTooLarge { limit: MAX_OUTPUT_SIDE, .. })
        ));
        let side = MAX_OUTPUT_SIDE as f32;
        assert_eq!(r.output_size(Vec2::new(side, 1.0)), Ok((MAX_OUTPUT_SIDE, 1)));
        assert!(r.output_size(Vec2::new(side + 1.0, 1.0)).is_err());

        // Scale overflowing a finite extent is caught too.
        let big = Rasterizer::new(RasterConfig { scale: f32::MAX });
        assert!(big.output_size(Vec2::new(1e30, 1.0)).is_err());
    }

    #[test]
    fn rendering_oversized_graphic_fails() {
        let err = Rasterizer::new(RasterConfig::default())
            .render(&graphic(1e12, 16.0), None, Color::WHITE)
            .unwrap_err();
        assert!(matches!(err, Error::OutputTooLarge { .. }));
    }

    #[test]
    fn invalid_scale_falls_back() {
        assert_eq!(Rasterizer::new(RasterConfig { scale: -1.0 }).scale(), 1.0);
        assert_eq!(Rasterizer::new(RasterConfig { scale: f32::NAN }).scale(), 1.0);
    }

    #[test]
    fn plain_graphic_is_fully_opaque() {
        let pm = Rasterizer::new(RasterConfig::default())
            .render(&graphic(8.0, 4.0), None, Color::WHITE)
            .unwrap();
        assert_eq!((pm.width(), pm.height()), (8, 4));
        assert!(pm.pixels().iter().all(|c| *c == Color::WHITE));
    }

    #[test]
    fn rounded_graphic_has_clear_corners_and_solid_center() {
        let mut g = graphic(64.0, 64.0);
        let _rc = RoundedCorners::create(&mut g, 8.0).unwrap();
        let pm = Rasterizer::new(RasterConfig::default())
            .render(&g, None, Color::WHITE)
            .unwrap();

        for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
            assert_eq!(pm.get(x, y).unwrap().a, 0.0, "corner {x},{y}");
        }
        assert_eq!(pm.get(32, 32).unwrap(), Color::WHITE);
        // Middle of an edge is inside the straight section.
        assert_eq!(pm.get(0, 32).unwrap(), Color::WHITE);
    }

    #[test]
    fn rendering_is_symmetric() {
        let mut g = graphic(40.0, 24.0);
        let _rc = RoundedCorners::create(&mut g, 5.0).unwrap();
        let pm = Rasterizer::new(RasterConfig { scale: 1.0 })
            .render(&g, None, Color::WHITE)
            .unwrap();
        let (w, h) = (pm.width(), pm.height());
        for y in 0..h {
            for x in 0..w {
                let a = pm.get(x, y).unwrap().a;
                let b = pm.get(w - 1 - x, h - 1 - y).unwrap().a;
                assert!((a - b).abs() < 1e-4, "{x},{y}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn zero_size_graphic_renders_nothing() {
        let mut g = graphic(0.0, 16.0);
        let _rc = RoundedCorners::create(&mut g, 4.0).unwrap();
        let pm = Rasterizer::new(RasterConfig::default()).render(&g, None, Color::WHITE).unwrap();
        assert!(pm.is_empty());
    }

    #[test]
    fn tint_and_texture_are_combined() {
        let red = Color::from_straight(1.0, 0.0, 0.0, 1.0);
        let half_white = Color::from_straight(1.0, 1.0, 1.0, 0.5);
        let tex = Texture::solid(4, 4, red);
        let pm = Rasterizer::new(RasterConfig::default())
            .render(&graphic(4.0, 4.0), Some(&tex), half_white)
            .unwrap();
        assert_eq!(pm.get(1, 1).unwrap().to_rgba8(), [255, 0, 0, 128]);
    }

    #[test]
    fn sprite_region_is_sampled() {
        // Left half red, right half blue; the sprite is the right half.
        let mut bytes = Vec::new();
        for _y in 0..2 {
            bytes.extend_from_slice(&[255, 0, 0, 255, 255, 0, 0, 255]);
            bytes.extend_from_slice(&[0, 0, 255, 255, 0, 0, 255, 255]);
        }
        let tex = Texture::from_rgba8(4, 2, &bytes).unwrap();
        let sprite = Sprite::new(tex.size(), Rect::new(2.0, 0.0, 2.0, 2.0));
        let g = graphic(2.0, 2.0).with_sprite(sprite);
        let pm = Rasterizer::new(RasterConfig::default())
            .render(&g, Some(&tex), Color::WHITE)
            .unwrap();
        assert!(pm.pixels().iter().all(|c| c.to_rgba8() == [0, 0, 255, 255]));
    }

    #[test]
    fn higher_scale_keeps_shape() {
        let mut g = graphic(32.0, 32.0);
        let _rc = RoundedCorners::create(&mut g, 4.0).unwrap();
        let lo = Rasterizer::new(RasterConfig { scale: 1.0 }).render(&g, None, Color::WHITE).unwrap();
        let hi = Rasterizer::new(RasterConfig { scale: 4.0 }).render(&g, None, Color::WHITE).unwrap();
        assert_eq!((hi.width(), hi.height()), (128, 128));
        let area = |p: &Pixmap, s: f32| p.pixels().iter().map(|c| c.a).sum::<f32>() / (s * s);
        assert!((area(&lo, 1.0) - area(&hi, 4.0)).abs() < 4.0);
    }
}
