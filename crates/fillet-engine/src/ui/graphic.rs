use std::sync::Arc;

use crate::coords::{Rect, UvRect, Vec2};
use crate::material::Material;

/// A sprite: a rectangular region of an atlas texture.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sprite {
    /// Atlas size in texels.
    pub texture_size: Vec2,
    /// Sprite region in texels, top-left origin.
    pub region: Rect,
}

impl Sprite {
    #[inline]
    pub const fn new(texture_size: Vec2, region: Rect) -> Self {
        Self { texture_size, region }
    }

    /// A sprite covering the whole texture.
    #[inline]
    pub const fn whole(texture_size: Vec2) -> Self {
        Self { texture_size, region: Rect::from_size(texture_size) }
    }

    /// Outer UV of the region; the unit square for an empty atlas.
    pub fn outer_uv(&self) -> UvRect {
        let ts = self.texture_size;
        if !(ts.x > 0.0 && ts.y > 0.0) {
            return UvRect::UNIT;
        }
        let r = self.region.normalized();
        let max = r.max();
        UvRect::new(r.origin.x / ts.x, r.origin.y / ts.y, max.x / ts.x, max.y / ts.y)
    }
}

/// A UI image surface.
///
/// Holds the layout rect, an optional sprite and the material used to draw
/// it. Renderers read the material; owners flag changes through
/// [`Graphic::set_material_dirty`].
#[derive(Debug, Default)]
pub struct Graphic {
    rect: Rect,
    sprite: Option<Sprite>,
    material: Option<Arc<Material>>,
    material_dirty: bool,
}

impl Graphic {
    pub fn new(rect: Rect) -> Self {
        Self { rect, ..Self::default() }
    }

    pub fn with_sprite(mut self, sprite: Sprite) -> Self {
        self.sprite = Some(sprite);
        self
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Moves or resizes the graphic. Returns `true` when the size changed,
    /// which is when rounded-corner parameters must be refreshed.
    pub fn set_rect(&mut self, rect: Rect) -> bool {
        let resized = rect.size != self.rect.size;
        self.rect = rect;
        resized
    }

    #[inline]
    pub fn sprite(&self) -> Option<&Sprite> {
        self.sprite.as_ref()
    }

    pub fn set_sprite(&mut self, sprite: Option<Sprite>) {
        self.sprite = sprite;
    }

    #[inline]
    pub fn material(&self) -> Option<&Arc<Material>> {
        self.material.as_ref()
    }

    pub fn set_material(&mut self, material: Option<Arc<Material>>) {
        self.material = material;
        self.material_dirty = true;
    }

    /// True when `material` is the one currently attached.
    pub fn has_material(&self, material: &Arc<Material>) -> bool {
        self.material.as_ref().is_some_and(|m| Arc::ptr_eq(m, material))
    }

    #[inline]
    pub fn set_material_dirty(&mut self) {
        self.material_dirty = true;
    }

    /// Returns and clears the dirty flag.
    pub fn take_material_dirty(&mut self) -> bool {
        std::mem::take(&mut self.material_dirty)
    }
}
