use std::sync::Arc;

use crate::coords::{Rect, UvRect, Vec2};
use crate::error::{check_radius, Result};
use crate::material::{program, Material, MaterialParams};

use super::Graphic;

/// Radius used when none is configured.
pub const DEFAULT_RADIUS: f32 = 40.0;

/// Rounds the corners of a [`Graphic`].
///
/// Owns a rounded-corners material, attaches it to the graphic and keeps its
/// parameter block in sync with the graphic's size, the radius and the
/// sprite's outer UV.
///
/// Lifecycle:
/// - [`create`](Self::create) when the effect is added to a graphic
/// - [`update`](Self::update) / [`on_rect_dimensions_change`](Self::on_rect_dimensions_change)
///   whenever layout changes
/// - [`destroy`](Self::destroy) when the effect is removed
#[derive(Debug)]
pub struct RoundedCorners {
    radius: f32,
    outer_uv: UvRect,
    material: Arc<Material>,
    enabled: bool,
}

impl RoundedCorners {
    /// Creates the material and attaches it to `graphic`.
    ///
    /// Fails with `InvalidParameter` for a negative radius, before anything
    /// is allocated or attached.
    pub fn create(graphic: &mut Graphic, radius: f32) -> Result<Self> {
        let radius = check_radius(radius)?;
        let material = Material::new(program::find(program::ROUNDED_CORNERS)?);

        let mut this = Self {
            radius,
            outer_uv: UvRect::UNIT,
            material,
            enabled: true,
        };
        this.validate(graphic);
        this.refresh(graphic);
        Ok(this)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn outer_uv(&self) -> UvRect {
        self.outer_uv
    }

    #[inline]
    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Re-attaches the material if the graphic lost it and picks up the
    /// sprite's outer UV (the whole texture when there is no sprite).
    pub fn validate(&mut self, graphic: &mut Graphic) {
        self.attach(graphic);
        self.outer_uv = graphic.sprite().map_or(UvRect::UNIT, |s| s.outer_uv());
    }

    /// Pushes `[w, h, 2r, 0]` and the outer UV into the material.
    pub fn refresh(&self, graphic: &mut Graphic) {
        let params = MaterialParams::new(graphic.rect().size, self.radius, self.outer_uv);
        self.material.set_params(params);
        graphic.set_material_dirty();
    }

    /// Applies new extents, radius and outer UV in one step.
    pub fn update(
        &mut self,
        graphic: &mut Graphic,
        extents: Vec2,
        radius: f32,
        outer_uv: UvRect,
    ) -> Result<()> {
        self.radius = check_radius(radius)?;
        self.outer_uv = outer_uv;

        let origin = graphic.rect().origin;
        graphic.set_rect(Rect { origin, size: extents });

        self.attach(graphic);
        self.refresh(graphic);
        Ok(())
    }

    /// Changes the radius; the previous value is kept on error.
    pub fn set_radius(&mut self, graphic: &mut Graphic, radius: f32) -> Result<()> {
        self.radius = check_radius(radius)?;
        self.validate(graphic);
        self.refresh(graphic);
        Ok(())
    }

    /// Enabling re-validates and refreshes. A disabled component ignores
    /// layout changes but keeps its material attached.
    pub fn set_enabled(&mut self, graphic: &mut Graphic, enabled: bool) {
        if enabled && !self.enabled {
            self.validate(graphic);
            self.refresh(graphic);
        }
        self.enabled = enabled;
    }

    /// Call after the graphic's size changed.
    pub fn on_rect_dimensions_change(&self, graphic: &mut Graphic) {
        if self.enabled {
            self.refresh(graphic);
        }
    }

    /// Detaches the material (only if the graphic still uses it) and
    /// releases it.
    pub fn destroy(self, graphic: &mut Graphic) {
        if graphic.has_material(&self.material) {
            graphic.set_material(None);
        }
        log::debug!("rounded corners removed from material {:?}", self.material.id());
    }

    fn attach(&self, graphic: &mut Graphic) {
        if !graphic.has_material(&self.material) {
            log::debug!("attaching material {:?}", self.material.id());
            graphic.set_material(Some(Arc::clone(&self.material)));
        }
    }
}
