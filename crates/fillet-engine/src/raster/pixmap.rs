use crate::paint::Color;

/// Rasterized output (premultiplied, row-major, top row first).
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Pixmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Straight-alpha RGBA8 bytes, ready for an image encoder.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba8()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_transparent() {
        let p = Pixmap::new(3, 2);
        assert_eq!(p.pixels().len(), 6);
        assert!(p.pixels().iter().all(|c| *c == Color::TRANSPARENT));
    }

    #[test]
    fn get_is_bounds_checked() {
        let p = Pixmap::new(3, 2);
        assert!(p.get(2, 1).is_some());
        assert!(p.get(3, 0).is_none());
        assert!(p.get(0, 2).is_none());
    }

    #[test]
    fn rgba8_has_four_bytes_per_pixel() {
        assert_eq!(Pixmap::new(4, 4).to_rgba8().len(), 64);
    }
}
