//! Owned RGBA pixel buffer with fills, blits, and quarter-turn rotation.
//!
//! [`Canvas`] is the drawing surface everything renders into: the
//! intermediate normalized buffer, the bar's final pixmap, and the desktop
//! backdrop all use it. Rectangle fills composite with source-over blending;
//! `copy_from` replaces pixels outright.

use image::RgbaImage;

use crate::color::Color;
use crate::geometry::{Region, Size};

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A 2D pixel buffer, row-major, straight (non-premultiplied) alpha.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a fully transparent canvas of the given dimensions.
    ///
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width * height) as usize],
        }
    }

    /// Create a canvas filled with a single color.
    pub fn filled(width: i32, height: i32, color: Color) -> Self {
        let mut canvas = Self::new(width, height);
        canvas.fill(color);
        canvas
    }

    /// Canvas width in pixels.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Canvas height in pixels.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Canvas dimensions.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Overwrite the pixel at (x, y). Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        for px in &mut self.pixels {
            *px = color;
        }
    }

    /// Composite `color` over every pixel of `region` (clipped to bounds).
    pub fn fill_rect(&mut self, region: Region, color: Color) {
        let clip = region.intersection(self.size().to_region());
        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                let idx = (y * self.width + x) as usize;
                self.pixels[idx] = self.pixels[idx].over(color);
            }
        }
    }

    /// Copy `src` into this canvas at (dx, dy), replacing pixels outright.
    pub fn copy_from(&mut self, src: &Canvas, dx: i32, dy: i32) {
        for sy in 0..src.height {
            for sx in 0..src.width {
                if let Some(px) = src.get(sx, sy) {
                    self.set(dx + sx, dy + sy, px);
                }
            }
        }
    }

    /// Composite `src` over this canvas at (dx, dy), pixel by pixel.
    pub fn blit(&mut self, src: &Canvas, dx: i32, dy: i32) {
        for sy in 0..src.height {
            for sx in 0..src.width {
                let (x, y) = (dx + sx, dy + sy);
                if let (Some(dst), Some(top)) = (self.get(x, y), src.get(sx, sy)) {
                    self.set(x, y, dst.over(top));
                }
            }
        }
    }

    /// Composite a decoded raster image over this canvas at (dx, dy).
    ///
    /// The image's own alpha channel applies; the blit itself runs at full
    /// opacity.
    pub fn blit_image(&mut self, image: &RgbaImage, dx: i32, dy: i32) {
        for (sx, sy, px) in image.enumerate_pixels() {
            let [r, g, b, a] = px.0;
            let (x, y) = (dx + sx as i32, dy + sy as i32);
            if let Some(dst) = self.get(x, y) {
                self.set(x, y, dst.over(Color::rgba(r, g, b, a)));
            }
        }
    }

    /// Extract a copy of `region`.
    ///
    /// The result always has the requested dimensions; pixels outside this
    /// canvas come back fully transparent.
    pub fn sub(&self, region: Region) -> Canvas {
        let mut out = Canvas::new(region.width, region.height);
        for y in 0..out.height {
            for x in 0..out.width {
                if let Some(px) = self.get(region.x + x, region.y + y) {
                    out.set(x, y, px);
                }
            }
        }
        out
    }

    /// Rotate a quarter turn clockwise.
    ///
    /// A `w x h` canvas becomes `h x w`; the source pixel (x, y) lands at
    /// (h - 1 - y, x).
    pub fn rotate_cw(&self) -> Canvas {
        let mut out = Canvas::new(self.height, self.width);
        for sy in 0..self.height {
            for sx in 0..self.width {
                let px = self.pixels[(sy * self.width + sx) as usize];
                out.set(self.height - 1 - sy, sx, px);
            }
        }
        out
    }

    /// Rotate a quarter turn counter-clockwise.
    ///
    /// A `w x h` canvas becomes `h x w`; the source pixel (x, y) lands at
    /// (y, w - 1 - x).
    pub fn rotate_ccw(&self) -> Canvas {
        let mut out = Canvas::new(self.height, self.width);
        for sy in 0..self.height {
            for sx in 0..self.width {
                let px = self.pixels[(sy * self.width + sx) as usize];
                out.set(sy, self.width - 1 - sx, px);
            }
        }
        out
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    // -----------------------------------------------------------------------
    // Construction & access
    // -----------------------------------------------------------------------

    #[test]
    fn new_is_transparent() {
        let c = Canvas::new(4, 3);
        assert_eq!(c.size(), Size::new(4, 3));
        assert_eq!(c.get(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(c.get(3, 2), Some(Color::TRANSPARENT));
    }

    #[test]
    fn get_out_of_bounds() {
        let c = Canvas::new(4, 3);
        assert_eq!(c.get(4, 0), None);
        assert_eq!(c.get(0, 3), None);
        assert_eq!(c.get(-1, 0), None);
    }

    #[test]
    fn negative_dimensions_clamp_to_zero() {
        let c = Canvas::new(-5, 3);
        assert_eq!(c.size(), Size::new(0, 3));
        assert_eq!(c.get(0, 0), None);
    }

    #[test]
    fn set_out_of_bounds_ignored() {
        let mut c = Canvas::new(2, 2);
        c.set(5, 5, RED);
        c.set(-1, 0, RED);
        assert_eq!(c.get(0, 0), Some(Color::TRANSPARENT));
    }

    // -----------------------------------------------------------------------
    // Fills
    // -----------------------------------------------------------------------

    #[test]
    fn filled_constructor() {
        let c = Canvas::filled(3, 2, BLUE);
        assert_eq!(c.get(0, 0), Some(BLUE));
        assert_eq!(c.get(2, 1), Some(BLUE));
    }

    #[test]
    fn fill_rect_clips() {
        let mut c = Canvas::filled(4, 4, Color::BLACK);
        c.fill_rect(Region::new(2, 2, 10, 10), RED);
        assert_eq!(c.get(1, 1), Some(Color::BLACK));
        assert_eq!(c.get(2, 2), Some(RED));
        assert_eq!(c.get(3, 3), Some(RED));
    }

    #[test]
    fn fill_rect_composites_alpha() {
        let mut c = Canvas::filled(2, 1, Color::BLACK);
        c.fill_rect(Region::new(0, 0, 2, 1), Color::rgba(255, 255, 255, 128));
        let px = c.get(0, 0).unwrap();
        assert!(px.is_opaque());
        assert!(px.r > 100 && px.r < 160);
    }

    // -----------------------------------------------------------------------
    // Copies & blits
    // -----------------------------------------------------------------------

    #[test]
    fn copy_from_replaces() {
        let mut dst = Canvas::filled(4, 4, Color::BLACK);
        let src = Canvas::filled(2, 2, Color::rgba(255, 0, 0, 0));
        dst.copy_from(&src, 1, 1);
        // Even a transparent source pixel replaces the destination.
        assert_eq!(dst.get(1, 1), Some(Color::rgba(255, 0, 0, 0)));
        assert_eq!(dst.get(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn blit_composites() {
        let mut dst = Canvas::filled(4, 4, Color::BLACK);
        let src = Canvas::filled(2, 2, Color::rgba(255, 0, 0, 0));
        dst.blit(&src, 1, 1);
        // Transparent source leaves the destination alone.
        assert_eq!(dst.get(1, 1), Some(Color::BLACK));
    }

    #[test]
    fn blit_image_applies_alpha() {
        let mut dst = Canvas::filled(2, 2, Color::BLACK);
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        dst.blit_image(&img, 0, 0);
        assert_eq!(dst.get(0, 0), Some(RED));
        assert_eq!(dst.get(1, 1), Some(Color::BLACK));
    }

    // -----------------------------------------------------------------------
    // Sub-slices
    // -----------------------------------------------------------------------

    #[test]
    fn sub_in_bounds() {
        let mut c = Canvas::filled(4, 4, Color::BLACK);
        c.set(2, 2, RED);
        let s = c.sub(Region::new(2, 2, 2, 2));
        assert_eq!(s.size(), Size::new(2, 2));
        assert_eq!(s.get(0, 0), Some(RED));
        assert_eq!(s.get(1, 1), Some(Color::BLACK));
    }

    #[test]
    fn sub_past_edge_is_transparent() {
        let c = Canvas::filled(4, 4, Color::BLACK);
        let s = c.sub(Region::new(3, 3, 3, 3));
        assert_eq!(s.size(), Size::new(3, 3));
        assert_eq!(s.get(0, 0), Some(Color::BLACK));
        assert_eq!(s.get(2, 2), Some(Color::TRANSPARENT));
    }

    // -----------------------------------------------------------------------
    // Rotation
    // -----------------------------------------------------------------------

    /// 2x3 test pattern:
    ///   R G
    ///   B R
    ///   G B
    fn pattern() -> Canvas {
        let mut c = Canvas::new(2, 3);
        c.set(0, 0, RED);
        c.set(1, 0, GREEN);
        c.set(0, 1, BLUE);
        c.set(1, 1, RED);
        c.set(0, 2, GREEN);
        c.set(1, 2, BLUE);
        c
    }

    #[test]
    fn rotate_cw_mapping() {
        let c = pattern();
        let r = c.rotate_cw();
        assert_eq!(r.size(), Size::new(3, 2));
        // (x, y) -> (h - 1 - y, x): top-left goes to the top-right corner.
        assert_eq!(r.get(2, 0), Some(RED));
        assert_eq!(r.get(2, 1), Some(GREEN));
        assert_eq!(r.get(0, 0), Some(GREEN));
        assert_eq!(r.get(0, 1), Some(BLUE));
    }

    #[test]
    fn rotate_ccw_mapping() {
        let c = pattern();
        let r = c.rotate_ccw();
        assert_eq!(r.size(), Size::new(3, 2));
        // (x, y) -> (y, w - 1 - x): top-left goes to the bottom-left corner.
        assert_eq!(r.get(0, 1), Some(RED));
        assert_eq!(r.get(0, 0), Some(GREEN));
        assert_eq!(r.get(2, 1), Some(GREEN));
        assert_eq!(r.get(2, 0), Some(BLUE));
    }

    #[test]
    fn rotations_are_inverses() {
        let c = pattern();
        assert_eq!(c.rotate_cw().rotate_ccw(), c);
        assert_eq!(c.rotate_ccw().rotate_cw(), c);
    }

    #[test]
    fn rotation_matches_point_transform() {
        // The pixel rotation must agree with Orientation::from_normalized.
        // from_normalized maps pixel corners, so the flipped axis (the one
        // computed by subtraction) is one past the pixel index.
        use crate::geometry::Orientation;

        let c = pattern(); // normalized buffer, 2x3
        let (real_w, real_h) = (3, 2);

        let cw = c.rotate_cw();
        for sy in 0..3 {
            for sx in 0..2 {
                let (rx, ry) = Orientation::RotatedCw.from_normalized(sx, sy, real_w, real_h);
                assert_eq!(cw.get(rx - 1, ry), c.get(sx, sy));
            }
        }

        let ccw = c.rotate_ccw();
        for sy in 0..3 {
            for sx in 0..2 {
                let (rx, ry) = Orientation::RotatedCcw.from_normalized(sx, sy, real_w, real_h);
                assert_eq!(ccw.get(rx, ry - 1), c.get(sx, sy));
            }
        }
    }
}
