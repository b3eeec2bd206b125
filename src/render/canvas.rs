//! RGBA canvas primitives.
//!
//! Scaled blits, cropped blits and anti-aliased glyph runs over an
//! `image::RgbaImage`. Glyph coverage is blended toward the text color,
//! matching the anti-aliased output of the original drawing surface.

use ab_glyph::{Font, FontArc, ScaleFont, point};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Horizontal shear per pixel above the baseline for synthetic oblique.
const OBLIQUE_SHEAR: f32 = 0.2;

/// A fixed-size RGBA drawing surface for one card.
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    /// Blit `src` scaled to the destination rectangle, alpha-compositing
    /// over existing pixels.
    pub fn draw_image_scaled(&mut self, src: &RgbaImage, dx: i64, dy: i64, dw: u32, dh: u32) {
        if dw == 0 || dh == 0 {
            return;
        }
        if src.dimensions() == (dw, dh) {
            imageops::overlay(&mut self.img, src, dx, dy);
        } else {
            let resized = imageops::resize(src, dw, dh, FilterType::Triangle);
            imageops::overlay(&mut self.img, &resized, dx, dy);
        }
    }

    /// Blit a top-left crop of `src` scaled to the destination rectangle.
    /// The requested crop is clamped to the source image.
    pub fn draw_image_region(
        &mut self,
        src: &RgbaImage,
        src_w: u32,
        src_h: u32,
        dx: i64,
        dy: i64,
        dw: u32,
        dh: u32,
    ) {
        let src_w = src_w.min(src.width());
        let src_h = src_h.min(src.height());
        if src_w == 0 || src_h == 0 {
            return;
        }
        let cropped = imageops::crop_imm(src, 0, 0, src_w, src_h).to_image();
        self.draw_image_scaled(&cropped, dx, dy, dw, dh);
    }

    /// Draw one glyph run with its baseline at (`x`, `baseline_y`),
    /// optionally sheared into a synthetic oblique. Returns the advance
    /// width consumed.
    pub fn draw_text_run(
        &mut self,
        font: &FontArc,
        text: &str,
        font_size: f32,
        x: f32,
        baseline_y: f32,
        color: Rgba<u8>,
        oblique: bool,
    ) -> f32 {
        let scaled = font.as_scaled(font_size);
        let mut caret = x;

        for ch in text.chars() {
            let id = font.glyph_id(ch);
            let glyph = id.with_scale_and_position(font_size, point(caret, baseline_y));
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let img = &mut self.img;
                outlined.draw(|gx, gy, coverage| {
                    let py = gy as f32 + bounds.min.y;
                    let shear = if oblique {
                        (baseline_y - py) * OBLIQUE_SHEAR
                    } else {
                        0.0
                    };
                    let px = gx as f32 + bounds.min.x + shear;
                    blend(img, px.round() as i64, py.round() as i64, color, coverage);
                });
            }
            caret += scaled.h_advance(id);
        }
        caret - x
    }
}

/// Blend `color` into one pixel at the given coverage.
fn blend(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>, coverage: f32) {
    if coverage <= 0.0 {
        return;
    }
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let alpha = coverage.clamp(0.0, 1.0);
    let pixel = img.get_pixel_mut(x as u32, y as u32);
    for c in 0..3 {
        let base = pixel.0[c] as f32;
        let ink = color.0[c] as f32;
        pixel.0[c] = (base + (ink - base) * alpha).round() as u8;
    }
    pixel.0[3] = pixel.0[3].max((alpha * 255.0).round() as u8);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(rgba))
    }

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(4, 4);
        let img = canvas.into_image();
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn test_scaled_blit_fills_destination_rect() {
        let mut canvas = Canvas::new(10, 10);
        canvas.draw_image_scaled(&solid(2, 2, [255, 0, 0, 255]), 0, 0, 10, 5);
        let img = canvas.into_image();
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(9, 4).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 5).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_region_blit_uses_top_left_crop() {
        // Source: top half red, bottom half blue.
        let mut src = solid(4, 4, [0, 0, 255, 255]);
        for y in 0..2 {
            for x in 0..4 {
                src.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_image_region(&src, 4, 2, 0, 2, 4, 2);
        let img = canvas.into_image();
        // Only the red top half was painted, into the lower half.
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(0, 2).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(3, 3).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_region_blit_clamps_oversized_crop() {
        let src = solid(4, 4, [0, 255, 0, 255]);
        let mut canvas = Canvas::new(8, 8);
        // Crop taller than the source: clamped, no panic.
        canvas.draw_image_region(&src, 759, 100, 0, 0, 8, 8);
        let img = canvas.into_image();
        assert_eq!(img.get_pixel(7, 7).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_blend_full_coverage_replaces_color() {
        let mut img = solid(2, 2, [255, 255, 255, 255]);
        blend(&mut img, 0, 0, Rgba([0, 0, 0, 255]), 1.0);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_blend_partial_coverage_mixes() {
        let mut img = solid(2, 2, [255, 255, 255, 255]);
        blend(&mut img, 1, 1, Rgba([0, 0, 0, 255]), 0.5);
        let px = img.get_pixel(1, 1).0;
        assert!(px[0] > 100 && px[0] < 160);
    }

    #[test]
    fn test_blend_outside_bounds_is_ignored() {
        let mut img = solid(2, 2, [10, 10, 10, 255]);
        blend(&mut img, -1, 0, Rgba([0, 0, 0, 255]), 1.0);
        blend(&mut img, 0, 5, Rgba([0, 0, 0, 255]), 1.0);
        assert!(img.pixels().all(|p| p.0 == [10, 10, 10, 255]));
    }
}
