//! Box blur
//!
//! A fixed small-radius mean filter applied before quantizing steps
//! downstream, so single-pixel noise does not masquerade as band signal.
//! Pixels outside the image boundary take the value of the nearest edge
//! pixel (replicate border).

use crate::FilterResult;
use uvshadow_core::{Raster, color};

/// Blur kernel radius; the window is `(2r + 1) x (2r + 1)`.
const BLUR_RADIUS: i64 = 1;

/// Apply the fixed 3x3 box blur.
///
/// All four channels are filtered; output dimensions match the input.
pub fn box_blur(img: &Raster) -> FilterResult<Raster> {
    let (w, h) = img.dimensions();
    let out = Raster::new(w, h)?;
    let mut out_mut = out.try_into_mut().unwrap();

    let window = (2 * BLUR_RADIUS + 1) * (2 * BLUR_RADIUS + 1);

    for y in 0..h {
        for x in 0..w {
            let mut sum_r = 0.0f32;
            let mut sum_g = 0.0f32;
            let mut sum_b = 0.0f32;
            let mut sum_a = 0.0f32;

            for dy in -BLUR_RADIUS..=BLUR_RADIUS {
                for dx in -BLUR_RADIUS..=BLUR_RADIUS {
                    let sx = (x as i64 + dx).clamp(0, w as i64 - 1) as u32;
                    let sy = (y as i64 + dy).clamp(0, h as i64 - 1) as u32;
                    let (r, g, b, a) = color::extract_rgba(img.get_pixel_unchecked(sx, sy));
                    sum_r += r as f32;
                    sum_g += g as f32;
                    sum_b += b as f32;
                    sum_a += a as f32;
                }
            }

            let norm = window as f32;
            out_mut.set_rgba_unchecked(
                x,
                y,
                (sum_r / norm).round() as u8,
                (sum_g / norm).round() as u8,
                (sum_b / norm).round() as u8,
                (sum_a / norm).round() as u8,
            );
        }
    }

    Ok(out_mut.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_preserves_solid_image() {
        let img = Raster::new_filled(5, 5, color::compose_rgba(40, 80, 120, 255)).unwrap();
        let out = box_blur(&img).unwrap();
        assert_eq!(out.data(), img.data());
    }

    #[test]
    fn test_blur_spreads_single_bright_pixel() {
        let img = {
            let raw = Raster::new(5, 5).unwrap();
            let mut m = raw.try_into_mut().unwrap();
            for y in 0..5 {
                for x in 0..5 {
                    m.set_rgba_unchecked(x, y, 0, 0, 0, 255);
                }
            }
            m.set_rgba_unchecked(2, 2, 255, 255, 255, 255);
            Raster::from(m)
        };

        let out = box_blur(&img).unwrap();
        // 255/9 = 28.33 -> 28 in the whole 3x3 neighborhood
        for y in 1..4 {
            for x in 1..4 {
                assert_eq!(out.get_rgba(x, y), Some((28, 28, 28, 255)));
            }
        }
        // beyond the kernel reach, untouched
        assert_eq!(out.get_rgba(0, 0), Some((0, 0, 0, 255)));
    }

    #[test]
    fn test_blur_straight_edge_values() {
        // vertical step edge: columns 0..2 black, 3..5 white
        let img = {
            let raw = Raster::new(6, 4).unwrap();
            let mut m = raw.try_into_mut().unwrap();
            for y in 0..4 {
                for x in 0..6 {
                    let v = if x >= 3 { 255 } else { 0 };
                    m.set_rgba_unchecked(x, y, v, v, v, 255);
                }
            }
            Raster::from(m)
        };

        let out = box_blur(&img).unwrap();
        // one column inside the dark side sees 3 of 9 bright samples
        assert_eq!(out.get_rgba(2, 1), Some((85, 85, 85, 255)));
        // one column inside the bright side sees 6 of 9 bright samples
        assert_eq!(out.get_rgba(3, 1), Some((170, 170, 170, 255)));
        // replicate border keeps deep columns flat
        assert_eq!(out.get_rgba(0, 1), Some((0, 0, 0, 255)));
        assert_eq!(out.get_rgba(5, 1), Some((255, 255, 255, 255)));
    }
}
