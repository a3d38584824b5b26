//! Uniform scaling
//!
//! The narrow capture arrives at twice the pixel density of the cropped wide
//! capture; a uniform 0.5 resize equalizes them. Bilinear interpolation keeps
//! the result deterministic and adequate at the small fixed factors the
//! registration step uses.

use crate::{TransformError, TransformResult};
use uvshadow_core::{Raster, color};

/// Scale an image uniformly by a positive factor.
///
/// Target dimensions round to nearest (minimum 1). Each destination pixel is
/// the bilinear interpolation of the four nearest source pixels; all four
/// channels are interpolated.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] unless `factor` is finite
/// and greater than zero.
pub fn resize(img: &Raster, factor: f32) -> TransformResult<Raster> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(TransformError::InvalidScaleFactor(factor));
    }

    let (w, h) = img.dimensions();
    let new_w = (((w as f64) * (factor as f64)).round() as u32).max(1);
    let new_h = (((h as f64) * (factor as f64)).round() as u32).max(1);

    let out = Raster::new(new_w, new_h)?;
    let mut out_mut = out.try_into_mut().unwrap();

    let x_ratio = w as f32 / new_w as f32;
    let y_ratio = h as f32 / new_h as f32;

    for y in 0..new_h {
        let sy = ((y as f32 + 0.5) * y_ratio - 0.5).clamp(0.0, (h - 1) as f32);
        let y0 = sy.floor() as u32;
        let y1 = (y0 + 1).min(h - 1);
        let fy = sy - y0 as f32;

        for x in 0..new_w {
            let sx = ((x as f32 + 0.5) * x_ratio - 0.5).clamp(0.0, (w - 1) as f32);
            let x0 = sx.floor() as u32;
            let x1 = (x0 + 1).min(w - 1);
            let fx = sx - x0 as f32;

            let p00 = color::extract_rgba(img.get_pixel_unchecked(x0, y0));
            let p10 = color::extract_rgba(img.get_pixel_unchecked(x1, y0));
            let p01 = color::extract_rgba(img.get_pixel_unchecked(x0, y1));
            let p11 = color::extract_rgba(img.get_pixel_unchecked(x1, y1));

            let lerp2 = |c00: u8, c10: u8, c01: u8, c11: u8| -> u8 {
                let top = c00 as f32 * (1.0 - fx) + c10 as f32 * fx;
                let bottom = c01 as f32 * (1.0 - fx) + c11 as f32 * fx;
                (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8
            };

            out_mut.set_rgba_unchecked(
                x,
                y,
                lerp2(p00.0, p10.0, p01.0, p11.0),
                lerp2(p00.1, p10.1, p01.1, p11.1),
                lerp2(p00.2, p10.2, p01.2, p11.2),
                lerp2(p00.3, p10.3, p01.3, p11.3),
            );
        }
    }

    Ok(out_mut.into())
}
