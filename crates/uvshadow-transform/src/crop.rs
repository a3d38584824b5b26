//! Cropping operations
//!
//! Centered crops equalize the framing of the wide and narrow captures;
//! the vertical-shift crop compensates for the physical vertical offset
//! between the two camera lenses.

use crate::{TransformError, TransformResult};
use uvshadow_core::Raster;

/// Extract the centered region of the given absolute size.
///
/// # Errors
///
/// Fails if the target size is zero or exceeds the original bounds.
pub fn crop_centered(img: &Raster, width: u32, height: u32) -> TransformResult<Raster> {
    let (w, h) = img.dimensions();
    if width == 0 || height == 0 || width > w || height > h {
        return Err(TransformError::InvalidParameters(format!(
            "centered crop {width}x{height} invalid for {w}x{h} image"
        )));
    }

    let x0 = (w - width) / 2;
    let y0 = (h - height) / 2;
    copy_rect(img, x0, y0, width, height)
}

/// Extract the centered region sized as a fraction of the original.
///
/// Target dimensions round to nearest so that a 50% crop of one capture and
/// a 0.5 resize of another stay comparable on odd dimensions.
///
/// # Errors
///
/// Fails unless `percent` is in (0.0, 1.0].
pub fn crop_centered_percent(img: &Raster, percent: f32) -> TransformResult<Raster> {
    if !(percent > 0.0 && percent <= 1.0) {
        return Err(TransformError::InvalidParameters(format!(
            "crop percent must be in (0.0, 1.0]; got {percent}"
        )));
    }

    let (w, h) = img.dimensions();
    let width = ((w as f64) * (percent as f64)).round() as u32;
    let height = ((h as f64) * (percent as f64)).round() as u32;
    crop_centered(img, width.max(1), height.max(1))
}

/// Asymmetric vertical trim compensating for the lens offset.
///
/// A positive `pixels` trims that many rows from the bottom, keeping rows
/// `[0, h - pixels)`; a negative value trims from the top, keeping rows
/// `[|pixels|, h)`. Width is unchanged, height shrinks by `|pixels|`.
/// Zero is the identity apart from re-encoding.
///
/// # Errors
///
/// Fails when `|pixels| >= height` (no rows would remain).
pub fn crop_vertical_shift(img: &Raster, pixels: i32) -> TransformResult<Raster> {
    let (w, h) = img.dimensions();
    let trim = pixels.unsigned_abs();
    if trim >= h {
        return Err(TransformError::InvalidParameters(format!(
            "vertical shift of {pixels} leaves no rows in a {h}-row image"
        )));
    }
    if trim == 0 {
        return Ok(img.deep_clone());
    }

    let y0 = if pixels < 0 { trim } else { 0 };
    copy_rect(img, 0, y0, w, h - trim)
}

/// Row-wise copy of a rectangle known to be in bounds.
fn copy_rect(img: &Raster, x0: u32, y0: u32, width: u32, height: u32) -> TransformResult<Raster> {
    let out = Raster::new(width, height)?;
    let mut out_mut = out.try_into_mut().unwrap();

    for y in 0..height {
        let src = &img.row(y0 + y)[x0 as usize..(x0 + width) as usize];
        out_mut.row_mut(y).copy_from_slice(src);
    }

    Ok(out_mut.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uvshadow_core::color;

    /// 8x8 raster whose pixel at (x, y) encodes its own coordinates.
    fn coords() -> Raster {
        let img = Raster::new(8, 8).unwrap();
        let mut m = img.try_into_mut().unwrap();
        for y in 0..8 {
            for x in 0..8 {
                m.set_rgba_unchecked(x, y, x as u8, y as u8, 0, 255);
            }
        }
        m.into()
    }

    #[test]
    fn test_crop_centered_region() {
        let img = coords();
        let cropped = crop_centered(&img, 4, 2).unwrap();
        assert_eq!(cropped.dimensions(), (4, 2));
        // centered: x0 = 2, y0 = 3
        assert_eq!(cropped.get_rgba(0, 0), Some((2, 3, 0, 255)));
        assert_eq!(cropped.get_rgba(3, 1), Some((5, 4, 0, 255)));
    }

    #[test]
    fn test_crop_centered_rejects_oversize() {
        let img = coords();
        assert!(crop_centered(&img, 9, 4).is_err());
        assert!(crop_centered(&img, 4, 0).is_err());
    }

    #[test]
    fn test_crop_percent_half() {
        let img = coords();
        let cropped = crop_centered_percent(&img, 0.5).unwrap();
        assert_eq!(cropped.dimensions(), (4, 4));
        assert_eq!(cropped.get_rgba(0, 0), Some((2, 2, 0, 255)));
        assert!(crop_centered_percent(&img, 0.0).is_err());
        assert!(crop_centered_percent(&img, 1.5).is_err());
    }

    #[test]
    fn test_vertical_shift_positive_keeps_top_rows() {
        let img = coords();
        let shifted = crop_vertical_shift(&img, 3).unwrap();
        assert_eq!(shifted.dimensions(), (8, 5));
        for y in 0..5u32 {
            assert_eq!(shifted.row(y), img.row(y));
        }
    }

    #[test]
    fn test_vertical_shift_negative_keeps_bottom_rows() {
        let img = coords();
        let shifted = crop_vertical_shift(&img, -3).unwrap();
        assert_eq!(shifted.dimensions(), (8, 5));
        for y in 0..5u32 {
            assert_eq!(shifted.row(y), img.row(y + 3));
        }
    }

    #[test]
    fn test_vertical_shift_zero_is_identity() {
        let img = coords();
        let shifted = crop_vertical_shift(&img, 0).unwrap();
        assert_eq!(shifted.data(), img.data());
    }

    #[test]
    fn test_vertical_shift_rejects_full_height() {
        let img = Raster::new_filled(4, 4, color::compose_rgb(1, 1, 1)).unwrap();
        assert!(crop_vertical_shift(&img, 4).is_err());
        assert!(crop_vertical_shift(&img, -5).is_err());
    }
}
