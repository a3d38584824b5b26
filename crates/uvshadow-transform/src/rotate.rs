//! Rotation about the image center
//!
//! Rotates by an arbitrary angle, with optional mirroring applied before the
//! rotation. The output canvas is sized to the rotated bounding box (floored),
//! and destination pixels that map outside the source are transparent.
//!
//! The capture path uses this with a 0-radian angle to canonicalize the raw
//! frame's internal representation; that call reproduces the input exactly.

use crate::TransformResult;
use uvshadow_core::Raster;

/// Rotate an image about its center.
///
/// Sampling is nearest-neighbor through the inverse mapping, so a 0-radian
/// rotation is an exact re-encode of the input.
///
/// # Arguments
///
/// * `img` - Input image
/// * `radians` - Counter-clockwise rotation angle
/// * `flip_h` - Mirror horizontally before rotating
/// * `flip_v` - Mirror vertically before rotating
pub fn rotate(img: &Raster, radians: f32, flip_h: bool, flip_v: bool) -> TransformResult<Raster> {
    let (w, h) = img.dimensions();
    let (sin, cos) = radians.sin_cos();

    let wf = w as f32;
    let hf = h as f32;
    let new_w = ((wf * cos.abs() + hf * sin.abs()).floor() as u32).max(1);
    let new_h = ((wf * sin.abs() + hf * cos.abs()).floor() as u32).max(1);

    let out = Raster::new(new_w, new_h)?;
    let mut out_mut = out.try_into_mut().unwrap();

    let half_nw = new_w as f32 / 2.0;
    let half_nh = new_h as f32 / 2.0;
    let half_w = wf / 2.0;
    let half_h = hf / 2.0;

    for y in 0..new_h {
        let cy = y as f32 + 0.5 - half_nh;
        for x in 0..new_w {
            let cx = x as f32 + 0.5 - half_nw;

            // inverse rotation, then undo the mirroring
            let mut sx = cos * cx + sin * cy;
            let mut sy = -sin * cx + cos * cy;
            if flip_h {
                sx = -sx;
            }
            if flip_v {
                sy = -sy;
            }

            let u = (sx + half_w).floor();
            let v = (sy + half_h).floor();
            if u >= 0.0 && v >= 0.0 && (u as u32) < w && (v as u32) < h {
                out_mut.set_pixel_unchecked(x, y, img.get_pixel_unchecked(u as u32, v as u32));
            }
        }
    }

    Ok(out_mut.into())
}
