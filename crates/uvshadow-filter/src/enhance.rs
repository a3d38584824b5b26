//! Tone mapping: normalization, exposure, contrast and posterization
//!
//! Every operation here is a per-value remap, so each builds a 256-entry
//! lookup table once and maps R, G and B through it (alpha passes through).

use crate::{FilterError, FilterResult};
use uvshadow_core::{Raster, color};

/// A 256-entry lookup table mapping input values [0..255] to output values.
pub type TrcLut = [u8; 256];

/// The identity lookup table.
pub fn identity_lut() -> TrcLut {
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = i as u8;
    }
    lut
}

/// Map R, G and B of every pixel through a lookup table; alpha unchanged.
pub fn trc_map(img: &Raster, lut: &TrcLut) -> FilterResult<Raster> {
    let out = Raster::new(img.width(), img.height())?;
    let mut out_mut = out.try_into_mut().unwrap();

    for y in 0..img.height() {
        for x in 0..img.width() {
            let (r, g, b, a) = color::extract_rgba(img.get_pixel_unchecked(x, y));
            out_mut.set_rgba_unchecked(
                x,
                y,
                lut[r as usize],
                lut[g as usize],
                lut[b as usize],
                a,
            );
        }
    }

    Ok(out_mut.into())
}

/// Linear contrast stretch of the observed intensity range to [0, 255].
///
/// One `[min, max]` range is observed over all R, G and B samples and every
/// channel is stretched with it. Call sites in the band pipeline normalize
/// already-grayscale rasters, where this coincides with a per-channel
/// stretch.
///
/// # Errors
///
/// A flat image (`min == max`) has nothing to stretch and fails with
/// [`FilterError::DegenerateRange`]; it is never returned unchanged.
pub fn normalize_contrast(img: &Raster) -> FilterResult<Raster> {
    let mut lo = u8::MAX;
    let mut hi = u8::MIN;
    for &px in img.data() {
        let (r, g, b) = color::extract_rgb(px);
        lo = lo.min(r).min(g).min(b);
        hi = hi.max(r).max(g).max(b);
    }

    if lo == hi {
        return Err(FilterError::DegenerateRange { value: lo });
    }

    let range = (hi - lo) as f32;
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let v = i as f32;
        let stretched = if i as u8 <= lo {
            0.0
        } else {
            (v - lo as f32) * 255.0 / range
        };
        *entry = stretched.round().clamp(0.0, 255.0) as u8;
    }

    trc_map(img, &lut)
}

/// Multiplicative exposure adjustment in photographic stops.
///
/// `v' = clamp(v * 2^stops)`; positive stops brighten, negative darken.
pub fn adjust_exposure(img: &Raster, stops: f32) -> FilterResult<Raster> {
    if !stops.is_finite() {
        return Err(FilterError::InvalidParameters(format!(
            "exposure stops must be finite; got {stops}"
        )));
    }

    let gain = 2.0f32.powf(stops);
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = (i as f32 * gain).round().clamp(0.0, 255.0) as u8;
    }
    trc_map(img, &lut)
}

/// Linear contrast scaling about mid-gray.
///
/// `v' = clamp((v - 128) * factor + 128)`. A factor of 1.0 is the identity;
/// above 1.0 spreads values away from 128, below 1.0 compresses toward it.
pub fn adjust_contrast(img: &Raster, factor: f32) -> FilterResult<Raster> {
    if !factor.is_finite() {
        return Err(FilterError::InvalidParameters(format!(
            "contrast factor must be finite; got {factor}"
        )));
    }

    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let v = (i as f32 - 128.0) * factor + 128.0;
        *entry = v.round().clamp(0.0, 255.0) as u8;
    }
    trc_map(img, &lut)
}

/// Quantize each channel to `levels` evenly spaced steps across [0, 255].
///
/// # Errors
///
/// Fewer than two levels cannot represent an image and is rejected.
pub fn posterize(img: &Raster, levels: u8) -> FilterResult<Raster> {
    if levels < 2 {
        return Err(FilterError::InvalidParameters(format!(
            "posterize needs at least 2 levels; got {levels}"
        )));
    }

    let steps = (levels - 1) as f32;
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let q = (i as f32 * steps / 255.0).round();
        *entry = (q * 255.0 / steps).round() as u8;
    }
    trc_map(img, &lut)
}
