//! Channel isolation, grayscale conversion, inversion and tinting
//!
//! The shadow-band derivations split a capture into disjoint wavelength
//! proxies by channel: the blue channel approximates the short-wavelength
//! band, red+green the long-wavelength band. All operations are pure; each
//! returns a new raster and leaves the input untouched.

use crate::FilterResult;
use uvshadow_core::{Color, Raster, color};

/// Grayscale weighting
///
/// The pipeline uses the unweighted average throughout so that band
/// subtraction stays consistent across channels; Rec.601 luma is kept
/// selectable for callers matching display-weighted conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrayMethod {
    /// Unweighted `(r + g + b) / 3`
    #[default]
    Average,
    /// Rec.601 luma (`0.299 r + 0.587 g + 0.114 b`)
    Luma,
}

impl GrayMethod {
    #[inline]
    fn intensity(self, r: u8, g: u8, b: u8) -> u8 {
        match self {
            GrayMethod::Average => color::average(r, g, b),
            GrayMethod::Luma => color::luma601(r, g, b),
        }
    }
}

/// Map every pixel's RGB through `f`, preserving alpha.
fn map_rgba(img: &Raster, f: impl Fn(u8, u8, u8, u8) -> (u8, u8, u8, u8)) -> FilterResult<Raster> {
    let out = Raster::new(img.width(), img.height())?;
    let mut out_mut = out.try_into_mut().unwrap();

    for y in 0..img.height() {
        for x in 0..img.width() {
            let (r, g, b, a) = color::extract_rgba(img.get_pixel_unchecked(x, y));
            let (nr, ng, nb, na) = f(r, g, b, a);
            out_mut.set_rgba_unchecked(x, y, nr, ng, nb, na);
        }
    }

    Ok(out_mut.into())
}

/// Keep only the blue channel (red and green zeroed, alpha unchanged).
pub fn isolate_blue(img: &Raster) -> FilterResult<Raster> {
    map_rgba(img, |_, _, b, a| (0, 0, b, a))
}

/// Drop the blue channel (red and green kept, alpha unchanged).
pub fn drop_blue(img: &Raster) -> FilterResult<Raster> {
    map_rgba(img, |r, g, _, a| (r, g, 0, a))
}

/// Convert to grayscale with the default unweighted average.
///
/// The intensity is replicated across R, G and B; alpha is unchanged.
pub fn to_grayscale(img: &Raster) -> FilterResult<Raster> {
    to_grayscale_with(img, GrayMethod::Average)
}

/// Convert to grayscale with an explicit weighting.
pub fn to_grayscale_with(img: &Raster, method: GrayMethod) -> FilterResult<Raster> {
    map_rgba(img, |r, g, b, a| {
        let v = method.intensity(r, g, b);
        (v, v, v, a)
    })
}

/// Invert R, G and B (`255 - v`); alpha unchanged.
///
/// Inversion is its own inverse for 8-bit channels.
pub fn invert(img: &Raster) -> FilterResult<Raster> {
    map_rgba(img, |r, g, b, a| (255 - r, 255 - g, 255 - b, a))
}

/// Paint a mask in a single hue.
///
/// The image collapses to its unweighted luminance, then each output channel
/// is the hue scaled by that luminance. Output alpha is the luminance too, so
/// black mask regions vanish when the result is composited.
pub fn tint(img: &Raster, hue: Color) -> FilterResult<Raster> {
    let scale = |c: u8, lum: u8| -> u8 {
        ((c as f32) * (lum as f32) / 255.0).round() as u8
    };
    map_rgba(img, |r, g, b, _| {
        let lum = color::average(r, g, b);
        (scale(hue.r, lum), scale(hue.g, lum), scale(hue.b, lum), lum)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Raster {
        let img = Raster::new(3, 2).unwrap();
        let mut m = img.try_into_mut().unwrap();
        m.set_rgba_unchecked(0, 0, 255, 0, 0, 255);
        m.set_rgba_unchecked(1, 0, 0, 255, 0, 200);
        m.set_rgba_unchecked(2, 0, 0, 0, 255, 255);
        m.set_rgba_unchecked(0, 1, 10, 20, 30, 255);
        m.set_rgba_unchecked(1, 1, 0, 0, 0, 255);
        m.set_rgba_unchecked(2, 1, 255, 255, 255, 255);
        m.into()
    }

    #[test]
    fn test_isolate_and_drop_partition_channels() {
        let img = sample();
        let iso = isolate_blue(&img).unwrap();
        let dropped = drop_blue(&img).unwrap();

        for y in 0..2 {
            for x in 0..3 {
                let (r, g, b, a) = img.get_rgba(x, y).unwrap();
                assert_eq!(iso.get_rgba(x, y), Some((0, 0, b, a)));
                assert_eq!(dropped.get_rgba(x, y), Some((r, g, 0, a)));
            }
        }
    }

    #[test]
    fn test_grayscale_average() {
        let img = sample();
        let gray = to_grayscale(&img).unwrap();
        // avg(255, 0, 0) = 85, alpha preserved
        assert_eq!(gray.get_rgba(0, 0), Some((85, 85, 85, 255)));
        assert_eq!(gray.get_rgba(1, 0), Some((85, 85, 85, 200)));
        assert_eq!(gray.get_rgba(0, 1), Some((20, 20, 20, 255)));
    }

    #[test]
    fn test_grayscale_luma_differs_by_channel() {
        let img = sample();
        let gray = to_grayscale_with(&img, GrayMethod::Luma).unwrap();
        assert_eq!(gray.get_rgba(0, 0), Some((76, 76, 76, 255)));
        assert_eq!(gray.get_rgba(1, 0), Some((150, 150, 150, 200)));
        assert_eq!(gray.get_rgba(2, 0), Some((29, 29, 29, 255)));
    }

    #[test]
    fn test_invert_is_involution() {
        let img = sample();
        let twice = invert(&invert(&img).unwrap()).unwrap();
        assert_eq!(twice.data(), img.data());
    }

    #[test]
    fn test_invert_values() {
        let img = sample();
        let inv = invert(&img).unwrap();
        assert_eq!(inv.get_rgba(0, 0), Some((0, 255, 255, 255)));
        assert_eq!(inv.get_rgba(0, 1), Some((245, 235, 225, 255)));
    }

    #[test]
    fn test_tint_scales_hue_by_luminance() {
        let img = sample();
        let red = tint(&img, Color::new(255, 0, 0)).unwrap();
        // white pixel: lum 255 -> full hue, opaque
        assert_eq!(red.get_rgba(2, 1), Some((255, 0, 0, 255)));
        // black pixel: lum 0 -> fully transparent black
        assert_eq!(red.get_rgba(1, 1), Some((0, 0, 0, 0)));
        // avg(255,0,0) = 85 -> hue scaled to 85/255
        assert_eq!(red.get_rgba(0, 0), Some((85, 0, 0, 85)));
    }
}
