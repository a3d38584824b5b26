//! Pixel-wise arithmetic
//!
//! The band algebra is built on true absolute difference: `diff(a, b)` is
//! `|a - b|` per channel, not an XOR or difference-blend approximation.
//! Absolute difference is symmetric, so operand order never changes the
//! result here.

use super::Raster;
use crate::color;
use crate::error::Result;

impl Raster {
    /// Compute the per-channel absolute difference: `|self - other|`
    ///
    /// R, G and B are differenced independently; the output alpha is fully
    /// opaque. `abs_diff(a, a)` is therefore the all-black, full-alpha image.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DimensionMismatch`] when the images do not
    /// share geometry.
    pub fn abs_diff(&self, other: &Raster) -> Result<Raster> {
        self.check_sizes_equal(other)?;

        let out = Raster::new(self.width(), self.height())?;
        let mut out_mut = out.try_into_mut().unwrap();

        for (i, px) in out_mut.inner.data.iter_mut().enumerate() {
            let (ar, ag, ab, _) = color::extract_rgba(self.inner.data[i]);
            let (br, bg, bb, _) = color::extract_rgba(other.inner.data[i]);
            *px = color::compose_rgb(ar.abs_diff(br), ag.abs_diff(bg), ab.abs_diff(bb));
        }

        Ok(out_mut.into())
    }
}
