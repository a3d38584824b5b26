//! Two-image compositing
//!
//! `blend` composites an overlay onto a base image with a scalar opacity.
//! The effective opacity at each pixel is the scalar multiplied by the
//! overlay's own alpha, so fully transparent overlay regions leave the base
//! untouched even at opacity 1.0.

use super::Raster;
use crate::color;
use crate::error::{Error, Result};

/// Blend function applied before opacity interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Plain alpha compositing toward the overlay color
    Normal,
    /// Screen: `255 - (255-base)(255-over)/255`, a union-like lightening
    Screen,
}

impl BlendMode {
    #[inline]
    fn apply(self, base: u8, over: u8) -> f32 {
        match self {
            BlendMode::Normal => over as f32,
            BlendMode::Screen => {
                255.0 - (255.0 - base as f32) * (255.0 - over as f32) / 255.0
            }
        }
    }
}

impl Raster {
    /// Composite `over` onto this image.
    ///
    /// Each channel moves from the base value toward the mode's target value
    /// by `alpha * over_alpha/255`. The output keeps the base image's alpha.
    ///
    /// # Arguments
    ///
    /// * `over` - Overlay image (must share this image's dimensions)
    /// * `alpha` - Scalar opacity in [0.0, 1.0]
    /// * `mode` - Blend function
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] when the images do not share
    /// geometry and [`Error::InvalidParameter`] for an opacity outside
    /// [0.0, 1.0].
    pub fn blend(&self, over: &Raster, alpha: f32, mode: BlendMode) -> Result<Raster> {
        self.check_sizes_equal(over)?;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(Error::InvalidParameter(format!(
                "blend opacity must be in [0.0, 1.0]; got {alpha}"
            )));
        }

        let out = Raster::new(self.width(), self.height())?;
        let mut out_mut = out.try_into_mut().unwrap();

        for (i, px) in out_mut.inner.data.iter_mut().enumerate() {
            let (br, bg, bb, ba) = color::extract_rgba(self.inner.data[i]);
            let (or_, og, ob, oa) = color::extract_rgba(over.inner.data[i]);

            let ea = alpha * (oa as f32 / 255.0);
            let mix = |b: u8, o: u8| -> u8 {
                let target = mode.apply(b, o);
                (b as f32 * (1.0 - ea) + target * ea)
                    .round()
                    .clamp(0.0, 255.0) as u8
            };

            *px = color::compose_rgba(mix(br, or_), mix(bg, og), mix(bb, ob), ba);
        }

        Ok(out_mut.into())
    }
}
