//! Capture registration
//!
//! Brings the wide (unfiltered) and narrow (filtered) captures into one
//! coordinate frame so the band algebra can compare them pixel for pixel:
//!
//! 1. canonicalize the wide capture's orientation (a 0-radian rotation;
//!    the angle is zero on this hardware, but the pass normalizes the
//!    internal representation and stays in the sequence)
//! 2. crop the wide capture to its centered 50% region (the wide lens sees
//!    roughly twice the narrow lens's field)
//! 3. resize the narrow capture by 0.5 (it arrives at twice the pixel
//!    density)
//! 4. trim half the configured lens offset off each image in opposite
//!    directions
//! 5. assert both results share exact pixel dimensions

use crate::error::{OpError, PipelineError, PipelineResult};
use crate::settings::ProcessingSettings;
use tracing::debug;
use uvshadow_core::{Error as CoreError, Raster};
use uvshadow_transform::{crop_centered_percent, crop_vertical_shift, resize, rotate};

/// Fraction of the wide capture matching the narrow field of view.
const WIDE_CROP_FRACTION: f32 = 0.5;
/// Scale equalizing the narrow capture's pixel density.
const NARROW_SCALE_FACTOR: f32 = 0.5;

/// A registered capture pair, same size and framing.
#[derive(Debug, Clone)]
pub struct RegisteredPair {
    /// The wide capture, cropped and shifted (visible + near-UV)
    pub unfiltered: Raster,
    /// The narrow capture, rescaled and shifted (long-pass filtered)
    pub filtered: Raster,
}

/// Register the raw captures into a common frame.
///
/// # Errors
///
/// Any geometric step can fail (degenerate crop, shift larger than the
/// frame), and the final dimension assert fails with a
/// [`CoreError::DimensionMismatch`] when the two results disagree; either
/// way the run aborts as [`PipelineError::Registration`].
pub fn register(
    wide: &Raster,
    narrow: &Raster,
    settings: &ProcessingSettings,
) -> PipelineResult<RegisteredPair> {
    let half_offset = settings.camera_offset_px / 2;

    let result = (|| -> Result<RegisteredPair, OpError> {
        let canonical = rotate(wide, 0.0, false, false)?;
        let unfiltered = crop_centered_percent(&canonical, WIDE_CROP_FRACTION)?;
        let filtered = resize(narrow, NARROW_SCALE_FACTOR)?;

        // the wide lens sits above the narrow one: move the unfiltered
        // content down and the filtered content up, half the offset each
        let unfiltered = crop_vertical_shift(&unfiltered, -half_offset)?;
        let filtered = crop_vertical_shift(&filtered, half_offset)?;

        if !unfiltered.sizes_equal(&filtered) {
            return Err(CoreError::DimensionMismatch {
                left: unfiltered.dimensions(),
                right: filtered.dimensions(),
            }
            .into());
        }

        Ok(RegisteredPair {
            unfiltered,
            filtered,
        })
    })();

    match result {
        Ok(pair) => {
            debug!(
                width = pair.unfiltered.width(),
                height = pair.unfiltered.height(),
                half_offset,
                "registered capture pair"
            );
            Ok(pair)
        }
        Err(e) => Err(PipelineError::Registration(e)),
    }
}
