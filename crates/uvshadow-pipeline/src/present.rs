//! Final composition
//!
//! Paints the UV-exclusive shadow mask in the highlight hue and lays it
//! over the registered unfiltered image. The tint carries the mask's
//! luminance in its alpha, so regions with no UV-exclusive signal leave the
//! photograph untouched regardless of the blend opacity.

use crate::error::{PipelineResult, WithStage};
use crate::settings::ProcessingSettings;
use crate::stage::Stage;
use tracing::debug;
use uvshadow_core::{BlendMode, Color, Raster};
use uvshadow_filter::tint;

/// The presenter's two outputs: the tinted mask and the deliverable.
#[derive(Debug)]
pub struct Presented {
    pub suv_tinted: Raster,
    pub composite: Raster,
}

/// Tint the UV-exclusive mask and blend it over the unfiltered image.
pub fn present(
    unfiltered: &Raster,
    suv: &Raster,
    settings: &ProcessingSettings,
) -> PipelineResult<Presented> {
    let suv_tinted = tint(suv, Color::from(settings.highlight)).with_stage(Stage::SuvTinted)?;

    let composite = unfiltered
        .blend(&suv_tinted, settings.final_blend_alpha, BlendMode::Normal)
        .with_stage(Stage::Final)?;
    debug!(alpha = settings.final_blend_alpha, "composited final overlay");

    Ok(Presented {
        suv_tinted,
        composite,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uvshadow_core::color;

    #[test]
    fn test_black_mask_leaves_photo_untouched() {
        let photo = Raster::new_filled(6, 6, color::compose_rgb(90, 120, 150)).unwrap();
        let mask = Raster::new_filled(6, 6, color::compose_rgb(0, 0, 0)).unwrap();

        let out = present(&photo, &mask, &ProcessingSettings::default()).unwrap();
        assert_eq!(out.composite.data(), photo.data());
    }

    #[test]
    fn test_white_mask_paints_full_highlight() {
        let photo = Raster::new_filled(6, 6, color::compose_rgb(90, 120, 150)).unwrap();
        let mask = Raster::new_filled(6, 6, color::compose_rgb(255, 255, 255)).unwrap();

        let out = present(&photo, &mask, &ProcessingSettings::default()).unwrap();
        assert_eq!(out.composite.get_rgba(0, 0), Some((255, 0, 0, 255)));
        assert_eq!(out.suv_tinted.get_rgba(0, 0), Some((255, 0, 0, 255)));
    }

    #[test]
    fn test_blend_alpha_scales_the_overlay() {
        let photo = Raster::new_filled(4, 4, color::compose_rgb(0, 0, 0)).unwrap();
        let mask = Raster::new_filled(4, 4, color::compose_rgb(255, 255, 255)).unwrap();
        let settings = ProcessingSettings {
            final_blend_alpha: 0.5,
            ..Default::default()
        };

        let out = present(&photo, &mask, &settings).unwrap();
        assert_eq!(out.composite.get_rgba(0, 0), Some((128, 0, 0, 255)));
    }

    #[test]
    fn test_out_of_range_alpha_fails_at_final() {
        let photo = Raster::new_filled(4, 4, color::compose_rgb(0, 0, 0)).unwrap();
        let mask = photo.clone();
        let settings = ProcessingSettings {
            final_blend_alpha: 2.0,
            ..Default::default()
        };
        let err = present(&photo, &mask, &settings).unwrap_err();
        assert_eq!(err.stage(), Some(Stage::Final));
    }
}
