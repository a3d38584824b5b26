//! Shadow-band derivation
//!
//! Each band estimates "how uniquely dark is this region within one
//! wavelength slice". Sf, Sgr and Sb read only the registered pair and run
//! concurrently; the combination phase (Sb', Svis, Suv) waits on all three.
//!
//! Operand order follows the band algebra as documented. With true absolute
//! difference the diffs are symmetric, but the order is kept meaningful in
//! case a non-symmetric combiner ever replaces one.

use crate::error::{OpError, PipelineError, PipelineResult, WithStage};
use crate::settings::ProcessingSettings;
use crate::stage::Stage;
use tracing::debug;
use uvshadow_core::{BlendMode, Raster};
use uvshadow_filter as filter;

/// The three independently derived bands.
#[derive(Debug, Clone)]
pub struct ShadowBands {
    /// Shadow in the filtered band (~380-410nm)
    pub sf: Raster,
    /// Shadow in green/red (~500-740nm)
    pub sgr: Raster,
    /// Shadow in blue (~380-500nm)
    pub sb: Raster,
}

/// Shadow in the filtered band, from the filtered capture.
///
/// isolate blue -> grayscale -> normalize -> (exposure) -> invert ->
/// (preset) -> (gamma) -> (contrast) -> blur -> (posterize)
fn derive_sf(filtered: &Raster, s: &ProcessingSettings) -> Result<Raster, OpError> {
    let img = filter::isolate_blue(filtered)?;
    let img = filter::to_grayscale(&img)?;
    let mut img = filter::normalize_contrast(&img)?;
    if s.sf_exposure_enabled {
        img = filter::adjust_exposure(&img, s.sf_exposure_stops)?;
    }
    let mut img = filter::invert(&img)?;
    if s.sf_gamma_preset_enabled {
        img = filter::apply_preset(&img, &s.sf_gamma_preset)?;
    }
    if s.sf_gamma_adjust_enabled {
        img = filter::adjust_gamma(&img, s.sf_gamma_adjust)?;
    }
    if s.sf_contrast_enabled {
        img = filter::adjust_contrast(&img, s.sf_contrast)?;
    }
    let mut img = filter::box_blur(&img)?;
    if s.sf_posterize_enabled {
        img = filter::posterize(&img, s.sf_posterize_levels)?;
    }
    Ok(img)
}

/// Shadow in green/red, from the unfiltered capture.
///
/// drop blue -> grayscale -> normalize -> (exposure) -> invert -> (contrast)
fn derive_sgr(unfiltered: &Raster, s: &ProcessingSettings) -> Result<Raster, OpError> {
    let img = filter::drop_blue(unfiltered)?;
    let img = filter::to_grayscale(&img)?;
    let mut img = filter::normalize_contrast(&img)?;
    if s.sgr_exposure_enabled {
        img = filter::adjust_exposure(&img, s.sgr_exposure_stops)?;
    }
    let mut img = filter::invert(&img)?;
    if s.sgr_contrast_enabled {
        img = filter::adjust_contrast(&img, s.sgr_contrast)?;
    }
    Ok(img)
}

/// Shadow in blue, from the unfiltered capture.
///
/// isolate blue -> grayscale -> normalize -> (exposure) -> invert -> (contrast)
fn derive_sb(unfiltered: &Raster, s: &ProcessingSettings) -> Result<Raster, OpError> {
    let img = filter::isolate_blue(unfiltered)?;
    let img = filter::to_grayscale(&img)?;
    let mut img = filter::normalize_contrast(&img)?;
    if s.sb_exposure_enabled {
        img = filter::adjust_exposure(&img, s.sb_exposure_stops)?;
    }
    let mut img = filter::invert(&img)?;
    if s.sb_contrast_enabled {
        img = filter::adjust_contrast(&img, s.sb_contrast)?;
    }
    Ok(img)
}

/// Derive Sf, Sgr and Sb concurrently from the registered pair.
///
/// The three derivations share no state; the join is the barrier before the
/// combination phase. Failures are attributed to the unfiltered reference
/// image's bands first (Sgr, Sb, then Sf).
pub fn derive_bands(
    unfiltered: &Raster,
    filtered: &Raster,
    settings: &ProcessingSettings,
) -> PipelineResult<ShadowBands> {
    let ((sgr, sb), sf) = rayon::join(
        || {
            rayon::join(
                || derive_sgr(unfiltered, settings),
                || derive_sb(unfiltered, settings),
            )
        },
        || derive_sf(filtered, settings),
    );

    let sgr = sgr.with_stage(Stage::Sgr)?;
    let sb = sb.with_stage(Stage::Sb)?;
    let sf = sf.with_stage(Stage::Sf)?;
    debug!("derived Sf, Sgr and Sb");

    Ok(ShadowBands { sf, sgr, sb })
}

/// The combination phase: Sb', Svis and the UV-exclusive Suv.
#[derive(Debug)]
pub struct CombinedBands {
    /// `diff(Sb, Sf)`: blue shadow not already in the filtered band
    pub sb_prime: Raster,
    /// `screen(Sgr, Sb')`: shadow anywhere in the visible range
    pub svis: Raster,
    /// `diff(Sf, Svis)` through the Suv response curve
    pub suv: Raster,
}

/// Combine the three bands into the UV-exclusive shadow mask.
pub fn combine_bands(
    bands: &ShadowBands,
    settings: &ProcessingSettings,
) -> PipelineResult<CombinedBands> {
    let sb_prime = bands.sb.abs_diff(&bands.sf).with_stage(Stage::SbPrime)?;

    let svis = bands
        .sgr
        .blend(&sb_prime, 1.0, BlendMode::Screen)
        .with_stage(Stage::Svis)?;

    let suv = bands.sf.abs_diff(&svis).with_stage(Stage::Suv)?;
    let suv = filter::apply_preset(&suv, &settings.suv_gamma_preset).with_stage(Stage::Suv)?;
    debug!("combined bands into the UV-exclusive mask");

    Ok(CombinedBands {
        sb_prime,
        svis,
        suv,
    })
}
