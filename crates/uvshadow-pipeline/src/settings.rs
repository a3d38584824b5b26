//! Tunable processing parameters
//!
//! One typed field per knob, immutable during a run; an external settings
//! editor mutates a copy between runs. String-keyed lookup belongs to that
//! editor's UI binding, not here.

use serde::{Deserialize, Serialize};

/// Every tunable parameter of a processing run
///
/// The Sgr and Sb exposure/contrast switches default to off; their value
/// fields are live the moment an external editor flips them on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingSettings {
    /// Vertical offset between the two lens centers, in pixels of the
    /// registered frame. Positive when the wide lens sits above the narrow
    /// one; each image absorbs half of it during registration.
    pub camera_offset_px: i32,

    /// Sf: exposure boost before inversion
    pub sf_exposure_enabled: bool,
    pub sf_exposure_stops: f32,
    /// Sf: response-curve preset shaping the inverted band
    pub sf_gamma_preset_enabled: bool,
    pub sf_gamma_preset: String,
    /// Sf: extra plain gamma after the preset
    pub sf_gamma_adjust_enabled: bool,
    pub sf_gamma_adjust: f32,
    /// Sf: linear contrast about mid-gray
    pub sf_contrast_enabled: bool,
    pub sf_contrast: f32,
    /// Sf: posterization after the blur
    pub sf_posterize_enabled: bool,
    pub sf_posterize_levels: u8,

    /// Sgr: optional exposure/contrast (off in the reference behavior)
    pub sgr_exposure_enabled: bool,
    pub sgr_exposure_stops: f32,
    pub sgr_contrast_enabled: bool,
    pub sgr_contrast: f32,

    /// Sb: optional exposure/contrast (off in the reference behavior)
    pub sb_exposure_enabled: bool,
    pub sb_exposure_stops: f32,
    pub sb_contrast_enabled: bool,
    pub sb_contrast: f32,

    /// Response-curve preset shaping the UV-exclusive mask
    pub suv_gamma_preset: String,

    /// Opacity of the tinted mask over the unfiltered image
    pub final_blend_alpha: f32,

    /// Hue painting the UV-exclusive mask in the composite
    pub highlight: [u8; 3],
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        ProcessingSettings {
            camera_offset_px: 240,
            sf_exposure_enabled: true,
            sf_exposure_stops: 5.0,
            sf_gamma_preset_enabled: true,
            sf_gamma_preset: "E2".to_string(),
            sf_gamma_adjust_enabled: true,
            sf_gamma_adjust: 1.5,
            sf_contrast_enabled: true,
            sf_contrast: 2.0,
            sf_posterize_enabled: true,
            sf_posterize_levels: 4,
            sgr_exposure_enabled: false,
            sgr_exposure_stops: 5.0,
            sgr_contrast_enabled: false,
            sgr_contrast: 1.5,
            sb_exposure_enabled: false,
            sb_exposure_stops: 5.0,
            sb_contrast_enabled: false,
            sb_contrast: 1.5,
            suv_gamma_preset: "L3".to_string(),
            final_blend_alpha: 1.0,
            highlight: [255, 0, 0],
        }
    }
}
