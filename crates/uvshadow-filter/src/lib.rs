//! uvshadow-filter - Per-pixel channel operations
//!
//! The primitive transforms the shadow-band pipeline is assembled from:
//!
//! - Channel isolation (`isolate_blue`, `drop_blue`), grayscale conversion,
//!   inversion and hue tinting
//! - Contrast-stretch normalization, exposure, linear contrast and
//!   posterization
//! - Piecewise gamma response curves (`L1..L4`, `E1..E3`) and plain gamma
//! - A fixed small-radius box blur
//!
//! All operations are pure: input raster in, new raster out, first failure
//! reported as a [`FilterError`].

mod blur;
mod channel;
mod enhance;
mod error;
mod gamma;

pub use blur::box_blur;
pub use channel::{
    GrayMethod, drop_blue, invert, isolate_blue, tint, to_grayscale, to_grayscale_with,
};
pub use enhance::{
    TrcLut, adjust_contrast, adjust_exposure, identity_lut, normalize_contrast, posterize, trc_map,
};
pub use error::{FilterError, FilterResult};
pub use gamma::{
    RESPONSE_CURVES, ResponseCurve, adjust_gamma, apply_preset, response_curve,
    response_curve_lut, response_curve_names,
};
