//! Piecewise gamma response curves
//!
//! A [`ResponseCurve`] is a named piecewise remap evaluated in normalized
//! [0, 1] space: input below the boundary passes through a linear segment
//! `a*x + b`, input at or above it through a power segment `x^gamma` (the
//! exponential coefficients are fixed at `[1, 0, 0]`). A curve with
//! `gamma == 0` is a pure linear remap (the whole range takes the linear
//! branch); a curve with linear coefficients `[1, 0]` and a nonzero gamma is
//! a pure power curve.
//!
//! The registry is fixed at startup: `L1..L4` are the linear curves,
//! `E1..E3` the power curves. Lookups by unknown name fail.

use crate::enhance::{TrcLut, trc_map};
use crate::{FilterError, FilterResult};
use uvshadow_core::Raster;

/// A named piecewise response-curve descriptor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseCurve {
    /// Registry name
    pub label: &'static str,
    /// Pixel value where the linear segment hands over to the power segment
    pub boundary: u8,
    /// Linear segment coefficients `[a, b]`: `y = a*x + b`
    pub linear: [f32; 2],
    /// Power segment exponent: `y = x^gamma`; 0 selects linear-only
    pub gamma: f32,
}

/// The fixed response-curve registry.
pub static RESPONSE_CURVES: [ResponseCurve; 7] = [
    ResponseCurve { label: "L1", boundary: 255, linear: [1.0, 0.0], gamma: 0.0 },
    ResponseCurve { label: "L2", boundary: 255, linear: [0.5, 0.5], gamma: 0.0 },
    ResponseCurve { label: "L3", boundary: 255, linear: [3.0, -1.0], gamma: 0.0 },
    ResponseCurve { label: "L4", boundary: 255, linear: [-1.0, 1.0], gamma: 0.0 },
    ResponseCurve { label: "E1", boundary: 0, linear: [1.0, 0.0], gamma: 1.0 },
    ResponseCurve { label: "E2", boundary: 0, linear: [1.0, 0.0], gamma: 2.2 },
    ResponseCurve { label: "E3", boundary: 0, linear: [1.0, 0.0], gamma: 1.0 / 2.2 },
];

/// Look up a response curve by name.
///
/// # Errors
///
/// Returns [`FilterError::UnknownPreset`] when no curve carries the name.
pub fn response_curve(name: &str) -> FilterResult<&'static ResponseCurve> {
    RESPONSE_CURVES
        .iter()
        .find(|c| c.label == name)
        .ok_or_else(|| FilterError::UnknownPreset(name.to_string()))
}

/// Names of every registered curve, in registry order.
pub fn response_curve_names() -> impl Iterator<Item = &'static str> {
    RESPONSE_CURVES.iter().map(|c| c.label)
}

/// Build the lookup table realizing a response curve.
pub fn response_curve_lut(curve: &ResponseCurve) -> TrcLut {
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let x = i as f32 / 255.0;
        let y = if curve.gamma == 0.0 || (i as u8) < curve.boundary {
            curve.linear[0] * x + curve.linear[1]
        } else {
            x.powf(curve.gamma)
        };
        *entry = (y * 255.0).round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Apply a named response curve to every channel.
///
/// # Errors
///
/// Fails with [`FilterError::UnknownPreset`] for an unregistered name.
pub fn apply_preset(img: &Raster, name: &str) -> FilterResult<Raster> {
    let curve = response_curve(name)?;
    trc_map(img, &response_curve_lut(curve))
}

/// Plain gamma adjustment: `v' = v^power` in normalized space.
///
/// Powers above 1.0 darken midtones, below 1.0 lighten them.
///
/// # Errors
///
/// The power must be finite and greater than zero.
pub fn adjust_gamma(img: &Raster, power: f32) -> FilterResult<Raster> {
    if !power.is_finite() || power <= 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "gamma power must be positive and finite; got {power}"
        )));
    }

    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let x = i as f32 / 255.0;
        *entry = (x.powf(power) * 255.0).round().clamp(0.0, 255.0) as u8;
    }
    trc_map(img, &lut)
}
