//! uvshadow - Dual-camera UV-absorbance imaging
//!
//! Combines two near-simultaneous photographs from a vertically offset
//! wide/narrow camera pair (one unfiltered, one behind a long-pass optical
//! filter) into a composite that highlights regions uniquely absorbing
//! near-UV light (roughly 380-410nm), approximated by comparing relative
//! shadow across disjoint wavelength bands.
//!
//! # Example
//!
//! ```
//! use uvshadow::{Raster, pipeline};
//!
//! let wide = Raster::new_filled(64, 64, uvshadow::color::compose_rgb(10, 200, 60)).unwrap();
//! let narrow = Raster::new_filled(64, 64, uvshadow::color::compose_rgb(40, 90, 220)).unwrap();
//!
//! let settings = pipeline::ProcessingSettings {
//!     camera_offset_px: 0,
//!     ..Default::default()
//! };
//! // flat synthetic captures have no contrast to stretch; a real run
//! // returns the composite, this one reports the failing band by name
//! let err = pipeline::process(&wide, &narrow, &settings).unwrap_err();
//! assert!(err.stage().is_some());
//! ```

// Re-export core types (the data structures used everywhere)
pub use uvshadow_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use uvshadow_filter as filter;
pub use uvshadow_io as io;
pub use uvshadow_pipeline as pipeline;
pub use uvshadow_transform as transform;
