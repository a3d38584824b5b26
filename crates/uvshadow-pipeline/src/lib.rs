//! uvshadow-pipeline - From two raw captures to the UV-shadow composite
//!
//! The pipeline takes the wide (unfiltered) and narrow (long-pass filtered)
//! captures plus a [`ProcessingSettings`] record, and produces one RGBA
//! composite in which regions uniquely absorbing near-UV light glow in the
//! highlight hue:
//!
//! ```text
//! raw(wide), raw(narrow)
//!   -> register                (crop / scale / shift into one frame)
//!   -> Sf, Sgr, Sb             (independent shadow bands, concurrent)
//!   -> Sb', Svis, Suv          (band algebra, sequential)
//!   -> tint + blend            (presenter)
//!   -> composite
//! ```
//!
//! Data flows forward explicitly: each stage consumes its inputs and hands
//! its artifact to the next; there is no shared mutable state anywhere in a
//! run. A failed stage aborts the run with its name attached, and no partial
//! composite is ever produced.

mod bands;
mod error;
mod present;
mod register;
mod settings;
mod stage;

pub use bands::{CombinedBands, ShadowBands, combine_bands, derive_bands};
pub use error::{OpError, PipelineError, PipelineResult};
pub use present::{Presented, present};
pub use register::{RegisteredPair, register};
pub use settings::ProcessingSettings;
pub use stage::{ArtifactSet, Composite, Stage};

use tracing::debug;
use uvshadow_core::{Error as CoreError, Raster};

/// Run the full pipeline on two raw captures.
///
/// Convenience wrapper over [`process_with_artifacts`] returning only the
/// deliverable composite.
pub fn process(
    wide: &Raster,
    narrow: &Raster,
    settings: &ProcessingSettings,
) -> PipelineResult<Raster> {
    process_with_artifacts(wide, narrow, settings).map(|c| c.image)
}

/// Run the full pipeline and keep every named intermediate.
///
/// # Errors
///
/// Aborts on the first failing stage; see [`PipelineError`] for how
/// failures are attributed.
pub fn process_with_artifacts(
    wide: &Raster,
    narrow: &Raster,
    settings: &ProcessingSettings,
) -> PipelineResult<Composite> {
    let pair = register(wide, narrow, settings)?;
    process_registered(pair, settings)
}

/// Run the band derivations and presenter on an already-registered pair.
///
/// The pair must share exact pixel dimensions, as [`register`] guarantees;
/// a mismatched pair is rejected the same way a failed registration is.
pub fn process_registered(
    pair: RegisteredPair,
    settings: &ProcessingSettings,
) -> PipelineResult<Composite> {
    if !pair.unfiltered.sizes_equal(&pair.filtered) {
        return Err(PipelineError::Registration(
            CoreError::DimensionMismatch {
                left: pair.unfiltered.dimensions(),
                right: pair.filtered.dimensions(),
            }
            .into(),
        ));
    }

    let RegisteredPair {
        unfiltered,
        filtered,
    } = pair;

    let bands = derive_bands(&unfiltered, &filtered, settings)?;
    let combined = combine_bands(&bands, settings)?;
    let presented = present(&unfiltered, &combined.suv, settings)?;
    debug!(
        width = presented.composite.width(),
        height = presented.composite.height(),
        "processing run complete"
    );

    Ok(Composite {
        image: presented.composite,
        artifacts: ArtifactSet {
            unfiltered,
            filtered,
            sf: bands.sf,
            sgr: bands.sgr,
            sb: bands.sb,
            sb_prime: combined.sb_prime,
            svis: combined.svis,
            suv: combined.suv,
            suv_tinted: presented.suv_tinted,
        },
    })
}
