//! Named pipeline stages and their artifacts
//!
//! Every raster the pipeline produces has a stage name, used both for
//! failure attribution and for retrieving intermediates after a successful
//! run.

use std::fmt;
use uvshadow_core::Raster;

/// A named stage of the processing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Registered wide capture (visible + near-UV)
    Unfiltered,
    /// Registered narrow capture (long-pass filtered)
    Filtered,
    /// Shadow in the filtered band (~380-410nm)
    Sf,
    /// Shadow in green/red (~500-740nm)
    Sgr,
    /// Shadow in blue (~380-500nm)
    Sb,
    /// Shadow in blue above the filter cutoff (~410-500nm)
    SbPrime,
    /// Shadow anywhere in the visible range (~410-740nm)
    Svis,
    /// Shadow exclusively in the near-UV band (~380-410nm)
    Suv,
    /// The UV-exclusive shadow painted in the highlight hue
    SuvTinted,
    /// The deliverable composite
    Final,
}

impl Stage {
    /// Stage name as shown in diagnostics and artifact listings.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Unfiltered => "unfiltered",
            Stage::Filtered => "filtered",
            Stage::Sf => "Sf",
            Stage::Sgr => "Sgr",
            Stage::Sb => "Sb",
            Stage::SbPrime => "Sb'",
            Stage::Svis => "Svis",
            Stage::Suv => "Suv",
            Stage::SuvTinted => "SuvTinted",
            Stage::Final => "final",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every named intermediate of a successful run
///
/// Rasters share storage via `Arc`, so keeping the full set costs a handful
/// of pointers; the external layer decides which, if any, to persist.
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    pub unfiltered: Raster,
    pub filtered: Raster,
    pub sf: Raster,
    pub sgr: Raster,
    pub sb: Raster,
    pub sb_prime: Raster,
    pub svis: Raster,
    pub suv: Raster,
    pub suv_tinted: Raster,
}

impl ArtifactSet {
    /// Retrieve an intermediate by stage name.
    ///
    /// Returns `None` for [`Stage::Final`]; the composite is carried
    /// separately as the run's primary output.
    pub fn get(&self, stage: Stage) -> Option<&Raster> {
        match stage {
            Stage::Unfiltered => Some(&self.unfiltered),
            Stage::Filtered => Some(&self.filtered),
            Stage::Sf => Some(&self.sf),
            Stage::Sgr => Some(&self.sgr),
            Stage::Sb => Some(&self.sb),
            Stage::SbPrime => Some(&self.sb_prime),
            Stage::Svis => Some(&self.svis),
            Stage::Suv => Some(&self.suv),
            Stage::SuvTinted => Some(&self.suv_tinted),
            Stage::Final => None,
        }
    }
}

/// Result of a completed processing run
#[derive(Debug, Clone)]
pub struct Composite {
    /// The deliverable tinted overlay
    pub image: Raster,
    /// Every named intermediate, retrievable by stage
    pub artifacts: ArtifactSet,
}
