//! Error types for uvshadow-pipeline
//!
//! A failed run always reports the stage that could not produce its
//! artifact, with the underlying reason attached. Pixel transforms are
//! deterministic, so there are no retries: the first failure aborts the
//! run and nothing is partially published.

use crate::stage::Stage;
use thiserror::Error;
use uvshadow_filter::FilterError;
use uvshadow_transform::TransformError;

/// Any failure from the crates a stage is assembled from
#[derive(Debug, Error)]
pub enum OpError {
    #[error(transparent)]
    Core(#[from] uvshadow_core::Error),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// A failed processing run
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The captures could not be brought into a common frame
    #[error("registration failed: {0}")]
    Registration(#[source] OpError),

    /// A named stage could not produce its artifact
    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: OpError,
    },
}

impl PipelineError {
    /// The failing stage, if the failure is attributable to one.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineError::Stage { stage, .. } => Some(*stage),
            PipelineError::Registration(_) => None,
        }
    }
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Attach a stage name to an operation's failure.
pub(crate) trait WithStage<T> {
    fn with_stage(self, stage: Stage) -> PipelineResult<T>;
}

impl<T, E: Into<OpError>> WithStage<T> for Result<T, E> {
    fn with_stage(self, stage: Stage) -> PipelineResult<T> {
        self.map_err(|e| PipelineError::Stage {
            stage,
            source: e.into(),
        })
    }
}
