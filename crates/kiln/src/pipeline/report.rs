use kiln_core::Error;

use std::{fmt, path::PathBuf};
use tracing::{debug, info};

/// Pipeline stages, in execution order. A run that reaches the end is logged
/// by [`Report::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Compile,
    ApplySchema,
    StoreArtifact,
}

/// Result of a single stage.
#[derive(Debug, Clone, Default)]
pub enum StageOutcome {
    /// The stage did not run because an earlier stage stopped the pipeline.
    #[default]
    Skipped,
    Succeeded,
    Failed(Error),
}

/// Overall result reported to the caller.
///
/// This is deliberately binary; per-stage results are logged and available
/// from [`Report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Failed,
}

/// Per-stage results of one pipeline run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Entity the run was for
    pub entity: String,

    pub compile: StageOutcome,
    pub apply_schema: StageOutcome,
    pub store_artifact: StageOutcome,

    /// Where the model artifact was written, if it was
    pub artifact_path: Option<PathBuf>,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Compile => "compile",
            Stage::ApplySchema => "apply-schema",
            Stage::StoreArtifact => "store-artifact",
        })
    }
}

impl StageOutcome {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, StageOutcome::Succeeded)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, StageOutcome::Failed(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, StageOutcome::Skipped)
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            StageOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl Outcome {
    pub fn is_success(self) -> bool {
        self == Outcome::Created
    }

    /// Message suitable for returning to the requester. Never includes the
    /// underlying cause.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Created => "model and table created successfully",
            Outcome::Failed => "error creating the model and table",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Report {
    pub(crate) fn new(entity: &str) -> Report {
        Report {
            entity: entity.to_string(),
            compile: StageOutcome::Skipped,
            apply_schema: StageOutcome::Skipped,
            store_artifact: StageOutcome::Skipped,
            artifact_path: None,
        }
    }

    pub(crate) fn record(&mut self, stage: Stage, outcome: StageOutcome) {
        debug!(entity = %self.entity, stage = %stage, succeeded = outcome.is_succeeded(), "stage finished");

        match stage {
            Stage::Compile => self.compile = outcome,
            Stage::ApplySchema => self.apply_schema = outcome,
            Stage::StoreArtifact => self.store_artifact = outcome,
        }
    }

    /// Logs the end of a run that went through every stage.
    pub(crate) fn finish(&self) {
        info!(
            entity = %self.entity,
            stage = "done",
            outcome = %self.outcome(),
            "pipeline finished"
        );
    }

    /// Collapses the report to the caller-facing outcome.
    ///
    /// A schema failure on its own does not fail the request.
    pub fn outcome(&self) -> Outcome {
        if self.compile.is_succeeded() && self.store_artifact.is_succeeded() {
            Outcome::Created
        } else {
            Outcome::Failed
        }
    }
}
