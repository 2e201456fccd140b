pub mod analyze;
pub mod billing;
pub mod orchestrator;
pub mod profile;
pub mod prompts;

use std::fmt;

use crate::store::Artifact;

pub use orchestrator::{DEFAULT_DESCRIPTION, Pipeline, PipelineOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Profile,
    Billing,
    Report,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Profile => "profile",
            Stage::Billing => "billing",
            Stage::Report => "report",
        }
    }

    /// Where the stage output is persisted.
    pub fn artifact(&self) -> Artifact {
        match self {
            Stage::Profile => Artifact::Profile,
            Stage::Billing => Artifact::Billing,
            Stage::Report => Artifact::Report,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
