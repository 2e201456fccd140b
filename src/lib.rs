pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod llm;
pub mod models;
pub mod pipeline;
pub mod store;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, AppResult, ExtractError, FetchError, ShapeError, StoreError};
pub use extract::extract_json;
pub use fetch::StructuredFetcher;
pub use pipeline::{Pipeline, PipelineOutcome, Stage};
pub use store::{Artifact, ArtifactStore};
