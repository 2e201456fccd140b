use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::Stage;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("No complete JSON found in model response")]
    NoCompleteJson,
}

/// Why a structured fetch produced no value.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("completion service error: {0}")]
    Service(String),

    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model returned an empty result")]
    Empty,
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Service(_) => "service",
            FetchError::Extraction(_) => "extraction",
            FetchError::Parse(_) => "parse",
            FetchError::Empty => "empty",
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not serialize {name}: {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// A structured value did not have the shape a typed view expects.
#[derive(Error, Debug)]
#[error("unexpected {entity} shape: {source}")]
pub struct ShapeError {
    pub entity: &'static str,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No project description found, enter one first")]
    MissingDescription,

    #[error("Stage {stage} failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: FetchError,
    },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type AppResult<T> = Result<T, AppError>;
