//! Typed views over the loosely-shaped values the model returns.
//!
//! Stages pass raw `serde_json::Value`s around and persist them untouched;
//! these types are only built on demand and fail with a `ShapeError` when the
//! model ignored the requested schema.

pub mod billing;
pub mod profile;
pub mod report;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ShapeError;

pub use billing::{BillingRecord, BudgetCheck};
pub use profile::ProjectProfile;
pub use report::{CostAnalysis, Level, OptimizationReport, Recommendation, RecommendationType};

pub(crate) fn view<T: DeserializeOwned>(
    entity: &'static str,
    value: &Value,
) -> Result<T, ShapeError> {
    T::deserialize(value).map_err(|source| ShapeError { entity, source })
}
