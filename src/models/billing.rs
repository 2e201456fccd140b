use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ProjectProfile;
use crate::error::ShapeError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingRecord {
    /// `YYYY-MM`
    pub month: String,
    pub service: String,
    pub resource_id: String,
    pub region: String,
    pub usage_type: String,
    pub usage_quantity: f64,
    pub unit: String,
    pub cost_inr: i64,
    #[serde(default)]
    pub desc: String,
}

impl BillingRecord {
    pub fn dataset_from_value(value: &Value) -> Result<Vec<Self>, ShapeError> {
        super::view("billing dataset", value)
    }
}

/// `None` when the model-supplied costs overflow an `i64`.
pub fn total_cost_inr(records: &[BillingRecord]) -> Option<i64> {
    records
        .iter()
        .try_fold(0i64, |acc, r| acc.checked_add(r.cost_inr))
}

/// Outcome of comparing a billing dataset against the profile budget. Purely
/// informational: nothing is rejected on overrun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetCheck {
    pub total_cost_inr: i64,
    pub budget_inr_per_month: i64,
    pub over_budget: bool,
}

impl BudgetCheck {
    pub fn evaluate(profile: &Value, billing: &Value) -> Result<Self, ShapeError> {
        let profile = ProjectProfile::from_value(profile)?;
        let records = BillingRecord::dataset_from_value(billing)?;
        let total = total_cost_inr(&records).ok_or_else(|| ShapeError {
            entity: "billing dataset",
            source: <serde_json::Error as serde::de::Error>::custom("cost_inr total overflows"),
        })?;
        Ok(Self {
            total_cost_inr: total,
            budget_inr_per_month: profile.budget_inr_per_month,
            over_budget: total > profile.budget_inr_per_month,
        })
    }
}
