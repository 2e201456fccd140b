use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ShapeError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectProfile {
    pub name: String,
    pub budget_inr_per_month: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: BTreeMap<String, Value>,
    #[serde(default)]
    pub non_functional_requirements: Vec<String>,
}

impl ProjectProfile {
    pub fn from_value(value: &Value) -> Result<Self, ShapeError> {
        super::view("project profile", value)
    }
}
