use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ShapeError;

/// Only the fields the report view reads are required. Everything else falls
/// back to a default because the model does not always follow the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    #[serde(default)]
    pub project_name: String,
    pub analysis: CostAnalysis,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAnalysis {
    pub total_monthly_cost: i64,
    #[serde(default)]
    pub budget: i64,
    pub budget_variance: i64,
    #[serde(default)]
    pub is_over_budget: bool,
    #[serde(default)]
    pub service_costs: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub current_cost: i64,
    pub potential_savings: i64,
    pub recommendation_type: RecommendationType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub implementation_effort: Option<Level>,
    #[serde(default)]
    pub risk_level: Option<Level>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub cloud_providers: Vec<String>,
}

/// Values outside the prompted set are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecommendationType {
    OpenSource,
    RightSizing,
    FreeTier,
    Other(String),
}

impl RecommendationType {
    pub fn as_str(&self) -> &str {
        match self {
            RecommendationType::OpenSource => "open_source",
            RecommendationType::RightSizing => "right_sizing",
            RecommendationType::FreeTier => "free_tier",
            RecommendationType::Other(raw) => raw,
        }
    }
}

impl From<String> for RecommendationType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "open_source" => RecommendationType::OpenSource,
            "right_sizing" => RecommendationType::RightSizing,
            "free_tier" => RecommendationType::FreeTier,
            _ => RecommendationType::Other(raw),
        }
    }
}

impl From<RecommendationType> for String {
    fn from(kind: RecommendationType) -> Self {
        kind.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    Low,
    Medium,
    High,
    Other(String),
}

impl Level {
    pub fn as_str(&self) -> &str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
            Level::Other(raw) => raw,
        }
    }
}

impl From<String> for Level {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "low" => Level::Low,
            "medium" => Level::Medium,
            "high" => Level::High,
            _ => Level::Other(raw),
        }
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}

impl OptimizationReport {
    pub fn from_value(value: &Value) -> Result<Self, ShapeError> {
        super::view("optimization report", value)
    }

    /// Saturates instead of overflowing on absurd model-supplied amounts.
    pub fn total_potential_savings(&self) -> i64 {
        self.recommendations
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.potential_savings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report_value() -> Value {
        json!({
            "project_name": "Food Delivery App",
            "analysis": {
                "total_monthly_cost": 42000,
                "budget": 50000,
                "budget_variance": 8000,
                "is_over_budget": false,
                "service_costs": {"Compute Instance": 18000, "Database Instance": 24000}
            },
            "recommendations": [
                {
                    "title": "Move analytics to open-source stack",
                    "service": "Analytics",
                    "current_cost": 6000,
                    "potential_savings": 4000,
                    "recommendation_type": "open_source",
                    "description": "Self-host Metabase",
                    "implementation_effort": "medium",
                    "risk_level": "Low",
                    "steps": ["Provision VM", "Install Metabase"],
                    "cloud_providers": ["AWS", "GCP"]
                },
                {
                    "title": "Right-size API instances",
                    "service": "Compute Instance",
                    "current_cost": 18000,
                    "potential_savings": 5000,
                    "recommendation_type": "right_sizing",
                    "implementation_effort": "low",
                    "risk_level": "medium"
                }
            ]
        })
    }

    #[test]
    fn test_report_from_value() {
        let report = OptimizationReport::from_value(&report_value()).unwrap();
        assert_eq!(report.project_name, "Food Delivery App");
        assert_eq!(report.analysis.service_costs["Database Instance"], 24000);
        assert_eq!(report.recommendations.len(), 2);
        assert_eq!(
            report.recommendations[0].recommendation_type,
            RecommendationType::OpenSource
        );
        assert_eq!(report.recommendations[0].risk_level, Some(Level::Low));
        assert!(report.recommendations[1].cloud_providers.is_empty());
        assert_eq!(report.total_potential_savings(), 9000);
    }

    #[test]
    fn test_unknown_enum_values_are_kept_verbatim() {
        let mut value = report_value();
        value["recommendations"][0]["recommendation_type"] = json!("serverless");
        value["recommendations"][0]["implementation_effort"] = json!("Low-Medium");
        let report = OptimizationReport::from_value(&value).unwrap();
        let rec = &report.recommendations[0];
        assert_eq!(rec.recommendation_type.as_str(), "serverless");
        assert_eq!(
            rec.implementation_effort,
            Some(Level::Other("Low-Medium".to_string()))
        );
    }

    #[test]
    fn test_fields_outside_the_view_are_optional() {
        let value = json!({
            "project_name": "Sparse",
            "analysis": {"total_monthly_cost": 30000, "budget_variance": -500},
            "recommendations": [{
                "title": "Use the free tier",
                "potential_savings": 1500,
                "recommendation_type": "free_tier"
            }]
        });
        let report = OptimizationReport::from_value(&value).unwrap();
        assert_eq!(report.analysis.budget, 0);
        assert!(!report.analysis.is_over_budget);
        let rec = &report.recommendations[0];
        assert!(rec.service.is_empty());
        assert_eq!(rec.risk_level, None);
        assert_eq!(rec.recommendation_type, RecommendationType::FreeTier);
    }

    #[test]
    fn test_enum_values_serialize_as_plain_strings() {
        let report = OptimizationReport::from_value(&report_value()).unwrap();
        let value = serde_json::to_value(&report.recommendations[0]).unwrap();
        assert_eq!(value["recommendation_type"], "open_source");
        assert_eq!(value["risk_level"], "low");
    }

    #[test]
    fn test_total_potential_savings_saturates() {
        let mut value = report_value();
        value["recommendations"][0]["potential_savings"] = json!(i64::MAX);
        let report = OptimizationReport::from_value(&value).unwrap();
        assert_eq!(report.total_potential_savings(), i64::MAX);
    }

    #[test]
    fn test_missing_analysis_is_shape_error() {
        let value = json!({"project_name": "Half a report"});
        assert!(OptimizationReport::from_value(&value).is_err());
    }

    #[test]
    fn test_recommendation_type_as_str() {
        assert_eq!(RecommendationType::FreeTier.as_str(), "free_tier");
        assert_eq!(RecommendationType::RightSizing.as_str(), "right_sizing");
    }
}
