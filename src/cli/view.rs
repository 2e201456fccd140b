use crate::error::{AppError, StoreError};
use crate::models::{BudgetCheck, OptimizationReport};

/// Number of recommendations shown by the report view.
pub const TOP_RECOMMENDATIONS: usize = 3;

pub fn render_report(report: &OptimizationReport, top: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("REPORT FOR: {}\n", report.project_name));
    out.push_str(&format!(
        "Total Monthly Cost: ₹{}\n",
        report.analysis.total_monthly_cost
    ));
    out.push_str(&format!(
        "Budget Variance:    ₹{}\n",
        report.analysis.budget_variance
    ));
    out.push_str(&format!(
        "Potential Savings:  ₹{}\n",
        report.total_potential_savings()
    ));
    out.push_str("\nTOP RECOMMENDATIONS:\n");

    for rec in report.recommendations.iter().take(top) {
        out.push_str(&format!("\n{}\n", rec.title));
        out.push_str(&format!("   Potential Savings: ₹{}\n", rec.potential_savings));
        out.push_str(&format!("   Type: {}\n", rec.recommendation_type.as_str()));
        out.push_str(&format!("   Providers: {}\n", rec.cloud_providers.join(", ")));
    }

    out
}

pub fn render_budget(check: &BudgetCheck) -> String {
    if check.over_budget {
        format!(
            "Synthetic billing totals ₹{} which exceeds the ₹{} budget",
            check.total_cost_inr, check.budget_inr_per_month
        )
    } else {
        format!(
            "Synthetic billing totals ₹{} within the ₹{} budget",
            check.total_cost_inr, check.budget_inr_per_month
        )
    }
}

/// Operator-facing text for a failed menu action.
pub fn failure_message(err: &AppError) -> String {
    match err {
        AppError::MissingDescription => {
            "Please run Option 1 first to create a description.".to_string()
        }
        AppError::Stage { stage, source } => {
            format!("Failed to generate {stage} ({} error). Stopping.", source.kind())
        }
        AppError::Store(StoreError::NotFound(_)) => {
            "No report found. Please run Option 2 first.".to_string()
        }
        AppError::Shape(shape) => format!("Saved report is unreadable: {shape}"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    use super::*;
    use crate::error::FetchError;
    use crate::models::{CostAnalysis, Level, Recommendation, RecommendationType};
    use crate::pipeline::Stage;

    fn recommendation(title: &str, savings: i64) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            service: "Compute Instance".to_string(),
            current_cost: 20000,
            potential_savings: savings,
            recommendation_type: RecommendationType::FreeTier,
            description: String::new(),
            implementation_effort: Some(Level::Low),
            risk_level: Some(Level::Medium),
            steps: vec![],
            cloud_providers: vec!["AWS".to_string(), "GCP".to_string()],
        }
    }

    fn report(recommendations: Vec<Recommendation>) -> OptimizationReport {
        OptimizationReport {
            project_name: "Food Delivery App".to_string(),
            analysis: CostAnalysis {
                total_monthly_cost: 42000,
                budget: 50000,
                budget_variance: 8000,
                is_over_budget: false,
                service_costs: BTreeMap::new(),
            },
            recommendations,
        }
    }

    #[test]
    fn test_render_report_shows_top_three() {
        let report = report(vec![
            recommendation("First", 100),
            recommendation("Second", 200),
            recommendation("Third", 300),
            recommendation("Fourth", 400),
        ]);
        let text = render_report(&report, TOP_RECOMMENDATIONS);

        assert!(text.starts_with("REPORT FOR: Food Delivery App\n"));
        assert!(text.contains("Total Monthly Cost: ₹42000"));
        assert!(text.contains("Budget Variance:    ₹8000"));
        assert!(text.contains("Potential Savings:  ₹1000"));
        assert!(text.contains("Third"));
        assert!(!text.contains("Fourth"));
        assert!(text.contains("   Type: free_tier"));
        assert!(text.contains("   Providers: AWS, GCP"));
    }

    #[test]
    fn test_render_report_without_recommendations() {
        let text = render_report(&report(vec![]), TOP_RECOMMENDATIONS);
        assert!(text.ends_with("TOP RECOMMENDATIONS:\n"));
    }

    #[test]
    fn test_render_budget() {
        let over = BudgetCheck {
            total_cost_inr: 60000,
            budget_inr_per_month: 50000,
            over_budget: true,
        };
        assert_eq!(
            render_budget(&over),
            "Synthetic billing totals ₹60000 which exceeds the ₹50000 budget"
        );
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            failure_message(&AppError::MissingDescription),
            "Please run Option 1 first to create a description."
        );
        assert_eq!(
            failure_message(&AppError::Stage {
                stage: Stage::Profile,
                source: FetchError::Service("down".to_string()),
            }),
            "Failed to generate profile (service error). Stopping."
        );
        assert_eq!(
            failure_message(&AppError::Store(StoreError::NotFound(PathBuf::from(
                "cost_optimization_report.json"
            )))),
            "No report found. Please run Option 2 first."
        );
    }
}
