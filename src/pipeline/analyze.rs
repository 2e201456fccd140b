use serde_json::Value;

use super::Stage;
use super::prompts::REPORT_SYSTEM_PROMPT;
use crate::error::FetchError;
use crate::fetch::StructuredFetcher;

pub(crate) fn analysis_user_prompt(profile: &Value, billing: &Value) -> String {
    format!("Profile: {profile}\n\nBilling: {billing}")
}

#[tracing::instrument(
    name = "pipeline_stage report",
    skip(fetcher, profile, billing),
    fields(pipeline.stage = "report", report.recommendations)
)]
pub async fn analyze_costs(
    fetcher: &StructuredFetcher,
    profile: &Value,
    billing: &Value,
) -> Result<Value, FetchError> {
    tracing::info!("Analyzing costs and generating report");

    let report = fetcher
        .fetch(
            Stage::Report.as_str(),
            REPORT_SYSTEM_PROMPT,
            &analysis_user_prompt(profile, billing),
        )
        .await?;

    if let Some(recommendations) = report.get("recommendations").and_then(Value::as_array) {
        tracing::Span::current().record("report.recommendations", recommendations.len());
    }

    Ok(report)
}
