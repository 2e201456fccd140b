use serde_json::Value;

use super::Stage;
use super::prompts::BILLING_SYSTEM_PROMPT;
use crate::error::FetchError;
use crate::fetch::StructuredFetcher;

pub(crate) fn billing_user_prompt(profile: &Value) -> String {
    format!("Create a billing breakdown for this profile: {profile}")
}

#[tracing::instrument(
    name = "pipeline_stage billing",
    skip(fetcher, profile),
    fields(pipeline.stage = "billing", billing.records)
)]
pub async fn generate_billing(
    fetcher: &StructuredFetcher,
    profile: &Value,
) -> Result<Value, FetchError> {
    tracing::info!("Generating synthetic billing");

    let billing = fetcher
        .fetch(
            Stage::Billing.as_str(),
            BILLING_SYSTEM_PROMPT,
            &billing_user_prompt(profile),
        )
        .await?;

    if let Some(records) = billing.as_array() {
        tracing::Span::current().record("billing.records", records.len());
    }

    Ok(billing)
}
