use serde_json::Value;

use super::Stage;
use super::prompts::PROFILE_SYSTEM_PROMPT;
use crate::error::FetchError;
use crate::fetch::StructuredFetcher;

#[tracing::instrument(
    name = "pipeline_stage profile",
    skip(fetcher, description),
    fields(
        pipeline.stage = "profile",
        description.chars = description.chars().count(),
        profile.name,
    )
)]
pub async fn generate_profile(
    fetcher: &StructuredFetcher,
    description: &str,
) -> Result<Value, FetchError> {
    tracing::info!("Generating project profile");

    let profile = fetcher
        .fetch(Stage::Profile.as_str(), PROFILE_SYSTEM_PROMPT, description)
        .await?;

    if let Some(name) = profile.get("name").and_then(Value::as_str) {
        tracing::Span::current().record("profile.name", name);
    }

    Ok(profile)
}
