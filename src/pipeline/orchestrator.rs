use std::future::Future;
use std::path::PathBuf;
use std::time::Instant;

use opentelemetry::KeyValue;
use serde_json::Value;
use uuid::Uuid;

use super::{Stage, analyze, billing, profile};
use crate::error::{AppError, AppResult, FetchError};
use crate::fetch::StructuredFetcher;
use crate::models::{BudgetCheck, OptimizationReport};
use crate::store::{Artifact, ArtifactStore};
use crate::telemetry::metrics::{
    BILLING_RECORDS, BILLING_TOTAL_COST, PIPELINE_STAGE_DURATION, PIPELINE_STAGE_FAILURES,
    REPORT_RECOMMENDATIONS,
};

pub const DEFAULT_DESCRIPTION: &str = "\
We are building a food delivery app for 10,000 users per month.
Budget: ₹50,000 per month.
Tech stack: Node.js backend, PostgreSQL database, object storage for images, monitoring, and basic analytics.
Non-functional requirements: scalability, cost efficiency, uptime monitoring.";

#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub run_id: Uuid,
    pub profile: Value,
    pub billing: Value,
    pub report: Value,
    /// `None` when profile or billing could not be read as typed views.
    pub budget: Option<BudgetCheck>,
}

/// Profile, billing and report stages run strictly in order. Each result is
/// saved before the next stage starts; the first failure stops the run.
pub struct Pipeline {
    fetcher: StructuredFetcher,
    store: ArtifactStore,
}

impl Pipeline {
    pub fn new(fetcher: StructuredFetcher, store: ArtifactStore) -> Self {
        Self { fetcher, store }
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Empty input falls back to [`DEFAULT_DESCRIPTION`].
    pub fn save_description(&self, text: &str) -> AppResult<PathBuf> {
        let text = if text.is_empty() {
            DEFAULT_DESCRIPTION
        } else {
            text
        };
        Ok(self.store.save_text(Artifact::Description, text)?)
    }

    pub async fn run(&self) -> AppResult<PipelineOutcome> {
        if !self.store.exists(Artifact::Description) {
            return Err(AppError::MissingDescription);
        }
        let description = self.store.load_text(Artifact::Description)?;
        self.run_with_description(&description).await
    }

    #[tracing::instrument(
        name = "pipeline run",
        skip(self, description),
        fields(run.id, run.duration_ms, llm.model = %self.fetcher.model())
    )]
    pub async fn run_with_description(&self, description: &str) -> AppResult<PipelineOutcome> {
        let start = Instant::now();
        let run_id = Uuid::new_v4();
        let span = tracing::Span::current();
        span.record("run.id", run_id.to_string());

        let profile = self
            .stage(
                Stage::Profile,
                profile::generate_profile(&self.fetcher, description),
            )
            .await?;

        let billing = self
            .stage(
                Stage::Billing,
                billing::generate_billing(&self.fetcher, &profile),
            )
            .await?;
        let budget = check_budget(&profile, &billing);

        let report = self
            .stage(
                Stage::Report,
                analyze::analyze_costs(&self.fetcher, &profile, &billing),
            )
            .await?;

        span.record("run.duration_ms", start.elapsed().as_millis() as u64);
        tracing::info!(run.id = %run_id, "Pipeline completed successfully");

        Ok(PipelineOutcome {
            run_id,
            profile,
            billing,
            report,
            budget,
        })
    }

    /// Awaits one stage and persists its value under the stage's artifact.
    async fn stage<F>(&self, stage: Stage, work: F) -> AppResult<Value>
    where
        F: Future<Output = Result<Value, FetchError>>,
    {
        let start = Instant::now();
        let result = work.await.and_then(|value| {
            if is_empty_result(&value) {
                Err(FetchError::Empty)
            } else {
                Ok(value)
            }
        });
        let stage_kv = KeyValue::new("pipeline.stage", stage.as_str());

        PIPELINE_STAGE_DURATION.record(start.elapsed().as_secs_f64(), &[stage_kv.clone()]);

        match result {
            Ok(value) => {
                self.store.save_json(stage.artifact(), &value)?;
                record_stage_metrics(stage, &value);
                Ok(value)
            }
            Err(source) => {
                PIPELINE_STAGE_FAILURES.add(
                    1,
                    &[stage_kv, KeyValue::new("error.kind", source.kind())],
                );
                tracing::error!(
                    pipeline.stage = stage.as_str(),
                    error.kind = source.kind(),
                    "Failed to generate {stage}, stopping"
                );
                Err(AppError::Stage { stage, source })
            }
        }
    }

    pub fn load_report(&self) -> AppResult<OptimizationReport> {
        let value = self.store.load_json(Artifact::Report)?;
        Ok(OptimizationReport::from_value(&value)?)
    }
}

// `{}`, `[]` and `null` carry nothing the next stage can use.
fn is_empty_result(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn record_stage_metrics(stage: Stage, value: &Value) {
    match stage {
        Stage::Profile => {}
        Stage::Billing => {
            if let Some(records) = value.as_array() {
                BILLING_RECORDS.record(records.len() as f64, &[]);
            }
        }
        Stage::Report => {
            if let Some(recommendations) = value.get("recommendations").and_then(Value::as_array) {
                REPORT_RECOMMENDATIONS.record(recommendations.len() as f64, &[]);
            }
        }
    }
}

// Informational only; the dataset has already been persisted as-is.
fn check_budget(profile: &Value, billing: &Value) -> Option<BudgetCheck> {
    match BudgetCheck::evaluate(profile, billing) {
        Ok(check) => {
            BILLING_TOTAL_COST.record(check.total_cost_inr as f64, &[]);
            if check.over_budget {
                tracing::warn!(
                    billing.total_cost_inr = check.total_cost_inr,
                    profile.budget_inr_per_month = check.budget_inr_per_month,
                    "Synthetic billing exceeds the project budget"
                );
            }
            Some(check)
        }
        Err(err) => {
            tracing::debug!(error = %err, "Skipping budget check");
            None
        }
    }
}
