use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::LazyLock;

pub static METER: LazyLock<Meter> = LazyLock::new(|| global::meter("cloud-cost-optimizer"));

// --- LLM client metrics ---

pub static GEN_AI_TOKEN_USAGE: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("gen_ai.client.token.usage")
        .with_description("Number of tokens used per LLM call")
        .with_unit("{token}")
        .build()
});

pub static GEN_AI_OPERATION_DURATION: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("gen_ai.client.operation.duration")
        .with_description("Duration of LLM operations in seconds")
        .with_unit("s")
        .build()
});

pub static GEN_AI_ERROR_COUNT: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("gen_ai.client.error.count")
        .with_description("Number of LLM call errors")
        .with_unit("{error}")
        .build()
});

// --- Pipeline metrics ---

pub static PIPELINE_STAGE_DURATION: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("pipeline.stage.duration")
        .with_description("Duration of a pipeline stage in seconds")
        .with_unit("s")
        .build()
});

pub static PIPELINE_STAGE_FAILURES: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("pipeline.stage.failures")
        .with_description("Number of pipeline stages that produced no value")
        .with_unit("{failure}")
        .build()
});

pub static BILLING_RECORDS: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("billing.records")
        .with_description("Number of synthetic billing records per run")
        .with_unit("{record}")
        .build()
});

pub static BILLING_TOTAL_COST: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("billing.total_cost_inr")
        .with_description("Total monthly cost of the synthetic billing dataset")
        .with_unit("INR")
        .build()
});

pub static REPORT_RECOMMENDATIONS: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("report.recommendations")
        .with_description("Number of recommendations per optimization report")
        .with_unit("{recommendation}")
        .build()
});
