use std::env;
use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub llm_provider: String,
    pub llm_model: String,
    pub hf_token: Option<String>,
    pub hf_base_url: String,
    pub openai_api_key: Option<String>,
    pub ollama_base_url: String,
    pub data_dir: PathBuf,
    pub otel_enabled: bool,
    pub otel_service_name: String,
    pub otel_exporter_endpoint: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            llm_provider: env::var("LLM_PROVIDER").unwrap_or_else(|_| "huggingface".to_string()),
            llm_model: env::var("LLM_MODEL")
                .unwrap_or_else(|_| "meta-llama/Llama-3.1-8B-Instruct".to_string()),
            hf_token: env::var("HF_TOKEN").ok(),
            hf_base_url: env::var("HF_BASE_URL")
                .unwrap_or_else(|_| "https://router.huggingface.co/v1".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            ollama_base_url: env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            otel_enabled: parse_flag(&env::var("OTEL_ENABLED").unwrap_or_default())
                .context("OTEL_ENABLED must be true or false")?,
            otel_service_name: env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| "cloud-cost-optimizer".to_string()),
            otel_exporter_endpoint: env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:4317".to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            llm_provider: "huggingface".to_string(),
            llm_model: "meta-llama/Llama-3.1-8B-Instruct".to_string(),
            hf_token: None,
            hf_base_url: "https://router.huggingface.co/v1".to_string(),
            openai_api_key: None,
            ollama_base_url: "http://localhost:11434".to_string(),
            data_dir: PathBuf::from("."),
            otel_enabled: false,
            otel_service_name: "cloud-cost-optimizer".to_string(),
            otel_exporter_endpoint: "http://localhost:4317".to_string(),
        }
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        other => Err(anyhow::anyhow!("unrecognized flag value: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider_settings() {
        let config = Config::default();
        assert_eq!(config.llm_model, "meta-llama/Llama-3.1-8B-Instruct");
        assert_eq!(config.llm_provider, "huggingface");
        assert!(!config.is_production());
    }

    #[test]
    fn test_parse_flag() {
        let cases = vec![
            ("", false),
            ("false", false),
            ("0", false),
            ("OFF", false),
            ("true", true),
            (" yes ", true),
            ("1", true),
        ];
        for (raw, expected) in cases {
            assert_eq!(parse_flag(raw).unwrap(), expected, "parse_flag({raw:?})");
        }
        assert!(parse_flag("maybe").is_err());
    }

    #[test]
    fn test_is_production() {
        let config = Config {
            environment: "production".to_string(),
            ..Config::default()
        };
        assert!(config.is_production());
    }
}
