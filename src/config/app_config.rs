use serde::Deserialize;

use crate::domain::guardrails::FallbackPolicy;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub pinecone: PineconeConfig,
    pub cohere: CohereConfig,
    pub gemini: GeminiConfig,
    pub retrieval: RetrievalConfig,
    pub memory: MemoryConfig,
    pub guardrails: GuardrailsConfig,
    pub timeouts: TimeoutConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    /// Directory for the per-process log file
    pub dir: String,
    /// Whether to write the log file at all
    pub file: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PineconeConfig {
    pub api_key: Option<String>,
    /// Data-plane host of the index, e.g. https://nova-xxxx.svc.pinecone.io
    pub index_host: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CohereConfig {
    pub api_key: Option<String>,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub top_k: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Turns kept per session
    pub window: usize,
    /// Idle sessions older than this are evicted
    pub idle_ttl_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GuardrailsConfig {
    pub competitors: Vec<String>,
    pub toxicity_threshold: f32,
    /// Hosted toxicity scorer endpoint; toxicity filtering is skipped when unset
    pub toxicity_endpoint: Option<String>,
    pub evaluation_questions: Vec<String>,
    pub fallback_policy: FallbackPolicy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Budget for each upstream call (retrieval, generation)
    pub upstream_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            dir: "logs".to_string(),
            file: true,
        }
    }
}

impl Default for CohereConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "embed-english-v3.0".to_string(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.0-flash".to_string(),
            temperature: 0.7,
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: 5 }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            window: 5,
            idle_ttl_secs: 1800,
        }
    }
}

impl Default for GuardrailsConfig {
    fn default() -> Self {
        Self {
            competitors: Vec::new(),
            toxicity_threshold: 0.7,
            toxicity_endpoint: None,
            evaluation_questions: vec![
                "Does the response provide complete and detailed information?".to_string(),
                "Is the response engaging and conversational?".to_string(),
                "Does it maintain a friendly and helpful tone?".to_string(),
                "Are all parts of the question addressed thoroughly?".to_string(),
            ],
            fallback_policy: FallbackPolicy::default(),
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { upstream_secs: 30 }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("NOVA")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("guardrails.competitors")
                    .with_list_parse_key("guardrails.evaluation_questions"),
            )
            .build()?;

        config.try_deserialize()
    }
}
