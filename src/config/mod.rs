pub mod app_config;

pub use app_config::{
    AppConfig, CohereConfig, GeminiConfig, GuardrailsConfig, LogFormat, LoggingConfig,
    MemoryConfig, PineconeConfig, RetrievalConfig, ServerConfig, TimeoutConfig,
};
