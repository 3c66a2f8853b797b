use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::infrastructure::llm::{
    GEMINI_DEFAULT_BASE_URL, GEMINI_DEFAULT_MODEL, GROQ_DEFAULT_BASE_URL, GROQ_DEFAULT_MODEL,
};

use super::environment::Environment;

pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub providers: ProvidersSettings,
    pub logging: LoggingSettings,
    pub content: ContentSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProvidersSettings {
    pub gemini: ProviderSettings,
    pub groq: ProviderSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_output_tokens: u32,
}

impl ProviderSettings {
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentSettings {
    pub quick_answers_path: String,
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl Settings {
    /// Defaults, then `appsettings.<env>`, then `APP__SECTION__KEY` variables,
    /// then the provider credential variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("providers.gemini.base_url", GEMINI_DEFAULT_BASE_URL)?
            .set_default("providers.gemini.model", GEMINI_DEFAULT_MODEL)?
            .set_default("providers.gemini.max_output_tokens", 2048_i64)?
            .set_default("providers.groq.base_url", GROQ_DEFAULT_BASE_URL)?
            .set_default("providers.groq.model", GROQ_DEFAULT_MODEL)?
            .set_default("providers.groq.max_output_tokens", 2048_i64)?
            .set_default("logging.level", "info,excelhub=debug,tower_http=debug")?
            .set_default("logging.json", false)?
            .set_default("content.quick_answers_path", "data/quickAnswers.json")?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option(
                "providers.gemini.api_key",
                std::env::var(GEMINI_API_KEY_VAR).ok(),
            )?
            .set_override_option("providers.groq.api_key", std::env::var(GROQ_API_KEY_VAR).ok())?
            .build()?
            .try_deserialize()
    }
}
