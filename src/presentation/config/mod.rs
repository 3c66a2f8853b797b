mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ContentSettings, GEMINI_API_KEY_VAR, GROQ_API_KEY_VAR, LoggingSettings, ProviderSettings,
    ProvidersSettings, ServerSettings, Settings,
};
