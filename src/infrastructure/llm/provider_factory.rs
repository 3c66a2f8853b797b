use std::sync::Arc;

use crate::application::ports::ProviderAdapter;
use crate::presentation::config::ProvidersSettings;

use super::gemini_adapter::GeminiAdapter;
use super::groq_adapter::GroqAdapter;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Every configured provider. A missing credential is not an error here:
    /// the relay reports it per request.
    pub fn create_all(settings: &ProvidersSettings) -> Vec<Arc<dyn ProviderAdapter>> {
        let gemini = &settings.gemini;
        let groq = &settings.groq;

        for (name, configured) in [
            ("gemini", gemini.has_api_key()),
            ("groq", groq.has_api_key()),
        ] {
            if configured {
                tracing::info!(provider = name, "Provider credential loaded");
            } else {
                tracing::warn!(provider = name, "Provider credential missing, requests will fail");
            }
        }

        vec![
            Arc::new(GeminiAdapter::new(
                gemini.api_key.clone(),
                gemini.base_url.clone(),
                gemini.model.clone(),
                gemini.max_output_tokens,
            )),
            Arc::new(GroqAdapter::new(
                groq.api_key.clone(),
                groq.base_url.clone(),
                groq.model.clone(),
                groq.max_output_tokens,
            )),
        ]
    }
}
