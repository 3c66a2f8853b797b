mod gemini_adapter;
mod groq_adapter;
mod provider_factory;
mod reqwest_transport;

pub use gemini_adapter::{GEMINI_DEFAULT_BASE_URL, GEMINI_DEFAULT_MODEL, GeminiAdapter};
pub use groq_adapter::{GROQ_DEFAULT_BASE_URL, GROQ_DEFAULT_MODEL, GroqAdapter};
pub use provider_factory::ProviderFactory;
pub use reqwest_transport::ReqwestTransport;
