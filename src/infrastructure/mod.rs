pub mod file_parsing;
pub mod llm;
pub mod markdown;
pub mod observability;
pub mod relay_client;
