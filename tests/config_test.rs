use excelhub::domain::DetailLevel;
use excelhub::infrastructure::observability::TracingConfig;
use excelhub::presentation::Environment;
use excelhub::presentation::config::{LoggingSettings, ProviderSettings, Settings};

#[test]
fn given_environment_names_when_parsing_then_accepts_aliases() {
    assert_eq!(Environment::try_from("dev".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from(" Production ".to_string()), Ok(Environment::Prod));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_environment_when_naming_settings_file_then_uses_lowercase_name() {
    assert_eq!(Environment::Prod.settings_file(), "appsettings.prod");
    assert_eq!(Environment::Local.to_string(), "local");
}

#[test]
fn given_no_settings_file_when_loading_then_uses_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.providers.gemini.model, "gemini-1.5-flash");
    assert_eq!(settings.providers.groq.model, "llama-3.3-70b-versatile");
    assert_eq!(
        settings.providers.groq.base_url,
        "https://api.groq.com"
    );
    assert_eq!(settings.content.quick_answers_path, "data/quickAnswers.json");
}

#[test]
fn given_blank_api_key_when_checking_then_treated_as_missing() {
    let mut provider = ProviderSettings {
        api_key: Some("  ".to_string()),
        base_url: "http://x".to_string(),
        model: "m".to_string(),
        max_output_tokens: 10,
    };
    assert!(!provider.has_api_key());

    provider.api_key = Some("secret".to_string());
    assert!(provider.has_api_key());
}

#[test]
fn given_prod_environment_when_building_tracing_config_then_keeps_logging_settings() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        json: true,
    };

    let config = TracingConfig::from_settings(Environment::Prod, &logging);

    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
    assert_eq!(config.default_filter, "warn");
}

#[test]
fn given_detail_payload_when_deserializing_then_unknown_values_default_to_detailed() {
    let concise: DetailLevel = serde_json::from_str(r#""concise""#).unwrap();
    let other: DetailLevel = serde_json::from_str(r#""verbose""#).unwrap();
    let missing: DetailLevel = serde_json::from_str("null").unwrap();

    assert_eq!(concise, DetailLevel::Concise);
    assert_eq!(other, DetailLevel::Detailed);
    assert_eq!(missing, DetailLevel::Detailed);
}
