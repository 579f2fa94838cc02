//! Generator and store settings.
//!
//! `[generator]` bounds the syllable count of generated words and names the
//! trace separator; `[store]` points at the lexicon file. The embedded
//! defaults can be replaced once, before the first read, with
//! [`init_custom`]; [`settings`] hands out the process-wide value.

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Upper bound for `generator.max_syllables`.
pub const MAX_SYLLABLES_LIMIT: usize = 8;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Install an override (e.g. from `forgetool --settings`). Fails if the TOML
/// is invalid or an override is already in place.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub generator: GeneratorSettings,
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    pub min_syllables: usize,
    pub max_syllables: usize,
    pub trace_separator: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    pub path: PathBuf,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn invalid(field: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let g = &s.generator;
    if g.min_syllables == 0 {
        return Err(invalid("generator.min_syllables", "must be positive"));
    }
    if g.max_syllables < g.min_syllables {
        return Err(invalid(
            "generator.max_syllables",
            "must not be below generator.min_syllables",
        ));
    }
    if g.max_syllables > MAX_SYLLABLES_LIMIT {
        return Err(invalid("generator.max_syllables", "must be at most 8"));
    }
    if g.trace_separator.is_empty() {
        return Err(invalid("generator.trace_separator", "must not be empty"));
    }
    if s.store.path.as_os_str().is_empty() {
        return Err(invalid("store.path", "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.generator.min_syllables, 1);
        assert_eq!(s.generator.max_syllables, 3);
        assert_eq!(s.generator.trace_separator, "-");
        assert_eq!(s.store.path, PathBuf::from("future_lang.json"));
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[generator]
min_syllables = 2
max_syllables = 5
trace_separator = " · "

[store]
path = "/tmp/lexicon.json"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.generator.min_syllables, 2);
        assert_eq!(s.generator.max_syllables, 5);
        assert_eq!(s.generator.trace_separator, " · ");
    }

    #[test]
    fn error_zero_min() {
        let toml = r#"
[generator]
min_syllables = 0
max_syllables = 3
trace_separator = "-"

[store]
path = "lex.json"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("generator.min_syllables"));
    }

    #[test]
    fn error_max_below_min() {
        let toml = r#"
[generator]
min_syllables = 3
max_syllables = 2
trace_separator = "-"

[store]
path = "lex.json"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("generator.max_syllables"));
    }

    #[test]
    fn error_max_too_large() {
        let toml = r#"
[generator]
min_syllables = 1
max_syllables = 9
trace_separator = "-"

[store]
path = "lex.json"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("at most 8"));
    }

    #[test]
    fn error_empty_separator() {
        let toml = r#"
[generator]
min_syllables = 1
max_syllables = 3
trace_separator = ""

[store]
path = "lex.json"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("trace_separator"));
    }

    #[test]
    fn error_empty_store_path() {
        let toml = r#"
[generator]
min_syllables = 1
max_syllables = 3
trace_separator = "-"

[store]
path = ""
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("store.path"));
    }

    #[test]
    fn error_negative_value_is_parse_error() {
        let toml = r#"
[generator]
min_syllables = -1
max_syllables = 3
trace_separator = "-"

[store]
path = "lex.json"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[generator]
min_syllables = 1
max_syllables = 3
trace_separator = "-"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
