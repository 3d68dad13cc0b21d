//! Tunables for lookups and the request queue, read from TOML.
//!
//! The built-in `default_settings.toml` is used unless [`init_custom`] installs
//! another document before the first [`settings()`] call.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
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
    pub autocomplete: AutocompleteSettings,
    pub queue: QueueSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AutocompleteSettings {
    pub default_k: usize,
    pub max_k: usize,
}

impl AutocompleteSettings {
    /// Resolve a requested count: `None` means the default, anything above
    /// `max_k` is clamped.
    pub fn resolve_k(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_k).min(self.max_k)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueueSettings {
    pub default_priority: f64,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(autocomplete.default_k);
    check_positive_usize!(autocomplete.max_k);
    if s.autocomplete.default_k > s.autocomplete.max_k {
        return Err(SettingsError::InvalidValue {
            field: "autocomplete.default_k".to_string(),
            reason: format!("must not exceed autocomplete.max_k ({})", s.autocomplete.max_k),
        });
    }

    if !s.queue.default_priority.is_finite() {
        return Err(SettingsError::InvalidValue {
            field: "queue.default_priority".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    Ok(())
}
