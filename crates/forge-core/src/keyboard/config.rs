use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

#[derive(Deserialize)]
struct KeyboardConfig {
    #[serde(default)]
    disabled: Vec<String>,
    keys: BTreeMap<String, String>,
    #[serde(default)]
    shift: BTreeMap<String, String>,
    #[serde(default)]
    combos: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum KeyboardConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[keys] table is empty")]
    Empty,
    #[error("non-ASCII key id: {0}")]
    NonAsciiKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("{table} refers to unknown key id: {key}")]
    UnknownKey { table: &'static str, key: String },
    #[error("combo must be 1-3 ASCII letters: {0}")]
    InvalidCombo(String),
    #[error("combo {shorter} shadows longer combo {longer}")]
    ShadowedCombo { shorter: String, longer: String },
}

/// Validated keyboard tables, all keyed by key id.
pub(super) struct KeyboardTables {
    pub(super) keys: BTreeMap<String, String>,
    pub(super) disabled: BTreeSet<String>,
    pub(super) shift: BTreeMap<String, String>,
    pub(super) combos: BTreeMap<String, String>,
}

pub(super) fn parse_keyboard_toml(toml_str: &str) -> Result<KeyboardTables, KeyboardConfigError> {
    let config: KeyboardConfig =
        toml::from_str(toml_str).map_err(|e| KeyboardConfigError::Parse(e.to_string()))?;

    if config.keys.is_empty() {
        return Err(KeyboardConfigError::Empty);
    }
    for (key, value) in config.keys.iter().chain(&config.shift) {
        if !key.is_ascii() {
            return Err(KeyboardConfigError::NonAsciiKey(key.clone()));
        }
        if value.is_empty() {
            return Err(KeyboardConfigError::EmptyValue(key.clone()));
        }
    }
    for key in &config.disabled {
        ensure_known(&config.keys, "disabled", key)?;
    }
    for key in config.shift.keys() {
        ensure_known(&config.keys, "[shift]", key)?;
    }

    for (combo, glyph) in &config.combos {
        let len = combo.len();
        if !(1..=3).contains(&len) || !combo.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(KeyboardConfigError::InvalidCombo(combo.clone()));
        }
        if glyph.is_empty() {
            return Err(KeyboardConfigError::EmptyValue(combo.clone()));
        }
        for letter in combo.chars() {
            ensure_known(&config.keys, "[combos]", &letter.to_string())?;
        }
    }
    // An exact match commits at once, so a combo that is a strict prefix of
    // another would make the longer one unreachable.
    for (shorter, longer) in config.combos.keys().zip(config.combos.keys().skip(1)) {
        if longer.starts_with(shorter.as_str()) {
            return Err(KeyboardConfigError::ShadowedCombo {
                shorter: shorter.clone(),
                longer: longer.clone(),
            });
        }
    }

    Ok(KeyboardTables {
        keys: config.keys,
        disabled: config.disabled.into_iter().collect(),
        shift: config.shift,
        combos: config.combos,
    })
}

fn ensure_known(
    keys: &BTreeMap<String, String>,
    table: &'static str,
    key: &str,
) -> Result<(), KeyboardConfigError> {
    if keys.contains_key(key) {
        Ok(())
    } else {
        Err(KeyboardConfigError::UnknownKey {
            table,
            key: key.to_string(),
        })
    }
}
