//! Physical keyboard layout for glyph input.
//!
//! Maps key ids to base glyphs, carries the one-shot Shift substitutions and
//! the Alt combo table. The layout is embedded at build time and shared
//! read-only by every input session.

mod combo;
mod config;

pub use combo::{ComboLookup, ComboTable};
pub use config::KeyboardConfigError;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, OnceLock};

use config::parse_keyboard_toml;

pub const DEFAULT_TOML: &str = include_str!("default_keyboard.toml");

/// Returns the embedded default layout TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[derive(Debug, Clone)]
pub struct Keyboard {
    keys: BTreeMap<String, String>,
    disabled: BTreeSet<String>,
    shift: BTreeMap<String, String>,
    combos: ComboTable,
}

impl Keyboard {
    /// Get or initialize the shared default layout.
    pub fn global() -> Arc<Keyboard> {
        static INSTANCE: OnceLock<Arc<Keyboard>> = OnceLock::new();
        INSTANCE
            .get_or_init(|| {
                Arc::new(Keyboard::from_toml(DEFAULT_TOML).expect("keyboard TOML must be valid"))
            })
            .clone()
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, KeyboardConfigError> {
        let tables = parse_keyboard_toml(toml_str)?;
        Ok(Self {
            keys: tables.keys,
            disabled: tables.disabled,
            shift: tables.shift,
            combos: ComboTable::new(tables.combos),
        })
    }

    /// Base glyph for a key id, or `None` for unknown and disabled keys.
    pub fn classify(&self, key_id: &str) -> Option<&str> {
        if self.is_disabled(key_id) {
            return None;
        }
        self.keys.get(key_id).map(String::as_str)
    }

    pub fn shift_substitute(&self, key_id: &str) -> Option<&str> {
        self.shift.get(key_id).map(String::as_str)
    }

    pub fn combos(&self) -> &ComboTable {
        &self.combos
    }

    pub fn is_disabled(&self, key_id: &str) -> bool {
        self.disabled.contains(key_id)
    }

    /// Enabled keys with their base glyphs, sorted by key id.
    pub fn enabled_keys(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.keys
            .iter()
            .filter(|(k, _)| !self.disabled.contains(*k))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
