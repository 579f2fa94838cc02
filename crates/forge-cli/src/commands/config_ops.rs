use std::fs;

use forge_core::glyphs::GlyphInventory;
use forge_core::keyboard::Keyboard;

pub fn keyboard_export() {
    print!("{}", forge_core::keyboard::default_toml());
}

pub fn keyboard_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let kb = die!(Keyboard::from_toml(&content), "Error: {}");
    println!(
        "OK: {} keys, {} combos",
        kb.enabled_keys().count(),
        kb.combos().len()
    );
}

pub fn glyphs_export() {
    print!("{}", forge_core::glyphs::DEFAULT_TOML);
}

pub fn glyphs_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let inv = die!(GlyphInventory::from_toml(&content), "Error: {}");
    println!(
        "OK: {} vowels, {} consonants",
        inv.vowels().len(),
        inv.consonants().len()
    );
}

pub fn settings_export() {
    print!("{}", forge_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        forge_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: generator.min_syllables={}, generator.max_syllables={}, store.path={}",
        s.generator.min_syllables,
        s.generator.max_syllables,
        s.store.path.display()
    );
}

/// Install a settings override before anything reads the settings.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        forge_core::settings::init_custom(content),
        "Error in {file}: {}"
    );
}
