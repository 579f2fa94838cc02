fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml(
        "src/glyphs/default_glyphs.toml",
        include_str!("src/glyphs/default_glyphs.toml"),
    );
    validate_toml(
        "src/keyboard/default_keyboard.toml",
        include_str!("src/keyboard/default_keyboard.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
