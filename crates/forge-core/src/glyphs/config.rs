use serde::Deserialize;

#[derive(Deserialize)]
struct GlyphConfig {
    short_vowels: Vec<String>,
    long_vowels: Vec<String>,
    consonants: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GlyphConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("glyph inventory is empty")]
    Empty,
    #[error("glyph must be exactly one character: {0:?}")]
    NotSingleChar(String),
    #[error("duplicate glyph: {0}")]
    Duplicate(char),
}

/// Raw glyph lists, each entry already checked to be a single character.
pub(super) struct GlyphLists {
    pub(super) short_vowels: Vec<char>,
    pub(super) long_vowels: Vec<char>,
    pub(super) consonants: Vec<char>,
}

/// Parse TOML text into per-class glyph lists.
pub(super) fn parse_glyph_toml(toml_str: &str) -> Result<GlyphLists, GlyphConfigError> {
    let config: GlyphConfig =
        toml::from_str(toml_str).map_err(|e| GlyphConfigError::Parse(e.to_string()))?;

    Ok(GlyphLists {
        short_vowels: single_chars(&config.short_vowels)?,
        long_vowels: single_chars(&config.long_vowels)?,
        consonants: single_chars(&config.consonants)?,
    })
}

fn single_chars(values: &[String]) -> Result<Vec<char>, GlyphConfigError> {
    values
        .iter()
        .map(|s| {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(GlyphConfigError::NotSingleChar(s.clone())),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let lists = parse_glyph_toml(super::super::DEFAULT_TOML).unwrap();
        assert_eq!(lists.short_vowels.len(), 5);
        assert_eq!(lists.long_vowels.len(), 10);
        assert_eq!(lists.consonants.len(), 27);
    }

    #[test]
    fn error_multi_char_glyph() {
        let toml = r#"
short_vowels = ["a", "ae"]
long_vowels = ["ᴀ", "и"]
consonants = ["Б", "г"]
"#;
        let err = parse_glyph_toml(toml).err().unwrap();
        assert!(matches!(err, GlyphConfigError::NotSingleChar(ref s) if s == "ae"));
    }

    #[test]
    fn error_empty_string_glyph() {
        let toml = r#"
short_vowels = ["a", ""]
long_vowels = ["ᴀ", "и"]
consonants = ["Б", "г"]
"#;
        assert!(matches!(
            parse_glyph_toml(toml),
            Err(GlyphConfigError::NotSingleChar(_))
        ));
    }

    #[test]
    fn error_missing_list() {
        let toml = r#"
short_vowels = ["a", "o"]
"#;
        assert!(matches!(
            parse_glyph_toml(toml),
            Err(GlyphConfigError::Parse(_))
        ));
    }
}
