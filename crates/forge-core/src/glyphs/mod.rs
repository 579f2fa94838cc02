//! Glyph inventory of the invented alphabet.
//!
//! Every output symbol is classified once at startup as a vowel (short or
//! long) or a consonant. The inventory is fixed at build time: the TOML table
//! is embedded and checked by the build script, then parsed into a read-only
//! singleton on first use.

mod config;

pub use config::GlyphConfigError;

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use config::parse_glyph_toml;

pub const DEFAULT_TOML: &str = include_str!("default_glyphs.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphCategory {
    Vowel,
    Consonant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelLength {
    Short,
    Long,
}

/// One character of the output alphabet with its phonotactic class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    ch: char,
    length: Option<VowelLength>,
}

impl Glyph {
    pub fn vowel(ch: char, length: VowelLength) -> Self {
        Self {
            ch,
            length: Some(length),
        }
    }

    pub fn consonant(ch: char) -> Self {
        Self { ch, length: None }
    }

    pub fn char(self) -> char {
        self.ch
    }

    pub fn category(self) -> GlyphCategory {
        match self.length {
            Some(_) => GlyphCategory::Vowel,
            None => GlyphCategory::Consonant,
        }
    }

    /// Length class; `None` for consonants.
    pub fn length(self) -> Option<VowelLength> {
        self.length
    }

    pub fn is_vowel(self) -> bool {
        self.category() == GlyphCategory::Vowel
    }

    pub fn is_consonant(self) -> bool {
        self.category() == GlyphCategory::Consonant
    }

    pub fn is_short_vowel(self) -> bool {
        self.length == Some(VowelLength::Short)
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ch)
    }
}

/// Named draw pools, used by the synthesizer and in its error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphPool {
    Vowels,
    ShortVowels,
    LongVowels,
    Consonants,
}

impl GlyphPool {
    pub const ALL: [GlyphPool; 4] = [
        GlyphPool::Vowels,
        GlyphPool::ShortVowels,
        GlyphPool::LongVowels,
        GlyphPool::Consonants,
    ];
}

impl fmt::Display for GlyphPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GlyphPool::Vowels => "vowels",
            GlyphPool::ShortVowels => "short vowels",
            GlyphPool::LongVowels => "long vowels",
            GlyphPool::Consonants => "consonants",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct GlyphInventory {
    vowels: Vec<Glyph>,
    short_vowels: Vec<Glyph>,
    long_vowels: Vec<Glyph>,
    consonants: Vec<Glyph>,
}

impl GlyphInventory {
    /// Get or initialize the global inventory from the embedded table.
    pub fn global() -> &'static GlyphInventory {
        static INSTANCE: OnceLock<GlyphInventory> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            GlyphInventory::from_toml(DEFAULT_TOML).expect("glyph TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, GlyphConfigError> {
        let lists = parse_glyph_toml(toml_str)?;
        Self::new(&lists.short_vowels, &lists.long_vowels, &lists.consonants)
    }

    /// Build an inventory from raw character lists.
    ///
    /// Pool sizes are not checked here; the synthesizer refuses pools that
    /// are too small to draw from.
    pub fn new(
        short_vowels: &[char],
        long_vowels: &[char],
        consonants: &[char],
    ) -> Result<Self, GlyphConfigError> {
        let mut seen = HashSet::new();
        for &c in short_vowels.iter().chain(long_vowels).chain(consonants) {
            if !seen.insert(c) {
                return Err(GlyphConfigError::Duplicate(c));
            }
        }
        if seen.is_empty() {
            return Err(GlyphConfigError::Empty);
        }

        let short_vowels: Vec<Glyph> = short_vowels
            .iter()
            .map(|&c| Glyph::vowel(c, VowelLength::Short))
            .collect();
        let long_vowels: Vec<Glyph> = long_vowels
            .iter()
            .map(|&c| Glyph::vowel(c, VowelLength::Long))
            .collect();
        let vowels = short_vowels.iter().chain(&long_vowels).copied().collect();
        let consonants = consonants.iter().map(|&c| Glyph::consonant(c)).collect();

        Ok(Self {
            vowels,
            short_vowels,
            long_vowels,
            consonants,
        })
    }

    pub fn pool(&self, pool: GlyphPool) -> &[Glyph] {
        match pool {
            GlyphPool::Vowels => &self.vowels,
            GlyphPool::ShortVowels => &self.short_vowels,
            GlyphPool::LongVowels => &self.long_vowels,
            GlyphPool::Consonants => &self.consonants,
        }
    }

    pub fn vowels(&self) -> &[Glyph] {
        &self.vowels
    }

    pub fn consonants(&self) -> &[Glyph] {
        &self.consonants
    }

    /// Look up the class of a character. `None` if it is not in the alphabet.
    pub fn classify(&self, ch: char) -> Option<Glyph> {
        self.vowels
            .iter()
            .chain(&self.consonants)
            .find(|g| g.ch == ch)
            .copied()
    }

    /// Classify every character of `text`, failing on the first unknown one.
    pub fn glyphs_of(&self, text: &str) -> Option<Vec<Glyph>> {
        text.chars().map(|c| self.classify(c)).collect()
    }
}
