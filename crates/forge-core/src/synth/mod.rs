//! Procedural word synthesis.
//!
//! A word is 1..=N syllables, each drawn from a weighted set of shapes and
//! filled under adjacency rules: no vowel hiatus across a syllable boundary,
//! no identical neighbouring glyphs, and a short vowel is never followed by
//! another short vowel at a vowel-initial boundary.

mod shape;
mod syllable;


pub use shape::{Slot, SyllableShape, UnknownShape, CONSONANT_INITIAL};

use std::fmt;

use rand::distributions::{WeightedError, WeightedIndex};
use rand::Rng;
use tracing::{debug, debug_span};

use crate::glyphs::{Glyph, GlyphInventory, GlyphPool};
use crate::settings::MAX_SYLLABLES_LIMIT;

#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    #[error("syllable range {min}..={max} is invalid (need 1 <= min <= max)")]
    InvalidRange { min: usize, max: usize },
    #[error("at most {limit} syllables per word, got {max}")]
    TooManySyllables { max: usize, limit: usize },
    #[error("glyph pool '{pool}' has {size} glyph(s); at least 2 are required")]
    PoolTooSmall { pool: GlyphPool, size: usize },
    #[error("invalid shape weights: {0}")]
    Weights(#[from] WeightedError),
}

/// A generated word: its glyphs plus the shapes used to build it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    glyphs: Vec<Glyph>,
    shapes: Vec<SyllableShape>,
}

impl Word {
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn shapes(&self) -> &[SyllableShape] {
        &self.shapes
    }

    /// Glyphs of each syllable, split along the shapes.
    pub fn syllables(&self) -> impl Iterator<Item = &[Glyph]> + '_ {
        let mut start = 0;
        self.shapes.iter().map(move |shape| {
            let end = start + shape.len();
            let syllable = &self.glyphs[start..end];
            start = end;
            syllable
        })
    }

    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.char()).collect()
    }

    /// Shape tags joined by `separator`, e.g. `CV-CVC`.
    pub fn trace(&self, separator: &str) -> String {
        self.shapes
            .iter()
            .map(|s| s.tag())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for g in &self.glyphs {
            write!(f, "{g}")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Synthesizer<'a> {
    inventory: &'a GlyphInventory,
    shape_weights: WeightedIndex<u32>,
}

impl<'a> Synthesizer<'a> {
    /// Fails fast when any draw pool is too small for rejection sampling.
    pub fn new(inventory: &'a GlyphInventory) -> Result<Self, SynthError> {
        for pool in GlyphPool::ALL {
            let size = inventory.pool(pool).len();
            if size < 2 {
                return Err(SynthError::PoolTooSmall { pool, size });
            }
        }
        let shape_weights = WeightedIndex::new(SyllableShape::ALL.map(SyllableShape::weight))?;
        Ok(Self {
            inventory,
            shape_weights,
        })
    }

    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        min_syllables: usize,
        max_syllables: usize,
    ) -> Result<Word, SynthError> {
        let _span = debug_span!("generate", min_syllables, max_syllables).entered();
        if min_syllables == 0 || min_syllables > max_syllables {
            return Err(SynthError::InvalidRange {
                min: min_syllables,
                max: max_syllables,
            });
        }
        if max_syllables > MAX_SYLLABLES_LIMIT {
            return Err(SynthError::TooManySyllables {
                max: max_syllables,
                limit: MAX_SYLLABLES_LIMIT,
            });
        }

        let count = rng.gen_range(min_syllables..=max_syllables);
        let mut glyphs = Vec::with_capacity(count * 3);
        let mut shapes = Vec::with_capacity(count);
        for _ in 0..count {
            let prev = glyphs.last().copied();
            let shape = self.draw_shape(rng, prev);
            self.fill_syllable(rng, shape, prev, &mut glyphs)?;
            shapes.push(shape);
        }

        let word = Word { glyphs, shapes };
        debug!(word = %word, trace = %word.trace("-"));
        Ok(word)
    }
}

/// Generate a word from the global inventory with the thread RNG.
///
/// Returns the word text and its structure trace joined by the configured
/// separator.
///
/// # Errors
///
/// [`SynthError::InvalidRange`] when `min_syllables` is zero or exceeds
/// `max_syllables`, [`SynthError::TooManySyllables`] above
/// [`MAX_SYLLABLES_LIMIT`].
pub fn generate(
    min_syllables: usize,
    max_syllables: usize,
) -> Result<(String, String), SynthError> {
    let synth = Synthesizer::new(GlyphInventory::global())?;
    let word = synth.generate_with(&mut rand::thread_rng(), min_syllables, max_syllables)?;
    let separator = &crate::settings::settings().generator.trace_separator;
    Ok((word.text(), word.trace(separator)))
}
