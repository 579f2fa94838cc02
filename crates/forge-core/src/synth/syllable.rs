use rand::distributions::Distribution;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::glyphs::{Glyph, GlyphPool};

use super::shape::{SyllableShape, CONSONANT_INITIAL};
use super::{SynthError, Synthesizer};

/// Vowel length pattern of a CVV syllable.
#[derive(Debug, Clone, Copy)]
enum VowelPattern {
    LongLong,
    ShortLong,
    LongShort,
}

impl VowelPattern {
    const ALL: [VowelPattern; 3] = [
        VowelPattern::LongLong,
        VowelPattern::ShortLong,
        VowelPattern::LongShort,
    ];

    fn pools(self) -> (GlyphPool, GlyphPool) {
        match self {
            VowelPattern::LongLong => (GlyphPool::LongVowels, GlyphPool::LongVowels),
            VowelPattern::ShortLong => (GlyphPool::ShortVowels, GlyphPool::LongVowels),
            VowelPattern::LongShort => (GlyphPool::LongVowels, GlyphPool::ShortVowels),
        }
    }
}

impl Synthesizer<'_> {
    /// Weighted shape draw, redrawn from the consonant-initial shapes when
    /// it would put two vowels across the boundary.
    pub(super) fn draw_shape<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        prev: Option<Glyph>,
    ) -> SyllableShape {
        let shape = SyllableShape::ALL[self.shape_weights.sample(rng)];
        match prev {
            Some(p) if p.is_vowel() && shape.starts_with_vowel() => {
                CONSONANT_INITIAL[rng.gen_range(0..CONSONANT_INITIAL.len())]
            }
            _ => shape,
        }
    }

    /// Fill `shape` slot by slot and append the glyphs to `out`.
    /// `prev` is the final glyph of the previous syllable.
    pub(super) fn fill_syllable<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        shape: SyllableShape,
        prev: Option<Glyph>,
        out: &mut Vec<Glyph>,
    ) -> Result<(), SynthError> {
        match shape {
            SyllableShape::V => {
                let v = self.boundary_vowel(rng, prev)?;
                out.push(v);
            }
            SyllableShape::Cv => {
                let c = self.onset(rng, prev)?;
                let v = self.pick(rng, GlyphPool::Vowels)?;
                out.extend([c, v]);
            }
            SyllableShape::Vc => {
                let v = self.boundary_vowel(rng, prev)?;
                let c = self.pick(rng, GlyphPool::Consonants)?;
                out.extend([v, c]);
            }
            SyllableShape::Cvc => {
                let c1 = self.onset(rng, prev)?;
                let v = self.pick(rng, GlyphPool::Vowels)?;
                let c2 = self.pick(rng, GlyphPool::Consonants)?;
                out.extend([c1, v, c2]);
            }
            SyllableShape::Cvv => {
                let c = self.onset(rng, prev)?;
                let pattern = VowelPattern::ALL[rng.gen_range(0..VowelPattern::ALL.len())];
                let (first, second) = pattern.pools();
                let v1 = self.pick(rng, first)?;
                let v2 = self.pick_excluding(rng, second, v1)?;
                out.extend([c, v1, v2]);
            }
            SyllableShape::Ccv => {
                let c1 = self.onset(rng, prev)?;
                let c2 = self.pick_excluding(rng, GlyphPool::Consonants, c1)?;
                let v = self.pick(rng, GlyphPool::Vowels)?;
                out.extend([c1, c2, v]);
            }
            SyllableShape::Vcc => {
                let v = self.boundary_vowel(rng, prev)?;
                let c1 = self.pick_excluding(rng, GlyphPool::Consonants, v)?;
                let c2 = self.pick_excluding(rng, GlyphPool::Consonants, c1)?;
                out.extend([v, c1, c2]);
            }
        }
        Ok(())
    }

    /// Syllable-initial consonant, never equal to the previous glyph.
    fn onset<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        prev: Option<Glyph>,
    ) -> Result<Glyph, SynthError> {
        match prev {
            Some(p) => self.pick_excluding(rng, GlyphPool::Consonants, p),
            None => self.pick(rng, GlyphPool::Consonants),
        }
    }

    /// Syllable-initial vowel: excludes `prev` when it is a vowel, and all
    /// short vowels when `prev` is short. Falls back to the long vowels if
    /// nothing is left.
    fn boundary_vowel<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        prev: Option<Glyph>,
    ) -> Result<Glyph, SynthError> {
        let prev_vowel = prev.filter(|p| p.is_vowel());
        let drop_short = prev_vowel.is_some_and(|p| p.is_short_vowel());
        let candidates: Vec<Glyph> = self
            .inventory
            .vowels()
            .iter()
            .copied()
            .filter(|v| Some(*v) != prev_vowel)
            .filter(|v| !(drop_short && v.is_short_vowel()))
            .collect();

        match candidates.choose(rng) {
            Some(v) => Ok(*v),
            None => self.pick(rng, GlyphPool::LongVowels),
        }
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R, pool: GlyphPool) -> Result<Glyph, SynthError> {
        let glyphs = self.inventory.pool(pool);
        glyphs
            .choose(rng)
            .copied()
            .ok_or(SynthError::PoolTooSmall { pool, size: 0 })
    }

    /// Rejection-sample `pool` until the draw differs from `exclude`.
    fn pick_excluding<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        pool: GlyphPool,
        exclude: Glyph,
    ) -> Result<Glyph, SynthError> {
        let glyphs = self.inventory.pool(pool);
        if glyphs.len() < 2 {
            return Err(SynthError::PoolTooSmall {
                pool,
                size: glyphs.len(),
            });
        }
        loop {
            let g = glyphs[rng.gen_range(0..glyphs.len())];
            if g != exclude {
                return Ok(g);
            }
        }
    }
}
