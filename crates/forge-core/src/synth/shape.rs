use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Vowel,
    Consonant,
}

/// Category template filling one syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyllableShape {
    V,
    Cv,
    Vc,
    Cvc,
    Cvv,
    Ccv,
    Vcc,
}

/// Shapes a syllable may be redrawn from after a vowel-final syllable.
pub const CONSONANT_INITIAL: [SyllableShape; 3] =
    [SyllableShape::Cv, SyllableShape::Cvc, SyllableShape::Ccv];

impl SyllableShape {
    pub const ALL: [SyllableShape; 7] = [
        SyllableShape::Cv,
        SyllableShape::Cvc,
        SyllableShape::Vc,
        SyllableShape::Cvv,
        SyllableShape::V,
        SyllableShape::Ccv,
        SyllableShape::Vcc,
    ];

    /// Relative draw weight.
    pub fn weight(self) -> u32 {
        match self {
            SyllableShape::Cv | SyllableShape::Cvc => 25,
            SyllableShape::Vc => 20,
            SyllableShape::Cvv | SyllableShape::Ccv => 10,
            SyllableShape::V | SyllableShape::Vcc => 5,
        }
    }

    pub fn slots(self) -> &'static [Slot] {
        use Slot::{Consonant as C, Vowel as V};
        match self {
            SyllableShape::V => &[V],
            SyllableShape::Cv => &[C, V],
            SyllableShape::Vc => &[V, C],
            SyllableShape::Cvc => &[C, V, C],
            SyllableShape::Cvv => &[C, V, V],
            SyllableShape::Ccv => &[C, C, V],
            SyllableShape::Vcc => &[V, C, C],
        }
    }

    /// Number of glyphs the shape produces.
    pub fn len(self) -> usize {
        self.slots().len()
    }

    pub fn starts_with_vowel(self) -> bool {
        self.slots()[0] == Slot::Vowel
    }

    pub fn tag(self) -> &'static str {
        match self {
            SyllableShape::V => "V",
            SyllableShape::Cv => "CV",
            SyllableShape::Vc => "VC",
            SyllableShape::Cvc => "CVC",
            SyllableShape::Cvv => "CVV",
            SyllableShape::Ccv => "CCV",
            SyllableShape::Vcc => "VCC",
        }
    }
}

impl fmt::Display for SyllableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown syllable shape: {0}")]
pub struct UnknownShape(String);

impl FromStr for SyllableShape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SyllableShape::ALL
            .into_iter()
            .find(|shape| shape.tag() == s)
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}
