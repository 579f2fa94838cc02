use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use forge_core::glyphs::GlyphInventory;
use forge_core::settings::settings;
use forge_core::synth::{Synthesizer, Word};

/// One generated word as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct GeneratedWord {
    pub word: String,
    pub trace: String,
    pub syllables: usize,
}

impl GeneratedWord {
    pub fn new(word: &Word, separator: &str) -> Self {
        Self {
            word: word.text(),
            trace: word.trace(separator),
            syllables: word.shapes().len(),
        }
    }
}

/// `word<TAB>trace` per line, or one JSON record per line.
pub fn format_words(words: &[GeneratedWord], json: bool) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for w in words {
        if json {
            out.push_str(&serde_json::to_string(w)?);
        } else {
            out.push_str(&w.word);
            out.push('\t');
            out.push_str(&w.trace);
        }
        out.push('\n');
    }
    Ok(out)
}

pub fn generate(
    min: Option<usize>,
    max: Option<usize>,
    count: usize,
    seed: Option<u64>,
    json: bool,
) {
    let g = &settings().generator;
    let min = min.unwrap_or(g.min_syllables);
    let max = max.unwrap_or(g.max_syllables.max(min));

    let synth = die!(
        Synthesizer::new(GlyphInventory::global()),
        "Error: {}"
    );
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut words = Vec::with_capacity(count);
    for _ in 0..count {
        let word = die!(synth.generate_with(&mut rng, min, max), "Error: {}");
        words.push(GeneratedWord::new(&word, &g.trace_separator));
    }
    print!("{}", die!(format_words(&words, json), "Error: {}"));
}
