//! Core of the glyph forge: the invented alphabet, the keyboard layout that
//! types it, the word synthesizer and the lexicon store.

pub mod glyphs;
pub mod keyboard;
pub mod lexicon;
pub mod settings;
pub mod synth;
