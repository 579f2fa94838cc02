//! Glyph Forge: word synthesis, modifier-driven glyph input and a lexicon
//! store for an invented script.
//!
//! The heavy lifting lives in `forge-core` (tables, synthesizer, lexicon,
//! settings) and `forge-session` (input state machine). This crate wires them
//! into a [`workbench::Workbench`] and owns the optional trace subscriber.

pub mod trace_init;
pub mod workbench;

pub use forge_core::{glyphs, keyboard, lexicon, settings, synth};
pub use forge_session::{
    EditOp, InputSession, KeyEvent, KeyResponse, ModifierMode, PlainTextSurface, TextSurface,
};
