//! Modifier-driven glyph input session.
//!
//! `InputSession` owns the modifier mode and the pending Alt combo, processes
//! each keystroke, and returns the edits the caller applies to its text
//! surface.

mod combo;
mod key_handlers;
mod surface;
mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use forge_core::keyboard::Keyboard;

pub use surface::{PlainTextSurface, TextSurface};
pub use types::{EditOp, KeyEvent, KeyResponse, ModifierMode};

/// Stateful input session. One per interactive editor; sessions share
/// nothing but the read-only layout.
#[derive(Debug)]
pub struct InputSession {
    keyboard: Arc<Keyboard>,
    mode: ModifierMode,
    /// Key ids typed since Alt was selected. Non-empty only in Alt mode; its
    /// length always equals the number of base glyphs inserted for it.
    combo: Vec<String>,
}

impl InputSession {
    pub fn new(keyboard: Arc<Keyboard>) -> Self {
        Self {
            keyboard,
            mode: ModifierMode::None,
            combo: Vec::new(),
        }
    }

    /// Session over the embedded default layout.
    pub fn with_default_layout() -> Self {
        Self::new(Keyboard::global())
    }

    pub fn mode(&self) -> ModifierMode {
        self.mode
    }

    pub fn combo_buffer(&self) -> &[String] {
        &self.combo
    }

    /// True while an Alt combo is partially typed.
    pub fn is_composing(&self) -> bool {
        !self.combo.is_empty()
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Handle `event` and apply the resulting edits to `surface`.
    pub fn feed<S: TextSurface + ?Sized>(
        &mut self,
        event: KeyEvent,
        surface: &mut S,
    ) -> KeyResponse {
        let resp = self.handle_key(event);
        resp.apply(surface);
        resp
    }

    /// Back to no modifier, dropping any pending combo without substitution.
    pub fn reset(&mut self) {
        self.mode = ModifierMode::None;
        self.combo.clear();
    }
}
