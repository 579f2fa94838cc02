use tracing::{debug, debug_span};

use super::types::{EditOp, KeyEvent, KeyResponse, ModifierMode};
use super::InputSession;

impl InputSession {
    /// Process a key event. Returns a KeyResponse describing what the caller should do.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event, mode = %self.mode).entered();

        match event {
            KeyEvent::ToggleShift => self.toggle_shift(),
            KeyEvent::ToggleAlt => self.toggle_alt(),
            KeyEvent::Backspace => self.handle_backspace(),
            KeyEvent::Key(ref key_id) => {
                // Disabled and unknown keys pass through untouched.
                let Some(base) = self.keyboard.classify(key_id).map(str::to_owned) else {
                    return KeyResponse::not_consumed();
                };
                self.handle_glyph_key(key_id, base)
            }
        }
    }

    fn handle_glyph_key(&mut self, key_id: &str, base: String) -> KeyResponse {
        match self.mode {
            ModifierMode::None => KeyResponse::insert(base),
            ModifierMode::Shift => {
                let text = match self.keyboard.shift_substitute(key_id) {
                    Some(sub) => sub.to_owned(),
                    None => base,
                };
                self.mode = ModifierMode::None;
                KeyResponse::insert(text)
            }
            ModifierMode::Alt => self.handle_combo_key(key_id, base),
        }
    }

    fn toggle_shift(&mut self) -> KeyResponse {
        self.mode = match self.mode {
            ModifierMode::Shift => ModifierMode::None,
            ModifierMode::None | ModifierMode::Alt => ModifierMode::Shift,
        };
        // Leaving Alt drops the pending combo.
        self.combo.clear();
        KeyResponse::consumed()
    }

    fn toggle_alt(&mut self) -> KeyResponse {
        match self.mode {
            ModifierMode::Alt => {
                if !self.combo.is_empty() {
                    debug!(combo = ?self.combo, "alt released mid-combo, buffer dropped");
                }
                self.combo.clear();
                self.mode = ModifierMode::None;
            }
            ModifierMode::None | ModifierMode::Shift => self.mode = ModifierMode::Alt,
        }
        KeyResponse::consumed()
    }

    /// Always deletes one glyph; keeps the combo in step with the visible text.
    pub(super) fn handle_backspace(&mut self) -> KeyResponse {
        self.combo.pop();
        KeyResponse::consumed().with_edit(EditOp::DeleteLast(1))
    }
}
