use tracing::debug;

use forge_core::keyboard::ComboLookup;

use super::types::{EditOp, KeyResponse, ModifierMode};
use super::InputSession;

impl InputSession {
    /// Alt-mode keystroke: insert the base glyph at once, then resolve the
    /// accumulated sequence against the combo table.
    ///
    /// Combos are spelled one letter per keystroke, so a multi-letter key id
    /// (`space`, or a custom `ch` key) ends the combo instead of joining it.
    pub(super) fn handle_combo_key(&mut self, key_id: &str, base: String) -> KeyResponse {
        let mut resp = KeyResponse::insert(base);
        self.combo.push(key_id.to_owned());

        let sequence = self.combo.concat();
        let lookup = if key_id.chars().count() == 1 {
            self.keyboard.combos().lookup(&sequence)
        } else {
            ComboLookup::None
        };
        match lookup {
            ComboLookup::Exact(glyph) => {
                debug!(%sequence, %glyph, "combo committed");
                // Every buffered key inserted exactly one base glyph.
                resp = resp.with_edit(EditOp::Replace {
                    delete: self.combo.len(),
                    insert: glyph,
                });
                self.end_combo();
            }
            ComboLookup::Prefix => {}
            ComboLookup::None => {
                debug!(%sequence, "combo abandoned");
                self.end_combo();
            }
        }
        resp
    }

    fn end_combo(&mut self) {
        self.combo.clear();
        self.mode = ModifierMode::None;
    }
}
