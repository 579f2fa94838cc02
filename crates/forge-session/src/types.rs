use std::fmt;

use super::surface::TextSurface;

/// Exclusive modifier state. Selecting one mode clears the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModifierMode {
    #[default]
    None,
    /// One-shot: the next glyph key takes its Shift substitute.
    Shift,
    /// Combo entry: keys accumulate until they match, or cannot match, a combo.
    Alt,
}

impl fmt::Display for ModifierMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModifierMode::None => "none",
            ModifierMode::Shift => "shift",
            ModifierMode::Alt => "alt",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// A physical key, by key id (`"a"`, `"5"`, `"space"`).
    Key(String),
    Backspace,
    ToggleShift,
    ToggleAlt,
}

impl KeyEvent {
    pub fn key(id: &str) -> Self {
        KeyEvent::Key(id.to_string())
    }
}

/// One edit on the text surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Insert(String),
    DeleteLast(usize),
    /// Delete the last `delete` glyphs, then insert.
    Replace { delete: usize, insert: String },
}

impl EditOp {
    pub fn apply<S: TextSurface + ?Sized>(&self, surface: &mut S) {
        match self {
            EditOp::Insert(text) => surface.insert(text),
            EditOp::DeleteLast(n) => surface.delete_last(*n),
            EditOp::Replace { delete, insert } => {
                surface.delete_last(*delete);
                surface.insert(insert);
            }
        }
    }
}

/// Response from `handle_key`, returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub consumed: bool,
    /// Edits to play in order.
    pub edits: Vec<EditOp>,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            edits: Vec::new(),
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }

    pub(crate) fn with_edit(mut self, edit: EditOp) -> Self {
        self.consumed = true;
        self.edits.push(edit);
        self
    }

    pub(crate) fn insert(text: impl Into<String>) -> Self {
        Self::consumed().with_edit(EditOp::Insert(text.into()))
    }

    pub fn apply<S: TextSurface + ?Sized>(&self, surface: &mut S) {
        for edit in &self.edits {
            edit.apply(surface);
        }
    }
}
