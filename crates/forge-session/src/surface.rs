/// Editable text the session writes into.
///
/// Each presentation surface implements this its own way; the session only
/// ever talks to the trait.
pub trait TextSurface {
    fn insert(&mut self, text: &str);
    /// Remove the last `n` glyphs, stopping at empty.
    fn delete_last(&mut self, n: usize);
    fn plain_text(&self) -> String;
    fn set_plain_text(&mut self, text: &str);
}

/// `String`-backed surface. One glyph is one `char`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainTextSurface {
    text: String,
}

impl PlainTextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl TextSurface for PlainTextSurface {
    fn insert(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn delete_last(&mut self, n: usize) {
        for _ in 0..n {
            if self.text.pop().is_none() {
                break;
            }
        }
    }

    fn plain_text(&self) -> String {
        self.text.clone()
    }

    fn set_plain_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}
