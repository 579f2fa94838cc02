use std::collections::BTreeMap;
use std::ops::Bound;

#[derive(Debug, PartialEq)]
pub enum ComboLookup {
    None,
    Prefix,
    Exact(String),
}

/// Key-id sequences mapped to composite glyphs.
///
/// Keys are kept sorted, so every entry extending a sequence sits directly
/// after the sequence's own position; one range probe answers both the exact
/// and the prefix question.
#[derive(Debug, Clone, Default)]
pub struct ComboTable {
    entries: BTreeMap<String, String>,
}

impl ComboTable {
    pub(super) fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, sequence: &str) -> ComboLookup {
        if sequence.is_empty() || self.is_empty() {
            return ComboLookup::None;
        }
        let next = self
            .entries
            .range::<str, _>((Bound::Included(sequence), Bound::Unbounded))
            .next();
        match next {
            Some((key, glyph)) if key == sequence => ComboLookup::Exact(glyph.clone()),
            Some((key, _)) if key.starts_with(sequence) => ComboLookup::Prefix,
            _ => ComboLookup::None,
        }
    }

    /// All combos starting with `prefix`, sorted by key.
    pub fn prefix_search(&self, prefix: &str) -> Vec<(&str, &str)> {
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, glyph)| (key.as_str(), glyph.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
