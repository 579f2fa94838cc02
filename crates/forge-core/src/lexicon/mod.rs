//! Lexicon of saved words, grouped by category.
//!
//! Stored as a single pretty-printed JSON file that is rewritten wholesale on
//! every save. A missing, empty or unreadable file opens as an empty lexicon.


use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("missing {0}")]
    Validation(&'static str),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Dictionary,
    Phrases,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Dictionary, Category::Phrases];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Dictionary => "dictionary",
            Category::Phrases => "phrases",
        }
    }

    /// Capitalized name for headings.
    pub fn title(self) -> &'static str {
        match self {
            Category::Dictionary => "Dictionary",
            Category::Phrases => "Phrases",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LexiconError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "conlang", default)]
    pub word: String,
    #[serde(rename = "english", default)]
    pub definition: String,
    #[serde(default)]
    pub notes: String,
}

/// On-disk layout: one ordered list per category. Entries read from disk
/// may lack fields; other top-level keys are carried through untouched so a
/// save never drops them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    #[serde(default)]
    dictionary: Vec<Entry>,
    #[serde(default)]
    phrases: Vec<Entry>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self, category: Category) -> &[Entry] {
        match category {
            Category::Dictionary => &self.dictionary,
            Category::Phrases => &self.phrases,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<Entry> {
        match category {
            Category::Dictionary => &mut self.dictionary,
            Category::Phrases => &mut self.phrases,
        }
    }

    /// Number of entries across all categories.
    pub fn total_count(&self) -> usize {
        Category::ALL.iter().map(|&c| self.entries(c).len()).sum()
    }

    /// Append an entry. Fields are trimmed; word and definition must be
    /// non-empty, notes may be empty.
    pub fn add(
        &mut self,
        category: Category,
        word: &str,
        definition: &str,
        notes: &str,
    ) -> Result<&Entry, LexiconError> {
        let word = word.trim();
        let definition = definition.trim();
        if word.is_empty() {
            return Err(LexiconError::Validation("word"));
        }
        if definition.is_empty() {
            return Err(LexiconError::Validation("definition"));
        }
        let list = self.entries_mut(category);
        list.push(Entry {
            word: word.to_string(),
            definition: definition.to_string(),
            notes: notes.trim().to_string(),
        });
        Ok(&list[list.len() - 1])
    }

    pub fn to_json(&self) -> Result<String, LexiconError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Open from file. Never fails: anything that cannot be read back as a
    /// lexicon yields an empty one.
    pub fn open(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::new(),
            Err(e) => {
                warn!(path = %path.display(), "unreadable lexicon, starting empty: {e}");
                return Self::new();
            }
        };
        if content.trim().is_empty() {
            return Self::new();
        }
        match Self::from_json(&content) {
            Ok(lexicon) => {
                debug!(path = %path.display(), total = lexicon.total_count(), "lexicon loaded");
                lexicon
            }
            Err(e) => {
                warn!(path = %path.display(), "malformed lexicon, starting empty: {e}");
                Self::new()
            }
        }
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), LexiconError> {
        let json = self.to_json()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

/// A lexicon bound to its backing file; every recorded entry is saved at once.
#[derive(Debug)]
pub struct LexiconFile {
    path: PathBuf,
    lexicon: Lexicon,
}

impl LexiconFile {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lexicon = Lexicon::open(&path);
        Self { path, lexicon }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Validate, append and persist. On a failed write the entry is dropped
    /// again, so memory matches the file.
    pub fn record(
        &mut self,
        category: Category,
        word: &str,
        definition: &str,
        notes: &str,
    ) -> Result<Entry, LexiconError> {
        let entry = self.lexicon.add(category, word, definition, notes)?.clone();
        if let Err(e) = self.lexicon.save(&self.path) {
            self.lexicon.entries_mut(category).pop();
            return Err(e);
        }
        debug!(%category, word = %entry.word, "entry recorded");
        Ok(entry)
    }
}
