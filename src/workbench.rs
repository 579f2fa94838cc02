//! Headless editing controller: one input session, the word field, the
//! definition and notes fields, and the lexicon file they are saved into.

use std::path::PathBuf;

use rand::Rng;
use tracing::{debug, info};

use forge_core::glyphs::GlyphInventory;
use forge_core::lexicon::{Category, Entry, LexiconError, LexiconFile};
use forge_core::settings::settings;
use forge_core::synth::{SynthError, Synthesizer, Word};
use forge_session::{InputSession, KeyEvent, KeyResponse, PlainTextSurface, TextSurface};

#[derive(Debug, thiserror::Error)]
pub enum WorkbenchError {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
    #[error(transparent)]
    Synth(#[from] SynthError),
}

#[derive(Debug)]
pub struct Workbench {
    session: InputSession,
    word: PlainTextSurface,
    definition: String,
    notes: String,
    category: Category,
    store: LexiconFile,
    synth: Synthesizer<'static>,
}

impl Workbench {
    /// Open the lexicon at `path` (empty if missing or unreadable) with the
    /// default layout and glyph inventory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, WorkbenchError> {
        Self::with_session(path, InputSession::with_default_layout())
    }

    /// Open the lexicon at the configured `store.path`.
    pub fn open_default() -> Result<Self, WorkbenchError> {
        Self::open(settings().store.path.clone())
    }

    pub fn with_session(
        path: impl Into<PathBuf>,
        session: InputSession,
    ) -> Result<Self, WorkbenchError> {
        let store = LexiconFile::open(path);
        info!(
            path = %store.path().display(),
            total = store.lexicon().total_count(),
            "workbench opened"
        );
        Ok(Self {
            session,
            word: PlainTextSurface::new(),
            definition: String::new(),
            notes: String::new(),
            category: Category::Dictionary,
            store,
            synth: Synthesizer::new(GlyphInventory::global())?,
        })
    }

    // --- Typing into the word field ---

    pub fn press(&mut self, event: KeyEvent) -> KeyResponse {
        self.session.feed(event, &mut self.word)
    }

    pub fn key(&mut self, key_id: &str) -> KeyResponse {
        self.press(KeyEvent::key(key_id))
    }

    pub fn toggle_shift(&mut self) -> KeyResponse {
        self.press(KeyEvent::ToggleShift)
    }

    pub fn toggle_alt(&mut self) -> KeyResponse {
        self.press(KeyEvent::ToggleAlt)
    }

    pub fn backspace(&mut self) -> KeyResponse {
        self.press(KeyEvent::Backspace)
    }

    // --- Generation ---

    /// Generate with the configured syllable range and put the word in the
    /// word field. Returns the word text and its trace.
    pub fn generate(&mut self) -> Result<(String, String), WorkbenchError> {
        let g = &settings().generator;
        let word = self.generate_with(&mut rand::thread_rng(), g.min_syllables, g.max_syllables)?;
        Ok((word.text(), word.trace(&g.trace_separator)))
    }

    pub fn generate_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        min_syllables: usize,
        max_syllables: usize,
    ) -> Result<Word, WorkbenchError> {
        let word = self.synth.generate_with(rng, min_syllables, max_syllables)?;
        self.word.set_plain_text(&word.text());
        // A pending combo refers to glyphs that were just replaced.
        self.session.reset();
        Ok(word)
    }

    // --- Saving ---

    /// Record the three fields into the selected category. On success the
    /// fields are cleared; on any error nothing changes.
    pub fn save(&mut self) -> Result<Entry, WorkbenchError> {
        let entry = self.store.record(
            self.category,
            &self.word.plain_text(),
            &self.definition,
            &self.notes,
        )?;
        debug!(category = %self.category, word = %entry.word, "saved from workbench");
        self.clear_fields();
        Ok(entry)
    }

    pub fn clear_fields(&mut self) {
        self.word.clear();
        self.definition.clear();
        self.notes.clear();
        self.session.reset();
    }

    // --- Field access ---

    pub fn word(&self) -> &str {
        self.word.as_str()
    }

    pub fn set_word(&mut self, text: &str) {
        self.word.set_plain_text(text);
        self.session.reset();
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn set_definition(&mut self, text: &str) {
        self.definition = text.to_string();
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, text: &str) {
        self.notes = text.to_string();
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn session(&self) -> &InputSession {
        &self.session
    }

    pub fn store(&self) -> &LexiconFile {
        &self.store
    }

    /// Status line: number of saved entries across all categories.
    pub fn status(&self) -> String {
        format!("Total Words: {}", self.store.lexicon().total_count())
    }
}
