use std::path::PathBuf;

use clap::{Parser, Subcommand};

use forge_cli::commands::{config_ops, generate_ops, input_ops, lexicon_ops, shell_ops};
use forge_core::lexicon::Category;

#[derive(Parser)]
#[command(name = "forgetool", about = "Glyph Forge word generator and lexicon tool")]
struct Cli {
    /// Settings TOML overriding the built-in defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write a JSON trace log into this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate random words with their syllable structure
    Generate {
        /// Minimum syllables (default from settings)
        #[arg(long)]
        min: Option<usize>,
        /// Maximum syllables (default from settings)
        #[arg(long)]
        max: Option<usize>,
        /// Number of words
        #[arg(short, default_value = "1")]
        n: usize,
        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Output JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
    /// Add to or list the lexicon
    Lexicon {
        /// Lexicon file (default: store.path from settings)
        #[arg(long)]
        file: Option<PathBuf>,
        #[command(subcommand)]
        action: LexiconAction,
    },
    /// Run a keystroke script through a fresh input session
    Type {
        /// Script tokens: key ids, <shift>, <alt>, <bs>, <space>
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Interactive workbench on stdin
    Shell {
        /// Lexicon file (default: store.path from settings)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print the default keyboard layout TOML
    KeyboardExport,
    /// Validate a keyboard layout TOML file
    KeyboardValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Print the default glyph inventory TOML
    GlyphsExport,
    /// Validate a glyph inventory TOML file
    GlyphsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

#[derive(Subcommand)]
enum LexiconAction {
    /// Save a new entry
    Add {
        /// Word in the invented script
        word: String,
        /// English definition
        definition: String,
        /// Category: dictionary or phrases
        #[arg(long, default_value = "dictionary")]
        category: Category,
        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Show saved entries
    List {
        /// Only this category
        #[arg(long)]
        category: Option<Category>,
    },
}

fn store_path(file: Option<PathBuf>) -> PathBuf {
    file.unwrap_or_else(|| forge_core::settings::settings().store.path.clone())
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref file) = cli.settings {
        config_ops::load_settings(file);
    }
    if let Some(ref dir) = cli.log_dir {
        glyph_forge::trace_init::init_tracing(dir);
    }

    match cli.command {
        Command::Generate {
            min,
            max,
            n,
            seed,
            json,
        } => generate_ops::generate(min, max, n, seed, json),
        Command::Lexicon { file, action } => {
            let path = store_path(file);
            match action {
                LexiconAction::Add {
                    word,
                    definition,
                    category,
                    notes,
                } => lexicon_ops::lexicon_add(&path, category, &word, &definition, &notes),
                LexiconAction::List { category } => lexicon_ops::lexicon_list(&path, category),
            }
        }
        Command::Type { keys } => input_ops::type_keys(&keys),
        Command::Shell { file } => shell_ops::shell(&store_path(file)),
        Command::KeyboardExport => config_ops::keyboard_export(),
        Command::KeyboardValidate { file } => config_ops::keyboard_validate(&file),
        Command::GlyphsExport => config_ops::glyphs_export(),
        Command::GlyphsValidate { file } => config_ops::glyphs_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
