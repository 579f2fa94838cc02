use std::path::Path;

use unicode_width::UnicodeWidthStr;

use forge_core::lexicon::{Category, Entry, Lexicon, LexiconFile};

const HEADERS: [&str; 3] = ["Word", "Definition", "Notes"];

pub fn lexicon_add(path: &Path, category: Category, word: &str, definition: &str, notes: &str) {
    let mut file = LexiconFile::open(path);
    let entry = die!(
        file.record(category, word, definition, notes),
        "Error saving entry: {}"
    );
    println!("Added to {category}: {} → {}", entry.word, entry.definition);
    println!("Total Words: {}", file.lexicon().total_count());
}

pub fn lexicon_list(path: &Path, category: Option<Category>) {
    let lexicon = Lexicon::open(path);
    print!("{}", render_lexicon(&lexicon, category));
}

/// One titled table per category (or just `only`), then the status line.
pub fn render_lexicon(lexicon: &Lexicon, only: Option<Category>) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        if only.is_some_and(|c| c != category) {
            continue;
        }
        out.push_str(&format!("=== {} ===\n", category.title()));
        let entries = lexicon.entries(category);
        if entries.is_empty() {
            out.push_str("(empty)\n");
        } else {
            out.push_str(&render_table(entries));
        }
        out.push('\n');
    }
    out.push_str(&format!("Total Words: {}\n", lexicon.total_count()));
    out
}

/// Columns padded by terminal display width, not by char count.
pub fn render_table(entries: &[Entry]) -> String {
    let rows: Vec<[&str; 3]> = entries
        .iter()
        .map(|e| [e.word.as_str(), e.definition.as_str(), e.notes.as_str()])
        .collect();

    let mut widths = HEADERS.map(UnicodeWidthStr::width);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_row(&mut out, &[rule[0].as_str(), rule[1].as_str(), rule[2].as_str()], &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 3], widths: &[usize; 3]) {
    let mut line = String::new();
    for (i, (cell, &w)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        line.push_str(&" ".repeat(w - cell.width()));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, definition: &str, notes: &str) -> Entry {
        Entry {
            word: word.to_string(),
            definition: definition.to_string(),
            notes: notes.to_string(),
        }
    }

    #[test]
    fn test_table_aligns_by_display_width() {
        let table = render_table(&[entry("ᴋaжю", "river", ""), entry("ꚇo", "stone", "old")]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Word  Definition  Notes");
        assert_eq!(lines[1], "----  ----------  -----");
        assert_eq!(lines[2], "ᴋaжю  river");
        assert_eq!(lines[3], "ꚇo    stone       old");
    }

    #[test]
    fn test_table_widens_for_long_cells() {
        let table = render_table(&[entry("ᴋaжюᴋaжю", "x", "")]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Word      Definition  Notes");
        assert_eq!(lines[2], "ᴋaжюᴋaжю  x");
    }

    #[test]
    fn test_render_lexicon_with_status_line() {
        let mut lex = Lexicon::new();
        lex.add(Category::Phrases, "ꚇo ᴋa", "good day", "").unwrap();

        let out = render_lexicon(&lex, None);
        assert!(out.contains("=== Dictionary ===\n(empty)\n"));
        assert!(out.contains("=== Phrases ===\nWord"));
        assert!(out.ends_with("Total Words: 1\n"));
    }

    #[test]
    fn test_render_single_category() {
        let mut lex = Lexicon::new();
        lex.add(Category::Dictionary, "ᴋo", "stone", "").unwrap();
        lex.add(Category::Phrases, "ꚇo ᴋa", "good day", "").unwrap();

        let out = render_lexicon(&lex, Some(Category::Dictionary));
        assert!(!out.contains("Phrases"));
        // status line still counts every category
        assert!(out.ends_with("Total Words: 2\n"));
    }
}
