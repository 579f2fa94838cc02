use std::io::{self, BufRead, Write};
use std::path::Path;

use forge_core::lexicon::Category;
use glyph_forge::workbench::Workbench;

use super::input_ops::parse_script;
use super::lexicon_ops::render_lexicon;

const HELP: &str = "\
:gen            generate a word into the word field
:def TEXT       set the definition
:notes TEXT     set the notes
:cat NAME       select category (dictionary, phrases)
:save           save the current entry
:list           show the lexicon
:clear          clear all fields
:help           this text
:quit           leave
anything else is a keystroke script, e.g. k<shift>a<alt>st";

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn shell(path: &Path) {
    let mut wb = die!(Workbench::open(path), "Error: {}");
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    die!(
        writeln!(stdout, "{}  (:help for commands)", wb.status()),
        "Error writing output: {}"
    );
    for line in stdin.lock().lines() {
        let line = die!(line, "Error reading input: {}");
        let flow = die!(execute(&mut wb, &line, &mut stdout), "Error writing output: {}");
        if flow == Flow::Quit {
            break;
        }
    }
}

/// Run one shell line against the workbench. Only output errors are
/// returned; command failures are reported inline.
pub fn execute<W: Write>(wb: &mut Workbench, line: &str, out: &mut W) -> io::Result<Flow> {
    let line = line.trim_end();
    let (cmd, arg) = match line.split_once(' ') {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    };

    match cmd {
        ":quit" | ":q" => return Ok(Flow::Quit),
        ":help" => writeln!(out, "{HELP}")?,
        ":gen" => match wb.generate() {
            Ok((word, trace)) => writeln!(out, "{word}\t{trace}")?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        ":def" => wb.set_definition(arg),
        ":notes" => wb.set_notes(arg),
        ":cat" => match arg.parse::<Category>() {
            Ok(category) => {
                wb.set_category(category);
                writeln!(out, "category: {category}")?;
            }
            Err(e) => writeln!(out, "error: {e}")?,
        },
        ":save" => match wb.save() {
            Ok(entry) => writeln!(
                out,
                "saved {} → {}  {}",
                entry.word,
                entry.definition,
                wb.status()
            )?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        ":list" => write!(out, "{}", render_lexicon(wb.store().lexicon(), None))?,
        ":clear" => wb.clear_fields(),
        c if c.starts_with(':') => writeln!(out, "unknown command {c}, try :help")?,
        _ => match parse_script(line) {
            Ok(events) => {
                for event in events {
                    wb.press(event);
                }
                writeln!(out, "{}  [{}]", wb.word(), wb.session().mode())?;
            }
            Err(e) => writeln!(out, "error: {e}")?,
        },
    }
    Ok(Flow::Continue)
}
