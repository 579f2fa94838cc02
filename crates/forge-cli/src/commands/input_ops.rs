//! Keystroke scripts: a compact text form of key events.
//!
//! Every character is a key id, except whitespace (skipped) and the
//! bracketed tokens `<shift>`, `<alt>`, `<bs>` and `<space>`. So
//! `k<shift>a<alt>st` types `ᴋ`, a shifted `a`, then the `st` combo.

use forge_session::{InputSession, KeyEvent, PlainTextSurface};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("unknown token <{0}>")]
    UnknownToken(String),
    #[error("unterminated token starting at byte {0}")]
    Unterminated(usize),
}

pub fn parse_script(script: &str) -> Result<Vec<KeyEvent>, ScriptError> {
    let mut events = Vec::new();
    let mut chars = script.char_indices();
    while let Some((start, c)) = chars.next() {
        match c {
            '<' => {
                let rest = &script[start + 1..];
                let Some(end) = rest.find('>') else {
                    return Err(ScriptError::Unterminated(start));
                };
                let token = &rest[..end];
                events.push(match token {
                    "shift" => KeyEvent::ToggleShift,
                    "alt" => KeyEvent::ToggleAlt,
                    "bs" => KeyEvent::Backspace,
                    "space" => KeyEvent::key("space"),
                    other => return Err(ScriptError::UnknownToken(other.to_string())),
                });
                // skip past the closing '>'
                for _ in 0..token.chars().count() + 1 {
                    chars.next();
                }
            }
            c if c.is_whitespace() => {}
            c => events.push(KeyEvent::Key(c.to_string())),
        }
    }
    Ok(events)
}

/// Play `events` through a fresh session. Returns the text and the number of
/// events the session did not consume.
pub fn run_script(events: Vec<KeyEvent>) -> (String, usize) {
    let mut session = InputSession::with_default_layout();
    let mut surface = PlainTextSurface::new();
    let mut ignored = 0;
    for event in events {
        if !session.feed(event, &mut surface).consumed {
            ignored += 1;
        }
    }
    (surface.as_str().to_string(), ignored)
}

pub fn type_keys(scripts: &[String]) {
    let events = die!(parse_script(&scripts.join(" ")), "Error: {}");
    let (text, ignored) = run_script(events);
    println!("{text}");
    if ignored > 0 {
        eprintln!("{ignored} key(s) ignored");
    }
}
