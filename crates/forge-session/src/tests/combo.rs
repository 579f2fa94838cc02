use std::sync::Arc;

use forge_core::keyboard::Keyboard;

use super::*;
use crate::{EditOp, ModifierMode};

fn alt_combo(keys: &[&str]) -> (InputSession, PlainTextSurface) {
    let (mut session, mut surface) = make_session();
    session.handle_key(KeyEvent::ToggleAlt);
    type_keys(&mut session, &mut surface, keys);
    (session, surface)
}

#[test]
fn test_two_key_combo_replaces_base_glyphs() {
    let (mut session, mut surface) = make_session();
    session.handle_key(KeyEvent::ToggleAlt);

    let first = session.feed(KeyEvent::key("s"), &mut surface);
    assert_eq!(first.edits, vec![EditOp::Insert("c".into())]);
    assert_eq!(surface.as_str(), "c");
    assert_eq!(session.combo_buffer(), ["s"]);
    assert_eq!(session.mode(), ModifierMode::Alt);

    let second = session.feed(KeyEvent::key("t"), &mut surface);
    assert_eq!(
        second.edits,
        vec![
            EditOp::Insert("ᴛ".into()),
            EditOp::Replace {
                delete: 2,
                insert: "ꚇ".into()
            },
        ]
    );
    assert_eq!(surface.as_str(), "ꚇ");
    assert!(session.combo_buffer().is_empty());
    assert_eq!(session.mode(), ModifierMode::None);
}

#[test]
fn test_all_default_combos() {
    let cases: &[(&[&str], &str)] = &[
        (&["c", "h"], "ч"),
        (&["s", "h"], "ш"),
        (&["s", "t"], "ꚇ"),
        (&["n", "y"], "њ"),
        (&["j", "a"], "Ꙗ"),
        (&["y", "u"], "Ұ"),
        (&["t", "s", "h"], "ԕ"),
    ];
    for (keys, expected) in cases {
        let (session, surface) = alt_combo(keys);
        assert_eq!(surface.as_str(), *expected, "keys {keys:?}");
        assert_eq!(session.mode(), ModifierMode::None);
    }
}

#[test]
fn test_three_key_combo_stays_pending() {
    let (session, surface) = alt_combo(&["t", "s"]);
    assert_eq!(surface.as_str(), "ᴛc");
    assert_eq!(session.combo_buffer(), ["t", "s"]);
    assert_eq!(session.mode(), ModifierMode::Alt);
}

#[test]
fn test_dead_end_keeps_literal_glyphs() {
    let (session, surface) = alt_combo(&["t", "x"]);
    assert_eq!(surface.as_str(), "ᴛж");
    assert!(session.combo_buffer().is_empty());
    assert_eq!(session.mode(), ModifierMode::None);
}

#[test]
fn test_key_with_no_combo_exits_alt() {
    let (session, surface) = alt_combo(&["a"]);
    assert_eq!(surface.as_str(), "a");
    assert_eq!(session.mode(), ModifierMode::None);
}

#[test]
fn test_combo_after_existing_text() {
    let (mut session, mut surface) = make_session();
    type_keys(&mut session, &mut surface, &["k", "o"]);
    session.handle_key(KeyEvent::ToggleAlt);
    type_keys(&mut session, &mut surface, &["s", "h"]);
    assert_eq!(surface.as_str(), "ᴋoш");
}

#[test]
fn test_backspace_mid_combo_pops_buffer() {
    let (mut session, mut surface) = alt_combo(&["t", "s"]);

    session.feed(KeyEvent::Backspace, &mut surface);
    assert_eq!(surface.as_str(), "ᴛ");
    assert_eq!(session.combo_buffer(), ["t"]);
    assert_eq!(session.mode(), ModifierMode::Alt);

    // the combo can still complete and replaces exactly the buffered glyphs
    type_keys(&mut session, &mut surface, &["s", "h"]);
    assert_eq!(surface.as_str(), "ԕ");
}

#[test]
fn test_backspace_empties_buffer_but_stays_alt() {
    let (mut session, mut surface) = alt_combo(&["s"]);

    session.feed(KeyEvent::Backspace, &mut surface);
    assert!(surface.is_empty());
    assert!(!session.is_composing());
    assert_eq!(session.mode(), ModifierMode::Alt);

    type_keys(&mut session, &mut surface, &["c", "h"]);
    assert_eq!(surface.as_str(), "ч");
}

#[test]
fn test_manual_alt_off_drops_buffer() {
    let (mut session, mut surface) = alt_combo(&["s"]);

    let resp = session.handle_key(KeyEvent::ToggleAlt);
    assert!(resp.edits.is_empty());
    assert_eq!(session.mode(), ModifierMode::None);
    assert!(session.combo_buffer().is_empty());

    // "t" is no longer part of a combo
    type_keys(&mut session, &mut surface, &["t"]);
    assert_eq!(surface.as_str(), "cᴛ");
}

#[test]
fn test_disabled_key_does_not_disturb_combo() {
    let (mut session, mut surface) = alt_combo(&["s"]);

    let resp = session.feed(KeyEvent::key("w"), &mut surface);
    assert!(!resp.consumed);
    assert_eq!(session.combo_buffer(), ["s"]);

    type_keys(&mut session, &mut surface, &["h"]);
    assert_eq!(surface.as_str(), "ш");
}

#[test]
fn test_alt_then_shift_clears_alt() {
    let (mut session, mut surface) = alt_combo(&["c"]);

    session.handle_key(KeyEvent::ToggleShift);
    assert_eq!(session.mode(), ModifierMode::Shift);
    assert!(session.combo_buffer().is_empty());

    type_keys(&mut session, &mut surface, &["a"]);
    assert_eq!(surface.as_str(), "цᴀ");
}

fn layout_with_multi_letter_key() -> InputSession {
    let toml = r#"
[keys]
c = "ц"
h = "x"
ch = "ч"
space = " "

[combos]
ch = "ч"
"#;
    InputSession::new(Arc::new(Keyboard::from_toml(toml).unwrap()))
}

#[test]
fn test_multi_letter_key_does_not_commit_combo() {
    let mut session = layout_with_multi_letter_key();
    let mut surface = PlainTextSurface::new();
    session.handle_key(KeyEvent::ToggleAlt);

    let resp = session.feed(KeyEvent::key("ch"), &mut surface);
    assert_eq!(resp.edits, vec![EditOp::Insert("ч".into())]);
    assert_eq!(surface.as_str(), "ч");
    assert!(session.combo_buffer().is_empty());
    assert_eq!(session.mode(), ModifierMode::None);
}

#[test]
fn test_multi_letter_key_abandons_pending_combo() {
    let mut session = layout_with_multi_letter_key();
    let mut surface = PlainTextSurface::new();
    session.handle_key(KeyEvent::ToggleAlt);

    type_keys(&mut session, &mut surface, &["c", "space"]);
    assert_eq!(surface.as_str(), "ц ");
    assert_eq!(session.mode(), ModifierMode::None);

    // single-letter keys still compose
    session.handle_key(KeyEvent::ToggleAlt);
    type_keys(&mut session, &mut surface, &["c", "h"]);
    assert_eq!(surface.as_str(), "ц ч");
}
