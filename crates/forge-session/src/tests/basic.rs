use super::*;
use crate::{EditOp, ModifierMode, TextSurface};

#[test]
fn test_plain_key_inserts_base_glyph() {
    let (mut session, mut surface) = make_session();

    let resp = session.feed(KeyEvent::key("k"), &mut surface);
    assert!(resp.consumed);
    assert_eq!(resp.edits, vec![EditOp::Insert("ᴋ".into())]);
    assert_eq!(surface.as_str(), "ᴋ");
    assert_eq!(session.mode(), ModifierMode::None);
}

#[test]
fn test_type_word() {
    let (mut session, mut surface) = make_session();

    type_keys(&mut session, &mut surface, &["k", "a", "x", "5"]);
    assert_eq!(surface.as_str(), "ᴋaжю");
}

#[test]
fn test_space_key() {
    let (mut session, mut surface) = make_session();

    type_keys(&mut session, &mut surface, &["a", "space", "o"]);
    assert_eq!(surface.as_str(), "a o");
}

#[test]
fn test_disabled_key_not_consumed() {
    let (mut session, mut surface) = make_session();

    let resp = session.feed(KeyEvent::key("w"), &mut surface);
    assert!(!resp.consumed);
    assert!(resp.edits.is_empty());
    assert!(surface.is_empty());
}

#[test]
fn test_unknown_key_not_consumed() {
    let (mut session, mut surface) = make_session();

    let resp = session.feed(KeyEvent::key("F5"), &mut surface);
    assert!(!resp.consumed);
    assert!(surface.is_empty());
}

#[test]
fn test_disabled_key_keeps_modifier() {
    let (mut session, mut surface) = make_session();

    session.handle_key(KeyEvent::ToggleShift);
    session.feed(KeyEvent::key("w"), &mut surface);
    assert_eq!(session.mode(), ModifierMode::Shift);
}

#[test]
fn test_backspace_deletes_one_glyph() {
    let (mut session, mut surface) = make_session();

    type_keys(&mut session, &mut surface, &["k", "a"]);
    let resp = session.feed(KeyEvent::Backspace, &mut surface);
    assert!(resp.consumed);
    assert_eq!(resp.edits, vec![EditOp::DeleteLast(1)]);
    assert_eq!(surface.as_str(), "ᴋ");
}

#[test]
fn test_backspace_on_empty_surface() {
    let (mut session, mut surface) = make_session();

    let resp = session.feed(KeyEvent::Backspace, &mut surface);
    assert!(resp.consumed);
    assert!(surface.is_empty());
}

#[test]
fn test_toggles_are_exclusive() {
    let (mut session, _) = make_session();

    session.handle_key(KeyEvent::ToggleShift);
    assert_eq!(session.mode(), ModifierMode::Shift);
    session.handle_key(KeyEvent::ToggleAlt);
    assert_eq!(session.mode(), ModifierMode::Alt);
    session.handle_key(KeyEvent::ToggleShift);
    assert_eq!(session.mode(), ModifierMode::Shift);
}

#[test]
fn test_toggle_twice_turns_off() {
    let (mut session, _) = make_session();

    session.handle_key(KeyEvent::ToggleAlt);
    session.handle_key(KeyEvent::ToggleAlt);
    assert_eq!(session.mode(), ModifierMode::None);

    session.handle_key(KeyEvent::ToggleShift);
    session.handle_key(KeyEvent::ToggleShift);
    assert_eq!(session.mode(), ModifierMode::None);
}

#[test]
fn test_toggle_emits_no_edits() {
    let (mut session, _) = make_session();

    let resp = session.handle_key(KeyEvent::ToggleAlt);
    assert!(resp.consumed);
    assert!(resp.edits.is_empty());
}

#[test]
fn test_sessions_are_independent() {
    let (mut a, mut sa) = make_session();
    let (mut b, mut sb) = make_session();

    a.handle_key(KeyEvent::ToggleAlt);
    type_keys(&mut a, &mut sa, &["s"]);
    type_keys(&mut b, &mut sb, &["s"]);

    assert_eq!(a.mode(), ModifierMode::Alt);
    assert_eq!(a.combo_buffer(), ["s"]);
    assert_eq!(b.mode(), ModifierMode::None);
    assert!(b.combo_buffer().is_empty());
}

#[test]
fn test_reset_clears_everything() {
    let (mut session, mut surface) = make_session();

    session.handle_key(KeyEvent::ToggleAlt);
    type_keys(&mut session, &mut surface, &["t"]);
    session.reset();
    assert_eq!(session.mode(), ModifierMode::None);
    assert!(!session.is_composing());
    // reset does not touch the surface
    assert_eq!(surface.plain_text(), "ᴛ");
}
