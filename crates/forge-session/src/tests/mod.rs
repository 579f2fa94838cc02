mod basic;
mod combo;

use super::{InputSession, KeyEvent, KeyResponse, PlainTextSurface};

pub(super) fn make_session() -> (InputSession, PlainTextSurface) {
    (InputSession::with_default_layout(), PlainTextSurface::new())
}

// Helper: press each key id in turn, applying edits to the surface
pub(super) fn type_keys(
    session: &mut InputSession,
    surface: &mut PlainTextSurface,
    keys: &[&str],
) -> Vec<KeyResponse> {
    keys.iter()
        .map(|k| session.feed(KeyEvent::key(k), surface))
        .collect()
}
