//! Raw key tokens.
//!
//! Terminal key presses are named the way browsers name `KeyboardEvent.key`
//! values, so binding tables read the same on either side.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Convert a terminal key event into a raw key token.
///
/// Returns `None` for releases and for keys without a token. Modifiers are
/// not part of the token.
pub fn key_token(key: &KeyEvent) -> Option<String> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let token = match key.code {
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::Enter => "Enter",
        KeyCode::Esc => "Escape",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::Char(c) => return Some(c.to_string()),
        KeyCode::F(n) => return Some(format!("F{}", n)),
        _ => return None,
    };

    Some(token.to_string())
}
