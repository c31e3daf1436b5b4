//! Key hint bar.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Theme;
use crate::app::Focus;

/// Hint text for the given focus. Keys are in brackets.
pub fn hints_for(focus: Focus) -> &'static str {
    match focus {
        Focus::Panel => {
            "[←↑↓→] jog X/Y  [-/=] jog Z  [e] edit mode  [[/]] step  [Tab] notes  [q] quit"
        }
        Focus::Notes => "[Enter] log note  [Tab/Esc] back to panel  [Ctrl+C] quit",
    }
}

/// Render the hint bar for the current focus.
pub fn render_hints(frame: &mut Frame, area: Rect, focus: Focus, theme: &Theme) {
    let line = Line::from(hint_spans(hints_for(focus), theme));
    frame.render_widget(Paragraph::new(line), area);
}

/// Split hint text into spans, highlighting bracketed keys.
///
/// Only the outermost brackets delimit a key, so `[[/]]` renders as one key.
fn hint_spans(hints: &str, theme: &Theme) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme.highlight);
    let text_style = Style::default().fg(theme.muted);

    let mut spans = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in hints.chars() {
        match c {
            '[' => {
                if depth == 0 && !current.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut current), text_style));
                }
                depth += 1;
                current.push(c);
            }
            ']' if depth > 0 => {
                current.push(c);
                depth -= 1;
                if depth == 0 {
                    spans.push(Span::styled(std::mem::take(&mut current), key_style));
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        spans.push(Span::styled(current, text_style));
    }

    spans
}
