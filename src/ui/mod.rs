//! Terminal rendering for the jog panel.

mod hints;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::commands::CommandTarget;

pub use hints::{hints_for, render_hints};
pub use theme::Theme;

/// Draw the whole application.
pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::default();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_status(frame, chunks[0], app);
    render_buttons(frame, chunks[1], app, &theme);
    render_notes(frame, chunks[2], app, &theme);
    render_gcode(frame, chunks[3], app, &theme);
    render_hints(frame, chunks[4], app.focus(), &theme);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let mode = if app.panel().edit_mode() {
        "EDIT"
    } else {
        "LOCKED"
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" Robotray [{}] ", mode),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "step {} mm  F{}  ",
            app.panel().step_mm(),
            app.panel().feed_rate()
        )),
        Span::raw(app.status().to_string()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_buttons(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let lines: Vec<Line> = app
        .panel()
        .buttons()
        .iter()
        .map(|button| {
            let keys = app.bindings().tokens_for(button.id()).join(", ");
            Line::from(vec![
                Span::styled(
                    format!(" {:<3}", button.id().label()),
                    theme.button(button.is_enabled()),
                ),
                Span::styled(
                    format!(" {:<20}", button.id().as_str()),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(format!(" {:<16}", keys), Style::default().fg(theme.highlight)),
                Span::raw(format!(" clicks: {}", button.clicks())),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Jog ")
        .border_style(theme.border(app.focus() == Focus::Panel));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_notes(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let focused = app.focus() == Focus::Notes;
    let mut text = app.notes().to_string();
    if focused {
        text.push('_');
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Notes ")
        .border_style(theme.border(focused));
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_gcode(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = app
        .gcode()
        .tail(visible)
        .into_iter()
        .map(Line::from)
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" G-code ")
        .border_style(theme.border(false));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
