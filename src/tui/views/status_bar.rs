//! Status bar view
//!
//! Shows the expense count, save state and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveDialog, App};

/// Key hints for the current mode
pub fn key_hints(app: &App) -> &'static str {
    if app.tracker.form().visible {
        " Tab:Next field  ←/→:Category  Enter:Add  Esc:Cancel "
    } else {
        match app.active_dialog {
            ActiveDialog::ConfirmDelete(_) => " y:Delete  n:Keep ",
            ActiveDialog::EditBudget => " Enter:Save  Esc:Cancel ",
            ActiveDialog::None => " a:Add  d:Delete  b:Budget  j/k:Move  q:Quit ",
        }
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.tracker.expenses().len();
    let mut spans = vec![Span::styled(
        format!(" {} expense{} ", count, if count == 1 { "" } else { "s" }),
        Style::default().fg(Color::White),
    )];

    spans.push(Span::raw("│ "));
    if app.tracker.persistence_degraded() {
        spans.push(Span::styled(
            "Not saved",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled("Saved", Style::default().fg(Color::Green)));
    }

    let hints = key_hints(app);

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
