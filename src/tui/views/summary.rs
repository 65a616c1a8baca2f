//! Budget summary header
//!
//! Budget, month-to-date spending and remaining amount, with a gauge
//! scaled to the share of the budget already spent.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::display::report::format_percentage;
use crate::services::BudgetStatus;
use crate::tui::app::App;

/// Color used for the remaining amount and the gauge
pub fn status_color(status: BudgetStatus) -> Color {
    match status {
        BudgetStatus::Ok => Color::Green,
        BudgetStatus::Warning => Color::Yellow,
        BudgetStatus::Over => Color::Red,
        BudgetStatus::Neutral => Color::Gray,
    }
}

/// Render the summary header
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.tracker.summary(app.today);
    let status = summary.status();
    let color = status_color(status);
    let symbol = app.settings.currency_symbol.as_str();

    let title = format!(" Budget Summary: {} ", app.today.format("%B %Y"));
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Budget
            Constraint::Length(1), // Spent
            Constraint::Length(1), // Remaining
            Constraint::Length(1), // Gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let label = Style::default().fg(Color::White);
    let rows = [
        (
            "Total Budget:       ",
            summary.budget.format_with_symbol(symbol),
            Style::default().fg(Color::White),
        ),
        (
            "Spent (This Month): ",
            summary.month_spent.format_with_symbol(symbol),
            Style::default().fg(Color::White),
        ),
        (
            "Remaining:          ",
            summary.remaining.format_with_symbol(symbol),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ];

    for (i, (name, value, style)) in rows.into_iter().enumerate() {
        let line = Line::from(vec![
            Span::styled(format!(" {}", name), label),
            Span::styled(value, style),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[i]);
    }

    let pct = summary.spent_percentage();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(pct / 100.0)
        .label(format!("{} spent", format_percentage(pct)));
    frame.render_widget(gauge, chunks[3]);
}
