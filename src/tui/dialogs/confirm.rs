//! Delete confirmation dialog

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::display::report::truncate;
use crate::services::tracker::CONFIRM_DELETE_MESSAGE;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the delete confirmation for the selected expense
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(54, 8, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Expense ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let symbol = app.settings.currency_symbol.as_str();
    let subject = match app.selected_expense() {
        Some(expense) => format!(
            "{} ({})",
            truncate(&expense.title, 30),
            expense.amount.format_with_symbol(symbol)
        ),
        None => String::new(),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            CONFIRM_DELETE_MESSAGE,
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(subject, Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
