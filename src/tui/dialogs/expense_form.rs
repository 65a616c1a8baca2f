//! Add-expense form dialog
//!
//! Modal form with title, amount, category and date fields. Text is edited
//! in place on the tracker's form; parsing and validation happen on submit.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::ExpenseForm;
use crate::tui::app::{App, FormField};
use crate::tui::layout::centered_rect_fixed;

/// Type a character into the focused text field
///
/// The category field is not typed into; it cycles with the arrow keys.
pub fn insert_char(form: &mut ExpenseForm, field: FormField, c: char) {
    match field {
        FormField::Title => form.title.push(c),
        FormField::Amount => {
            if c.is_ascii_digit() || c == '.' || c == '-' {
                form.amount.push(c);
            }
        }
        FormField::Date => {
            if c.is_ascii_digit() || c == '-' {
                form.date.push(c);
            }
        }
        FormField::Category => {}
    }
}

/// Delete the last character of the focused text field
pub fn backspace(form: &mut ExpenseForm, field: FormField) {
    match field {
        FormField::Title => {
            form.title.pop();
        }
        FormField::Amount => {
            form.amount.pop();
        }
        FormField::Date => {
            form.date.pop();
        }
        FormField::Category => {}
    }
}

/// Render the add-expense form
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(56, 11, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Title
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = app.tracker.form();
    let focused = app.form_field;

    render_text_field(frame, chunks[1], "Title", &form.title, focused == FormField::Title);
    render_text_field(frame, chunks[2], "Amount", &form.amount, focused == FormField::Amount);
    render_category_field(frame, chunks[3], form, focused == FormField::Category);
    render_text_field(frame, chunks[4], "Date", &form.date, focused == FormField::Date);

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

fn render_text_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let mut spans = vec![Span::styled(format!("{:>10}: ", label), label_style(focused))];

    if focused {
        spans.push(Span::styled(value.to_string(), Style::default().fg(Color::White)));
        spans.push(Span::styled(
            " ",
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
    } else {
        spans.push(Span::styled(value.to_string(), Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_category_field(frame: &mut Frame, area: Rect, form: &ExpenseForm, focused: bool) {
    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let arrow_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(format!("{:>10}: ", "Category"), label_style(focused)),
        Span::styled("< ", arrow_style),
        Span::styled(form.category.name(), value_style),
        Span::styled(" >", arrow_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
