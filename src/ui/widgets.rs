//! Reusable UI widget helpers

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field from the domain layer.
///
/// Empty text fields render their placeholder copy dimmed; selects render
/// the current option's label with cycle arrows while focused; required
/// fields carry a `*` in the title.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    if area.height == 0 {
        return;
    }

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let line = match &field.kind {
        FieldKind::Select { .. } => {
            let label = field.display_value();
            if is_active {
                Line::from(vec![
                    Span::styled("‹ ", Style::default().fg(Color::Cyan)),
                    Span::styled(label, value_style),
                    Span::styled(" ›", Style::default().fg(Color::Cyan)),
                ])
            } else {
                Line::from(Span::styled(label, value_style))
            }
        }
        FieldKind::Text | FieldKind::Password => {
            let cursor = if is_active { "▌" } else { "" };
            if field.is_empty() {
                Line::from(vec![
                    Span::styled(
                        field.placeholder.clone(),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(cursor, Style::default().fg(Color::Cyan)),
                ])
            } else {
                Line::from(vec![
                    Span::styled(field.display_value(), value_style),
                    Span::styled(cursor, Style::default().fg(Color::Cyan)),
                ])
            }
        }
    };

    let marker = if field.required { " *" } else { "" };
    let block = Block::default()
        .title(format!(" {}{} ", field.label, marker))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
