//! Billing panel: the card-details display region

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the billing panel. The content is replaced wholesale whenever a card
/// summary is present; before (or without) a successful fetch it shows the
/// placeholder copy.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut content = vec![
        Line::from(Span::styled(
            "Primary Card",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(card) = &app.state.card {
        content.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Cyan)),
            Span::raw(card.brand.clone()),
        ]));
        content.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Cyan)),
            Span::raw(card.last4.clone()),
        ]));
        if card.expired_now() {
            content.push(Line::from(""));
            content.push(Line::from(Span::styled(
                "  expired",
                Style::default().fg(Color::Red),
            )));
        }
    } else {
        content.push(Line::from(Span::styled(
            "No card details loaded.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Billing ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, area);
}
