//! Signup form panel

use super::widgets::draw_field;
use crate::app::App;
use crate::state::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Full height of one rendered field (bordered box)
const FIELD_HEIGHT: u16 = 3;

/// Draw the signup form. Fields in a dependent group scale their height by
/// the group's current reveal fraction, which animates the slide; a fully
/// collapsed group occupies no rows at all.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Resolve each field's drawn height in document order. Hidden group
    // members still mid-collapse get a shrinking sliver; settled-hidden
    // fields get no row.
    let mut rows: Vec<(FieldId, u16)> = Vec::new();
    for id in app.state.document.field_ids() {
        let height = match app.state.document.group_of(id) {
            Some(group) => {
                let fraction = app.state.group_height_fraction(group.id);
                (FIELD_HEIGHT as f32 * fraction).round() as u16
            }
            None => FIELD_HEIGHT,
        };
        if height > 0 {
            rows.push((id, height));
        }
    }

    let mut constraints: Vec<Constraint> =
        rows.iter().map(|(_, h)| Constraint::Length(*h)).collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let focused = app.state.focused_field();
    for (idx, (id, _)) in rows.iter().enumerate() {
        if let Some(field) = app.state.document.field(*id) {
            let is_active = focused == Some(*id);
            draw_field(frame, chunks[idx], field, is_active);
        }
    }
}
