//! UI module for rendering the TUI

mod billing_panel;
mod form_panel;
mod layout;
mod widgets;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, billing_area) = layout::create_layout(frame.area());

    form_panel::draw(frame, form_area, app);
    billing_panel::draw(frame, billing_area, app);

    layout::draw_status_bar(frame, app);
}
