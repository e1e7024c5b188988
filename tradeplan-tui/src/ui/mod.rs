//! Top-level UI layout — form column, result column, one-line status bar.

pub mod form_panel;
pub mod result_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::AppState;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    // Split main area: form on the left, result on the right.
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(40), Constraint::Min(30)])
        .split(rows[0]);

    form_panel::render(f, columns[0], app);
    result_panel::render(f, columns[1], app);
    status_bar::render(f, rows[1], app);
}
