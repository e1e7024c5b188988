//! One-line status bar — key hints plus the latest status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let hints = "tab/arrows move · type to edit · space toggles · q quits";
    let line = match &app.status {
        Some(status) => Line::from(vec![
            Span::styled(format!("{status}  "), theme::warning_style()),
            Span::styled(hints, theme::label_style()),
        ]),
        None => Line::styled(hints, theme::label_style()),
    };
    f.render_widget(Paragraph::new(line), area);
}
