//! Input form — one row per field, focused row highlighted.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Field};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().borders(Borders::ALL).title(" Plan inputs ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        let focused = app.focus == field;
        let marker = if focused { "> " } else { "  " };
        let value = app.form.display_value(field);

        let value_span = match field {
            Field::Direction => Span::styled(value, theme::badge_style(app.form.direction)),
            _ => Span::styled(value, theme::field_style(focused)),
        };

        lines.push(Line::from(vec![
            Span::styled(marker, theme::field_style(focused)),
            Span::styled(format!("{:<18}", field.label()), theme::label_style()),
            value_span,
            // Block cursor on the editable focused field.
            if focused && !field.is_toggle() {
                Span::styled("_", theme::field_style(true))
            } else {
                Span::raw("")
            },
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
