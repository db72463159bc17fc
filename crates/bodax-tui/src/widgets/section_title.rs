use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::cursor_glyph;
use crate::app::{App, RevealKey};

pub struct SectionTitleWidget;

impl SectionTitleWidget {
    /// Draw the typed-so-far text of `key` with its cursor
    pub fn render(frame: &mut Frame, area: Rect, app: &App, key: RevealKey) {
        let (text, cursor) = app.revealed(key);
        let line = Line::from(vec![
            Span::styled(
                format!(" {}", text),
                Style::default()
                    .fg(app.theme.fg0)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(cursor_glyph(cursor), Style::default().fg(app.theme.accent)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
