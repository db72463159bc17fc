use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::cursor_glyph;
use crate::app::{App, RevealKey, Screen};

pub struct HeroWidget;

impl HeroWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let (title, title_cursor) = app.revealed(RevealKey::Title);

        let subtitle = if app.screen == Screen::Home {
            let (slogan, cursor) = app.revealed(RevealKey::Slogan);
            Line::from(vec![
                Span::styled(slogan, Style::default().fg(theme.muted)),
                Span::styled(cursor_glyph(cursor), Style::default().fg(theme.accent)),
            ])
        } else {
            Line::from(Span::styled(app.tagline(), Style::default().fg(theme.muted)))
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    title,
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(cursor_glyph(title_cursor), Style::default().fg(theme.fg0)),
            ]),
            subtitle,
        ];

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
