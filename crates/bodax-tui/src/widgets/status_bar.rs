use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            let tier = app.carousel.tier().map(|t| t.label()).unwrap_or("-");
            format!(
                " {} | Upcoming: {} | Results: {} | Layout: {}",
                app.screen.label(),
                app.carousel.item_count(),
                app.recent.len(),
                tier
            )
        };

        let help_hint = match app.screen {
            Screen::Schedule => " q:quit tab:page h/l:slide o:stream v:vlr y/m/d/n:filter r:reload ",
            Screen::Matches => " q:quit tab:page j/k:scroll f:filter r:reload ",
            Screen::Team => " q:quit tab:page t:team c:players/coaches r:reload ",
            Screen::Home | Screen::Players | Screen::Streamers => " q:quit tab:page j/k:scroll r:reload ",
        };
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
