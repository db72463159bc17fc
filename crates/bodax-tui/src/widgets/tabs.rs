use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};

pub struct TabsWidget;

impl TabsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mut spans = vec![
            Span::styled(
                format!(" {} ", app.ctx.config().general.org_name),
                Style::default()
                    .fg(theme.fg0)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];

        for screen in Screen::ALL {
            let style = if screen == app.screen {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.muted)
            };
            spans.push(Span::styled(screen.label(), style));
            spans.push(Span::raw("   "));
        }

        if app.reloading {
            spans.push(Span::styled("reloading…", Style::default().fg(theme.muted)));
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg1));
        frame.render_widget(paragraph, area);
    }
}
