use bodax_core::countdown::time_left;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::fit;
use crate::app::App;

pub struct NextMatchWidget;

impl NextMatchWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let width = area.width.saturating_sub(2) as usize;

        let lines: Vec<Line> = match app.next_team_match() {
            Some(m) => {
                let when = match m.time_label() {
                    Some(time) => format!("{} · {}", m.date_label(), time),
                    None => m.date_label(),
                };
                let countdown = m.date.map(|date| time_left(date, app.now).label()).unwrap_or_default();
                vec![
                    Line::from(Span::styled(fit(&when, width), Style::default().fg(theme.fg0))),
                    Line::from(vec![
                        Span::styled("VS ", Style::default().fg(theme.muted)),
                        Span::styled(
                            fit(&m.opponent, width.saturating_sub(3)),
                            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(Span::styled(fit(&m.tournament, width), Style::default().fg(theme.muted))),
                    Line::from(Span::styled(countdown, Style::default().fg(theme.fg0))),
                ]
            }
            None => vec![Line::from(Span::styled(
                "No upcoming match scheduled",
                Style::default().fg(theme.muted),
            ))],
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted))
            .title(" NEXT MATCH ");
        let paragraph = Paragraph::new(lines).block(block).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
