use bodax_core::models::{Match, Outcome};
use bodax_core::schedule::{month_name, MatchFilter};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::fit;
use crate::app::App;
use crate::theme::Theme;

fn outcome_color(theme: &Theme, outcome: Outcome) -> Color {
    match outcome {
        Outcome::Victory => theme.victory,
        Outcome::Defeat => theme.defeat,
        Outcome::Draw => theme.draw,
    }
}

/// Two lines per played match: result and score, then event and date
fn result_lines(m: &Match, theme: &Theme, width: usize) -> [Line<'static>; 2] {
    let outcome = m.outcome();
    [
        Line::from(vec![
            Span::styled(
                format!(" {:<8}", outcome.label()),
                Style::default()
                    .fg(outcome_color(theme, outcome))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{:>5}  ", m.score_label()), Style::default().fg(theme.fg0)),
            Span::styled(
                fit(&format!("vs {}", m.opponent), width.saturating_sub(17)),
                Style::default().fg(theme.fg0),
            ),
        ]),
        Line::from(Span::styled(
            fit(&format!("   {} · {}", m.tournament, m.date_label()), width),
            Style::default().fg(theme.muted),
        )),
    ]
}

fn upcoming_lines(m: &Match, theme: &Theme, width: usize) -> [Line<'static>; 2] {
    [
        Line::from(vec![
            Span::styled(
                format!(" {:<8}", "Upcoming"),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                fit(&format!("[{}] vs {}", m.opponent_initials(), m.opponent), width.saturating_sub(10)),
                Style::default().fg(theme.fg0),
            ),
        ]),
        Line::from(Span::styled(
            fit(
                &format!(
                    "   {} · {} {}",
                    m.tournament,
                    m.date_label(),
                    m.time_label().unwrap_or_default()
                ),
                width,
            ),
            Style::default().fg(theme.muted),
        )),
    ]
}

pub struct RecentResultsWidget;

impl RecentResultsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let filter = &app.recent_filter;
        let page = app.recent_page();
        let width = area.width as usize;

        let year = filter.year.map(|y| y.to_string()).unwrap_or_else(|| "All".to_string());
        let month = filter.month.map(month_name).unwrap_or("All");
        let days = filter
            .last_days
            .map(|d| format!("Last {} days", d))
            .unwrap_or_else(|| "All time".to_string());

        let label = Style::default().fg(theme.muted);
        let value = Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(vec![
                Span::styled(" Year ", label),
                Span::styled(year, value),
                Span::styled("  Month ", label),
                Span::styled(month, value),
                Span::styled("  Period ", label),
                Span::styled(days, value),
                Span::styled("  Show ", label),
                Span::styled(filter.limit.to_string(), value),
            ]),
            Line::from(Span::styled(format!(" {}", page.summary()), label)),
        ];

        if page.shown.is_empty() {
            lines.push(Line::from(Span::styled(" No recent matches found", label)));
        }
        for m in &page.shown {
            lines.extend(result_lines(m, theme, width));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

pub struct MatchListWidget;

impl MatchListWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let width = area.width as usize;

        let mut tabs = vec![Span::raw(" ")];
        for filter in [MatchFilter::All, MatchFilter::Upcoming, MatchFilter::Past] {
            let style = if filter == app.match_filter {
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };
            tabs.push(Span::styled(format!(" {} ", filter.label()), style));
            tabs.push(Span::raw(" "));
        }
        tabs.push(Span::styled(" (f)", Style::default().fg(theme.muted)));

        let mut lines = vec![Line::from(tabs), Line::default()];
        let matches = app.filtered_matches();
        if matches.is_empty() {
            lines.push(Line::from(Span::styled(
                " No matches found for this filter.",
                Style::default().fg(theme.muted),
            )));
        }
        for m in matches {
            let is_upcoming = MatchFilter::Upcoming.matches(m, app.now);
            if is_upcoming || m.date.is_none() {
                lines.extend(upcoming_lines(m, theme, width));
            } else {
                lines.extend(result_lines(m, theme, width));
            }
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}
