use bodax_core::models::{Player, Team};
use bodax_core::roster::{players_by_name, roster, streamers_by_name};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::fit;
use crate::app::{App, RosterTab};
use crate::theme::Theme;

pub struct RosterWidget;

impl RosterWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, team: Team) {
        let theme = &app.theme;
        let limit = app.ctx.config().schedule.home_roster_limit;
        let members = roster(&app.snapshot.players, team, Some(limit));
        let width = area.width as usize;

        let lines: Vec<Line> = if members.is_empty() {
            vec![Line::from(Span::styled(
                format!(" No {} players added yet", team.display_name().to_lowercase()),
                Style::default().fg(theme.muted),
            ))]
        } else {
            members.iter().map(|p| member_line(p, theme, width)).collect()
        };

        frame.render_widget(Paragraph::new(lines), area);
    }
}

pub struct StreamersWidget;

impl StreamersWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let streamers = streamers_by_name(&app.snapshot.streamers);
        let width = area.width as usize;

        let lines: Vec<Line> = if streamers.is_empty() {
            vec![Line::from(Span::styled(
                " No streamers added yet",
                Style::default().fg(theme.muted),
            ))]
        } else {
            streamers
                .iter()
                .map(|s| {
                    let twitch = s.twitch.as_ref().map(|u| u.to_string()).unwrap_or_default();
                    Line::from(vec![
                        Span::styled(
                            format!(" {:<16}", fit(&s.name, 16)),
                            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("{:<20}", fit(s.display_title(), 20)),
                            Style::default().fg(theme.muted),
                        ),
                        Span::styled(fit(&twitch, width.saturating_sub(38)), Style::default().fg(theme.accent)),
                    ])
                })
                .collect()
        };

        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn member_line<'a>(p: &Player, theme: &Theme, width: usize) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!(" {:<16}", fit(&p.ign, 16)),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            fit(&format!("{} · {}", p.full_name, p.role), width.saturating_sub(18)),
            Style::default().fg(theme.fg0),
        ),
    ])
}

/// Team page roster with its players/coaches switch
pub struct TeamRosterWidget;

impl TeamRosterWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let width = area.width as usize;

        let mut tabs = vec![Span::raw(" ")];
        for tab in [RosterTab::Players, RosterTab::Coaches] {
            let style = if tab == app.roster_tab {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.muted)
            };
            tabs.push(Span::styled(tab.label(), style));
            tabs.push(Span::raw("  "));
        }
        let mut lines = vec![Line::from(tabs)];

        let members = app.team_members();
        if members.is_empty() {
            let what = match app.roster_tab {
                RosterTab::Players => "players",
                RosterTab::Coaches => "coaches",
            };
            lines.push(Line::from(Span::styled(
                format!(" No {} added yet", what),
                Style::default().fg(theme.muted),
            )));
        } else {
            lines.extend(members.iter().map(|p| member_line(p, theme, width)));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Every player of every team, two rows each
pub struct PlayerListWidget;

impl PlayerListWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let width = area.width as usize;
        let players = players_by_name(&app.snapshot.players);

        let lines: Vec<Line> = if players.is_empty() {
            vec![Line::from(Span::styled(" No players added yet", Style::default().fg(theme.muted)))]
        } else {
            players
                .iter()
                .flat_map(|p| {
                    let detail = if p.bio.is_empty() {
                        p.team.display_name().to_string()
                    } else {
                        format!("{} · {}", p.team.display_name(), p.bio)
                    };
                    [
                        member_line(p, theme, width),
                        Line::from(Span::styled(
                            format!(" {:<16}{}", "", fit(&detail, width.saturating_sub(18))),
                            Style::default().fg(theme.muted),
                        )),
                    ]
                })
                .collect()
        };

        frame.render_widget(Paragraph::new(lines), area);
    }
}
