use ratatui::{layout::Rect, Frame};

use super::{
    HeroWidget, MatchCarouselWidget, MatchListWidget, NextMatchWidget, PlayerListWidget,
    RecentResultsWidget, RosterWidget, SectionTitleWidget, StreamersWidget, TeamRosterWidget,
};
use crate::app::{App, RevealKey, SectionKind};

pub struct PageWidget;

impl PageWidget {
    /// Draw the sections of the current screen that fall inside `area` at
    /// the current scroll. Sections scrolled past the top are skipped.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        for section in app.sections() {
            let Some(row) = section.top.checked_sub(app.scroll) else {
                continue;
            };
            if row >= area.height {
                break;
            }
            let rect = Rect::new(
                area.x,
                area.y + row,
                area.width,
                section.height.min(area.height - row),
            );

            match section.kind {
                SectionKind::Hero => HeroWidget::render(frame, rect, app),
                SectionKind::Heading(h) => {
                    SectionTitleWidget::render(frame, rect, app, RevealKey::Heading(h))
                }
                SectionKind::Carousel => MatchCarouselWidget::render(frame, rect, app),
                SectionKind::Results => RecentResultsWidget::render(frame, rect, app),
                SectionKind::Roster(team) => RosterWidget::render(frame, rect, app, team),
                SectionKind::Streamers => StreamersWidget::render(frame, rect, app),
                SectionKind::MatchList => MatchListWidget::render(frame, rect, app),
                SectionKind::NextMatch => NextMatchWidget::render(frame, rect, app),
                SectionKind::TeamRoster => TeamRosterWidget::render(frame, rect, app),
                SectionKind::PlayerList => PlayerListWidget::render(frame, rect, app),
            }
        }
    }
}
