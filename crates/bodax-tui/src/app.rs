use std::rc::Rc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use url::Url;

use bodax_core::carousel::CarouselController;
use bodax_core::clock::Millis;
use bodax_core::geometry::{Rect, ViewportSize};
use bodax_core::models::{Match, Player, Team};
use bodax_core::prefs::AppContext;
use bodax_core::reveal::{CursorState, RevealEngine};
use bodax_core::roster;
use bodax_core::schedule::{self, FilteredPage, MatchFilter, RecentFilter};
use bodax_core::source::Snapshot;
use bodax_core::viewport::{ElementHandle, Viewport, ViewportContainer};

use crate::input::Action;
use crate::theme::Theme;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 2.0;
/// Columns kept free on each side of the carousel strip
pub const CAROUSEL_GUTTER_COLS: u16 = 2;
pub const CARD_HEIGHT: u16 = 8;
/// Rows taken by the tab bar and the status bar
const CHROME_ROWS: u16 = 2;
const HERO_HEIGHT: u16 = 4;
const HEADING_HEIGHT: u16 = 2;
const RESULT_ROW_HEIGHT: u16 = 2;
const NEXT_MATCH_HEIGHT: u16 = 5;
const PLAYER_ROW_HEIGHT: u16 = 2;
const SCROLL_STEP: u16 = 3;

/// Top-level page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Schedule,
    Matches,
    Team,
    Players,
    Streamers,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Home,
        Screen::Schedule,
        Screen::Matches,
        Screen::Team,
        Screen::Players,
        Screen::Streamers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Schedule => "Schedule",
            Screen::Matches => "Matches",
            Screen::Team => "Team",
            Screen::Players => "Players",
            Screen::Streamers => "Streamers",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which half of a team roster the team page lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RosterTab {
    #[default]
    Players,
    Coaches,
}

impl RosterTab {
    pub fn label(&self) -> &'static str {
        match self {
            RosterTab::Players => "PLAYERS",
            RosterTab::Coaches => "COACHES",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            RosterTab::Players => RosterTab::Coaches,
            RosterTab::Coaches => RosterTab::Players,
        }
    }
}

fn team_tagline(team: Team) -> &'static str {
    match team {
        Team::Main => "Competing at the Highest Level",
        Team::Vantage => "Strategic Excellence & Tactical Innovation",
        Team::GameChangers => "Breaking Barriers, Changing the Game",
    }
}

/// Section heading typed out when it scrolls into view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Upcoming,
    Recent,
    Team(Team),
    Roster,
    Streamers,
}

impl Heading {
    pub fn text(&self) -> &'static str {
        match self {
            Heading::Upcoming => "UPCOMING GAMES",
            Heading::Recent => "RECENT RESULTS",
            Heading::Team(team) => team.display_name(),
            Heading::Roster => "OUR ROSTER",
            Heading::Streamers => "STREAMERS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    Heading(Heading),
    Carousel,
    Results,
    Roster(Team),
    Streamers,
    MatchList,
    /// Team page: the team's next match and its countdown
    NextMatch,
    /// Team page: players or coaches of the selected team
    TeamRoster,
    PlayerList,
}

/// A block of the page, positioned in page rows (before scrolling)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub top: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKey {
    Title,
    Slogan,
    Heading(Heading),
}

/// A typed-out line and the element it is drawn into
pub struct RevealSlot {
    pub key: RevealKey,
    pub engine: RevealEngine,
    pub element: ElementHandle,
}

/// Application state
pub struct App {
    /// Configuration and persisted preferences
    pub ctx: AppContext,
    pub theme: Theme,
    pub snapshot: Snapshot,
    /// Played matches, latest first
    pub recent: Vec<Match>,
    pub screen: Screen,
    pub viewport: Viewport,
    /// Upcoming matches
    pub carousel: CarouselController<Match>,
    pub reveals: Vec<RevealSlot>,
    pub recent_filter: RecentFilter,
    pub match_filter: MatchFilter,
    /// Team shown on the team page
    pub team: Team,
    pub roster_tab: RosterTab,
    /// Page scroll in rows
    pub scroll: u16,
    pub cols: u16,
    pub rows: u16,
    /// Clock readings of the last tick
    pub now_ms: Millis,
    pub now: DateTime<Utc>,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub show_consent_banner: bool,
    /// A snapshot reload is in flight
    pub reloading: bool,
}

impl App {
    pub fn new(ctx: AppContext, theme: Theme, cols: u16, rows: u16, now_ms: Millis, now: DateTime<Utc>) -> Self {
        let config = ctx.config().clone();
        let cell_width_px = config.ui.cell_width_px;
        let viewport = Viewport::new(viewport_size(cols, rows, cell_width_px));

        let mut carousel = CarouselController::new(&config.ui.carousel);
        let container = ViewportContainer::new(
            viewport.clone(),
            f64::from(CAROUSEL_GUTTER_COLS) * cell_width_px,
        );
        carousel.initialize(Vec::new(), Rc::new(container), &viewport);

        let show_consent_banner = !ctx.consent().given;
        let mut app = Self {
            ctx,
            theme,
            snapshot: Snapshot::default(),
            recent: Vec::new(),
            screen: Screen::Schedule,
            viewport,
            carousel,
            reveals: Vec::new(),
            recent_filter: RecentFilter::with_limit(config.schedule.default_limit),
            match_filter: MatchFilter::default(),
            team: Team::Vantage,
            roster_tab: RosterTab::default(),
            scroll: 0,
            cols,
            rows,
            now_ms,
            now,
            should_quit: false,
            status_message: None,
            show_consent_banner,
            reloading: false,
        };
        app.enter_screen(Screen::Schedule, now_ms);
        app
    }

    pub fn cell_width_px(&self) -> f64 {
        self.ctx.config().ui.cell_width_px
    }

    /// Replace the records on display
    pub fn set_snapshot(&mut self, snapshot: Snapshot) {
        let (upcoming, recent) = schedule::split_schedule(&snapshot.matches, self.now);
        info!(
            upcoming = upcoming.len(),
            recent = recent.len(),
            players = snapshot.players.len(),
            "Snapshot applied"
        );
        self.carousel.replace_items(upcoming);
        self.recent = recent;
        self.snapshot = snapshot;

        // drop filter values that no longer match anything
        if let Some(year) = self.recent_filter.year {
            if !schedule::available_years(&self.recent).contains(&year) {
                self.recent_filter.year = None;
            }
        }
        if let Some(month) = self.recent_filter.month {
            if !schedule::available_months(&self.recent).contains(&month) {
                self.recent_filter.month = None;
            }
        }
        self.clamp_scroll();
    }

    /// Terminal resized: feed the new pixel size to the viewport
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.viewport
            .resize(viewport_size(cols, rows, self.cell_width_px()));
        self.clamp_scroll();
        self.place_elements(self.now_ms);
    }

    /// Advance animations to the given clock readings
    pub fn tick(&mut self, now_ms: Millis, now: DateTime<Utc>) {
        self.now_ms = now_ms;
        self.now = now;
        self.place_elements(now_ms);
        for slot in &mut self.reveals {
            slot.engine.poll(now_ms);
        }
        self.carousel.update(now_ms);
    }

    pub fn is_animating(&self) -> bool {
        self.carousel.needs_update() || self.reveals.iter().any(|slot| slot.engine.needs_update())
    }

    /// Switch pages. Reveals of the old page are dropped, which disconnects
    /// their observers; the new page starts its own.
    pub fn enter_screen(&mut self, screen: Screen, now_ms: Millis) {
        debug!(screen = screen.label(), "Entering screen");
        self.screen = screen;
        self.scroll = 0;

        let reveal = self.ctx.config().ui.reveal.clone();
        let keys = self.reveal_keys();
        self.reveals = keys
            .into_iter()
            .map(|key| {
                let options = match key {
                    RevealKey::Title => reveal.title,
                    RevealKey::Slogan => reveal.slogan,
                    RevealKey::Heading(_) => reveal.section,
                };
                RevealSlot {
                    key,
                    engine: RevealEngine::new(self.reveal_text(key), options),
                    element: ElementHandle::default(),
                }
            })
            .collect();

        self.place_elements(now_ms);
        let viewport = self.viewport.size();
        for slot in &mut self.reveals {
            slot.engine.start(now_ms, Some(&slot.element), viewport);
        }
    }

    fn reveal_keys(&self) -> Vec<RevealKey> {
        let mut keys = vec![RevealKey::Title];
        if self.screen == Screen::Home {
            keys.push(RevealKey::Slogan);
        }
        keys.extend(self.sections().into_iter().filter_map(|s| match s.kind {
            SectionKind::Heading(h) => Some(RevealKey::Heading(h)),
            _ => None,
        }));
        keys
    }

    fn reveal_text(&self, key: RevealKey) -> String {
        match key {
            RevealKey::Title => self.title().to_string(),
            RevealKey::Slogan => self.ctx.config().general.slogan.clone(),
            RevealKey::Heading(h) => h.text().to_string(),
        }
    }

    pub fn title(&self) -> &str {
        match self.screen {
            Screen::Home => &self.ctx.config().general.org_name,
            Screen::Schedule => "GAME SCHEDULE",
            Screen::Matches => "MATCHES",
            Screen::Team => self.team.display_name(),
            Screen::Players => "OUR PLAYERS",
            Screen::Streamers => "OUR STREAMERS",
        }
    }

    /// Static line under the title on pages without a typed slogan
    pub fn tagline(&self) -> &'static str {
        match self.screen {
            Screen::Home => "",
            Screen::Schedule => "Upcoming Matches & Recent Results",
            Screen::Matches => "Every match, every result",
            Screen::Team => team_tagline(self.team),
            Screen::Players => "The people behind every round",
            Screen::Streamers => "Content Creators & Community Leaders",
        }
    }

    pub fn reveal(&self, key: RevealKey) -> Option<&RevealSlot> {
        self.reveals.iter().find(|slot| slot.key == key)
    }

    /// Revealed text and cursor for a slot
    pub fn revealed(&self, key: RevealKey) -> (String, CursorState) {
        match self.reveal(key) {
            Some(slot) => (
                slot.engine.revealed().to_string(),
                slot.engine.cursor(self.now_ms),
            ),
            None => (String::new(), CursorState::Hidden),
        }
    }

    /// Page layout of the current screen in page rows
    pub fn sections(&self) -> Vec<Section> {
        let limit = self.ctx.config().schedule.home_roster_limit;
        let mut kinds: Vec<(SectionKind, u16)> = vec![(SectionKind::Hero, HERO_HEIGHT)];
        match self.screen {
            Screen::Home => {
                for team in Team::ALL {
                    let members = roster::roster(&self.snapshot.players, team, Some(limit)).len();
                    kinds.push((SectionKind::Heading(Heading::Team(team)), HEADING_HEIGHT));
                    kinds.push((SectionKind::Roster(team), members.max(1) as u16 + 1));
                }
                kinds.push((SectionKind::Heading(Heading::Streamers), HEADING_HEIGHT));
                kinds.push((SectionKind::Streamers, self.snapshot.streamers.len().max(1) as u16 + 1));
            }
            Screen::Schedule => {
                kinds.push((SectionKind::Heading(Heading::Upcoming), HEADING_HEIGHT));
                kinds.push((SectionKind::Carousel, CARD_HEIGHT + 3));
                kinds.push((SectionKind::Heading(Heading::Recent), HEADING_HEIGHT));
                let shown = self.recent_page().shown.len().max(1) as u16;
                kinds.push((SectionKind::Results, 2 + shown * RESULT_ROW_HEIGHT));
            }
            Screen::Matches => {
                let shown = self.filtered_matches().len().max(1) as u16;
                kinds.push((SectionKind::MatchList, 2 + shown * RESULT_ROW_HEIGHT));
            }
            Screen::Team => {
                kinds.push((SectionKind::NextMatch, NEXT_MATCH_HEIGHT));
                kinds.push((SectionKind::Heading(Heading::Roster), HEADING_HEIGHT));
                let members = self.team_members().len().max(1) as u16;
                kinds.push((SectionKind::TeamRoster, members + 2));
            }
            Screen::Players => {
                let players = self.snapshot.players.len().max(1) as u16;
                kinds.push((SectionKind::PlayerList, players * PLAYER_ROW_HEIGHT + 1));
            }
            Screen::Streamers => {
                kinds.push((SectionKind::Streamers, self.snapshot.streamers.len().max(1) as u16 + 1));
            }
        }

        let mut top = 0u16;
        kinds
            .into_iter()
            .map(|(kind, height)| {
                let section = Section { kind, top, height };
                top = top.saturating_add(height);
                section
            })
            .collect()
    }

    pub fn page_height(&self) -> u16 {
        self.sections()
            .last()
            .map(|s| s.top.saturating_add(s.height))
            .unwrap_or(0)
    }

    /// Rows available to the page between the tab bar and the status bar
    pub fn content_rows(&self) -> u16 {
        self.rows.saturating_sub(CHROME_ROWS)
    }

    pub fn max_scroll(&self) -> u16 {
        self.page_height().saturating_sub(self.content_rows())
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Move every reveal host to where the page currently draws it
    fn place_elements(&self, now_ms: Millis) {
        let cell_w = self.cell_width_px();
        let cell_h = cell_w * CELL_ASPECT;
        let width = f64::from(self.cols) * cell_w;
        let viewport = ViewportSize::new(width, f64::from(self.content_rows()) * cell_h);

        for section in self.sections() {
            let rows: Vec<(RevealKey, u16)> = match section.kind {
                SectionKind::Hero => vec![(RevealKey::Title, section.top), (RevealKey::Slogan, section.top + 1)],
                SectionKind::Heading(h) => vec![(RevealKey::Heading(h), section.top)],
                _ => continue,
            };
            for (key, row) in rows {
                if let Some(slot) = self.reveal(key) {
                    let y = (f64::from(row) - f64::from(self.scroll)) * cell_h;
                    slot.element.place(Rect::new(0.0, y, width, cell_h), viewport, now_ms);
                }
            }
        }
    }

    /// Recent results after the year/month/day filters and the page limit
    pub fn recent_page(&self) -> FilteredPage<'_> {
        self.recent_filter.apply(&self.recent, self.now)
    }

    /// Full match list under the all/upcoming/past filter, latest first
    pub fn filtered_matches(&self) -> Vec<&Match> {
        let mut matches = self.match_filter.apply(&self.snapshot.matches, self.now);
        matches.sort_by(|a, b| b.date.cmp(&a.date));
        matches
    }

    /// Players or coaches of the team page's team, per the active tab
    pub fn team_members(&self) -> Vec<&Player> {
        match self.roster_tab {
            RosterTab::Players => roster::roster(&self.snapshot.players, self.team, None),
            RosterTab::Coaches => roster::coaches(&self.snapshot.players, self.team),
        }
    }

    /// Soonest upcoming match of the team page's team
    pub fn next_team_match(&self) -> Option<&Match> {
        schedule::next_match(&self.snapshot.matches, self.now, Some(self.team))
    }

    pub fn apply(&mut self, action: Action) {
        let now_ms = self.now_ms;
        self.status_message = None;
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextScreen => self.enter_screen(self.screen.next(), now_ms),
            Action::PrevScreen => self.enter_screen(self.screen.previous(), now_ms),
            Action::CarouselNext => self.carousel.next(),
            Action::CarouselPrev => self.carousel.previous(),
            Action::CarouselGoTo(index) => self.carousel.go_to(index),
            Action::ScrollDown => {
                self.scroll = self.scroll.saturating_add(SCROLL_STEP).min(self.max_scroll());
                self.place_elements(now_ms);
            }
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(SCROLL_STEP);
                self.place_elements(now_ms);
            }
            Action::CycleMatchFilter => self.match_filter = self.match_filter.next(),
            Action::CycleTeam => {
                let next = (Team::ALL.iter().position(|t| *t == self.team).unwrap_or(0) + 1) % Team::ALL.len();
                self.team = Team::ALL[next];
                // the title and roster change, so the page types itself out again
                self.enter_screen(Screen::Team, now_ms);
            }
            Action::ToggleRosterTab => self.roster_tab = self.roster_tab.toggle(),
            Action::CycleYear => {
                let years = schedule::available_years(&self.recent);
                self.recent_filter.cycle_year(&years);
            }
            Action::CycleMonth => {
                let months = schedule::available_months(&self.recent);
                self.recent_filter.cycle_month(&months);
            }
            Action::CycleDays => self.recent_filter.cycle_last_days(),
            Action::CycleLimit => self.recent_filter.cycle_limit(),
            Action::ResetFilters => self.recent_filter.reset(),
            Action::OpenStream => {
                let link = self.carousel.active_item().and_then(|m| m.stream_link.clone());
                self.open_link(link, "stream");
            }
            Action::OpenVlr => {
                let link = self.carousel.active_item().and_then(|m| m.vlr_link.clone());
                self.open_link(link, "VLR");
            }
            Action::AcceptConsent => self.answer_consent(true),
            Action::DeclineConsent => self.answer_consent(false),
            Action::ResetConsent => {
                if let Err(e) = self.ctx.reset_consent() {
                    warn!("Failed to reset consent: {}", e);
                    self.status_message = Some(format!("Error: {}", e));
                } else {
                    self.show_consent_banner = true;
                }
            }
            // handled by the event loop, which owns the source
            Action::Reload | Action::None => {}
        }
        self.clamp_scroll();
    }

    fn answer_consent(&mut self, accept_all: bool) {
        match self.ctx.update_consent(accept_all, accept_all) {
            Ok(()) => {
                self.show_consent_banner = false;
                self.status_message = Some(if accept_all {
                    "All cookies accepted".to_string()
                } else {
                    "Essential cookies only".to_string()
                });
            }
            Err(e) => {
                warn!("Failed to store consent: {}", e);
                self.status_message = Some(format!("Error: {}", e));
            }
        }
    }

    fn open_link(&mut self, link: Option<Url>, what: &str) {
        let Some(url) = link else {
            self.status_message = Some(format!("No {} link for this match", what));
            return;
        };
        match open::that(url.as_str()) {
            Ok(()) => self.status_message = Some(format!("Opened {}", url)),
            Err(e) => {
                warn!("Failed to open {}: {}", url, e);
                self.status_message = Some(format!("Failed to open {}: {}", url, e));
            }
        }
    }
}

/// Map a terminal size onto the pixel space the breakpoint table uses
pub fn viewport_size(cols: u16, rows: u16, cell_width_px: f64) -> ViewportSize {
    ViewportSize::new(
        f64::from(cols) * cell_width_px,
        f64::from(rows) * cell_width_px * CELL_ASPECT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodax_core::geometry::BreakpointTier;
    use bodax_core::prefs::MemoryPreferenceStore;
    use bodax_core::reveal::RevealPhase;
    use bodax_core::AppConfig;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 10, 12, 0, 0).unwrap()
    }

    fn game(id: &str, days: i64) -> Match {
        Match {
            id: id.to_string(),
            opponent: format!("Team {}", id),
            tournament: "Pro League".to_string(),
            date: Some(now() + Duration::days(days)),
            our_score: 2,
            opponent_score: 1,
            stream_link: None,
            vlr_link: None,
            caster: None,
            opponent_logo: None,
            team: None,
        }
    }

    fn app(cols: u16, rows: u16) -> App {
        let ctx = AppContext::new(AppConfig::default(), Box::new(MemoryPreferenceStore::new())).unwrap();
        let mut app = App::new(ctx, Theme::default(), cols, rows, 0, now());
        app.set_snapshot(Snapshot {
            matches: vec![
                game("a", 1),
                game("b", 2),
                game("c", 3),
                game("d", 4),
                game("e", -1),
                game("f", -20),
            ],
            ..Default::default()
        });
        app
    }

    #[test]
    fn test_snapshot_split_into_carousel_and_results() {
        let app = app(160, 50);
        assert_eq!(app.carousel.item_count(), 4);
        assert_eq!(app.recent.len(), 2);
        assert_eq!(app.carousel.tier(), Some(BreakpointTier::Desktop));
    }

    #[test]
    fn test_terminal_resize_changes_tier_not_position() {
        let mut app = app(160, 50);
        app.apply(Action::CarouselNext);
        app.apply(Action::CarouselNext);
        app.resize(70, 50);
        assert_eq!(app.carousel.current_index(), 2);
        assert_eq!(app.carousel.tier(), Some(BreakpointTier::Phone));
    }

    #[test]
    fn test_title_types_out_on_ticks() {
        let mut app = app(160, 50);
        // title: 100 ms initial delay, 50 ms per char
        app.tick(99, now());
        assert_eq!(app.revealed(RevealKey::Title).0, "");
        app.tick(150, now());
        assert_eq!(app.revealed(RevealKey::Title).0, "G");
        app.tick(10_000, now());
        assert_eq!(app.revealed(RevealKey::Title).0, "GAME SCHEDULE");
    }

    #[test]
    fn test_offscreen_heading_waits_for_scroll() {
        // short terminal: the recent results heading starts below the fold
        let mut app = app(160, 12);
        let recent = RevealKey::Heading(Heading::Recent);
        app.tick(5_000, now());
        let phase = app.reveal(recent).map(|s| s.engine.phase());
        assert_eq!(phase, Some(RevealPhase::Idle));

        while app.scroll < app.max_scroll() {
            app.apply(Action::ScrollDown);
        }
        app.tick(5_001, now());
        app.tick(60_000, now());
        assert_eq!(app.revealed(recent).0, "RECENT RESULTS");
    }

    #[test]
    fn test_screen_switch_replaces_reveals() {
        let mut app = app(160, 50);
        app.apply(Action::NextScreen);
        assert_eq!(app.screen, Screen::Matches);
        assert!(app.reveal(RevealKey::Heading(Heading::Upcoming)).is_none());
        assert_eq!(app.scroll, 0);

        app.apply(Action::PrevScreen);
        app.apply(Action::PrevScreen);
        assert_eq!(app.screen, Screen::Home);
        assert!(app.reveal(RevealKey::Slogan).is_some());
        assert!(app.reveal(RevealKey::Heading(Heading::Team(Team::Vantage))).is_some());
    }

    #[test]
    fn test_consent_banner() {
        let mut app = app(160, 50);
        assert!(app.show_consent_banner);
        app.apply(Action::DeclineConsent);
        assert!(!app.show_consent_banner);
        assert!(app.ctx.consent().given);
        assert!(!app.ctx.consent().analytics);

        app.apply(Action::ResetConsent);
        assert!(app.show_consent_banner);
    }

    #[test]
    fn test_filters_and_missing_links() {
        let mut app = app(160, 50);
        app.apply(Action::CycleMatchFilter);
        assert_eq!(app.filtered_matches().len(), 4);

        app.apply(Action::OpenStream);
        assert_eq!(
            app.status_message.as_deref(),
            Some("No stream link for this match")
        );
    }

    fn member(id: &str, role: &str, team: Team) -> Player {
        Player {
            id: id.to_string(),
            full_name: id.to_string(),
            ign: id.to_string(),
            role: role.to_string(),
            team,
            bio: String::new(),
            photo_url: None,
            socials: Default::default(),
        }
    }

    #[test]
    fn test_screen_order_wraps() {
        assert_eq!(Screen::Streamers.next(), Screen::Home);
        assert_eq!(Screen::Home.previous(), Screen::Streamers);
        assert_eq!(Screen::Matches.next(), Screen::Team);
    }

    #[test]
    fn test_team_page_roster_tabs_and_next_match() {
        let mut app = app(160, 50);
        let mut snapshot = app.snapshot.clone();
        snapshot.players = vec![
            member("duelist", "Duelist", Team::Vantage),
            member("sentinel", "Sentinel", Team::Vantage),
            member("coach", "Head Coach", Team::Vantage),
            member("main", "Duelist", Team::Main),
        ];
        let mut vantage_game = game("v", 2);
        vantage_game.team = Some(Team::Vantage);
        snapshot.matches.push(vantage_game);
        app.set_snapshot(snapshot);

        app.enter_screen(Screen::Team, 0);
        assert_eq!(app.title(), "TEAM VANTAGE");
        assert_eq!(app.tagline(), "Strategic Excellence & Tactical Innovation");
        assert!(app.reveal(RevealKey::Heading(Heading::Roster)).is_some());
        assert_eq!(app.team_members().len(), 2);
        assert_eq!(app.next_team_match().map(|m| m.id.as_str()), Some("v"));

        app.apply(Action::ToggleRosterTab);
        let coaches: Vec<&str> = app.team_members().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(coaches, vec!["coach"]);

        // Vantage -> Game Changers: no matches, no coaches
        app.tick(10_000, now());
        app.apply(Action::CycleTeam);
        assert_eq!(app.team, Team::GameChangers);
        assert!(app.next_team_match().is_none());
        assert!(app.team_members().is_empty());
        // the new title types out from the start
        assert_eq!(app.revealed(RevealKey::Title).0, "");
    }

    #[test]
    fn test_players_and_streamers_pages() {
        let mut app = app(160, 50);
        app.enter_screen(Screen::Players, 0);
        assert_eq!(app.title(), "OUR PLAYERS");
        assert!(app.sections().iter().any(|s| s.kind == SectionKind::PlayerList));

        app.enter_screen(Screen::Streamers, 0);
        assert_eq!(app.title(), "OUR STREAMERS");
        assert_eq!(app.tagline(), "Content Creators & Community Leaders");
        assert!(app.sections().iter().any(|s| s.kind == SectionKind::Streamers));
    }
}
