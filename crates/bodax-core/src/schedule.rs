//! Upcoming/recent split and the result filters of the schedule screen.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::error::Error;
use crate::models::{Match, Team};

/// Page sizes offered for recent results
pub const LIMIT_OPTIONS: [usize; 4] = [3, 6, 9, 12];
/// "Last N days" choices offered for recent results
pub const LAST_DAYS_OPTIONS: [u32; 3] = [7, 30, 90];

/// Split into upcoming (after `now`, soonest first) and recent (at or before
/// `now`, latest first). Undated matches belong to neither.
pub fn split_schedule(matches: &[Match], now: DateTime<Utc>) -> (Vec<Match>, Vec<Match>) {
    let mut upcoming: Vec<Match> = matches
        .iter()
        .filter(|m| m.date.is_some_and(|d| d > now))
        .cloned()
        .collect();
    let mut recent: Vec<Match> = matches
        .iter()
        .filter(|m| m.date.is_some_and(|d| d <= now))
        .cloned()
        .collect();

    upcoming.sort_by_key(|m| m.date);
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    (upcoming, recent)
}

/// Soonest match after `now`, optionally only those played by `team`
pub fn next_match(matches: &[Match], now: DateTime<Utc>, team: Option<Team>) -> Option<&Match> {
    matches
        .iter()
        .filter(|m| m.date.is_some_and(|d| d > now))
        .filter(|m| team.is_none() || m.team == team)
        .min_by_key(|m| m.date)
}

/// Top-level filter of the matches list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchFilter {
    #[default]
    All,
    Upcoming,
    Past,
}

impl MatchFilter {
    pub fn matches(&self, m: &Match, now: DateTime<Utc>) -> bool {
        match self {
            MatchFilter::All => true,
            MatchFilter::Upcoming => m.date.is_some_and(|d| d > now),
            MatchFilter::Past => m.date.is_some_and(|d| d <= now),
        }
    }

    /// Apply to a list, keeping its order
    pub fn apply<'a>(&self, matches: &'a [Match], now: DateTime<Utc>) -> Vec<&'a Match> {
        matches.iter().filter(|m| self.matches(m, now)).collect()
    }

    pub fn next(&self) -> Self {
        match self {
            MatchFilter::All => MatchFilter::Upcoming,
            MatchFilter::Upcoming => MatchFilter::Past,
            MatchFilter::Past => MatchFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchFilter::All => "All Matches",
            MatchFilter::Upcoming => "Upcoming",
            MatchFilter::Past => "Past Results",
        }
    }
}

impl fmt::Display for MatchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchFilter::All => "all",
            MatchFilter::Upcoming => "upcoming",
            MatchFilter::Past => "past",
        })
    }
}

impl FromStr for MatchFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(MatchFilter::All),
            "upcoming" => Ok(MatchFilter::Upcoming),
            "past" => Ok(MatchFilter::Past),
            other => Err(Error::Other(format!("Unknown match filter: {}", other))),
        }
    }
}

/// Filters over the recent results. `None` means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentFilter {
    pub year: Option<i32>,
    /// 1-based month
    pub month: Option<u32>,
    pub last_days: Option<u32>,
    pub limit: usize,
}

impl Default for RecentFilter {
    fn default() -> Self {
        Self::with_limit(6)
    }
}

/// One page of filtered results plus the size before the limit
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredPage<'a> {
    pub shown: Vec<&'a Match>,
    pub total: usize,
}

impl FilteredPage<'_> {
    /// "Showing X of Y matches"
    pub fn summary(&self) -> String {
        format!("Showing {} of {} matches", self.shown.len(), self.total)
    }
}

impl RecentFilter {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            year: None,
            month: None,
            last_days: None,
            limit,
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.last_days.is_some()
    }

    fn keeps(&self, m: &Match, now: DateTime<Utc>) -> bool {
        let Some(date) = m.date else {
            return !self.is_filtered();
        };
        if self.year.is_some_and(|y| date.year() != y) {
            return false;
        }
        if self.month.is_some_and(|mo| date.month() != mo) {
            return false;
        }
        // a window reaching past the earliest representable date has no cutoff
        let cutoff = self
            .last_days
            .and_then(|days| Duration::try_days(i64::from(days)))
            .and_then(|window| now.checked_sub_signed(window));
        if cutoff.is_some_and(|cutoff| date < cutoff) {
            return false;
        }
        true
    }

    /// Apply to recent results (already latest first)
    pub fn apply<'a>(&self, recent: &'a [Match], now: DateTime<Utc>) -> FilteredPage<'a> {
        let filtered: Vec<&Match> = recent.iter().filter(|m| self.keeps(m, now)).collect();
        let total = filtered.len();
        FilteredPage {
            shown: filtered.into_iter().take(self.limit).collect(),
            total,
        }
    }

    /// Step through the offered page sizes, wrapping around
    pub fn cycle_limit(&mut self) {
        let pos = LIMIT_OPTIONS.iter().position(|&l| l == self.limit);
        self.limit = match pos {
            Some(i) => LIMIT_OPTIONS[(i + 1) % LIMIT_OPTIONS.len()],
            None => LIMIT_OPTIONS[0],
        };
    }

    /// all → 7 → 30 → 90 → all
    pub fn cycle_last_days(&mut self) {
        self.last_days = match self.last_days {
            None => Some(LAST_DAYS_OPTIONS[0]),
            Some(d) => LAST_DAYS_OPTIONS
                .iter()
                .position(|&o| o == d)
                .and_then(|i| LAST_DAYS_OPTIONS.get(i + 1).copied()),
        };
    }

    /// Step to the next value in `options`, passing through "all" at the end
    pub fn cycle_year(&mut self, options: &[i32]) {
        self.year = cycle_option(self.year, options);
    }

    pub fn cycle_month(&mut self, options: &[u32]) {
        self.month = cycle_option(self.month, options);
    }

    pub fn reset(&mut self) {
        *self = Self::with_limit(self.limit);
    }
}

fn cycle_option<T: Copy + PartialEq>(current: Option<T>, options: &[T]) -> Option<T> {
    match current {
        None => options.first().copied(),
        Some(value) => options
            .iter()
            .position(|&o| o == value)
            .and_then(|i| options.get(i + 1).copied()),
    }
}

/// Years with results, latest first
pub fn available_years(recent: &[Match]) -> Vec<i32> {
    let years: BTreeSet<i32> = recent.iter().filter_map(|m| m.date).map(|d| d.year()).collect();
    years.into_iter().rev().collect()
}

/// Months (1-12) with results, ascending
pub fn available_months(recent: &[Match]) -> Vec<u32> {
    let months: BTreeSet<u32> = recent.iter().filter_map(|m| m.date).map(|d| d.month()).collect();
    months.into_iter().collect()
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, 19, 0, 0).unwrap()
    }

    fn game(id: &str, date: Option<DateTime<Utc>>) -> Match {
        Match {
            id: id.to_string(),
            opponent: format!("Opponent {}", id),
            tournament: "Pro League".to_string(),
            date,
            our_score: 0,
            opponent_score: 0,
            stream_link: None,
            vlr_link: None,
            caster: None,
            opponent_logo: None,
            team: None,
        }
    }

    fn fixture() -> (Vec<Match>, DateTime<Utc>) {
        let now = at(2025, 2, 10);
        let matches = vec![
            game("jan28", Some(at(2025, 1, 28))),
            game("feb20", Some(at(2025, 2, 20))),
            game("dec05", Some(at(2024, 12, 5))),
            game("feb15", Some(at(2025, 2, 15))),
            game("tbd", None),
            game("now", Some(now)),
            game("jan22", Some(at(2025, 1, 22))),
        ];
        (matches, now)
    }

    fn ids(matches: &[Match]) -> Vec<&str> {
        matches.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_split_orders_both_sides() {
        let (matches, now) = fixture();
        let (upcoming, recent) = split_schedule(&matches, now);
        assert_eq!(ids(&upcoming), vec!["feb15", "feb20"]);
        assert_eq!(ids(&recent), vec!["now", "jan28", "jan22", "dec05"]);
    }

    #[test]
    fn test_match_filter() {
        let (matches, now) = fixture();
        assert_eq!(MatchFilter::All.apply(&matches, now).len(), 7);
        assert_eq!(MatchFilter::Upcoming.apply(&matches, now).len(), 2);
        assert_eq!(MatchFilter::Past.apply(&matches, now).len(), 4);
        assert_eq!("PAST".parse::<MatchFilter>().unwrap(), MatchFilter::Past);
        assert!("later".parse::<MatchFilter>().is_err());
    }

    #[test]
    fn test_recent_filter_year_month_days() {
        let (matches, now) = fixture();
        let (_, recent) = split_schedule(&matches, now);

        let mut filter = RecentFilter::default();
        filter.year = Some(2025);
        assert_eq!(filter.apply(&recent, now).total, 3);

        filter.month = Some(1);
        let page = filter.apply(&recent, now);
        let shown: Vec<_> = page.shown.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(shown, vec!["jan28", "jan22"]);

        let mut filter = RecentFilter::default();
        filter.last_days = Some(30);
        assert_eq!(filter.apply(&recent, now).total, 3);
        filter.last_days = Some(7);
        assert_eq!(filter.apply(&recent, now).total, 1);
    }

    #[test]
    fn test_huge_day_window_keeps_everything() {
        let (matches, now) = fixture();
        let (_, recent) = split_schedule(&matches, now);
        let filter = RecentFilter {
            last_days: Some(u32::MAX),
            ..RecentFilter::default()
        };
        assert_eq!(filter.apply(&recent, now).total, 4);
    }

    #[test]
    fn test_next_match_by_team() {
        let (mut matches, now) = fixture();
        for m in &mut matches {
            if m.id == "feb20" {
                m.team = Some(Team::Vantage);
            }
        }
        assert_eq!(next_match(&matches, now, None).map(|m| m.id.as_str()), Some("feb15"));
        assert_eq!(
            next_match(&matches, now, Some(Team::Vantage)).map(|m| m.id.as_str()),
            Some("feb20")
        );
        assert!(next_match(&matches, now, Some(Team::GameChangers)).is_none());
    }

    #[test]
    fn test_limit_and_summary() {
        let (matches, now) = fixture();
        let (_, recent) = split_schedule(&matches, now);
        let page = RecentFilter::with_limit(3).apply(&recent, now);
        assert_eq!(page.shown.len(), 3);
        assert_eq!(page.total, 4);
        assert_eq!(page.summary(), "Showing 3 of 4 matches");
    }

    #[test]
    fn test_available_years_and_months() {
        let (matches, now) = fixture();
        let (_, recent) = split_schedule(&matches, now);
        assert_eq!(available_years(&recent), vec![2025, 2024]);
        assert_eq!(available_months(&recent), vec![1, 2, 12]);
        assert_eq!(month_name(12), "December");
    }

    #[test]
    fn test_cycling() {
        let mut filter = RecentFilter::default();
        filter.cycle_limit();
        assert_eq!(filter.limit, 9);
        filter.cycle_limit();
        filter.cycle_limit();
        assert_eq!(filter.limit, 3);

        let seen: Vec<_> = (0..4)
            .map(|_| {
                filter.cycle_last_days();
                filter.last_days
            })
            .collect();
        assert_eq!(seen, vec![Some(7), Some(30), Some(90), None]);

        filter.cycle_year(&[2025, 2024]);
        filter.cycle_year(&[2025, 2024]);
        assert_eq!(filter.year, Some(2024));
        filter.cycle_year(&[2025, 2024]);
        assert_eq!(filter.year, None);

        filter.month = Some(3);
        filter.reset();
        assert_eq!(filter, RecentFilter::with_limit(3));
    }
}
