use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::carousel::DisplayItem;
use crate::error::{Error, Result};

/// Shown instead of a date for matches that have not been scheduled yet
pub const DATE_PLACEHOLDER: &str = "TBD";
/// Streamer title used when none is set
pub const DEFAULT_STREAMER_TITLE: &str = "Content Creator";

/// Competitive roster a player belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Team {
    #[default]
    Main,
    Vantage,
    GameChangers,
}

impl Team {
    pub const ALL: [Team; 3] = [Team::Main, Team::Vantage, Team::GameChangers];

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Main => "main",
            Team::Vantage => "vantage",
            Team::GameChangers => "game-changers",
        }
    }

    /// Heading used on the home page and roster screens
    pub fn display_name(&self) -> &'static str {
        match self {
            Team::Main => "MAIN TEAM",
            Team::Vantage => "TEAM VANTAGE",
            Team::GameChangers => "GAME CHANGERS",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Team {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "main" => Ok(Team::Main),
            "vantage" => Ok(Team::Vantage),
            "game-changers" | "game_changers" | "gamechangers" => Ok(Team::GameChangers),
            other => Err(Error::Other(format!("Unknown team: {}", other))),
        }
    }
}

/// A scheduled or played match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub id: String,
    pub opponent: String,
    pub tournament: String,
    /// `None` until the organizer fixes a start time
    pub date: Option<DateTime<Utc>>,
    pub our_score: u32,
    pub opponent_score: u32,
    pub stream_link: Option<Url>,
    pub vlr_link: Option<Url>,
    pub caster: Option<String>,
    pub opponent_logo: Option<Url>,
    /// Roster that plays the match, when the organizer recorded one
    pub team: Option<Team>,
}

/// Result of a played match from our side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
    Draw,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Victory => "Victory",
            Outcome::Defeat => "Defeat",
            Outcome::Draw => "Draw",
        }
    }
}

impl Match {
    pub fn outcome(&self) -> Outcome {
        match self.our_score.cmp(&self.opponent_score) {
            std::cmp::Ordering::Greater => Outcome::Victory,
            std::cmp::Ordering::Less => Outcome::Defeat,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Logo placeholder: first three characters of the opponent, uppercased
    pub fn opponent_initials(&self) -> String {
        self.opponent.chars().take(3).collect::<String>().to_uppercase()
    }

    /// Date as shown on cards, or [`DATE_PLACEHOLDER`]
    pub fn date_label(&self) -> String {
        match self.date {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => DATE_PLACEHOLDER.to_string(),
        }
    }

    pub fn time_label(&self) -> Option<String> {
        self.date.map(|date| date.format("%H:%M UTC").to_string())
    }

    pub fn score_label(&self) -> String {
        format!("{} - {}", self.our_score, self.opponent_score)
    }
}

impl DisplayItem for Match {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitch: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: String,
    pub full_name: String,
    pub ign: String,
    pub role: String,
    pub team: Team,
    pub bio: String,
    pub photo_url: Option<Url>,
    pub socials: Socials,
}

impl Player {
    pub fn is_coach(&self) -> bool {
        self.role.to_lowercase().contains("coach")
    }
}

impl DisplayItem for Player {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Streamer {
    pub id: String,
    pub name: String,
    pub title: Option<String>,
    pub photo_url: Option<Url>,
    pub twitch: Option<Url>,
}

impl Streamer {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_STREAMER_TITLE)
    }
}

impl DisplayItem for Streamer {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Match as stored in the snapshot, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMatch {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub opponent: String,
    #[serde(default)]
    pub tournament: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub our_score: u32,
    #[serde(default)]
    pub opponent_score: u32,
    #[serde(default)]
    pub stream_link: Option<String>,
    #[serde(default)]
    pub vlr_link: Option<String>,
    #[serde(default)]
    pub caster: Option<String>,
    #[serde(default)]
    pub opponent_logo: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSocials {
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub twitch: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlayer {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub ign: String,
    #[serde(default)]
    pub role: String,
    /// Players recorded before teams existed belong to the main roster
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub socials: RawSocials,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStreamer {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub twitch: Option<String>,
}

fn record_id(id: Option<String>) -> String {
    match id {
        Some(id) if !id.trim().is_empty() => id.trim().to_string(),
        _ => Uuid::new_v4().to_string(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an optional link, accepting only http(s). Blank strings count as
/// absent.
fn parse_link(kind: &'static str, id: &str, field: &str, value: Option<String>) -> Result<Option<Url>> {
    let Some(value) = non_empty(value) else {
        return Ok(None);
    };
    let url = Url::parse(&value)
        .map_err(|e| Error::validation(kind, id, format!("{}: {} ({})", field, e, value)))?;
    match url.scheme() {
        "http" | "https" => Ok(Some(url)),
        scheme => Err(Error::validation(
            kind,
            id,
            format!("{}: unsupported scheme '{}'", field, scheme),
        )),
    }
}

fn parse_team(kind: &'static str, id: &str, value: Option<String>) -> Result<Option<Team>> {
    match non_empty(value) {
        Some(team) => team
            .parse()
            .map(Some)
            .map_err(|_| Error::validation(kind, id, format!("unknown team '{}'", team))),
        None => Ok(None),
    }
}

/// Parse a start time typed by an organizer: RFC 3339, or `YYYY-MM-DD HH:MM`
/// (also with a `T` separator) read as UTC
pub fn parse_match_date(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Ok(date.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::Other(format!("Invalid date '{}', expected YYYY-MM-DD HH:MM", input)))
}

impl TryFrom<RawMatch> for Match {
    type Error = Error;

    fn try_from(raw: RawMatch) -> Result<Self> {
        let id = record_id(raw.id);
        let opponent = raw.opponent.trim().to_string();
        if opponent.is_empty() {
            return Err(Error::validation("match", id, "opponent is empty"));
        }

        Ok(Self {
            stream_link: parse_link("match", &id, "stream_link", raw.stream_link)?,
            vlr_link: parse_link("match", &id, "vlr_link", raw.vlr_link)?,
            opponent_logo: parse_link("match", &id, "opponent_logo", raw.opponent_logo)?,
            tournament: raw.tournament.trim().to_string(),
            date: raw.date,
            our_score: raw.our_score,
            opponent_score: raw.opponent_score,
            caster: non_empty(raw.caster),
            team: parse_team("match", &id, raw.team)?,
            opponent,
            id,
        })
    }
}

impl TryFrom<RawPlayer> for Player {
    type Error = Error;

    fn try_from(raw: RawPlayer) -> Result<Self> {
        let id = record_id(raw.id);
        let ign = raw.ign.trim().to_string();
        if ign.is_empty() {
            return Err(Error::validation("player", id, "ign is empty"));
        }
        let team = parse_team("player", &id, raw.team)?.unwrap_or(Team::Main);

        Ok(Self {
            photo_url: parse_link("player", &id, "photo_url", raw.photo_url)?,
            socials: Socials {
                twitter: parse_link("player", &id, "socials.twitter", raw.socials.twitter)?,
                twitch: parse_link("player", &id, "socials.twitch", raw.socials.twitch)?,
            },
            full_name: raw.full_name.trim().to_string(),
            role: raw.role.trim().to_string(),
            bio: raw.bio.trim().to_string(),
            team,
            ign,
            id,
        })
    }
}

impl TryFrom<RawStreamer> for Streamer {
    type Error = Error;

    fn try_from(raw: RawStreamer) -> Result<Self> {
        let id = record_id(raw.id);
        let name = raw.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::validation("streamer", id, "name is empty"));
        }

        Ok(Self {
            photo_url: parse_link("streamer", &id, "photo_url", raw.photo_url)?,
            twitch: parse_link("streamer", &id, "twitch", raw.twitch)?,
            title: non_empty(raw.title),
            name,
            id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn raw_match(opponent: &str) -> RawMatch {
        RawMatch {
            id: Some("m1".to_string()),
            opponent: opponent.to_string(),
            tournament: "Pro League".to_string(),
            date: Some(Utc.with_ymd_and_hms(2025, 2, 25, 18, 0, 0).unwrap()),
            stream_link: Some("https://twitch.tv/valorant".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_match() {
        let m = Match::try_from(raw_match("Digital Storm")).unwrap();
        assert_eq!(m.id, "m1");
        assert_eq!(m.opponent_initials(), "DIG");
        assert_eq!(m.date_label(), "Feb 25, 2025");
        assert_eq!(m.time_label().as_deref(), Some("18:00 UTC"));
        assert_eq!(m.stream_link.unwrap().host_str(), Some("twitch.tv"));
    }

    #[test]
    fn test_empty_opponent_rejected() {
        let err = Match::try_from(raw_match("   ")).unwrap_err();
        assert!(matches!(err, Error::Validation { kind: "match", .. }));
    }

    #[test]
    fn test_bad_link_rejected() {
        let mut raw = raw_match("Fire Hawks");
        raw.vlr_link = Some("vlr.gg/event/1228".to_string());
        assert!(Match::try_from(raw).is_err());

        let mut raw = raw_match("Fire Hawks");
        raw.vlr_link = Some("ftp://vlr.gg/event".to_string());
        assert!(Match::try_from(raw).is_err());

        let mut raw = raw_match("Fire Hawks");
        raw.vlr_link = Some("  ".to_string());
        assert!(Match::try_from(raw).unwrap().vlr_link.is_none());
    }

    #[test]
    fn test_missing_date_and_id() {
        let mut raw = raw_match("Team Phoenix");
        raw.id = None;
        raw.date = None;
        let m = Match::try_from(raw).unwrap();
        assert_eq!(m.date_label(), DATE_PLACEHOLDER);
        assert!(Uuid::parse_str(&m.id).is_ok());
    }

    #[test]
    fn test_outcome() {
        let mut m = Match::try_from(raw_match("Thunder Gaming")).unwrap();
        m.our_score = 2;
        m.opponent_score = 1;
        assert_eq!(m.outcome(), Outcome::Victory);
        m.our_score = 0;
        assert_eq!(m.outcome(), Outcome::Defeat);
        m.opponent_score = 0;
        assert_eq!(m.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_player_team_parsing() {
        let raw = RawPlayer {
            ign: "BodaxAce".to_string(),
            role: "Captain".to_string(),
            team: Some("game-changers".to_string()),
            ..Default::default()
        };
        assert_eq!(Player::try_from(raw).unwrap().team, Team::GameChangers);

        let raw = RawPlayer {
            ign: "BodaxAce".to_string(),
            ..Default::default()
        };
        assert_eq!(Player::try_from(raw).unwrap().team, Team::Main);

        let raw = RawPlayer {
            ign: "BodaxAce".to_string(),
            team: Some("academy".to_string()),
            ..Default::default()
        };
        assert!(Player::try_from(raw).is_err());
    }

    #[test]
    fn test_match_team_is_optional() {
        assert_eq!(Match::try_from(raw_match("Fire Hawks")).unwrap().team, None);

        let mut raw = raw_match("Fire Hawks");
        raw.team = Some("vantage".to_string());
        assert_eq!(Match::try_from(raw).unwrap().team, Some(Team::Vantage));

        let mut raw = raw_match("Fire Hawks");
        raw.team = Some("reserves".to_string());
        assert!(matches!(
            Match::try_from(raw).unwrap_err(),
            Error::Validation { kind: "match", .. }
        ));
    }

    #[test]
    fn test_parse_match_date() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 1, 18, 30, 0).unwrap();
        assert_eq!(parse_match_date("2025-03-01 18:30").unwrap(), expected);
        assert_eq!(parse_match_date("2025-03-01T18:30").unwrap(), expected);
        assert_eq!(parse_match_date("2025-03-01T19:30:00+01:00").unwrap(), expected);
        assert!(parse_match_date("next friday").is_err());
    }

    #[test]
    fn test_coach_detection() {
        let raw = RawPlayer {
            ign: "BodaxCoach".to_string(),
            role: "Assistant COACH".to_string(),
            ..Default::default()
        };
        assert!(Player::try_from(raw).unwrap().is_coach());
    }

    #[test]
    fn test_streamer_title_placeholder() {
        let raw = RawStreamer {
            name: "Nova".to_string(),
            title: Some("".to_string()),
            ..Default::default()
        };
        assert_eq!(Streamer::try_from(raw).unwrap().display_title(), DEFAULT_STREAMER_TITLE);
    }

    #[test]
    fn test_team_serde_names() {
        assert_eq!(serde_json::to_string(&Team::GameChangers).unwrap(), "\"game-changers\"");
        assert_eq!("Vantage".parse::<Team>().unwrap(), Team::Vantage);
    }
}
