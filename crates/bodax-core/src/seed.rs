//! Sample records for a fresh install.

use chrono::{DateTime, Duration, Utc};
use url::Url;
use uuid::Uuid;

use crate::models::{Match, Player, Socials, Streamer, Team};
use crate::source::Snapshot;

fn link(s: &str) -> Option<Url> {
    Url::parse(s).ok()
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

struct SampleMatch {
    opponent: &'static str,
    tournament: &'static str,
    /// Offset from `now` in hours; negative means already played
    offset_hours: i64,
    score: (u32, u32),
    caster: &'static str,
    vlr_event: u32,
    team: Team,
}

const SAMPLE_MATCHES: &[SampleMatch] = &[
    SampleMatch { opponent: "Team Phoenix", tournament: "Valorant Champions Tour", offset_hours: 72, score: (0, 0), caster: "Shroud", vlr_event: 1234, team: Team::Main },
    SampleMatch { opponent: "Cyber Wolves", tournament: "Masters Tournament", offset_hours: 192, score: (0, 0), caster: "TenZ", vlr_event: 1235, team: Team::Vantage },
    SampleMatch { opponent: "Digital Storm", tournament: "Pro League", offset_hours: 312, score: (0, 0), caster: "SicK", vlr_event: 1236, team: Team::GameChangers },
    SampleMatch { opponent: "Thunder Gaming", tournament: "Winter Championship", offset_hours: -48, score: (2, 1), caster: "Shroud", vlr_event: 1230, team: Team::Main },
    SampleMatch { opponent: "Lightning Strike", tournament: "Spring Series", offset_hours: -120, score: (1, 2), caster: "TenZ", vlr_event: 1229, team: Team::Vantage },
    SampleMatch { opponent: "Fire Hawks", tournament: "Elite League", offset_hours: -192, score: (2, 0), caster: "SicK", vlr_event: 1228, team: Team::Main },
    SampleMatch { opponent: "Night Owls", tournament: "Autumn Cup", offset_hours: -1100, score: (2, 1), caster: "Shroud", vlr_event: 1201, team: Team::GameChangers },
];

/// (full name, ign, role, team)
const SAMPLE_PLAYERS: &[(&str, &str, &str, Team)] = &[
    ("Alex Chen", "BodaxAce", "Captain", Team::Main),
    ("Sarah Johnson", "BodaxSniper", "Entry Fragger", Team::Main),
    ("Marcus Rodriguez", "BodaxSupport", "Support", Team::Main),
    ("Emma Thompson", "BodaxFlex", "Flex", Team::Main),
    ("David Kim", "BodaxIGL", "In-Game Leader", Team::Main),
    ("Coach Mike", "BodaxCoach", "Coach", Team::Main),
    ("Lena Park", "VantageLux", "Duelist", Team::Vantage),
    ("Omar Haddad", "VantageRook", "Controller", Team::Vantage),
    ("Rhea Vance", "VantageCoach", "Head Coach", Team::Vantage),
    ("Mia Rossi", "GCVera", "Initiator", Team::GameChangers),
    ("Ines Duarte", "GCNyx", "Sentinel", Team::GameChangers),
];

fn sample_match(sample: &SampleMatch, now: DateTime<Utc>) -> Match {
    Match {
        id: new_id(),
        opponent: sample.opponent.to_string(),
        tournament: sample.tournament.to_string(),
        date: Some(now + Duration::hours(sample.offset_hours)),
        our_score: sample.score.0,
        opponent_score: sample.score.1,
        stream_link: link("https://twitch.tv/valorant"),
        vlr_link: link(&format!("https://vlr.gg/event/{}", sample.vlr_event)),
        caster: Some(sample.caster.to_string()),
        opponent_logo: None,
        team: Some(sample.team),
    }
}

fn sample_player(&(full_name, ign, role, team): &(&str, &str, &str, Team)) -> Player {
    let handle = ign.to_lowercase();
    Player {
        id: new_id(),
        full_name: full_name.to_string(),
        ign: ign.to_string(),
        role: role.to_string(),
        team,
        bio: String::new(),
        photo_url: None,
        socials: Socials {
            twitter: link(&format!("https://twitter.com/{}", handle)),
            twitch: link(&format!("https://twitch.tv/{}", handle)),
        },
    }
}

/// Sample snapshot with match dates placed around `now`, so both the
/// upcoming carousel and the recent results have content
pub fn sample_snapshot(now: DateTime<Utc>) -> Snapshot {
    Snapshot {
        matches: SAMPLE_MATCHES.iter().map(|m| sample_match(m, now)).collect(),
        players: SAMPLE_PLAYERS.iter().map(sample_player).collect(),
        streamers: vec![
            Streamer {
                id: new_id(),
                name: "BodaxLive".to_string(),
                title: Some("Official Channel".to_string()),
                photo_url: None,
                twitch: link("https://twitch.tv/bodaxlive"),
            },
            Streamer {
                id: new_id(),
                name: "Nova".to_string(),
                title: None,
                photo_url: None,
                twitch: link("https://twitch.tv/nova"),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{next_match, split_schedule};

    #[test]
    fn test_sample_has_upcoming_and_recent() {
        let now = Utc::now();
        let snapshot = sample_snapshot(now);
        let (upcoming, recent) = split_schedule(&snapshot.matches, now);
        assert_eq!(upcoming.len(), 3);
        assert_eq!(recent.len(), 4);
        assert!(snapshot.matches.iter().all(|m| m.vlr_link.is_some()));
        assert!(snapshot.players.iter().any(|p| p.is_coach()));
        for team in Team::ALL {
            assert!(next_match(&snapshot.matches, now, Some(team)).is_some());
        }
    }
}
