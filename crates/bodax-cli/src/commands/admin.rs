use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use bodax_core::models::{parse_match_date, Match, Player, RawMatch, RawPlayer, RawSocials};
use bodax_core::{JsonSnapshotSource, Snapshot};

/// Fields of a match as typed on the command line
#[derive(Debug, Clone, Default)]
pub struct MatchInput {
    pub opponent: String,
    pub tournament: String,
    pub date: Option<String>,
    pub our_score: u32,
    pub opponent_score: u32,
    pub team: Option<String>,
    pub stream_link: Option<String>,
    pub vlr_link: Option<String>,
    pub caster: Option<String>,
    pub opponent_logo: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PlayerInput {
    pub full_name: String,
    pub ign: String,
    pub role: String,
    pub team: Option<String>,
    pub bio: String,
    pub photo_url: Option<String>,
    pub twitter: Option<String>,
    pub twitch: Option<String>,
}

/// Validate a new match the same way snapshot records are validated
pub fn build_match(input: MatchInput) -> Result<Match> {
    let date = input.date.as_deref().map(parse_match_date).transpose()?;
    let raw = RawMatch {
        id: None,
        opponent: input.opponent,
        tournament: input.tournament,
        date,
        our_score: input.our_score,
        opponent_score: input.opponent_score,
        stream_link: input.stream_link,
        vlr_link: input.vlr_link,
        caster: input.caster,
        opponent_logo: input.opponent_logo,
        team: input.team,
    };
    Ok(Match::try_from(raw)?)
}

pub fn build_player(input: PlayerInput) -> Result<Player> {
    let raw = RawPlayer {
        id: None,
        full_name: input.full_name,
        ign: input.ign,
        role: input.role,
        team: input.team,
        bio: input.bio,
        photo_url: input.photo_url,
        socials: RawSocials {
            twitter: input.twitter,
            twitch: input.twitch,
        },
    };
    Ok(Player::try_from(raw)?)
}

/// Read the snapshot for editing. A missing file starts an empty one.
async fn open(path: &Path) -> Result<(JsonSnapshotSource, Snapshot)> {
    let source = JsonSnapshotSource::new(path);
    let snapshot = if path.exists() {
        super::load_snapshot(&source).await?
    } else {
        Snapshot::default()
    };
    Ok((source, snapshot))
}

pub async fn add_match(path: &Path, input: MatchInput) -> Result<()> {
    let m = build_match(input)?;
    let (source, mut snapshot) = open(path).await?;
    snapshot.add_match(m.clone())?;
    source.write(&snapshot).await?;
    info!(id = %m.id, opponent = %m.opponent, "Match added");

    println!("Added match {}\n", m.id);
    super::matches::print_match(&m, false);
    Ok(())
}

pub async fn delete_match(path: &Path, id: &str) -> Result<()> {
    let (source, mut snapshot) = open(path).await?;
    let Some(removed) = snapshot.remove_match(id) else {
        bail!("No match with id {}", id);
    };
    source.write(&snapshot).await?;
    info!(id, "Match deleted");
    println!("Deleted match vs {} ({})", removed.opponent, removed.date_label());
    Ok(())
}

pub async fn add_player(path: &Path, input: PlayerInput) -> Result<()> {
    let player = build_player(input)?;
    let (source, mut snapshot) = open(path).await?;
    snapshot.add_player(player.clone())?;
    source.write(&snapshot).await?;
    info!(id = %player.id, ign = %player.ign, "Player added");

    println!(
        "Added player {} ({}) to {}",
        player.ign,
        player.id,
        player.team.display_name()
    );
    Ok(())
}

pub async fn delete_player(path: &Path, id: &str) -> Result<()> {
    let (source, mut snapshot) = open(path).await?;
    let Some(removed) = snapshot.remove_player(id) else {
        bail!("No player with id {}", id);
    };
    source.write(&snapshot).await?;
    info!(id, "Player deleted");
    println!("Deleted player {}", removed.ign);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodax_core::models::Team;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_build_match_parses_date_and_team() {
        let m = build_match(MatchInput {
            opponent: "Nova Esports".to_string(),
            tournament: "Premier".to_string(),
            date: Some("2025-03-01 18:30".to_string()),
            team: Some("vantage".to_string()),
            stream_link: Some("https://twitch.tv/bodax".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(m.date, Some(Utc.with_ymd_and_hms(2025, 3, 1, 18, 30, 0).unwrap()));
        assert_eq!(m.team, Some(Team::Vantage));
        assert!(!m.id.is_empty());
    }

    #[test]
    fn test_build_match_rejects_bad_input() {
        let no_opponent = MatchInput {
            date: Some("2025-03-01 18:30".to_string()),
            ..Default::default()
        };
        assert!(build_match(no_opponent).is_err());

        let bad_date = MatchInput {
            opponent: "Nova".to_string(),
            date: Some("next friday".to_string()),
            ..Default::default()
        };
        assert!(build_match(bad_date).is_err());

        let bad_link = MatchInput {
            opponent: "Nova".to_string(),
            vlr_link: Some("ftp://vlr.gg".to_string()),
            ..Default::default()
        };
        assert!(build_match(bad_link).is_err());
    }

    #[test]
    fn test_build_player_defaults_to_main_team() {
        let player = build_player(PlayerInput {
            full_name: "Alex Kim".to_string(),
            ign: "Kairo".to_string(),
            role: "Duelist".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(player.team, Team::Main);
        assert!(build_player(PlayerInput::default()).is_err());
    }
}
