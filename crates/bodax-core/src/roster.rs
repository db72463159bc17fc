use crate::models::{Player, Streamer, Team};

/// Players of `team` excluding coaching staff, in snapshot order, at most
/// `limit` of them
pub fn roster(players: &[Player], team: Team, limit: Option<usize>) -> Vec<&Player> {
    players
        .iter()
        .filter(|p| p.team == team && !p.is_coach())
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

pub fn coaches(players: &[Player], team: Team) -> Vec<&Player> {
    players
        .iter()
        .filter(|p| p.team == team && p.is_coach())
        .collect()
}

/// Every player of every team, ordered by name. Players without a full name
/// sort by their in-game name.
pub fn players_by_name(players: &[Player]) -> Vec<&Player> {
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by_key(|p| {
        let name = if p.full_name.is_empty() { &p.ign } else { &p.full_name };
        name.to_lowercase()
    });
    sorted
}

/// Streamers sorted by name, case-insensitive
pub fn streamers_by_name(streamers: &[Streamer]) -> Vec<&Streamer> {
    let mut sorted: Vec<&Streamer> = streamers.iter().collect();
    sorted.sort_by_key(|s| s.name.to_lowercase());
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Socials;

    fn player(ign: &str, role: &str, team: Team) -> Player {
        Player {
            id: ign.to_lowercase(),
            full_name: String::new(),
            ign: ign.to_string(),
            role: role.to_string(),
            team,
            bio: String::new(),
            photo_url: None,
            socials: Socials::default(),
        }
    }

    fn players() -> Vec<Player> {
        let mut players: Vec<Player> = (0..7)
            .map(|i| player(&format!("Main{}", i), "Duelist", Team::Main))
            .collect();
        players.insert(2, player("Mike", "Head Coach", Team::Main));
        players.push(player("Lux", "Controller", Team::Vantage));
        players.push(player("Ana", "coach", Team::Vantage));
        players
    }

    #[test]
    fn test_roster_excludes_coaches_and_limits() {
        let players = players();
        let main = roster(&players, Team::Main, Some(5));
        assert_eq!(main.len(), 5);
        assert!(main.iter().all(|p| !p.is_coach()));
        assert_eq!(main[2].ign, "Main2");

        assert_eq!(roster(&players, Team::Main, None).len(), 7);
        assert!(roster(&players, Team::GameChangers, Some(5)).is_empty());
    }

    #[test]
    fn test_coaches() {
        let players = players();
        let staff: Vec<_> = coaches(&players, Team::Vantage).into_iter().map(|p| p.ign.as_str()).collect();
        assert_eq!(staff, vec!["Ana"]);
    }

    #[test]
    fn test_players_by_name_across_teams() {
        let mut players = players();
        players[0].full_name = "zoe".to_string();
        players[1].full_name = "Adam".to_string();
        let sorted: Vec<_> = players_by_name(&players).into_iter().map(|p| p.ign.as_str()).collect();
        assert_eq!(sorted.len(), players.len());
        assert_eq!(sorted[0], "Main1");
        assert_eq!(sorted[1], "Ana");
        assert_eq!(sorted.last(), Some(&"Main0"));
    }
}
