use anyhow::Result;

use bodax_core::models::Team;
use bodax_core::roster::{coaches, roster};
use bodax_core::MatchSource;

pub async fn run(source: &dyn MatchSource, team: Team) -> Result<()> {
    let snapshot = super::load_snapshot(source).await?;
    let players = roster(&snapshot.players, team, None);
    let staff = coaches(&snapshot.players, team);

    println!("{}\n", team.display_name());

    if players.is_empty() && staff.is_empty() {
        println!("  No players listed.");
        return Ok(());
    }

    for player in players.iter().chain(staff.iter()) {
        println!("  {} ({}) - {}", player.ign, player.full_name, player.role);
        if !player.bio.is_empty() {
            println!("    {}", player.bio);
        }
        if let Some(twitter) = &player.socials.twitter {
            println!("    Twitter: {}", twitter);
        }
        if let Some(twitch) = &player.socials.twitch {
            println!("    Twitch: {}", twitch);
        }
    }

    Ok(())
}
