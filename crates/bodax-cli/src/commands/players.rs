use anyhow::Result;

use bodax_core::roster::players_by_name;
use bodax_core::MatchSource;

pub async fn run(source: &dyn MatchSource) -> Result<()> {
    let snapshot = super::load_snapshot(source).await?;
    let players = players_by_name(&snapshot.players);

    if players.is_empty() {
        println!("No players listed.");
        return Ok(());
    }

    println!("OUR PLAYERS ({}):\n", players.len());
    for player in players {
        println!(
            "  {} ({}) - {}, {}",
            player.full_name,
            player.ign,
            player.role,
            player.team.display_name()
        );
        if !player.bio.is_empty() {
            println!("    {}", player.bio);
        }
    }

    Ok(())
}
