use anyhow::Result;
use chrono::Utc;

use bodax_core::countdown::time_left;
use bodax_core::models::Team;
use bodax_core::schedule::next_match;
use bodax_core::MatchSource;

pub async fn run(source: &dyn MatchSource, team: Option<Team>) -> Result<()> {
    let snapshot = super::load_snapshot(source).await?;
    let now = Utc::now();

    let Some((m, date)) = next_match(&snapshot.matches, now, team).and_then(|m| m.date.map(|d| (m, d))) else {
        match team {
            Some(team) => println!("No upcoming games scheduled for {}.", team.display_name()),
            None => println!("No upcoming games scheduled."),
        }
        return Ok(());
    };

    println!("Next: vs {} ({})", m.opponent, m.tournament);
    println!("  {}", time_left(date, now).label());

    Ok(())
}
