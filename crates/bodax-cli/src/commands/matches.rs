use anyhow::Result;
use chrono::Utc;

use bodax_core::models::Match;
use bodax_core::schedule::MatchFilter;
use bodax_core::MatchSource;

pub async fn run(source: &dyn MatchSource, filter: MatchFilter) -> Result<()> {
    let snapshot = super::load_snapshot(source).await?;
    let now = Utc::now();

    let mut matches = filter.apply(&snapshot.matches, now);
    matches.sort_by(|a, b| b.date.cmp(&a.date));

    if matches.is_empty() {
        println!("No matches found.");
        return Ok(());
    }

    println!("{} ({}):\n", filter.label(), matches.len());
    for m in matches {
        print_match(m, m.date.is_some_and(|d| d <= now));
    }

    Ok(())
}

pub(super) fn print_match(m: &Match, played: bool) {
    let when = match m.time_label() {
        Some(time) => format!("{} {}", m.date_label(), time),
        None => m.date_label(),
    };
    if played {
        println!(
            "  {} vs {}  {}  [{}]",
            when,
            m.opponent,
            m.score_label(),
            m.outcome().label()
        );
    } else {
        println!("  {} vs {}", when, m.opponent);
    }
    println!("    {}", m.tournament);
    if let Some(link) = &m.stream_link {
        println!("    Stream: {}", link);
    }
    if let Some(link) = &m.vlr_link {
        println!("    VLR: {}", link);
    }
    println!();
}
