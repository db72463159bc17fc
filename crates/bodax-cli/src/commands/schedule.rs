use anyhow::Result;
use chrono::Utc;

use bodax_core::countdown::time_left;
use bodax_core::schedule::{month_name, split_schedule, RecentFilter};
use bodax_core::MatchSource;

pub async fn run(
    source: &dyn MatchSource,
    year: Option<i32>,
    month: Option<u32>,
    last_days: Option<u32>,
    limit: usize,
) -> Result<()> {
    let snapshot = super::load_snapshot(source).await?;
    let now = Utc::now();
    let (upcoming, recent) = split_schedule(&snapshot.matches, now);

    println!("UPCOMING GAMES\n");
    if upcoming.is_empty() {
        println!("  No upcoming games scheduled\n");
    }
    for m in &upcoming {
        super::matches::print_match(m, false);
        if let Some(date) = m.date {
            println!("    Starts in {}\n", time_left(date, now).label());
        }
    }

    let filter = RecentFilter {
        year,
        month,
        last_days,
        limit,
    };
    let page = filter.apply(&recent, now);

    let mut heading = String::from("RECENT RESULTS");
    if let Some(year) = year {
        heading.push_str(&format!("  year {}", year));
    }
    if let Some(month) = month {
        heading.push_str(&format!("  {}", month_name(month)));
    }
    if let Some(days) = last_days {
        heading.push_str(&format!("  last {} days", days));
    }
    println!("{}\n", heading);

    if page.shown.is_empty() {
        println!("  No results match these filters\n");
    }
    for m in &page.shown {
        super::matches::print_match(m, true);
    }
    println!("{}", page.summary());

    Ok(())
}
