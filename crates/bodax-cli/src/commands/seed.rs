use std::path::Path;

use anyhow::Result;
use chrono::Utc;

use bodax_core::seed::sample_snapshot;
use bodax_core::JsonSnapshotSource;

pub async fn run(snapshot_path: &Path, force: bool) -> Result<()> {
    if snapshot_path.exists() && !force {
        println!("Snapshot already exists: {}", snapshot_path.display());
        println!("\nTo overwrite it, run:");
        println!("  bodax seed --force");
        return Ok(());
    }

    let snapshot = sample_snapshot(Utc::now());
    JsonSnapshotSource::new(snapshot_path).write(&snapshot).await?;

    println!("Wrote sample data to {}", snapshot_path.display());
    println!(
        "  {} matches, {} players, {} streamers",
        snapshot.matches.len(),
        snapshot.players.len(),
        snapshot.streamers.len()
    );

    Ok(())
}
