pub mod admin;
pub mod config;
pub mod consent;
pub mod countdown;
pub mod matches;
pub mod players;
pub mod roster;
pub mod run;
pub mod schedule;
pub mod seed;

use anyhow::{anyhow, bail, Result};
use bodax_core::{Error, MatchSource, Snapshot};

/// Read the snapshot, pointing at `bodax seed` when there is none yet
pub async fn load_snapshot(source: &dyn MatchSource) -> Result<Snapshot> {
    match source.snapshot().await {
        Ok(snapshot) => Ok(snapshot),
        Err(Error::SnapshotNotFound(path)) => Err(anyhow!(
            "No snapshot at {}.\nCreate the sample data with:\n  bodax seed",
            path
        )),
        Err(e) => Err(e.into()),
    }
}

/// Commands that write the snapshot file have nothing to write to in demo mode
pub fn refuse_in_demo(demo: bool, command: &str) -> Result<()> {
    if demo {
        bail!("`bodax {}` edits the snapshot file and cannot run with --demo", command);
    }
    Ok(())
}
