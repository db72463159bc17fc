//! Where the carousel and the schedule get their records from.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::models::{Match, Player, RawMatch, RawPlayer, RawStreamer, Streamer};

/// Everything the site shows, validated
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub matches: Vec<Match>,
    pub players: Vec<Player>,
    pub streamers: Vec<Streamer>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.players.is_empty() && self.streamers.is_empty()
    }

    /// Append a match. Ids stay unique within the snapshot.
    pub fn add_match(&mut self, m: Match) -> Result<()> {
        if self.matches.iter().any(|existing| existing.id == m.id) {
            return Err(Error::validation("match", m.id, "id already exists"));
        }
        self.matches.push(m);
        Ok(())
    }

    pub fn remove_match(&mut self, id: &str) -> Option<Match> {
        let position = self.matches.iter().position(|m| m.id == id)?;
        Some(self.matches.remove(position))
    }

    pub fn add_player(&mut self, player: Player) -> Result<()> {
        if self.players.iter().any(|existing| existing.id == player.id) {
            return Err(Error::validation("player", player.id, "id already exists"));
        }
        self.players.push(player);
        Ok(())
    }

    pub fn remove_player(&mut self, id: &str) -> Option<Player> {
        let position = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(position))
    }
}

/// Snapshot document as stored, records left unparsed so one bad entry
/// cannot fail the whole load
#[derive(Debug, Default, Deserialize)]
struct SnapshotDocument {
    #[serde(default)]
    matches: Vec<serde_json::Value>,
    #[serde(default)]
    players: Vec<serde_json::Value>,
    #[serde(default)]
    streamers: Vec<serde_json::Value>,
}

/// Trait for snapshot providers
#[async_trait::async_trait]
pub trait MatchSource: Send + Sync {
    /// Human-readable description for logs
    fn describe(&self) -> String;

    /// Load the current records
    async fn snapshot(&self) -> Result<Snapshot>;
}

/// Validate each record, logging and skipping the ones that fail
fn collect_valid<R, T>(kind: &'static str, values: Vec<serde_json::Value>) -> Vec<T>
where
    R: serde::de::DeserializeOwned,
    T: TryFrom<R, Error = Error>,
{
    let mut out = Vec::with_capacity(values.len());
    for (position, value) in values.into_iter().enumerate() {
        let parsed = serde_json::from_value::<R>(value)
            .map_err(Error::from)
            .and_then(T::try_from);
        match parsed {
            Ok(record) => out.push(record),
            Err(e) => warn!(kind, position, "Skipping invalid record: {}", e),
        }
    }
    out
}

/// Parse a snapshot document from JSON text
pub fn parse_snapshot(content: &str) -> Result<Snapshot> {
    let document: SnapshotDocument = serde_json::from_str(content)?;
    Ok(Snapshot {
        matches: collect_valid::<RawMatch, Match>("match", document.matches),
        players: collect_valid::<RawPlayer, Player>("player", document.players),
        streamers: collect_valid::<RawStreamer, Streamer>("streamer", document.streamers),
    })
}

/// Reads the snapshot from a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    path: PathBuf,
}

impl JsonSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a snapshot, creating the parent directory if needed
    pub async fn write(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(snapshot)?;
        tokio::fs::write(&self.path, content).await?;
        info!(
            path = %self.path.display(),
            matches = snapshot.matches.len(),
            players = snapshot.players.len(),
            streamers = snapshot.streamers.len(),
            "Snapshot written"
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl MatchSource for JsonSnapshotSource {
    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }

    async fn snapshot(&self) -> Result<Snapshot> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::SnapshotNotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        let snapshot = parse_snapshot(&content)?;
        debug!(
            source = %self.describe(),
            matches = snapshot.matches.len(),
            players = snapshot.players.len(),
            streamers = snapshot.streamers.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }
}

/// Fixed in-memory snapshot
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    snapshot: Snapshot,
}

impl StaticSource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait::async_trait]
impl MatchSource for StaticSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    async fn snapshot(&self) -> Result<Snapshot> {
        Ok(self.snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Team;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("bodax-test-{}", uuid::Uuid::new_v4()))
            .join("snapshot.json")
    }

    const DOCUMENT: &str = r#"{
        "matches": [
            {"id": "a", "opponent": "Team Phoenix", "tournament": "VCT", "date": "2025-02-15T19:00:00Z"},
            {"id": "b", "opponent": "", "tournament": "VCT"},
            {"id": "c", "opponent": "Cyber Wolves", "our_score": "two"},
            {"id": "d", "opponent": "Fire Hawks", "vlr_link": "not a url"},
            {"id": "e", "opponent": "Thunder Gaming", "our_score": 2, "opponent_score": 1}
        ],
        "players": [
            {"id": "p1", "ign": "BodaxAce", "role": "Captain", "team": "vantage"},
            {"id": "p2", "ign": "BodaxX", "team": "academy"}
        ]
    }"#;

    #[test]
    fn test_invalid_records_are_skipped() {
        let snapshot = parse_snapshot(DOCUMENT).unwrap();
        let ids: Vec<_> = snapshot.matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "e"]);
        assert_eq!(snapshot.players.len(), 1);
        assert_eq!(snapshot.players[0].team, Team::Vantage);
        assert!(snapshot.streamers.is_empty());
    }

    #[test]
    fn test_add_and_remove_records() {
        let mut snapshot = parse_snapshot(DOCUMENT).unwrap();
        let duplicate = snapshot.matches[0].clone();
        assert!(matches!(
            snapshot.add_match(duplicate.clone()),
            Err(Error::Validation { kind: "match", .. })
        ));

        let removed = snapshot.remove_match("a").map(|m| m.opponent);
        assert_eq!(removed.as_deref(), Some("Team Phoenix"));
        assert!(snapshot.remove_match("a").is_none());
        snapshot.add_match(duplicate).unwrap();
        assert_eq!(snapshot.matches.last().map(|m| m.id.as_str()), Some("a"));

        let player = snapshot.remove_player("p1").unwrap();
        assert!(snapshot.players.is_empty());
        snapshot.add_player(player.clone()).unwrap();
        assert!(snapshot.add_player(player).is_err());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(matches!(parse_snapshot("[1, 2"), Err(Error::Json(_))));
    }

    #[tokio::test]
    async fn test_json_source_round_trip() {
        let path = temp_path();
        let source = JsonSnapshotSource::new(&path);
        let original = parse_snapshot(DOCUMENT).unwrap();

        source.write(&original).await.unwrap();
        let loaded = source.snapshot().await.unwrap();
        assert_eq!(loaded, original);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = JsonSnapshotSource::new(temp_path());
        assert!(matches!(
            source.snapshot().await,
            Err(Error::SnapshotNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticSource::default();
        assert!(source.snapshot().await.unwrap().is_empty());
    }
}
