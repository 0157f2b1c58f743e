//! JSON-file-backed store for player records.
//!
//! The store owns the single invariant of the service: no two active records
//! may hold the same codename. `insert` enforces it; callers treat a conflict
//! as retryable.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, Result};
use crate::models::{current_timestamp, Player};

/// All player records, persisted as a single JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStore {
    /// Schema version for migrations
    pub version: u32,

    /// Last update timestamp
    pub last_updated: u64,

    /// Active player records
    pub players: Vec<Player>,
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self {
            version: 1,
            last_updated: current_timestamp(),
            players: Vec::new(),
        }
    }
}

impl PlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file, or create new if not exists
    pub async fn load(path: &str) -> Result<Self> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| ApiError::StateParse {
                    path: path.to_string(),
                    source: e,
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(ApiError::StateLoad {
                path: path.to_string(),
                source: e,
            }),
        }
    }

    /// Save to a JSON file atomically
    pub async fn save(&self, path: &str) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;

        // Write to temp file first, then rename for atomicity
        let temp_path = format!("{}.tmp", path);
        tokio::fs::write(&temp_path, &content)
            .await
            .map_err(|e| ApiError::StateSave {
                path: path.to_string(),
                source: e,
            })?;

        tokio::fs::rename(&temp_path, path)
            .await
            .map_err(|e| ApiError::StateSave {
                path: path.to_string(),
                source: e,
            })?;

        Ok(())
    }

    /// Full snapshot of all active records
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Codenames currently assigned
    pub fn used_names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    /// Add a record. Rejects a codename already held by an active record.
    pub fn insert(&mut self, player: Player) -> Result<()> {
        if self.players.iter().any(|p| p.name == player.name) {
            return Err(ApiError::NameTaken { name: player.name });
        }
        self.players.push(player);
        self.last_updated = current_timestamp();
        Ok(())
    }

    /// Remove every record matching the nickname; returns how many matched.
    pub fn remove_by_nickname(&mut self, nickname: &str) -> usize {
        let before = self.players.len();
        self.players.retain(|p| p.nickname != nickname);
        let removed = before - self.players.len();
        if removed > 0 {
            self.last_updated = current_timestamp();
        }
        removed
    }

    /// Get record count
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

/// Shared player store type
pub type SharedPlayerStore = Arc<tokio::sync::RwLock<PlayerStore>>;

pub fn create_shared_player_store(store: PlayerStore) -> SharedPlayerStore {
    Arc::new(tokio::sync::RwLock::new(store))
}
