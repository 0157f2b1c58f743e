// src/models.rs
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// A registered player holding one codename from the pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Store-assigned identifier
    pub id: Uuid,

    /// Codename drawn from the pool; unique among active records
    pub name: String,

    /// User-supplied display name; not unique
    pub nickname: String,

    /// External Discord identifier (snowflake as string)
    pub discord_id: String,

    /// When the record was created (Unix timestamp)
    pub registered_at: u64,
}

impl Player {
    pub fn new(name: String, nickname: String, discord_id: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            nickname,
            discord_id,
            registered_at: current_timestamp(),
        }
    }
}

/// Body of POST /register. Fields are validated by the handler so that an
/// absent key and an empty string produce the same error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub discord_id: Option<String>,
}

/// Body of DELETE /remove.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveRequest {
    #[serde(default)]
    pub nickname: Option<String>,
}

/// One assigned codename as reported by GET /names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsedName {
    pub name: String,
    pub discord_id: String,
    pub nickname: String,
}

impl From<&Player> for UsedName {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            discord_id: player.discord_id.clone(),
            nickname: player.nickname.clone(),
        }
    }
}

/// Response of GET /names.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamesResponse {
    pub used_names_with_discord_id: Vec<UsedName>,
    pub available_names: Vec<&'static str>,
}

/// Response of DELETE /remove.
#[derive(Debug, Clone, Serialize)]
pub struct RemoveResponse {
    pub message: String,
}

/// Response of GET /available-count.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableCountResponse {
    pub available_count: usize,
}

pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
