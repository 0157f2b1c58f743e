//! Request handlers for the four registry endpoints.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use super::server::AppState;
use crate::error::{ApiError, Result};
use crate::models::{
    AvailableCountResponse, NamesResponse, Player, RegisterRequest, RemoveRequest, RemoveResponse,
    UsedName,
};
use crate::names;

/// An absent key and an empty string fail validation the same way.
fn require_field(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::MissingField { field }),
    }
}

/// POST /register - Assign a random unused codename to a new player
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Player>)> {
    let nickname = require_field(req.nickname, "nickname")?;
    let discord_id = require_field(req.discord_id, "discordId")?;

    // Hold the write lock across snapshot, allocation, and insert so that two
    // concurrent registrations cannot pick the same name.
    let mut store = state.store.write().await;

    let used = store.used_names();
    let available = names::available_names(&used);
    let name = names::allocate(&available)?;

    let player = Player::new(name.to_string(), nickname, discord_id);
    store.insert(player.clone())?;
    store.save(&state.store_path).await?;

    info!("Registered '{}' as {}", player.nickname, player.name);
    Ok((StatusCode::CREATED, Json(player)))
}

/// GET /names - List assigned codenames and the remaining pool
pub async fn list_names(State(state): State<AppState>) -> Json<NamesResponse> {
    let store = state.store.read().await;

    let used_names_with_discord_id: Vec<UsedName> =
        store.players().iter().map(UsedName::from).collect();
    let available_names = names::available_names(&store.used_names());

    Json(NamesResponse {
        used_names_with_discord_id,
        available_names,
    })
}

/// DELETE /remove - Release the codenames of every record with this nickname
pub async fn remove(
    State(state): State<AppState>,
    Json(req): Json<RemoveRequest>,
) -> Result<Json<RemoveResponse>> {
    let nickname = require_field(req.nickname, "nickname")?;

    let mut store = state.store.write().await;
    let removed = store.remove_by_nickname(&nickname);
    if removed > 0 {
        store.save(&state.store_path).await?;
    }

    info!("Removed {} record(s) for nickname '{}'", removed, nickname);
    Ok(Json(RemoveResponse {
        message: format!("Removed {} record(s) for nickname '{}'", removed, nickname),
    }))
}

/// GET /available-count - Number of codenames still assignable
pub async fn available_count(State(state): State<AppState>) -> Json<AvailableCountResponse> {
    let store = state.store.read().await;
    let available = names::available_names(&store.used_names());

    // Reported one higher than the raw remainder; kept for wire compatibility
    // with existing clients.
    Json(AvailableCountResponse {
        available_count: available.len() + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::NORDIC_NAMES;
    use crate::store::{create_shared_player_store, PlayerStore};
    use tempfile::TempDir;

    fn test_state() -> (AppState, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store_path = dir
            .path()
            .join("players.json")
            .to_str()
            .unwrap()
            .to_string();
        let state = AppState {
            store: create_shared_player_store(PlayerStore::new()),
            store_path,
        };
        (state, dir)
    }

    fn register_request(nickname: &str, discord_id: &str) -> RegisterRequest {
        RegisterRequest {
            nickname: Some(nickname.to_string()),
            discord_id: Some(discord_id.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_assigns_pool_name() {
        let (state, _dir) = test_state();

        let (status, Json(player)) =
            register(State(state.clone()), Json(register_request("x", "1")))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert!(NORDIC_NAMES.contains(&player.name.as_str()));
        assert_eq!(player.nickname, "x");
        assert_eq!(player.discord_id, "1");

        let store = state.store.read().await;
        assert_eq!(store.player_count(), 1);
    }

    #[tokio::test]
    async fn test_register_rejects_missing_fields() {
        let (state, _dir) = test_state();

        let req = RegisterRequest {
            nickname: None,
            discord_id: Some("1".to_string()),
        };
        let err = register(State(state.clone()), Json(req)).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "nickname" }));

        let req = RegisterRequest {
            nickname: Some("x".to_string()),
            discord_id: Some(String::new()),
        };
        let err = register(State(state.clone()), Json(req)).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "discordId" }));

        let store = state.store.read().await;
        assert_eq!(store.player_count(), 0);
    }

    #[tokio::test]
    async fn test_register_fails_when_pool_exhausted() {
        let (state, _dir) = test_state();

        {
            let mut store = state.store.write().await;
            for (i, name) in NORDIC_NAMES.iter().enumerate() {
                store
                    .insert(Player::new(
                        name.to_string(),
                        format!("p{}", i),
                        format!("{}", i),
                    ))
                    .unwrap();
            }
        }

        let err = register(State(state.clone()), Json(register_request("x", "1")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NoNamesAvailable));

        let store = state.store.read().await;
        assert_eq!(store.player_count(), NORDIC_NAMES.len());
    }

    #[tokio::test]
    async fn test_names_partitions_the_pool() {
        let (state, _dir) = test_state();

        register(State(state.clone()), Json(register_request("x", "1")))
            .await
            .unwrap();
        register(State(state.clone()), Json(register_request("y", "2")))
            .await
            .unwrap();

        let Json(response) = list_names(State(state.clone())).await;
        assert_eq!(response.used_names_with_discord_id.len(), 2);
        assert_eq!(
            response.used_names_with_discord_id.len() + response.available_names.len(),
            NORDIC_NAMES.len()
        );
        for used in &response.used_names_with_discord_id {
            assert!(!response.available_names.contains(&used.name.as_str()));
        }
    }

    #[tokio::test]
    async fn test_remove_releases_the_name() {
        let (state, _dir) = test_state();

        let (_, Json(player)) = register(State(state.clone()), Json(register_request("x", "1")))
            .await
            .unwrap();

        let Json(response) = remove(
            State(state.clone()),
            Json(RemoveRequest {
                nickname: Some("x".to_string()),
            }),
        )
        .await
        .unwrap();
        assert!(response.message.contains("1 record(s)"));

        let Json(names) = list_names(State(state.clone())).await;
        assert!(names.used_names_with_discord_id.is_empty());
        assert!(names.available_names.contains(&player.name.as_str()));
    }

    #[tokio::test]
    async fn test_remove_acknowledges_unknown_nickname() {
        let (state, _dir) = test_state();

        let result = remove(
            State(state.clone()),
            Json(RemoveRequest {
                nickname: Some("nobody".to_string()),
            }),
        )
        .await;
        assert!(result.is_ok());

        let err = remove(State(state), Json(RemoveRequest { nickname: None }))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingField { field: "nickname" }));
    }

    #[tokio::test]
    async fn test_available_count_is_off_by_one() {
        let (state, _dir) = test_state();

        let Json(response) = available_count(State(state.clone())).await;
        assert_eq!(response.available_count, NORDIC_NAMES.len() + 1);

        register(State(state.clone()), Json(register_request("x", "1")))
            .await
            .unwrap();

        let Json(response) = available_count(State(state)).await;
        assert_eq!(response.available_count, NORDIC_NAMES.len());
    }
}
