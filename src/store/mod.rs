pub mod player_store;

pub use player_store::{create_shared_player_store, PlayerStore, SharedPlayerStore};
