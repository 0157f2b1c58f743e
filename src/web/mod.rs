//! Web server for the codename registry API
//!
//! Exposes the four JSON endpoints for registering players, listing
//! used/available codenames, removing players, and reporting availability.

mod handlers;
mod server;

pub use server::{router, start_web_server, AppState, ServerConfig};
