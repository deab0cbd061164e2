/// Likes Service Library
///
/// Holds the authoritative like count per post for the lifetime of the
/// running process and answers the two-operation HTTP surface (read,
/// increment). Counts live in process memory only: a restart resets every
/// count to zero, by contract.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: request/response structures for the likes surface
/// - `store`: the counter storage interface and its in-memory implementation
/// - `routes`: route configuration
/// - `state`: shared application state
/// - `error`: error types and handling
/// - `config`: configuration management
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
