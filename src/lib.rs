//! Flavor Factory API: menu listing, inquiry submission, static locations and a database diagnostic.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{DatabaseSettings, Settings};
pub use error::{AppError, ConfigError, StorageError, ValidationError};
pub use routes::{api_routes, app, common_routes};
pub use service::DocumentService;
pub use state::AppState;
pub use store::{connect_store, DocumentStore, MemoryStore, MongoStore};
