//! JavaScript framework tracker: REST backend for frameworks and their versions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError, FieldError, ValidationErrors};
pub use migration::{ensure_database_exists, ensure_tables};
pub use routes::{app_router, common_routes, common_routes_with_ready, framework_routes};
pub use service::FrameworkService;
pub use state::AppState;
pub use store::{FrameworkStore, MemoryStore, PgFrameworkStore};
