//! quest-api: REST backend exposing CRUD over users and movies on PostgreSQL.

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod resources;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use app::build_app;
pub use config::Settings;
pub use error::{AppError, ConfigError, FieldError};
pub use resources::{Movie, MoviePayload, Movies, Resource, User, UserPayload, Users};
pub use service::CrudService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
