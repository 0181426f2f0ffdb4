//! The resources exposed over HTTP and the trait that ties each one to its table.

mod movies;
mod users;

pub use movies::{Movie, MoviePayload, Movies, MOVIES_TABLE};
pub use users::{User, UserPayload, Users, USERS_TABLE};

use crate::config::TableDef;
use crate::sql::PgBindValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// A CRUD resource backed by one table.
pub trait Resource: Send + Sync + 'static {
    /// Singular name used in logs and error messages.
    const NAME: &'static str;
    const TABLE: &'static TableDef;

    /// Stored row including the store-assigned id.
    type Record: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static;
    /// Request body for create and full update; never carries an id.
    type Payload: DeserializeOwned + Send + 'static;

    /// Payload values in `TABLE.fields` order.
    fn bind_values(payload: Self::Payload) -> Vec<PgBindValue>;
}

/// Tables created at startup.
pub const RESOURCE_TABLES: &[&TableDef] = &[Users::TABLE, Movies::TABLE];
