//! Single-statement CRUD execution against PostgreSQL.

use crate::error::AppError;
use crate::resources::Resource;
use crate::sql::{delete, insert, select_by_id, select_list, update, QueryBuf};
use sqlx::PgPool;

pub struct CrudService;

impl CrudService {
    /// All rows, ordered by id.
    pub async fn list<R: Resource>(pool: &PgPool) -> Result<Vec<R::Record>, AppError> {
        let QueryBuf { sql, params } = select_list(R::TABLE);
        tracing::debug!(sql = %sql, params = ?params, "query");
        let mut query = sqlx::query_as::<_, R::Record>(&sql);
        for p in params {
            query = query.bind(p);
        }
        Ok(query.fetch_all(pool).await?)
    }

    /// Fetch one row by id. Returns None when no row matches.
    pub async fn read<R: Resource>(pool: &PgPool, id: i32) -> Result<Option<R::Record>, AppError> {
        let QueryBuf { sql, params } = select_by_id(R::TABLE, id);
        tracing::debug!(sql = %sql, params = ?params, "query");
        let mut query = sqlx::query_as::<_, R::Record>(&sql);
        for p in params {
            query = query.bind(p);
        }
        Ok(query.fetch_optional(pool).await?)
    }

    /// Insert one row and return the id the store assigned.
    pub async fn create<R: Resource>(pool: &PgPool, payload: R::Payload) -> Result<i32, AppError> {
        let QueryBuf { sql, params } = insert(R::TABLE, R::bind_values(payload));
        tracing::debug!(sql = %sql, params = ?params, "query");
        let mut query = sqlx::query_scalar::<_, i32>(&sql);
        for p in params {
            query = query.bind(p);
        }
        Ok(query.fetch_one(pool).await?)
    }

    /// Replace every field of one row. Returns false when no row matches.
    pub async fn update<R: Resource>(
        pool: &PgPool,
        id: i32,
        payload: R::Payload,
    ) -> Result<bool, AppError> {
        let q = update(R::TABLE, id, R::bind_values(payload));
        Self::execute(pool, q).await.map(|affected| affected > 0)
    }

    /// Hard delete one row. Returns false when no row matches.
    pub async fn delete<R: Resource>(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        let q = delete(R::TABLE, id);
        Self::execute(pool, q).await.map(|affected| affected > 0)
    }

    async fn execute(pool: &PgPool, q: QueryBuf) -> Result<u64, AppError> {
        let QueryBuf { sql, params } = q;
        tracing::debug!(sql = %sql, params = ?params, "execute");
        let mut query = sqlx::query(&sql);
        for p in params {
            query = query.bind(p);
        }
        let result = query.execute(pool).await?;
        Ok(result.rows_affected())
    }
}
