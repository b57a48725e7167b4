//! # Query Execution
//!
//! The row-execution side of the query-builder contract. Builders emit
//! `(sql, args)` pairs; this module binds each typed argument natively and
//! maps result rows through sqlx's `FromRow`. No SQL text is composed here
//! and none of the builder's composition rules leak in.

use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{Arguments, FromRow, PgPool};
use tracing::debug;

use crate::error::{DataStoreError, DataStoreResult};
use crate::query_builder::SqlValue;

/// Executes emitted queries against a connection pool.
///
/// Cheap to clone; the pool is internally reference-counted. Safe for
/// concurrent use from any number of request handlers.
#[derive(Clone)]
pub struct QueryExecutor {
    pool: PgPool,
}

impl QueryExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Fetch every matching row mapped into `T`.
    pub async fn fetch_all<T>(&self, sql: &str, args: &[SqlValue]) -> DataStoreResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        debug!(sql = %sql, arg_count = args.len(), "fetch_all");
        let arguments = build_arguments(args)?;
        let rows = sqlx::query_as_with::<_, T, _>(sql, arguments)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Fetch at most one row mapped into `T`.
    pub async fn fetch_optional<T>(&self, sql: &str, args: &[SqlValue]) -> DataStoreResult<Option<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        debug!(sql = %sql, arg_count = args.len(), "fetch_optional");
        let arguments = build_arguments(args)?;
        let row = sqlx::query_as_with::<_, T, _>(sql, arguments)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Fetch exactly one row mapped into `T`; zero rows is an error.
    pub async fn fetch_one<T>(&self, sql: &str, args: &[SqlValue]) -> DataStoreResult<T>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        debug!(sql = %sql, arg_count = args.len(), "fetch_one");
        let arguments = build_arguments(args)?;
        let row = sqlx::query_as_with::<_, T, _>(sql, arguments)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Fetch a `COUNT(*)` scalar.
    pub async fn fetch_count(&self, sql: &str, args: &[SqlValue]) -> DataStoreResult<u64> {
        debug!(sql = %sql, arg_count = args.len(), "fetch_count");
        let arguments = build_arguments(args)?;
        let count: i64 = sqlx::query_scalar_with(sql, arguments)
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }
}

/// Bind each value through its native Postgres encoding.
fn build_arguments(args: &[SqlValue]) -> DataStoreResult<PgArguments> {
    let mut arguments = PgArguments::default();
    for value in args {
        let added: Result<(), BoxDynError> = match value {
            SqlValue::Text(text) => arguments.add(text.clone()),
            SqlValue::Int(int) => arguments.add(*int),
            SqlValue::Bool(boolean) => arguments.add(*boolean),
            SqlValue::Uuid(id) => arguments.add(*id),
            SqlValue::Timestamp(ts) => arguments.add(*ts),
        };
        added.map_err(|e| DataStoreError::query_execution("bind", e.to_string()))?;
    }
    Ok(arguments)
}
