// Parameterized query execution over the shared pool
use crate::connection::DatabasePool;
use crate::error::{DatabaseError, DatabaseResult};
use sqlx::postgres::{PgArguments, PgQueryResult, PgRow};
use sqlx::FromRow;
use tracing::{debug, error};

/// Statement executor bound to the shared connection pool.
///
/// Every operation takes the SQL text and a closure that binds parameters,
/// so values always travel through the driver's parameter-binding path and
/// are never concatenated into the query string.
pub struct QueryExecutor {
    pool: DatabasePool,
}

impl QueryExecutor {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Execute a parameterized query and return all rows
    /// Uses a closure to bind parameters (since sqlx requires method chaining)
    pub async fn fetch_all_with<F, T>(&self, sql: &str, bind_fn: F) -> DatabaseResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
        F: FnOnce(
            sqlx::query::QueryAs<'_, sqlx::Postgres, T, PgArguments>,
        ) -> sqlx::query::QueryAs<'_, sqlx::Postgres, T, PgArguments>,
    {
        debug!("Executing query: {}", sql);

        let query = bind_fn(sqlx::query_as::<_, T>(sql));

        query.fetch_all(self.pool.pool()).await.map_err(|e| {
            error!("Query failed: {}", e);
            DatabaseError::QueryFailed(e.to_string())
        })
    }

    /// Execute a parameterized statement that returns no rows (INSERT/UPDATE/DELETE)
    pub async fn execute_with<F>(&self, sql: &str, bind_fn: F) -> DatabaseResult<PgQueryResult>
    where
        F: FnOnce(
            sqlx::query::Query<'_, sqlx::Postgres, PgArguments>,
        ) -> sqlx::query::Query<'_, sqlx::Postgres, PgArguments>,
    {
        debug!("Executing statement: {}", sql);

        let query = bind_fn(sqlx::query(sql));

        query.execute(self.pool.pool()).await.map_err(|e| {
            error!("Statement failed: {}", e);
            DatabaseError::QueryFailed(e.to_string())
        })
    }
}
