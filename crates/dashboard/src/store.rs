//! Minimal statement-execution interface used by the seeder.
//!
//! [`SeedClient`] exposes only what seeding needs: run one parameterised
//! statement, and give the connection back when done. [`PgSeedClient`] is the
//! PostgreSQL implementation over a single pooled connection.
//!
//! A `PgSeedClient` holds a session advisory lock for its whole lifetime, so
//! two seed runs against the same database never interleave their DDL.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, pool::PoolConnection, postgres::PgArguments, query::Query};
use thiserror::Error;
use time::Date;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Statement rejected: {0}")]
    Rejected(String),
}

/// A bind parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Uuid(Uuid),
    Text(String),
    Int(i32),
    Date(Date),
}

impl From<Uuid> for SqlValue {
    fn from(value: Uuid) -> Self {
        SqlValue::Uuid(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(value)
    }
}

impl From<Date> for SqlValue {
    fn from(value: Date) -> Self {
        SqlValue::Date(value)
    }
}

/// SQL text plus positional parameters (`$1`, `$2`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: &'static str,
    pub params: Vec<SqlValue>,
}

impl Statement {
    pub fn new(sql: &'static str) -> Self {
        Self {
            sql,
            params: Vec::new(),
        }
    }

    pub fn bind(mut self, value: impl Into<SqlValue>) -> Self {
        self.params.push(value.into());
        self
    }
}

/// A store connection the seeder can issue statements against.
///
/// `execute` takes `&self` so that one stage can have several statements in
/// flight at once; implementations serialise them as their driver requires.
#[async_trait]
pub trait SeedClient: Send + Sync {
    /// Runs one statement and returns the number of affected rows.
    async fn execute(&self, statement: Statement) -> Result<u64, StoreError>;

    /// Gives the underlying connection back.
    async fn release(self) -> Result<(), StoreError>
    where
        Self: Sized;
}

/// Advisory lock key shared by every seeding session.
const SEED_LOCK_KEY: i64 = 0x5eed_da5b;

/// [`SeedClient`] over one connection checked out of a [`PgPool`].
pub struct PgSeedClient {
    conn: Mutex<PoolConnection<Postgres>>,
}

impl PgSeedClient {
    /// Checks a connection out of the pool and waits for the seeding lock.
    pub async fn acquire(pool: &PgPool) -> Result<Self, StoreError> {
        let mut conn = pool.acquire().await?;
        // The lock belongs to the session: a connection dropped without
        // release() must not go back to the pool still holding it.
        conn.close_on_drop();
        sqlx::query("SELECT pg_advisory_lock($1)")
            .bind(SEED_LOCK_KEY)
            .execute(&mut *conn)
            .await?;
        debug!("Acquired seeding connection");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: SqlValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        SqlValue::Uuid(v) => query.bind(v),
        SqlValue::Text(v) => query.bind(v),
        SqlValue::Int(v) => query.bind(v),
        SqlValue::Date(v) => query.bind(v),
    }
}

#[async_trait]
impl SeedClient for PgSeedClient {
    async fn execute(&self, statement: Statement) -> Result<u64, StoreError> {
        let query = statement
            .params
            .into_iter()
            .fold(sqlx::query(statement.sql), bind_value);

        let mut conn = self.conn.lock().await;
        let result = query.execute(&mut **conn).await?;
        Ok(result.rows_affected())
    }

    async fn release(self) -> Result<(), StoreError> {
        let mut conn = self.conn.into_inner();
        sqlx::query("SELECT pg_advisory_unlock($1)")
            .bind(SEED_LOCK_KEY)
            .execute(&mut *conn)
            .await?;
        conn.close().await?;
        debug!("Released seeding connection");
        Ok(())
    }
}
