//! Shared helpers for database integration tests.

#![allow(dead_code)]

use std::env;

use dashboard::{seeder::Seeder, store::PgSeedClient};
use seed_data::PLACEHOLDER_DATA;
use sqlx::{Executor, PgPool, postgres::PgPoolOptions};
use tokio::sync::OnceCell;
use uuid::Uuid;

static SEEDED: OnceCell<()> = OnceCell::const_new();

/// Get database pool, skipping tests if DATABASE_URL is not set.
pub async fn get_test_pool() -> Option<PgPool> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    match PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
    {
        Ok(pool) => Some(pool),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

/// A pool whose connections resolve unqualified tables in a fresh, empty
/// schema. `public` stays on the search path for the uuid-ossp functions,
/// which [`ensure_seeded`] must have installed beforehand.
pub struct IsolatedSchema {
    pub pool: PgPool,
    pub name: String,
}

impl IsolatedSchema {
    pub async fn create(shared: &PgPool, max_connections: u32) -> Self {
        let name = format!("seed_test_{}", Uuid::new_v4().simple());
        shared
            .execute(format!("CREATE SCHEMA {name}").as_str())
            .await
            .expect("Failed to create schema");

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL set");
        let search_path = format!("SET search_path TO {name}, public");
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .after_connect(move |conn, _meta| {
                let sql = search_path.clone();
                Box::pin(async move {
                    conn.execute(sql.as_str()).await?;
                    Ok(())
                })
            })
            .connect(&database_url)
            .await
            .expect("Failed to connect isolated pool");

        Self { pool, name }
    }

    /// Counts rows in one of this schema's tables.
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}.{table}", self.name))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }

    pub async fn table_exists(&self, table: &str) -> bool {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_schema = $1 AND table_name = $2)",
        )
        .bind(&self.name)
        .bind(table)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to look up table")
    }

    pub async fn remove(self, shared: &PgPool) {
        self.pool.close().await;
        let _ = shared
            .execute(format!("DROP SCHEMA {} CASCADE", self.name).as_str())
            .await;
    }
}

/// Seeds the placeholder data once per test binary.
///
/// Concurrent `CREATE TABLE IF NOT EXISTS` can race in PostgreSQL, so tests
/// that need the schema go through here instead of seeding on their own.
pub async fn ensure_seeded(pool: &PgPool) {
    SEEDED
        .get_or_init(|| async {
            let client = PgSeedClient::acquire(pool)
                .await
                .expect("Failed to acquire connection");
            Seeder::new(&PLACEHOLDER_DATA)
                .seed(client)
                .await
                .expect("Failed to seed placeholder data");
        })
        .await;
}

/// Counts rows of `table` whose `column` is one of `ids`.
pub async fn count_ids(pool: &PgPool, table: &str, ids: &[Uuid]) -> i64 {
    sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM {table} WHERE id = ANY($1)"
    ))
    .bind(ids)
    .fetch_one(pool)
    .await
    .expect("Failed to count rows")
}

/// Counts fixture rows of all four tables, keyed the way the seeder keys them.
pub async fn fixture_counts(pool: &PgPool) -> [i64; 4] {
    let user_ids: Vec<Uuid> = PLACEHOLDER_DATA.users.iter().map(|u| u.id).collect();
    let customer_ids: Vec<Uuid> = PLACEHOLDER_DATA.customers.iter().map(|c| c.id).collect();
    let invoice_ids: Vec<Uuid> = PLACEHOLDER_DATA
        .invoices
        .iter()
        .enumerate()
        .map(|(i, inv)| inv.derived_id(i))
        .collect();
    let months: Vec<&str> = PLACEHOLDER_DATA.revenue.iter().map(|r| r.month).collect();

    let revenue: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM revenue WHERE month = ANY($1)")
        .bind(&months)
        .fetch_one(pool)
        .await
        .expect("Failed to count revenue");

    [
        count_ids(pool, "users", &user_ids).await,
        count_ids(pool, "customers", &customer_ids).await,
        count_ids(pool, "invoices", &invoice_ids).await,
        revenue,
    ]
}

pub fn expected_fixture_counts() -> [i64; 4] {
    [
        PLACEHOLDER_DATA.users.len() as i64,
        PLACEHOLDER_DATA.customers.len() as i64,
        PLACEHOLDER_DATA.invoices.len() as i64,
        PLACEHOLDER_DATA.revenue.len() as i64,
    ]
}
