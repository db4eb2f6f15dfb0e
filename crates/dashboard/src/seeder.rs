//! Database seeding from the embedded fixture set.
//!
//! Seeding runs one stage per entity in a fixed order: users, customers,
//! invoices, revenue. Each stage creates its table if missing and then issues
//! every insert of the stage concurrently, waiting for all of them before the
//! next stage starts. Inserts never overwrite: a row whose key already exists
//! is left alone, so seeding twice is harmless.
//!
//! Stages are not wrapped in a transaction. When a stage fails, tables seeded
//! by earlier stages stay as they are.

use std::fmt;

use futures::future::try_join_all;
use seed_data::FixtureSet;
use thiserror::Error;
use tracing::{error, info};

use crate::{
    password::hash_password,
    store::{SeedClient, Statement, StoreError},
};

const CREATE_UUID_EXTENSION: &str = r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
"#;

const INSERT_USER: &str = r#"
    INSERT INTO users (id, name, email, password)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT (id) DO NOTHING
"#;

const CREATE_CUSTOMERS: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        image_url VARCHAR(255) NOT NULL
    )
"#;

const INSERT_CUSTOMER: &str = r#"
    INSERT INTO customers (id, name, email, image_url)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT (id) DO NOTHING
"#;

// customer_id deliberately carries no foreign key.
const CREATE_INVOICES: &str = r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        customer_id UUID NOT NULL,
        amount INT NOT NULL,
        status VARCHAR(255) NOT NULL,
        date DATE NOT NULL
    )
"#;

const INSERT_INVOICE: &str = r#"
    INSERT INTO invoices (id, customer_id, amount, status, date)
    VALUES ($1, $2, $3, $4, $5)
    ON CONFLICT (id) DO NOTHING
"#;

const CREATE_REVENUE: &str = r#"
    CREATE TABLE IF NOT EXISTS revenue (
        month VARCHAR(4) NOT NULL UNIQUE,
        revenue INT NOT NULL
    )
"#;

const INSERT_REVENUE: &str = r#"
    INSERT INTO revenue (month, revenue)
    VALUES ($1, $2)
    ON CONFLICT (month) DO NOTHING
"#;

/// The four seeded record kinds, in seeding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Users,
    Customers,
    Invoices,
    Revenue,
}

impl Entity {
    pub const ORDER: [Entity; 4] = [
        Entity::Users,
        Entity::Customers,
        Entity::Invoices,
        Entity::Revenue,
    ];

    pub fn table(self) -> &'static str {
        match self {
            Entity::Users => "users",
            Entity::Customers => "customers",
            Entity::Invoices => "invoices",
            Entity::Revenue => "revenue",
        }
    }

    /// Tables keyed by a generated UUID need the uuid-ossp extension.
    fn needs_uuid_extension(self) -> bool {
        !matches!(self, Entity::Revenue)
    }

    fn create_table_sql(self) -> &'static str {
        match self {
            Entity::Users => CREATE_USERS,
            Entity::Customers => CREATE_CUSTOMERS,
            Entity::Invoices => CREATE_INVOICES,
            Entity::Revenue => CREATE_REVENUE,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

#[derive(Debug, Error)]
pub enum StageError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    #[error("Password hashing task failed: {0}")]
    HashTask(#[from] tokio::task::JoinError),
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to acquire a connection: {0}")]
    Connect(#[source] StoreError),

    #[error("Failed to release the seeding connection: {0}")]
    Release(#[source] StoreError),

    #[error("Error seeding {entity}: {source}")]
    Stage {
        entity: Entity,
        #[source]
        source: StageError,
    },
}

impl SeedError {
    /// The stage that failed, if the failure happened inside one.
    pub fn entity(&self) -> Option<Entity> {
        match self {
            SeedError::Connect(_) | SeedError::Release(_) => None,
            SeedError::Stage { entity, .. } => Some(*entity),
        }
    }
}

/// Outcome of one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    pub entity: Entity,
    /// Inserts issued.
    pub attempted: usize,
    /// Rows actually written; lower than `attempted` when rows already existed.
    pub inserted: u64,
}

/// Outcome of a full seed run, one report per stage in seeding order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub stages: Vec<StageReport>,
}

impl SeedReport {
    pub fn stage(&self, entity: Entity) -> Option<&StageReport> {
        self.stages.iter().find(|s| s.entity == entity)
    }

    pub fn total_inserted(&self) -> u64 {
        self.stages.iter().map(|s| s.inserted).sum()
    }
}

/// Loads a [`FixtureSet`] into a store.
pub struct Seeder<'a> {
    fixtures: &'a FixtureSet<'a>,
}

impl<'a> Seeder<'a> {
    pub fn new(fixtures: &'a FixtureSet<'a>) -> Self {
        Self { fixtures }
    }

    /// Runs every stage against `client`, then releases it.
    ///
    /// The client is released whether seeding succeeded or not. A release
    /// failure after a failed seed is logged and the seed error is returned.
    pub async fn seed<C: SeedClient>(&self, client: C) -> Result<SeedReport, SeedError> {
        let outcome = self.run_stages(&client).await;

        if let Err(e) = client.release().await {
            error!("Failed to release seeding connection: {e}");
            if outcome.is_ok() {
                return Err(SeedError::Release(e));
            }
        }

        outcome
    }

    async fn run_stages<C: SeedClient>(&self, client: &C) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();
        for entity in Entity::ORDER {
            let stage = self.seed_entity(client, entity).await?;
            report.stages.push(stage);
        }
        Ok(report)
    }

    /// Runs a single stage, logging failures with the entity name.
    pub async fn seed_entity<C: SeedClient>(
        &self,
        client: &C,
        entity: Entity,
    ) -> Result<StageReport, SeedError> {
        let result = match entity {
            Entity::Users => self.seed_users(client).await,
            Entity::Customers => self.seed_customers(client).await,
            Entity::Invoices => self.seed_invoices(client).await,
            Entity::Revenue => self.seed_revenue(client).await,
        };

        match result {
            Ok(report) => {
                info!(
                    "Seeded {}/{} {}",
                    report.inserted, report.attempted, entity
                );
                Ok(report)
            }
            Err(source) => {
                error!(entity = %entity, "Error seeding {entity}: {source}");
                Err(SeedError::Stage { entity, source })
            }
        }
    }

    async fn prepare_table<C: SeedClient>(
        &self,
        client: &C,
        entity: Entity,
    ) -> Result<(), StageError> {
        if entity.needs_uuid_extension() {
            client.execute(Statement::new(CREATE_UUID_EXTENSION)).await?;
        }
        client
            .execute(Statement::new(entity.create_table_sql()))
            .await?;
        info!("Created \"{entity}\" table");
        Ok(())
    }

    async fn seed_users<C: SeedClient>(&self, client: &C) -> Result<StageReport, StageError> {
        self.prepare_table(client, Entity::Users).await?;

        let inserted = try_join_all(self.fixtures.users.iter().map(|user| async move {
            let password_hash = hash_off_executor(user.password).await?;
            let statement = Statement::new(INSERT_USER)
                .bind(user.id)
                .bind(user.name)
                .bind(user.email)
                .bind(password_hash);
            Ok::<_, StageError>(client.execute(statement).await?)
        }))
        .await?;

        Ok(stage_report(Entity::Users, &inserted))
    }

    async fn seed_customers<C: SeedClient>(&self, client: &C) -> Result<StageReport, StageError> {
        self.prepare_table(client, Entity::Customers).await?;

        let inserted = try_join_all(self.fixtures.customers.iter().map(|customer| {
            client.execute(
                Statement::new(INSERT_CUSTOMER)
                    .bind(customer.id)
                    .bind(customer.name)
                    .bind(customer.email)
                    .bind(customer.image_url),
            )
        }))
        .await?;

        Ok(stage_report(Entity::Customers, &inserted))
    }

    async fn seed_invoices<C: SeedClient>(&self, client: &C) -> Result<StageReport, StageError> {
        self.prepare_table(client, Entity::Invoices).await?;

        let inserted = try_join_all(self.fixtures.invoices.iter().enumerate().map(
            |(ordinal, invoice)| {
                client.execute(
                    Statement::new(INSERT_INVOICE)
                        .bind(invoice.derived_id(ordinal))
                        .bind(invoice.customer_id)
                        .bind(invoice.amount)
                        .bind(invoice.status)
                        .bind(invoice.date),
                )
            },
        ))
        .await?;

        Ok(stage_report(Entity::Invoices, &inserted))
    }

    async fn seed_revenue<C: SeedClient>(&self, client: &C) -> Result<StageReport, StageError> {
        self.prepare_table(client, Entity::Revenue).await?;

        let inserted = try_join_all(self.fixtures.revenue.iter().map(|rev| {
            client.execute(
                Statement::new(INSERT_REVENUE)
                    .bind(rev.month)
                    .bind(rev.revenue),
            )
        }))
        .await?;

        Ok(stage_report(Entity::Revenue, &inserted))
    }
}

/// argon2 is CPU-bound, so it runs on the blocking pool.
async fn hash_off_executor(password: &str) -> Result<String, StageError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await?
        .map_err(|e| StageError::PasswordHash(e.to_string()))
}

fn stage_report(entity: Entity, rows_affected: &[u64]) -> StageReport {
    StageReport {
        entity,
        attempted: rows_affected.len(),
        inserted: rows_affected.iter().sum(),
    }
}
