//! Database seeding trigger.

use axum::{Extension, response::Json};
use seed_data::PLACEHOLDER_DATA;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    database::Database,
    errors::AppError,
    seeder::{SeedError, Seeder},
    store::PgSeedClient,
};

pub const SEED_SUCCESS_MESSAGE: &str = "Database seeded successfully";

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedResponse {
    pub message: String,
}

/// Create the tables and load the placeholder data.
///
/// Safe to call again: existing rows are left untouched.
#[utoipa::path(
    get,
    path = "/api/seed",
    tag = "seed",
    responses(
        (status = 200, description = "Database seeded", body = SeedResponse),
        (status = 500, description = "Seeding failed")
    )
)]
pub async fn seed_database(
    Extension(db): Extension<Database>,
) -> Result<Json<SeedResponse>, AppError> {
    let client = PgSeedClient::acquire(db.pool())
        .await
        .map_err(SeedError::Connect)?;

    let report = Seeder::new(&PLACEHOLDER_DATA).seed(client).await?;
    tracing::info!(
        inserted = report.total_inserted(),
        "Database seeded"
    );

    Ok(Json(SeedResponse {
        message: SEED_SUCCESS_MESSAGE.to_string(),
    }))
}
