use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::seeder::SeedError;

/// Body returned by the seed endpoint on any failure.
pub const SEED_FAILURE_MESSAGE: &str = "Error seeding database";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Render(#[from] tera::Error),

    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    #[error("Not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Database(e) => {
                error!("Database error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Render(e) => {
                error!("Template error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Seed(e) => {
                error!("{SEED_FAILURE_MESSAGE}: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, SEED_FAILURE_MESSAGE)
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;
    use crate::{seeder::Entity, store::StoreError};

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_seed_error_hides_detail() {
        let err = AppError::Seed(SeedError::Stage {
            entity: Entity::Invoices,
            source: StoreError::Rejected("duplicate key value violates constraint".into()).into(),
        });

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Error seeding database" })
        );
    }

    #[tokio::test]
    async fn test_not_found() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "error": "Not found" }));
    }
}
