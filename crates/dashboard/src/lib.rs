pub mod config;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod password;
pub mod query_builder;
pub mod render;
pub mod request_id;
pub mod seeder;
pub mod store;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use sqlx::PgPool;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    database::Database,
    handlers::{
        customers_page, health_check, list_customers, not_found, seed_database,
    },
    render::Templates,
    request_id::request_id_middleware,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Dashboard API", description = "Customer dashboard and database seeding"),
    paths(
        handlers::health::health_check,
        handlers::seed::seed_database,
        handlers::customers::customers_page,
        handlers::customers::list_customers,
    ),
    components(schemas(
        handlers::SeedResponse,
        models::CustomerPage,
        models::CustomerTableRow,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "seed", description = "Database seeding"),
        (name = "customers", description = "Customer listing"),
    )
)]
pub struct ApiDoc;

pub fn create_router(pool: PgPool, templates: Templates) -> Router {
    let db = Database::new(pool);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/seed", get(seed_database))
        .route("/api/customers", get(list_customers))
        .route("/dashboard/customers", get(customers_page))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(Extension(db))
        .layer(Extension(templates))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(CompressionLayer::new())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}

pub async fn run_server(pool: PgPool, port: u16) -> anyhow::Result<()> {
    let templates = Templates::new()?;
    let app = create_router(pool, templates);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    tracing::info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
