//! Customer list handlers.

use axum::{
    Extension,
    extract::Query,
    response::{Html, Json},
};
use utoipa::IntoParams;

use crate::{
    database::Database, errors::AppError, handlers::pagination::parse_page,
    models::CustomerPage, render::Templates,
};

/// Customer list query parameters.
///
/// `page` stays a string so that malformed values fall back to page 1
/// instead of rejecting the request. Handlers extract the raw pairs and build
/// this with [`CustomersQuery::from_pairs`], so repeated keys are never a 400.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CustomersQuery {
    /// Case-insensitive substring of the customer's name or email
    pub query: Option<String>,
    /// 1-based page number
    pub page: Option<String>,
}

impl CustomersQuery {
    /// Collects decoded query-string pairs. A repeated `query` keeps its last
    /// value; a repeated `page` is ambiguous and counts as malformed.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        let mut page_seen = false;
        for (key, value) in pairs {
            match key.as_str() {
                "query" => params.query = Some(value),
                "page" if page_seen => params.page = Some(String::new()),
                "page" => {
                    page_seen = true;
                    params.page = Some(value);
                }
                _ => {}
            }
        }
        params
    }

    pub fn search_term(&self) -> &str {
        self.query.as_deref().unwrap_or("").trim()
    }

    pub fn current_page(&self) -> i64 {
        parse_page(self.page.as_deref())
    }
}

/// Render the customers page.
#[utoipa::path(
    get,
    path = "/dashboard/customers",
    tag = "customers",
    params(CustomersQuery),
    responses(
        (status = 200, description = "Customers table with pagination", body = String, content_type = "text/html"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn customers_page(
    Extension(db): Extension<Database>,
    Extension(templates): Extension<Templates>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let params = CustomersQuery::from_pairs(pairs);
    let term = params.search_term();
    let page = db.fetch_customer_page(term, params.current_page()).await?;
    let html = templates.render_customers(term, &page)?;
    Ok(Html(html))
}

/// List customers as JSON.
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "customers",
    params(CustomersQuery),
    responses(
        (status = 200, description = "One page of matching customers", body = CustomerPage),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_customers(
    Extension(db): Extension<Database>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<CustomerPage>, AppError> {
    let params = CustomersQuery::from_pairs(pairs);
    let page = db
        .fetch_customer_page(params.search_term(), params.current_page())
        .await?;
    Ok(Json(page))
}
