use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A customer row with invoice totals, as shown in the customers table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CustomerTableRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    /// Sum of pending invoice amounts, in cents.
    pub total_pending: i64,
    /// Sum of paid invoice amounts, in cents.
    pub total_paid: i64,
}

/// One page of the filtered customer list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CustomerPage {
    pub items: Vec<CustomerTableRow>,
    /// Customers matching the search, across all pages.
    pub total_count: i64,
    pub total_pages: i64,
    pub page: i64,
    pub page_size: i64,
}
