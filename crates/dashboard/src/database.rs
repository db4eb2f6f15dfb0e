use sqlx::PgPool;

use crate::errors::AppError;
use crate::handlers::pagination::{ITEMS_PER_PAGE, page_offset, total_pages};
use crate::models::{CustomerPage, CustomerTableRow};
use crate::query_builder::{QueryBuilder, contains_pattern};

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

/// WHERE clause for a customer search plus the index of the next free parameter.
///
/// An empty term matches every customer and binds nothing.
fn customer_search(term: &str) -> (String, usize) {
    let mut qb = QueryBuilder::new();
    if !term.is_empty() {
        qb.add_indexed_condition(|idx| {
            format!("(customers.name ILIKE ${idx} OR customers.email ILIKE ${idx})")
        });
    }
    let next = qb.next_param_idx();
    (qb.build_where_clause(), next)
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Customers matching `term` on name or email, one page at a time,
    /// ordered by name.
    pub async fn fetch_filtered_customers(
        &self,
        term: &str,
        page: i64,
    ) -> Result<Vec<CustomerTableRow>, AppError> {
        let (where_clause, limit_idx) = customer_search(term);
        let offset_idx = limit_idx + 1;
        let sql = format!(
            r#"
            SELECT customers.id, customers.name, customers.email, customers.image_url,
                   COUNT(invoices.id) AS total_invoices,
                   COALESCE(SUM(CASE WHEN invoices.status = 'pending' THEN invoices.amount ELSE 0 END), 0)::BIGINT AS total_pending,
                   COALESCE(SUM(CASE WHEN invoices.status = 'paid' THEN invoices.amount ELSE 0 END), 0)::BIGINT AS total_paid
            FROM customers
            LEFT JOIN invoices ON customers.id = invoices.customer_id
            {where_clause}
            GROUP BY customers.id, customers.name, customers.email, customers.image_url
            ORDER BY customers.name ASC, customers.id ASC
            LIMIT ${limit_idx} OFFSET ${offset_idx}
            "#
        );

        let mut query = sqlx::query_as::<_, CustomerTableRow>(&sql);
        if !term.is_empty() {
            query = query.bind(contains_pattern(term));
        }
        let customers = query
            .bind(ITEMS_PER_PAGE)
            .bind(page_offset(page, ITEMS_PER_PAGE))
            .fetch_all(&self.pool)
            .await?;

        Ok(customers)
    }

    /// Number of customers matching `term`.
    pub async fn count_filtered_customers(&self, term: &str) -> Result<i64, AppError> {
        let (where_clause, _) = customer_search(term);
        let sql = format!("SELECT COUNT(*) FROM customers {where_clause}");

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        if !term.is_empty() {
            query = query.bind(contains_pattern(term));
        }
        let count = query.fetch_one(&self.pool).await?;

        Ok(count)
    }

    /// One page of matching customers together with the page count.
    pub async fn fetch_customer_page(&self, term: &str, page: i64) -> Result<CustomerPage, AppError> {
        let (items, total_count) = tokio::try_join!(
            self.fetch_filtered_customers(term, page),
            self.count_filtered_customers(term),
        )?;

        Ok(CustomerPage {
            items,
            total_count,
            total_pages: total_pages(total_count, ITEMS_PER_PAGE),
            page,
            page_size: ITEMS_PER_PAGE,
        })
    }
}
