//! Server-side HTML rendering.
//!
//! Templates are compiled into the binary and parsed once at startup. Every
//! template name ends in `.html`, so Tera escapes interpolated values.

use std::sync::Arc;

use serde::Serialize;
use tera::{Context, Tera};

use crate::handlers::pagination::{PageItem, page_window};
use crate::models::{CustomerPage, CustomerTableRow};

const LAYOUT: &str = include_str!("../templates/layout.html");
const CUSTOMERS: &str = include_str!("../templates/customers.html");

/// Formats an amount in cents as US dollars, e.g. `$1,234.56`.
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, c) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}${grouped}.{:02}", cents % 100)
}

#[derive(Debug, Serialize)]
struct CustomerView<'a> {
    name: &'a str,
    email: &'a str,
    image_url: &'a str,
    total_invoices: i64,
    total_pending: String,
    total_paid: String,
}

impl<'a> From<&'a CustomerTableRow> for CustomerView<'a> {
    fn from(row: &'a CustomerTableRow) -> Self {
        Self {
            name: &row.name,
            email: &row.email,
            image_url: &row.image_url,
            total_invoices: row.total_invoices,
            total_pending: format_currency(row.total_pending),
            total_paid: format_currency(row.total_paid),
        }
    }
}

#[derive(Debug, Serialize)]
struct PaginationView {
    items: Vec<PageItem>,
    current: i64,
    total: i64,
    previous: Option<i64>,
    next: Option<i64>,
}

impl PaginationView {
    fn new(current: i64, total: i64) -> Self {
        Self {
            items: page_window(current, total),
            current,
            total,
            previous: (current > 1).then(|| current - 1),
            next: (current < total).then(|| current + 1),
        }
    }
}

#[derive(Clone)]
pub struct Templates {
    tera: Arc<Tera>,
}

impl Templates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("layout.html", LAYOUT),
            ("customers.html", CUSTOMERS),
        ])?;
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Renders the customers table and its pagination control.
    pub fn render_customers(&self, query: &str, page: &CustomerPage) -> Result<String, tera::Error> {
        let customers: Vec<CustomerView<'_>> = page.items.iter().map(CustomerView::from).collect();

        let mut context = Context::new();
        context.insert("title", "Customers");
        context.insert("query", query);
        context.insert("customers", &customers);
        context.insert("pagination", &PaginationView::new(page.page, page.total_pages));

        self.tera.render("customers.html", &context)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn row(name: &str, pending: i64, paid: i64) -> CustomerTableRow {
        CustomerTableRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            image_url: "/customers/placeholder.png".to_string(),
            total_invoices: 2,
            total_pending: pending,
            total_paid: paid,
        }
    }

    fn page(items: Vec<CustomerTableRow>, page: i64, total_pages: i64) -> CustomerPage {
        CustomerPage {
            total_count: items.len() as i64,
            items,
            total_pages,
            page,
            page_size: 6,
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(5), "$0.05");
        assert_eq!(format_currency(15795), "$157.95");
        assert_eq!(format_currency(123456789), "$1,234,567.89");
        assert_eq!(format_currency(100000), "$1,000.00");
        assert_eq!(format_currency(-2500), "-$25.00");
    }

    #[test]
    fn test_render_customer_rows() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render_customers("", &page(vec![row("Lee Robinson", 20348, 500)], 1, 1))
            .unwrap();

        assert!(html.contains("<title>Customers | Acme Dashboard</title>"));
        assert!(html.contains("Lee Robinson"));
        assert!(html.contains("$203.48"));
        assert!(html.contains("$5.00"));
        assert!(!html.contains("No customers found."));
    }

    #[test]
    fn test_render_empty_result() {
        let templates = Templates::new().unwrap();
        let html = templates.render_customers("nobody", &page(vec![], 1, 0)).unwrap();

        assert!(html.contains("No customers found."));
        assert!(!html.contains("class=\"pagination\""));
    }

    #[test]
    fn test_render_escapes_user_input() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render_customers("<script>", &page(vec![row("<b>Bold</b>", 0, 0)], 1, 1))
            .unwrap();

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>Bold</b>"));
        assert!(html.contains("&lt;b&gt;Bold&lt;&#x2F;b&gt;"));
    }

    #[test]
    fn test_pagination_links_keep_query() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render_customers("lee rob", &page(vec![row("Lee Robinson", 0, 0)], 2, 3))
            .unwrap();

        assert!(html.contains("query=lee%20rob&amp;page=1"));
        assert!(html.contains("query=lee%20rob&amp;page=3"));
        assert!(html.contains("aria-current=\"page\">2</span>"));
    }

    #[test]
    fn test_pagination_arrows_disabled_at_ends() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render_customers("", &page(vec![row("Amy Burns", 0, 0)], 1, 1))
            .unwrap();

        assert_eq!(html.matches("arrow disabled").count(), 2);
        assert!(!html.contains("page="));
    }

    #[test]
    fn test_pagination_view() {
        let view = PaginationView::new(2, 3);
        assert_eq!(view.previous, Some(1));
        assert_eq!(view.next, Some(3));

        let view = PaginationView::new(1, 1);
        assert_eq!(view.previous, None);
        assert_eq!(view.next, None);
    }
}
