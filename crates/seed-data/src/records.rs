//! Record types for fixture rows.

use time::Date;
use uuid::Uuid;

/// Namespace for deriving invoice ids from fixture contents.
const INVOICE_NAMESPACE: Uuid = uuid::uuid!("6f1c2a7e-3b1d-5e0a-9c4f-2d8b7a6e5f10");

/// A user with a plaintext password. The seeder hashes it before insert.
#[derive(Debug, Clone, Copy)]
pub struct UserFixture<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct CustomerFixture<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub image_url: &'a str,
}

/// An invoice without an id; see [`InvoiceFixture::derived_id`].
#[derive(Debug, Clone, Copy)]
pub struct InvoiceFixture<'a> {
    pub customer_id: Uuid,
    /// Amount in cents.
    pub amount: i32,
    pub status: &'a str,
    pub date: Date,
}

impl InvoiceFixture<'_> {
    /// Stable id for the invoice at `ordinal` in its collection.
    ///
    /// Two invoices with identical contents still get distinct ids as long as
    /// their positions differ, and re-running the seed produces the same ids.
    pub fn derived_id(&self, ordinal: usize) -> Uuid {
        let name = format!(
            "{ordinal}:{}:{}:{}:{}",
            self.customer_id, self.amount, self.status, self.date
        );
        Uuid::new_v5(&INVOICE_NAMESPACE, name.as_bytes())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RevenueFixture<'a> {
    /// Short month label, at most four characters ("Jan", "Feb", ...).
    pub month: &'a str,
    pub revenue: i32,
}

/// The four collections loaded by one seed run.
#[derive(Debug, Clone, Copy)]
pub struct FixtureSet<'a> {
    pub users: &'a [UserFixture<'a>],
    pub customers: &'a [CustomerFixture<'a>],
    pub invoices: &'a [InvoiceFixture<'a>],
    pub revenue: &'a [RevenueFixture<'a>],
}

impl FixtureSet<'_> {
    /// Total number of rows across all collections.
    pub fn row_count(&self) -> usize {
        self.users.len() + self.customers.len() + self.invoices.len() + self.revenue.len()
    }
}
