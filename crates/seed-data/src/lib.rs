//! Fixture data for seeding the dashboard database.
//!
//! The records here are compiled into the binary and never change at runtime.
//! [`PLACEHOLDER_DATA`] bundles the four collections the seeder loads, in the
//! shape of a [`FixtureSet`].
//!
//! ```rust,ignore
//! use seed_data::PLACEHOLDER_DATA;
//!
//! assert_eq!(PLACEHOLDER_DATA.users.len(), 1);
//! ```

mod placeholder;
mod records;

pub use placeholder::PLACEHOLDER_DATA;
pub use records::{CustomerFixture, FixtureSet, InvoiceFixture, RevenueFixture, UserFixture};
