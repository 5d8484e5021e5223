//! Stand sales domain module.
//!
//! A [`Stand`] owns its menu catalog and its day-by-day sales history, and
//! derives sales and profit totals from them on demand. Pure in-memory domain
//! logic (no IO, no HTTP, no storage).

pub mod day_record;
pub mod stand;

pub use day_record::{DaySalesRecord, SalesQuantities};
pub use stand::Stand;
