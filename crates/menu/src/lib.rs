//! Menu domain module.
//!
//! Menu items describe what a stand sells and what each unit costs and earns,
//! implemented as plain deterministic domain values (no IO, no storage).

pub mod item;

pub use item::MenuItem;
