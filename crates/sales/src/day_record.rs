use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stand_core::ValueObject;

/// Units sold per item name for a single day.
pub type SalesQuantities = HashMap<String, i64>;

/// One day's sold quantities, keyed by item name.
///
/// The day number is assigned by the owning stand. The quantities are moved in
/// at construction and only exposed by shared reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySalesRecord {
    day: u64,
    quantities: SalesQuantities,
}

impl DaySalesRecord {
    pub fn new(day: u64, quantities: SalesQuantities) -> Self {
        Self { day, quantities }
    }

    pub fn day(&self) -> u64 {
        self.day
    }

    pub fn quantities(&self) -> &SalesQuantities {
        &self.quantities
    }

    /// Units of `item_name` sold that day, 0 when the item is absent.
    pub fn quantity_of(&self, item_name: &str) -> i64 {
        self.quantities.get(item_name).copied().unwrap_or(0)
    }
}

impl ValueObject for DaySalesRecord {}
