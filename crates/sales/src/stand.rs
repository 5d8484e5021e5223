use std::collections::HashMap;

use tracing::{debug, info, warn};

use stand_core::{AggregateRoot, DomainError, DomainResult, Entity, Money};
use stand_menu::MenuItem;

use crate::day_record::{DaySalesRecord, SalesQuantities};

/// Aggregate root: Stand.
///
/// Owns the menu catalog and the sales history. `history[i].day() == i` holds
/// for every recorded day and `current_day` always equals the history length.
///
/// Profit is resolved through the catalog at query time, never snapshotted into
/// the day records: replacing a menu item re-prices every past day as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stand {
    name: String,
    current_day: u64,
    catalog: HashMap<String, MenuItem>,
    history: Vec<DaySalesRecord>,
}

impl Stand {
    /// Create a stand with an empty menu on day 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_day: 0,
            catalog: HashMap::new(),
            history: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Day number the next recorded sales will be filed under.
    pub fn current_day(&self) -> u64 {
        self.current_day
    }

    pub fn history(&self) -> &[DaySalesRecord] {
        &self.history
    }

    pub fn menu_item(&self, name: &str) -> Option<&MenuItem> {
        self.catalog.get(name)
    }

    /// Iterate the catalog (unordered).
    pub fn menu_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.catalog.values()
    }

    /// Add `item` to the menu, replacing any item with the same name.
    pub fn add_menu_item(&mut self, item: MenuItem) {
        let name = item.id().clone();
        match self.catalog.insert(name, item) {
            Some(previous) => info!(
                stand = %self.name,
                item = %previous.name(),
                "menu item replaced; profit for past days now uses the new prices"
            ),
            None => debug!(stand = %self.name, item_count = self.catalog.len(), "menu item added"),
        }
    }

    /// Record today's sales and advance to the next day.
    ///
    /// Every item name is checked against the menu before anything is stored;
    /// on error the stand is left untouched. When several names are unknown the
    /// error reports the lexicographically smallest.
    pub fn record_sales_for_day(&mut self, quantities: SalesQuantities) -> DomainResult<()> {
        if let Some(unknown) = quantities
            .keys()
            .filter(|name| !self.catalog.contains_key(name.as_str()))
            .min()
        {
            warn!(
                stand = %self.name,
                day = self.current_day,
                item = %unknown,
                "sales rejected: item is not on the menu"
            );
            return Err(DomainError::invalid_sales_item(unknown.as_str()));
        }

        let day = self.current_day;
        let item_count = quantities.len();
        self.history.push(DaySalesRecord::new(day, quantities));
        self.current_day += 1;

        info!(stand = %self.name, day, item_count, "sales recorded");
        Ok(())
    }

    /// Quantities recorded for `day`, or `None` when that day was never recorded.
    pub fn sales_for_day(&self, day: i64) -> Option<&SalesQuantities> {
        self.record_for_day(day).map(DaySalesRecord::quantities)
    }

    /// Units of `item_name` sold on `day`.
    ///
    /// Returns 0 for a negative day, a day not yet recorded, or an item absent
    /// from that day's record.
    pub fn sales_of_item_for_day(&self, day: i64, item_name: &str) -> i64 {
        self.record_for_day(day)
            .map_or(0, |record| record.quantity_of(item_name))
    }

    /// Units of `item_name` sold over the whole history. Does not consult the menu.
    ///
    /// Saturates at the `i64` bounds, like [`Money`] arithmetic.
    pub fn total_sales_for_item(&self, item_name: &str) -> i64 {
        self.history
            .iter()
            .map(|record| record.quantity_of(item_name))
            .fold(0, i64::saturating_add)
    }

    /// Profit on `item_name` over the whole history, priced with its current
    /// menu entry. Zero when the item is not on the menu.
    pub fn total_profit_for_item(&self, item_name: &str) -> Money {
        self.catalog.get(item_name).map_or(Money::ZERO, |item| {
            let sold = self.total_sales_for_item(item_name);
            item.unit_profit().times(sold)
        })
    }

    /// Profit summed over every item currently on the menu.
    pub fn total_profit_for_stand(&self) -> Money {
        self.catalog
            .keys()
            .map(|name| self.total_profit_for_item(name))
            .sum()
    }

    fn record_for_day(&self, day: i64) -> Option<&DaySalesRecord> {
        usize::try_from(day)
            .ok()
            .and_then(|index| self.history.get(index))
    }
}

impl AggregateRoot for Stand {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }

    fn version(&self) -> u64 {
        self.current_day
    }
}
