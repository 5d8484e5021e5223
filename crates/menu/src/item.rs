use serde::{Deserialize, Serialize};

use stand_core::{Entity, Money};

/// A sellable item: identity plus per-unit economics.
///
/// Immutable after construction. Nothing is validated: a selling price below
/// the wholesale cost (or a negative amount) is stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    name: String,
    wholesale_cost: Money,
    selling_price: Money,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, wholesale_cost: Money, selling_price: Money) -> Self {
        Self {
            name: name.into(),
            wholesale_cost,
            selling_price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wholesale_cost(&self) -> Money {
        self.wholesale_cost
    }

    pub fn selling_price(&self) -> Money {
        self.selling_price
    }

    /// Profit earned per unit sold (`selling_price - wholesale_cost`).
    pub fn unit_profit(&self) -> Money {
        self.selling_price - self.wholesale_cost
    }
}

impl Entity for MenuItem {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
