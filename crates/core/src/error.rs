//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic business failures live here. Lookups that miss (unknown
/// item, out-of-range day) are defined zero results, not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A sales submission named an item that is not on the menu.
    #[error("invalid item: {item_name} is not on the menu")]
    InvalidSalesItem { item_name: String },
}

impl DomainError {
    pub fn invalid_sales_item(item_name: impl Into<String>) -> Self {
        Self::InvalidSalesItem {
            item_name: item_name.into(),
        }
    }

    /// Name of the offending item, for diagnostics.
    pub fn item_name(&self) -> &str {
        match self {
            Self::InvalidSalesItem { item_name } => item_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_sales_item_message_names_the_item() {
        let err = DomainError::invalid_sales_item("boori");
        assert_eq!(err.to_string(), "invalid item: boori is not on the menu");
        assert_eq!(err.item_name(), "boori");
    }
}
