//! Error types for cart and favorite item construction.

use thiserror::Error;

/// Errors raised while building cart or favorite items from caller input.
///
/// The store operations themselves never fail on a well-formed item; these
/// errors surface at the edge where raw numbers become [`super::Quantity`]
/// values or priced items.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// Quantity was zero or negative.
    #[error("Invalid quantity {value}: quantity must be at least 1")]
    InvalidQuantity {
        /// The rejected value
        value: i64,
    },

    /// Quantity does not fit the stored representation.
    #[error("Quantity {value} is too large")]
    QuantityOverflow {
        /// The rejected value
        value: i64,
    },

    /// Unit price was negative.
    #[error("Invalid price {price} for product {id}")]
    NegativePrice {
        /// Product the price belongs to
        id: i64,
        /// The rejected price, as text
        price: String,
    },

    /// Unit price is above [`crate::constants::MAX_PRICE`].
    #[error("Price {price} for product {id} exceeds the maximum of {max}")]
    PriceTooLarge {
        /// Product the price belongs to
        id: i64,
        /// The rejected price, as text
        price: String,
        /// The largest accepted price, as text
        max: String,
    },

    /// Unit price has more precision than a stored snapshot can hold.
    #[error("Price {price} for product {id} has too many significant digits to be stored")]
    PriceNotRepresentable {
        /// Product the price belongs to
        id: i64,
        /// The rejected price, as text
        price: String,
    },
}

impl ItemError {
    /// Check if this error is about a quantity value.
    pub fn is_quantity_error(&self) -> bool {
        matches!(
            self,
            ItemError::InvalidQuantity { .. } | ItemError::QuantityOverflow { .. }
        )
    }

    /// Check if this error is about a price value.
    pub fn is_price_error(&self) -> bool {
        matches!(
            self,
            ItemError::NegativePrice { .. }
                | ItemError::PriceTooLarge { .. }
                | ItemError::PriceNotRepresentable { .. }
        )
    }
}

impl From<ItemError> for crate::Error {
    fn from(err: ItemError) -> Self {
        crate::Error::Item(err)
    }
}
