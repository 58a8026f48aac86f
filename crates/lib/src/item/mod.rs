//! Item types held by the store.
//!
//! A product is identified by its [`ProductId`]; the same id space is shared by
//! cart lines and favorites, but the two collections are independent.

mod errors;

use std::fmt;
use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_PRICE;

pub use errors::ItemError;

/// Identity of a product listing.
///
/// Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Number of units of a product in the cart. Always at least 1.
///
/// Zero and negative quantities are rejected at construction, so no cart line
/// can ever hold or persist one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    pub const ONE: Quantity = Quantity(NonZeroU32::MIN);

    /// Create a quantity, rejecting zero.
    pub fn new(value: u32) -> Result<Self, ItemError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(ItemError::InvalidQuantity { value: 0 })
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Sum of two quantities, saturating at `u32::MAX`.
    pub fn saturating_add(self, other: Quantity) -> Quantity {
        Quantity(self.0.saturating_add(other.get()))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for Quantity {
    type Error = ItemError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Quantity::new(value)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = ItemError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 1 {
            return Err(ItemError::InvalidQuantity { value });
        }
        let value = u32::try_from(value).map_err(|_| ItemError::QuantityOverflow { value })?;
        Quantity::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A price as it is written to a snapshot.
#[derive(Serialize, Deserialize)]
struct StoredPrice(#[serde(with = "rust_decimal::serde::float")] Decimal);

/// Whether `price` reads back unchanged after a snapshot write.
fn survives_snapshot(price: Decimal) -> bool {
    serde_json::to_string(&StoredPrice(price))
        .ok()
        .and_then(|json| serde_json::from_str::<StoredPrice>(&json).ok())
        .is_some_and(|stored| stored.0 == price)
}

fn check_price(id: ProductId, price: Decimal) -> Result<(), ItemError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ItemError::NegativePrice {
            id: id.get(),
            price: price.to_string(),
        });
    }
    let max = Decimal::from(MAX_PRICE);
    if price > max {
        return Err(ItemError::PriceTooLarge {
            id: id.get(),
            price: price.to_string(),
            max: max.to_string(),
        });
    }
    if !survives_snapshot(price) {
        return Err(ItemError::PriceNotRepresentable {
            id: id.get(),
            price: price.to_string(),
        });
    }
    Ok(())
}

/// A line in the shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: Quantity,
    /// Unit-of-sale label, e.g. "kg".
    pub unit: String,
    /// Display attribution only; not a reference to a farmer record.
    pub farmer: String,
    pub image: String,
}

impl CartItem {
    /// Create a cart line with empty display attributes.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: Decimal,
        quantity: Quantity,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            quantity,
            unit: String::new(),
            farmer: String::new(),
            image: String::new(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_farmer(mut self, farmer: impl Into<String>) -> Self {
        self.farmer = farmer.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// `price × quantity` for this line, saturating at the `Decimal` range.
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity.get()))
    }

    /// Reject items a storefront should never offer.
    pub fn validate(&self) -> Result<(), ItemError> {
        check_price(self.id, self.price)
    }
}

/// A product the user has marked as a favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub id: ProductId,
    pub name: String,
    pub farmer: String,
    pub location: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub unit: String,
    pub image: String,
}

impl FavoriteItem {
    /// Create a favorite with empty display attributes.
    pub fn new(id: i64, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            farmer: String::new(),
            location: String::new(),
            price,
            unit: String::new(),
            image: String::new(),
        }
    }

    pub fn with_farmer(mut self, farmer: impl Into<String>) -> Self {
        self.farmer = farmer.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Build the cart line for buying this favorite. `location` has no cart counterpart.
    pub fn to_cart_item(&self, quantity: Quantity) -> CartItem {
        CartItem {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            quantity,
            unit: self.unit.clone(),
            farmer: self.farmer.clone(),
            image: self.image.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ItemError> {
        check_price(self.id, self.price)
    }
}
