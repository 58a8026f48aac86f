//! Cart totals as shown on the cart and checkout pages.
//!
//! The store never computes money; callers derive a [`CartSummary`] from a
//! cart snapshot whenever they render one.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{constants::DEFAULT_DELIVERY_FEE, item::CartItem};

/// Totals for a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    /// Number of distinct cart lines.
    pub lines: usize,
    /// Sum of quantities, as shown on the cart badge.
    pub item_count: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery_fee: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl CartSummary {
    /// Summarize `cart`, adding a flat `delivery_fee`.
    ///
    /// The fee applies even to an empty cart. Money sums saturate at the
    /// `Decimal` range instead of overflowing.
    pub fn of(cart: &[CartItem], delivery_fee: Decimal) -> Self {
        let subtotal = cart
            .iter()
            .map(CartItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        Self {
            lines: cart.len(),
            item_count: cart.iter().map(|line| u64::from(line.quantity.get())).sum(),
            subtotal,
            delivery_fee,
            total: subtotal.saturating_add(delivery_fee),
        }
    }

    /// Summarize `cart` with [`DEFAULT_DELIVERY_FEE`].
    pub fn with_default_fee(cart: &[CartItem]) -> Self {
        Self::of(cart, Decimal::from(DEFAULT_DELIVERY_FEE))
    }
}
