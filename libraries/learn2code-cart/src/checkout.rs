//! Checkout pricing

use crate::types::CartState;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Amounts submitted with an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,

    /// `subtotal * tax_rate`, rounded to cents
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_amount: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}

impl CheckoutSummary {
    /// Price a cart at the given tax rate (0.13 = 13%).
    pub fn from_cart(cart: &CartState, tax_rate: Decimal) -> Self {
        let subtotal = round_cents(cart.total());
        let tax_amount = round_cents(
            subtotal
                .checked_mul(tax_rate.max(Decimal::ZERO))
                .unwrap_or(Decimal::MAX),
        );

        Self {
            subtotal,
            tax_amount,
            total_amount: subtotal.checked_add(tax_amount).unwrap_or(Decimal::MAX),
        }
    }
}

fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
