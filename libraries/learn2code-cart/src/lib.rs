//! Learn2Code - Cart
//!
//! Client-side shopping cart for the Learn2Code storefront.
//!
//! This crate provides:
//! - Line items keyed by course id (one entry per course, with a quantity)
//! - Intents (`AddItem`, `UpdateQuantity`, `RemoveItem`, `ClearCart`)
//! - A pure transition function `reduce(&state, intent) -> state`
//! - `CartStore`, an owning wrapper that applies intents in dispatch order
//! - Checkout pricing (subtotal, tax, total)
//!
//! # Architecture
//!
//! `learn2code-cart` performs no I/O:
//! - No network calls (order submission lives in `learn2code-client`)
//! - No persistence (the storefront application saves snapshots)
//!
//! Invalid targets (unknown ids, non-positive quantities on items that are
//! absent) are absorbed as no-ops; there is no error channel.
//!
//! # Example
//!
//! ```rust
//! use learn2code_cart::{CartIntent, CartLineItem, CartStore};
//! use learn2code_core::CourseId;
//! use rust_decimal::Decimal;
//!
//! let mut cart = CartStore::new();
//! let price: Decimal = "39.99".parse().unwrap();
//!
//! cart.dispatch(CartIntent::AddItem(CartLineItem::new(CourseId::new(1), "Scratch Basics", price)));
//! cart.dispatch(CartIntent::AddItem(CartLineItem::new(CourseId::new(1), "Scratch Basics", price)));
//!
//! assert_eq!(cart.state().items().len(), 1);
//! assert_eq!(cart.state().item_count(), 2);
//! assert_eq!(cart.state().total(), "79.98".parse::<Decimal>().unwrap());
//! ```

#![forbid(unsafe_code)]

pub mod checkout;
pub mod reducer;
pub mod store;
pub mod types;

pub use checkout::CheckoutSummary;
pub use reducer::{reduce, CartIntent};
pub use store::CartStore;
pub use types::{CartLineItem, CartState};
