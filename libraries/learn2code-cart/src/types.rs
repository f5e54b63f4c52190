//! Cart data types

use learn2code_core::{Course, CourseId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One course entry in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Course identifier (unique within the cart)
    pub id: CourseId,

    /// Display title
    pub title: String,

    /// Display instructor name
    #[serde(default)]
    pub instructor: String,

    /// Display duration (e.g. "8 weeks")
    #[serde(default)]
    pub duration: String,

    /// Display image URL
    #[serde(default)]
    pub image: String,

    /// Unit price (non-negative)
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Number of seats, always >= 1 while the item is in the cart
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl CartLineItem {
    /// Create a line item with quantity 1 and empty display fields
    pub fn new(id: CourseId, title: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            title: title.into(),
            instructor: String::new(),
            duration: String::new(),
            image: String::new(),
            price: price.max(Decimal::ZERO),
            quantity: 1,
        }
    }

    /// Set the instructor display name
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Set the duration display string
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Set the image URL
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// `price * quantity`, saturating at `Decimal::MAX`
    pub fn line_total(&self) -> Decimal {
        self.price
            .checked_mul(Decimal::from(self.quantity))
            .unwrap_or(Decimal::MAX)
    }
}

impl From<&Course> for CartLineItem {
    fn from(course: &Course) -> Self {
        let item = CartLineItem::new(course.id, course.title.clone(), course.price);
        match &course.image_url {
            Some(image) => item.with_image(image.clone()),
            None => item,
        }
    }
}

/// Cart contents plus the fields derived from them.
///
/// `total` and `item_count` have no setters: every constructor and every
/// intent recomputes them from `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "CartSnapshot")]
pub struct CartState {
    items: Vec<CartLineItem>,

    #[serde(with = "rust_decimal::serde::float")]
    total: Decimal,

    item_count: u64,
}

/// Persisted form of a cart. Stored totals are ignored on load.
#[derive(Deserialize)]
struct CartSnapshot {
    #[serde(default)]
    items: Vec<CartLineItem>,
}

impl From<CartSnapshot> for CartState {
    fn from(snapshot: CartSnapshot) -> Self {
        CartState::from_items(snapshot.items)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

impl CartState {
    /// Empty cart
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            total: Decimal::ZERO,
            item_count: 0,
        }
    }

    /// Build a cart from arbitrary line items.
    ///
    /// Duplicate ids are merged (quantities summed, first entry's fields kept)
    /// and zero-quantity entries are dropped, so the result upholds the same
    /// invariants as a cart built through intents.
    pub fn from_items(items: impl IntoIterator<Item = CartLineItem>) -> Self {
        let mut merged: Vec<CartLineItem> = Vec::new();
        for mut item in items {
            if item.quantity == 0 {
                continue;
            }
            // Deserialized items bypass `CartLineItem::new`
            item.price = item.price.max(Decimal::ZERO);
            match merged.iter_mut().find(|existing| existing.id == item.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => merged.push(item),
            }
        }

        let mut state = Self {
            items: merged,
            total: Decimal::ZERO,
            item_count: 0,
        };
        state.recompute();
        state
    }

    /// Line items in insertion order
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of `price * quantity` over all items
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Sum of quantities over all items
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a line item by course id
    pub fn get(&self, id: CourseId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether the course is already in the cart
    pub fn contains(&self, id: CourseId) -> bool {
        self.get(id).is_some()
    }

    /// Course ids in cart order
    pub fn course_ids(&self) -> Vec<CourseId> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<CartLineItem> {
        &mut self.items
    }

    pub(crate) fn recompute(&mut self) {
        self.total = self
            .items
            .iter()
            .map(CartLineItem::line_total)
            .fold(Decimal::ZERO, |total, line| {
                total.checked_add(line).unwrap_or(Decimal::MAX)
            });
        self.item_count = self.items.iter().map(|item| u64::from(item.quantity)).sum();
    }
}
