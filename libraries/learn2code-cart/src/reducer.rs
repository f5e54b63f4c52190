//! Cart intents and the pure transition function

use crate::types::{CartLineItem, CartState};
use learn2code_core::CourseId;
use tracing::trace;

/// A named mutation request applied to cart state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartIntent {
    /// Add one seat of a course.
    ///
    /// If the course is already in the cart its quantity is incremented and
    /// the incoming display fields are ignored. Otherwise the item is appended
    /// with quantity 1 regardless of the quantity it carries.
    AddItem(CartLineItem),

    /// Set the quantity of a course. `quantity <= 0` removes the item.
    /// Unknown ids are ignored.
    UpdateQuantity { id: CourseId, quantity: i64 },

    /// Remove a course if present.
    RemoveItem(CourseId),

    /// Empty the cart.
    ClearCart,
}

impl CartIntent {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            CartIntent::AddItem(_) => "ADD_ITEM",
            CartIntent::UpdateQuantity { .. } => "UPDATE_QUANTITY",
            CartIntent::RemoveItem(_) => "REMOVE_ITEM",
            CartIntent::ClearCart => "CLEAR_CART",
        }
    }
}

/// Apply `intent` to `state`, returning the next state.
///
/// Total and deterministic: every intent yields a valid state and the input is
/// never modified.
pub fn reduce(state: &CartState, intent: CartIntent) -> CartState {
    state.clone().apply(intent)
}

impl CartState {
    /// Consuming form of [`reduce`].
    pub fn apply(mut self, intent: CartIntent) -> Self {
        let kind = intent.kind();

        match intent {
            CartIntent::AddItem(item) => self.add_item(item),
            CartIntent::UpdateQuantity { id, quantity } => self.update_quantity(id, quantity),
            CartIntent::RemoveItem(id) => self.remove_item(id),
            CartIntent::ClearCart => self.items_mut().clear(),
        }

        self.recompute();
        trace!(
            intent = kind,
            items = self.items().len(),
            item_count = self.item_count(),
            "Applied cart intent"
        );
        self
    }

    fn add_item(&mut self, item: CartLineItem) {
        let items = self.items_mut();
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
            None => items.push(CartLineItem { quantity: 1, ..item }),
        }
    }

    fn update_quantity(&mut self, id: CourseId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(existing) = self.items_mut().iter_mut().find(|item| item.id == id) {
            existing.quantity = quantity;
        }
    }

    fn remove_item(&mut self, id: CourseId) {
        self.items_mut().retain(|item| item.id != id);
    }
}
