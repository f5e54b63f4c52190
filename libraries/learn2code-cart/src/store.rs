//! Owning cart store

use crate::reducer::CartIntent;
use crate::types::{CartLineItem, CartState};
use learn2code_core::CourseId;

/// Holds the session's `CartState` and applies intents one at a time.
///
/// The store is the only writer of its state; readers get shared references
/// through [`CartStore::state`].
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// Create a store with an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a previously saved cart
    pub fn from_state(state: CartState) -> Self {
        // Re-derive in case the snapshot was assembled by hand.
        Self {
            state: CartState::from_items(state.items().to_vec()),
        }
    }

    /// Apply an intent and return the resulting state
    pub fn dispatch(&mut self, intent: CartIntent) -> &CartState {
        let current = std::mem::take(&mut self.state);
        self.state = current.apply(intent);
        &self.state
    }

    /// Current state
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Whether the course is in the cart
    pub fn contains(&self, id: CourseId) -> bool {
        self.state.contains(id)
    }

    pub fn add_item(&mut self, item: CartLineItem) -> &CartState {
        self.dispatch(CartIntent::AddItem(item))
    }

    pub fn update_quantity(&mut self, id: CourseId, quantity: i64) -> &CartState {
        self.dispatch(CartIntent::UpdateQuantity { id, quantity })
    }

    pub fn remove_item(&mut self, id: CourseId) -> &CartState {
        self.dispatch(CartIntent::RemoveItem(id))
    }

    pub fn clear(&mut self) -> &CartState {
        self.dispatch(CartIntent::ClearCart)
    }

    /// Give up the store, keeping the state (e.g. to persist it)
    pub fn into_state(self) -> CartState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(id: i64, price: &str) -> CartLineItem {
        CartLineItem::new(CourseId::new(id), "Course", price.parse().unwrap())
    }

    #[test]
    fn dispatch_applies_in_order() {
        let mut store = CartStore::new();
        store.add_item(item(1, "10"));
        store.add_item(item(2, "2.50"));
        store.update_quantity(CourseId::new(2), 4);
        store.remove_item(CourseId::new(1));

        let state = store.state();
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.item_count(), 4);
        assert_eq!(state.total(), "10.00".parse::<Decimal>().unwrap());
    }

    #[test]
    fn contains_tracks_membership() {
        let mut store = CartStore::new();
        assert!(!store.contains(CourseId::new(1)));

        store.add_item(item(1, "1"));
        assert!(store.contains(CourseId::new(1)));

        store.clear();
        assert!(!store.contains(CourseId::new(1)));
    }

    #[test]
    fn round_trips_through_into_state() {
        let mut store = CartStore::new();
        store.add_item(item(3, "7"));
        store.add_item(item(3, "7"));

        let resumed = CartStore::from_state(store.into_state());
        assert_eq!(resumed.state().item_count(), 2);
        assert_eq!(resumed.state().total(), Decimal::from(14));
    }
}
