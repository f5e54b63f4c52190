//! End-to-end cart scenarios driven through `CartStore`.

use learn2code_cart::{CartIntent, CartLineItem, CartState, CartStore, CheckoutSummary};
use learn2code_core::CourseId;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn scratch_basics() -> CartLineItem {
    CartLineItem::new(CourseId::new(1), "Scratch Basics", dec("39.99"))
        .with_instructor("Ms. Rivera")
        .with_duration("6 weeks")
        .with_image("/images/scratch.png")
}

#[test]
fn add_add_update_remove_scenario() {
    let mut store = CartStore::new();

    let state = store.dispatch(CartIntent::AddItem(scratch_basics()));
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.total(), dec("39.99"));
    assert_eq!(state.item_count(), 1);

    let state = store.dispatch(CartIntent::AddItem(scratch_basics()));
    assert_eq!(state.items()[0].quantity, 2);
    assert_eq!(state.total(), dec("79.98"));
    assert_eq!(state.item_count(), 2);

    let state = store.dispatch(CartIntent::UpdateQuantity {
        id: CourseId::new(1),
        quantity: 5,
    });
    assert_eq!(state.total(), dec("199.95"));
    assert_eq!(state.item_count(), 5);

    let state = store.dispatch(CartIntent::RemoveItem(CourseId::new(1)));
    assert_eq!(state.items().len(), 0);
    assert_eq!(state.total(), Decimal::ZERO);
}

#[test]
fn display_fields_survive_in_cart() {
    let mut store = CartStore::new();
    store.add_item(scratch_basics());

    let item = &store.state().items()[0];
    assert_eq!(item.instructor, "Ms. Rivera");
    assert_eq!(item.duration, "6 weeks");
    assert_eq!(item.image, "/images/scratch.png");
}

#[test]
fn persisted_cart_resumes_with_fresh_totals() {
    let mut store = CartStore::new();
    store.add_item(scratch_basics());
    store.add_item(CartLineItem::new(CourseId::new(2), "Python Jr", dec("49.99")));
    store.update_quantity(CourseId::new(2), 3);

    let json = serde_json::to_string(store.state()).unwrap();
    let restored: CartState = serde_json::from_str(&json).unwrap();
    let resumed = CartStore::from_state(restored);

    assert_eq!(resumed.state(), store.state());
    assert_eq!(resumed.state().course_ids(), vec![CourseId::new(1), CourseId::new(2)]);
    assert_eq!(resumed.state().total(), dec("189.96"));
}

#[test]
fn checkout_summary_from_store() {
    let mut store = CartStore::new();
    store.add_item(scratch_basics());
    store.add_item(scratch_basics());

    let summary = CheckoutSummary::from_cart(store.state(), dec("0.13"));
    assert_eq!(summary.subtotal, dec("79.98"));
    // 79.98 * 0.13 = 10.3974
    assert_eq!(summary.tax_amount, dec("10.40"));
    assert_eq!(summary.total_amount, dec("90.38"));
}
