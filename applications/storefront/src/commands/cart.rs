/// Cart commands
///
/// The cart lives in `cart.json`; every command loads it, dispatches one
/// intent through a `CartStore` and writes the result back.
use super::Storefront;
use crate::error::{AppError, Result};
use learn2code_cart::{CartLineItem, CartState, CartStore, CheckoutSummary};
use learn2code_core::CourseId;
use rust_decimal::Decimal;
use tracing::debug;

pub async fn show(app: &Storefront) -> Result<String> {
    let cart = app.store.load_cart().await?;
    Ok(render(app, &cart))
}

/// Look the course up in the catalog and add one seat of it.
pub async fn add(app: &Storefront, id: CourseId) -> Result<String> {
    app.require_session().await?;

    let courses = app.client.catalog().list_courses().await?;
    let course = courses
        .iter()
        .find(|course| course.id == id)
        .ok_or(AppError::CourseNotFound(id))?;

    let mut store = load_store(app).await?;
    let quantity = store
        .add_item(CartLineItem::from(course))
        .get(id)
        .map_or(0, |item| item.quantity);
    save_store(app, store).await?;

    Ok(format!(
        "Added {} to your cart (quantity {}).",
        course.title, quantity
    ))
}

pub async fn remove(app: &Storefront, id: CourseId) -> Result<String> {
    let mut store = load_store(app).await?;
    let title = store
        .state()
        .get(id)
        .map(|item| item.title.clone())
        .ok_or(AppError::NotInCart(id))?;

    store.remove_item(id);
    save_store(app, store).await?;
    Ok(format!("Removed {} from your cart.", title))
}

/// Set a quantity; zero or less removes the course.
pub async fn set_quantity(app: &Storefront, id: CourseId, quantity: i64) -> Result<String> {
    let mut store = load_store(app).await?;
    if !store.contains(id) {
        return Err(AppError::NotInCart(id));
    }

    let updated = store.update_quantity(id, quantity).get(id).cloned();
    save_store(app, store).await?;

    Ok(match updated {
        Some(item) => format!("{} quantity set to {}.", item.title, item.quantity),
        None => format!("Removed course {} from your cart.", id),
    })
}

pub async fn clear(app: &Storefront) -> Result<String> {
    let mut store = load_store(app).await?;
    store.clear();
    save_store(app, store).await?;
    Ok("Cart cleared.".to_string())
}

/// Line items followed by the priced summary shown before checkout.
pub fn render(app: &Storefront, cart: &CartState) -> String {
    if cart.is_empty() {
        return "Your cart is empty.".to_string();
    }

    let mut lines: Vec<String> = cart
        .items()
        .iter()
        .map(|item| {
            format!(
                "#{:<4} {:<40} x{:<3} {}",
                item.id.get(),
                item.title,
                item.quantity,
                app.money(item.line_total())
            )
        })
        .collect();

    let tax_rate = app.config.checkout.tax_rate;
    let summary = CheckoutSummary::from_cart(cart, tax_rate);
    let percent = (tax_rate * Decimal::ONE_HUNDRED).normalize();

    lines.push(String::new());
    lines.push(format!("Items: {}", cart.item_count()));
    lines.push(format!("Subtotal: {}", app.money(summary.subtotal)));
    lines.push(format!("Tax ({}%): {}", percent, app.money(summary.tax_amount)));
    lines.push(format!("Total: {}", app.money(summary.total_amount)));
    lines.join("\n")
}

async fn load_store(app: &Storefront) -> Result<CartStore> {
    Ok(CartStore::from_state(app.store.load_cart().await?))
}

async fn save_store(app: &Storefront, store: CartStore) -> Result<()> {
    let state = store.into_state();
    debug!(items = state.items().len(), total = %state.total(), "Persisting cart");
    app.store.save_cart(&state).await
}
