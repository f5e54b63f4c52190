/// Checkout and receipt commands
use super::{format_money, Storefront};
use crate::error::{AppError, Result};
use learn2code_cart::{CartState, CheckoutSummary};
use learn2code_client::{BillingDetails, CheckoutRequest};
use learn2code_core::{Payment, StudentId};
use tracing::{info, warn};

/// Billing fields from the command line. Name and email fall back to the
/// signed-in account.
#[derive(Debug, Clone, Default)]
pub struct CheckoutOptions {
    pub billing_name: Option<String>,
    pub billing_email: Option<String>,
    pub card_brand: Option<String>,
    pub card_last4: Option<String>,
    pub student_id: Option<StudentId>,
}

/// Pay for everything in the cart.
///
/// The cart is only cleared once the backend has accepted the order. A failed
/// order leaves it untouched so the user can retry. Once the order is accepted
/// the command reports success even if the cart file cannot be rewritten.
pub async fn checkout(app: &Storefront, options: CheckoutOptions) -> Result<String> {
    let identity = app.require_session().await?;
    let cart = app.store.load_cart().await?;
    if cart.is_empty() {
        return Err(AppError::EmptyCart);
    }

    let billing_name = options
        .billing_name
        .unwrap_or_else(|| identity.name.clone());
    let billing_email = options
        .billing_email
        .unwrap_or_else(|| identity.email.clone());
    if billing_name.trim().is_empty() || billing_email.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Please fill in billing name and email.".to_string(),
        ));
    }

    let summary = CheckoutSummary::from_cart(&cart, app.config.checkout.tax_rate);
    let billing = BillingDetails {
        name: billing_name.trim().to_string(),
        email: billing_email.trim().to_string(),
        card_brand: options.card_brand,
        card_last4: options.card_last4,
        student_id: options.student_id,
    };
    let request = CheckoutRequest::from_cart(&cart, &summary, &app.config.checkout.currency, billing);

    let response = app.client.payments().checkout(&identity, &request).await?;
    match app.store.save_cart(&CartState::new()).await {
        Ok(()) => info!(payment_id = %response.payment_id, "Cart cleared after checkout"),
        Err(e) => warn!(
            payment_id = %response.payment_id,
            error = %e,
            "Order placed but the cart could not be cleared"
        ),
    }

    // The order went through; a failed history lookup only costs the receipt text.
    let payment = match app.client.payments().my_payments(&identity).await {
        Ok(payments) => payments.into_iter().find(|p| p.id == response.payment_id),
        Err(e) => {
            warn!(error = %e, "Could not fetch receipt after checkout");
            None
        }
    };

    let mut out = format!(
        "Payment complete. Receipt #{} (payment {}).",
        response.receipt_number, response.payment_id
    );
    if let Some(payment) = payment {
        out.push_str("\n\n");
        out.push_str(&payment.receipt_text());
    }
    Ok(out)
}

/// Payment history of the signed-in user, newest first.
pub async fn receipts(app: &Storefront, full: bool) -> Result<String> {
    let identity = app.require_session().await?;
    let mut payments = app.client.payments().my_payments(&identity).await?;
    if payments.is_empty() {
        return Ok("No payments yet.".to_string());
    }

    payments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    if full {
        return Ok(payments
            .iter()
            .map(Payment::receipt_text)
            .collect::<Vec<_>>()
            .join("\n"));
    }

    Ok(payments
        .iter()
        .map(|payment| {
            let date = payment
                .created_at
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());
            format!(
                "{:<24} {}  {}",
                payment.receipt_number,
                date,
                format_money(&payment.currency, payment.total_amount)
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
