//! Checkout and payment history endpoints.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{CheckoutRequest, CheckoutResponse, RequestOptions};
use learn2code_core::{AuthIdentity, Payment, PaymentId, UserId};
use tracing::{debug, info};

/// Payments client.
pub struct PaymentsClient<'a> {
    client: &'a ApiClient,
}

impl<'a> PaymentsClient<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Submit an order. The backend records the payment and enrolls the
    /// purchased courses.
    pub async fn checkout(
        &self,
        identity: &AuthIdentity,
        request: &CheckoutRequest,
    ) -> Result<CheckoutResponse> {
        debug!(
            user_id = %identity.id,
            courses = request.course_ids.len(),
            total = %request.total_amount,
            "Submitting checkout"
        );

        let options = RequestOptions::post()
            .identity(identity)
            .json(serde_json::to_value(request)?);
        let response: CheckoutResponse = self
            .client
            .request_json("/api/payments/checkout", options)
            .await?;

        info!(
            payment_id = %response.payment_id,
            receipt = %response.receipt_number,
            "Checkout complete"
        );
        Ok(response)
    }

    /// Payment history of the signed-in user.
    pub async fn my_payments(&self, identity: &AuthIdentity) -> Result<Vec<Payment>> {
        let payments: Vec<Payment> = self
            .client
            .request_json("/api/payments/me", RequestOptions::get().identity(identity))
            .await?;

        debug!(payments = payments.len(), "Fetched payment history");
        Ok(payments)
    }

    /// Payment history of any user, newest first.
    pub async fn user_payments(&self, user_id: UserId) -> Result<Vec<Payment>> {
        let path = format!("/api/payments/user/{}", user_id);
        self.client.request_json(&path, RequestOptions::get()).await
    }

    /// A single payment.
    pub async fn get_payment(&self, payment_id: PaymentId) -> Result<Payment> {
        let path = format!("/api/payments/{}", payment_id);
        self.client.request_json(&path, RequestOptions::get()).await
    }
}
