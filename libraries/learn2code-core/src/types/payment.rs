/// Payment domain types
use crate::types::{Course, PaymentId};
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A completed (or attempted) payment as recorded by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Unique payment identifier
    pub id: PaymentId,

    /// Subtotal before tax
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Tax charged on top of the subtotal
    #[serde(default, with = "rust_decimal::serde::float")]
    pub tax_amount: Decimal,

    /// Amount charged
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,

    /// ISO currency code
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Payment method (e.g. "card")
    #[serde(default)]
    pub method: Option<String>,

    /// Payment provider
    #[serde(default)]
    pub provider: Option<String>,

    /// Provider status string (e.g. "completed")
    #[serde(default)]
    pub status: Option<String>,

    /// Human-facing receipt number
    pub receipt_number: String,

    #[serde(default)]
    pub card_brand: Option<String>,

    #[serde(default)]
    pub card_last4: Option<String>,

    #[serde(default)]
    pub billing_name: Option<String>,

    #[serde(default)]
    pub billing_email: Option<String>,

    /// When the payment was recorded
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Courses bought with this payment, when the backend includes them
    #[serde(default)]
    pub courses: Vec<Course>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Payment {
    /// Render the downloadable plain-text receipt.
    pub fn receipt_text(&self) -> String {
        let date = self
            .created_at
            .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "-".to_string());

        let mut method = self
            .card_brand
            .as_deref()
            .filter(|brand| !brand.is_empty())
            .map(str::to_uppercase)
            .or_else(|| self.method.clone())
            .unwrap_or_default();
        if let Some(last4) = self.card_last4.as_deref().filter(|l| !l.is_empty()) {
            method.push_str(" •••• ");
            method.push_str(last4);
        }

        let mut lines = vec![
            "Learn2Code Receipt".to_string(),
            format!("Receipt #: {}", self.receipt_number),
            format!("Date: {}", date),
            format!("Method: {}", method),
            format!("Subtotal: {}", self.money(self.amount)),
            format!("Tax: {}", self.money(self.tax_amount)),
            format!("Total: {}", self.money(self.total_amount)),
            format!(
                "Billed to: {} <{}>",
                self.billing_name.as_deref().unwrap_or_default(),
                self.billing_email.as_deref().unwrap_or_default()
            ),
            String::new(),
        ];
        if !self.courses.is_empty() {
            lines.push("Courses:".to_string());
            for course in &self.courses {
                lines.push(format!(" - {} ({})", course.title, self.money(course.price)));
            }
        }
        lines.push(String::new());
        lines.push("Thank you for your purchase!".to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn money(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{} {:.2}", self.currency, rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CourseId;
    use chrono::TimeZone;

    fn sample() -> Payment {
        serde_json::from_value(serde_json::json!({
            "id": 3,
            "amount": 79.98,
            "taxAmount": 10.4,
            "totalAmount": 90.38,
            "currency": "USD",
            "method": "card",
            "provider": "mock",
            "status": "completed",
            "receiptNumber": "LC-20240101-ABC123",
            "cardBrand": "visa",
            "cardLast4": "4242",
            "billingName": "Ada Parent",
            "billingEmail": "ada@example.com",
            "createdAt": "2024-01-01T10:30:00Z",
            "user": {"id": 1}
        }))
        .unwrap()
    }

    #[test]
    fn deserializes_backend_payment_ignoring_nested_user() {
        let payment = sample();
        assert_eq!(payment.id, PaymentId::new(3));
        assert_eq!(payment.total_amount, "90.38".parse::<Decimal>().unwrap());
        assert_eq!(
            payment.created_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap())
        );
    }

    #[test]
    fn receipt_text_lists_amounts_and_card() {
        let text = sample().receipt_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Learn2Code Receipt");
        assert_eq!(lines[1], "Receipt #: LC-20240101-ABC123");
        assert_eq!(lines[2], "Date: 2024-01-01 10:30:00 UTC");
        assert_eq!(lines[3], "Method: VISA •••• 4242");
        assert_eq!(lines[4], "Subtotal: USD 79.98");
        assert_eq!(lines[5], "Tax: USD 10.40");
        assert_eq!(lines[6], "Total: USD 90.38");
        assert_eq!(lines[7], "Billed to: Ada Parent <ada@example.com>");
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "");
        assert_eq!(lines[10], "Thank you for your purchase!");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn receipt_lists_purchased_courses() {
        let mut payment = sample();
        payment.courses = vec![
            Course::new(CourseId::new(1), "Scratch Basics", "39.99".parse().unwrap()),
            Course::new(CourseId::new(2), "Python Jr", "39.99".parse().unwrap()),
        ];

        let text = payment.receipt_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[7], "Billed to: Ada Parent <ada@example.com>");
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "Courses:");
        assert_eq!(lines[10], " - Scratch Basics (USD 39.99)");
        assert_eq!(lines[11], " - Python Jr (USD 39.99)");
        assert_eq!(lines[12], "");
        assert_eq!(lines[13], "Thank you for your purchase!");
    }

    #[test]
    fn courses_are_read_from_backend_payment() {
        let payment: Payment = serde_json::from_value(serde_json::json!({
            "id": 4,
            "amount": 20,
            "totalAmount": 22.6,
            "receiptNumber": "LC-2",
            "courses": [{"id": 3, "title": "Web", "price": 20}]
        }))
        .unwrap();

        assert_eq!(payment.courses.len(), 1);
        assert_eq!(payment.courses[0].id, CourseId::new(3));
        assert!(payment.receipt_text().contains(" - Web (USD 20.00)\n"));
    }

    #[test]
    fn receipt_falls_back_to_method_without_card() {
        let mut payment = sample();
        payment.card_brand = None;
        payment.card_last4 = None;
        payment.created_at = None;

        let text = payment.receipt_text();
        assert!(text.contains("Method: card\n"));
        assert!(text.contains("Date: -\n"));
    }
}
