//! Payment intent descriptor.

use serde::{Deserialize, Serialize};

/// A server-constructed UPI payment intent.
///
/// Built per request and never persisted. The payee's raw UPI id is only
/// ever embedded inside [`upi_url`](Self::upi_url), never exposed as a
/// standalone field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentDescriptor {
    /// Human-readable payee display name.
    pub payee_name: String,
    /// Amount to pay, in whole rupees.
    pub amount: u64,
    /// Transaction note shown in the payment app.
    pub transaction_note: String,
    /// `upi://pay` deep link carrying payee id, name, amount, currency,
    /// and note.
    pub upi_url: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let descriptor = PaymentIntentDescriptor {
            payee_name: "Navratri Store".to_string(),
            amount: 500,
            transaction_note: "Navratri Store Purchase - ₹500".to_string(),
            upi_url: "upi://pay?pa=store@upi&pn=Navratri%20Store&am=500&cu=INR&tn=note"
                .to_string(),
        };

        let json = serde_json::to_string(&descriptor).unwrap();
        assert!(json.contains("\"payeeName\""));
        assert!(json.contains("\"transactionNote\""));
        assert!(json.contains("\"upiUrl\""));
        assert!(json.contains("\"amount\":500"));
    }

    #[test]
    fn test_deserialize_from_wire_shape() {
        let json = r#"{
            "payeeName": "Navratri Store",
            "amount": 500,
            "transactionNote": "Navratri Store Purchase - ₹500",
            "upiUrl": "upi://pay?pa=store@upi&pn=Navratri%20Store&am=500&cu=INR&tn=note"
        }"#;

        let descriptor: PaymentIntentDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.payee_name, "Navratri Store");
        assert_eq!(descriptor.amount, 500);
    }
}
