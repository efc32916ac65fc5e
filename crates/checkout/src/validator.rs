//! Shipping form validation.
//!
//! Scans every field (no short-circuit on the first failure) so the user
//! sees all problems at once, and records the first invalid field so the
//! front end can focus it.

use dandiya_store_core::{Email, PhoneNumber, Pincode};

/// Validation rule applied to a form field beyond the required check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Required, no further shape constraint.
    Text,
    /// Must parse as an email address.
    Email,
    /// Must parse as an Indian mobile number.
    Phone,
    /// Must parse as a 6-digit pincode.
    Pincode,
}

/// One labeled field of the shipping form with its raw input.
#[derive(Debug, Clone)]
pub struct FormField {
    /// Label shown next to the input, used in error messages.
    pub label: String,
    /// Raw input value.
    pub value: String,
    /// Validation rule for this field.
    pub kind: FieldKind,
}

impl FormField {
    /// Build a form field.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            kind,
        }
    }
}

/// An error attached to a single failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Index of the field in the submitted sequence.
    pub index: usize,
    /// The field's label.
    pub label: String,
    /// Message shown inline under the field.
    pub message: String,
}

/// The outcome of validating a form.
///
/// Each validation run starts from a clean slate; previously attached
/// errors never carry over.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Whether every field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// One error per failing field, in field order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Index of the first invalid field, for focus.
    #[must_use]
    pub fn first_invalid(&self) -> Option<usize> {
        self.errors.first().map(|error| error.index)
    }
}

/// Validate the shipping form fields.
#[must_use]
pub fn validate(fields: &[FormField]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (index, field) in fields.iter().enumerate() {
        let value = field.value.trim();

        let message = if value.is_empty() {
            Some(format!("{} is required", field.label))
        } else {
            match field.kind {
                FieldKind::Text => None,
                FieldKind::Email => Email::parse(value)
                    .err()
                    .map(|_| "Please enter a valid email address".to_string()),
                FieldKind::Phone => PhoneNumber::parse(value)
                    .err()
                    .map(|_| "Please enter a valid phone number".to_string()),
                FieldKind::Pincode => Pincode::parse(value)
                    .err()
                    .map(|_| "Please enter a valid 6-digit pincode".to_string()),
            }
        };

        if let Some(message) = message {
            report.errors.push(FieldError {
                index,
                label: field.label.clone(),
                message,
            });
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipping_form(email: &str, phone: &str, pincode: &str) -> Vec<FormField> {
        vec![
            FormField::new("Full Name", "Asha Patel", FieldKind::Text),
            FormField::new("Email", email, FieldKind::Email),
            FormField::new("Phone", phone, FieldKind::Phone),
            FormField::new("Address", "12 MG Road", FieldKind::Text),
            FormField::new("Pincode", pincode, FieldKind::Pincode),
        ]
    }

    #[test]
    fn test_all_valid() {
        let report = validate(&shipping_form("abc@xyz.com", "9876543210", "400001"));
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
        assert_eq!(report.first_invalid(), None);
    }

    #[test]
    fn test_empty_required_field_yields_one_error() {
        let fields = vec![FormField::new("Full Name", "   ", FieldKind::Text)];
        let report = validate(&fields);

        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.errors()[0].message, "Full Name is required");
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate(&shipping_form("abc@xyz.com", "9876543210", "400001")).is_valid());

        let report = validate(&shipping_form("abc@xyz", "9876543210", "400001"));
        assert!(!report.is_valid());
        assert_eq!(
            report.errors()[0].message,
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_phone_shapes() {
        assert!(validate(&shipping_form("abc@xyz.com", "9876543210", "400001")).is_valid());

        let report = validate(&shipping_form("abc@xyz.com", "1234567890", "400001"));
        assert!(!report.is_valid());
        assert_eq!(
            report.errors()[0].message,
            "Please enter a valid phone number"
        );
    }

    #[test]
    fn test_pincode_shapes() {
        assert!(validate(&shipping_form("abc@xyz.com", "9876543210", "400001")).is_valid());

        let report = validate(&shipping_form("abc@xyz.com", "9876543210", "012345"));
        assert!(!report.is_valid());
        assert_eq!(
            report.errors()[0].message,
            "Please enter a valid 6-digit pincode"
        );
    }

    #[test]
    fn test_scans_all_fields_without_short_circuit() {
        let report = validate(&shipping_form("", "123", "00"));
        let messages: Vec<_> = report.errors().iter().map(|e| e.message.as_str()).collect();

        assert_eq!(
            messages,
            vec![
                "Email is required",
                "Please enter a valid phone number",
                "Please enter a valid 6-digit pincode",
            ]
        );
    }

    #[test]
    fn test_first_invalid_points_at_earliest_failure() {
        let report = validate(&shipping_form("abc@xyz.com", "bad", "bad"));
        assert_eq!(report.first_invalid(), Some(2));
    }

    #[test]
    fn test_revalidation_starts_clean() {
        let bad = validate(&shipping_form("", "", ""));
        assert_eq!(bad.errors().len(), 3);

        // A fresh run over corrected input carries nothing over.
        let good = validate(&shipping_form("abc@xyz.com", "9876543210", "400001"));
        assert!(good.is_valid());
    }
}
