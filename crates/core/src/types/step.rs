//! Checkout step state.

use serde::{Deserialize, Serialize};

/// The three steps of the checkout flow.
///
/// Strictly forward-advancing within one checkout session; re-opening
/// checkout resets to [`Shipping`](Self::Shipping). Drives the
/// step-indicator display only and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Step 1: shipping form.
    Shipping,
    /// Step 2: payment intent displayed, awaiting the user's assertion.
    Payment,
    /// Step 3: terminal completion state.
    Complete,
}

impl CheckoutStep {
    /// 1-based step number for the step indicator.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Shipping => 1,
            Self::Payment => 2,
            Self::Complete => 3,
        }
    }

    /// Whether this is the terminal step.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers() {
        assert_eq!(CheckoutStep::Shipping.number(), 1);
        assert_eq!(CheckoutStep::Payment.number(), 2);
        assert_eq!(CheckoutStep::Complete.number(), 3);
    }

    #[test]
    fn test_steps_are_ordered_forward() {
        assert!(CheckoutStep::Shipping < CheckoutStep::Payment);
        assert!(CheckoutStep::Payment < CheckoutStep::Complete);
    }

    #[test]
    fn test_only_complete_is_terminal() {
        assert!(!CheckoutStep::Shipping.is_terminal());
        assert!(!CheckoutStep::Payment.is_terminal());
        assert!(CheckoutStep::Complete.is_terminal());
    }
}
