//! The checkout state machine.
//!
//! Three strictly forward-advancing steps: shipping form, payment intent,
//! completion. Re-opening checkout resets to the shipping step. The
//! completion assertion is trusted on the user's word - there is no
//! server-side payment verification - and the order relay submission is
//! attempted unconditionally but never blocks the cart clear that follows.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use dandiya_store_core::{CheckoutStep, PaymentIntentDescriptor};

use crate::cart::CartStore;
use crate::catalog::Product;
use crate::intent::{IntentError, PaymentIntentClient};
use crate::notify::{Notice, Notifier};
use crate::relay::{OrderRelayClient, RelayError};
use crate::validator::{FormField, ValidationReport, validate};

/// UPI deep-link handoff port.
///
/// Returns whether a handle on the external payment app was obtained. A
/// blocked handoff degrades to the manual-copy fallback rather than being
/// retried.
pub trait UpiLauncher {
    /// Attempt to open the payment app with the given deep link.
    fn launch(&self, upi_url: &str) -> bool;
}

/// Fixed delays for staged transitions.
///
/// Fire-and-forget and not cancelable; a second trigger before a delay
/// elapses may overlap visually but cannot corrupt the cart, which is
/// rewritten in full on every save.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutDelays {
    /// Pause between "buy now" adding to the cart and checkout opening,
    /// so the confirmation notice is seen.
    pub open_after_buy_now: Duration,
    /// Pause before checkout opens for an existing cart line.
    pub open_from_cart: Duration,
    /// Pause between the completion assertion and the cart clear.
    pub clear_after_confirm: Duration,
}

impl CheckoutDelays {
    /// No delays; used by tests.
    pub const NONE: Self = Self {
        open_after_buy_now: Duration::ZERO,
        open_from_cart: Duration::ZERO,
        clear_after_confirm: Duration::ZERO,
    };
}

impl Default for CheckoutDelays {
    fn default() -> Self {
        Self {
            open_after_buy_now: Duration::from_secs(1),
            open_from_cart: Duration::from_millis(500),
            clear_after_confirm: Duration::from_secs(2),
        }
    }
}

/// Errors that can block progression through checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The shipping form did not validate; the report carries per-field
    /// errors.
    #[error("form validation failed")]
    Validation(ValidationReport),

    /// The payment-intent fetch failed; the step is left unchanged so the
    /// user may retry.
    #[error(transparent)]
    Intent(#[from] IntentError),

    /// Checkout already reached the terminal step; re-open to start over.
    #[error("checkout is already complete")]
    AlreadyComplete,
}

/// The checkout flow: step state, payment intent, and completion effects.
pub struct CheckoutFlow {
    intent: PaymentIntentClient,
    relay: OrderRelayClient,
    notifier: Arc<dyn Notifier>,
    delays: CheckoutDelays,
    step: CheckoutStep,
    open: bool,
    descriptor: Option<PaymentIntentDescriptor>,
}

impl CheckoutFlow {
    /// Create a flow with the default staged-transition delays.
    #[must_use]
    pub fn new(
        intent: PaymentIntentClient,
        relay: OrderRelayClient,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::with_delays(intent, relay, notifier, CheckoutDelays::default())
    }

    /// Create a flow with explicit delays.
    #[must_use]
    pub fn with_delays(
        intent: PaymentIntentClient,
        relay: OrderRelayClient,
        notifier: Arc<dyn Notifier>,
        delays: CheckoutDelays,
    ) -> Self {
        Self {
            intent,
            relay,
            notifier,
            delays,
            step: CheckoutStep::Shipping,
            open: false,
            descriptor: None,
        }
    }

    /// Current checkout step.
    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Whether the checkout surface is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// The fetched payment intent, once the payment step is reached.
    #[must_use]
    pub const fn descriptor(&self) -> Option<&PaymentIntentDescriptor> {
        self.descriptor.as_ref()
    }

    /// Open checkout, resetting to the shipping step.
    ///
    /// Returns the order summary lines for display.
    pub fn open(&mut self, cart: &CartStore) -> Vec<String> {
        self.step = CheckoutStep::Shipping;
        self.descriptor = None;
        self.open = true;
        order_summary(cart)
    }

    /// Close the checkout surface without completing.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Add a product to the cart and open checkout in one step.
    pub async fn buy_now(
        &mut self,
        cart: &mut CartStore,
        product: &Product,
        qty: u32,
    ) -> Vec<String> {
        cart.add_item(product.id, product.name, product.price, qty);
        // Let the add-to-cart notice land before the checkout opens.
        tokio::time::sleep(self.delays.open_after_buy_now).await;
        self.open(cart)
    }

    /// Open checkout for a line already in the cart.
    ///
    /// Unknown ids are a silent no-op.
    pub async fn buy_now_from_cart(&mut self, cart: &CartStore, id: &str) -> Option<Vec<String>> {
        let name = cart.find(id)?.name.clone();
        self.notifier
            .notify(Notice::success(format!("Proceeding to checkout for {name}!")));
        tokio::time::sleep(self.delays.open_from_cart).await;
        Some(self.open(cart))
    }

    /// Validate the shipping form and fetch the payment intent.
    ///
    /// Advances to the payment step only when both succeed; any failure
    /// leaves the step unchanged so the user may retry.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Validation`] with the per-field report, or
    /// [`CheckoutError::Intent`] when the descriptor fetch fails (also
    /// surfaced to the user as a failure notice).
    pub async fn proceed_to_payment(
        &mut self,
        cart: &CartStore,
        fields: &[FormField],
    ) -> Result<(), CheckoutError> {
        if self.step.is_terminal() {
            return Err(CheckoutError::AlreadyComplete);
        }

        let report = validate(fields);
        if !report.is_valid() {
            return Err(CheckoutError::Validation(report));
        }

        let total = cart.totals().total_price;
        match self.intent.fetch(total).await {
            Ok(descriptor) => {
                self.descriptor = Some(descriptor);
                self.step = CheckoutStep::Payment;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "payment intent fetch failed");
                self.notifier
                    .notify(Notice::error(format!("Payment setup failed: {e}")));
                Err(e.into())
            }
        }
    }

    /// Hand the deep link to the payment app.
    ///
    /// Returns whether the handoff obtained a handle. A blocked handoff
    /// points the user at the manual-copy fallback instead of retrying.
    pub fn launch_upi_app(&self, launcher: &dyn UpiLauncher) -> bool {
        let Some(descriptor) = &self.descriptor else {
            tracing::debug!("no payment intent to launch");
            return false;
        };

        if launcher.launch(&descriptor.upi_url) {
            self.notifier
                .notify(Notice::success("Opening UPI app to complete payment..."));
            true
        } else {
            tracing::warn!("UPI deep-link handoff blocked");
            self.notifier.notify(Notice::error(
                "UPI app launch was blocked. Copy the UPI ID and pay manually.",
            ));
            false
        }
    }

    /// The payee's UPI id, extracted from the deep link for the
    /// copy-to-clipboard fallback.
    #[must_use]
    pub fn payment_id(&self) -> Option<String> {
        let descriptor = self.descriptor.as_ref()?;
        let url = Url::parse(&descriptor.upi_url).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "pa")
            .map(|(_, value)| value.into_owned())
    }

    /// Handle the user's assertion that payment is complete.
    ///
    /// Always advances to the terminal step, submits the order to the
    /// relay, and - regardless of the relay outcome - clears the cart
    /// after the fixed delay and closes the checkout surfaces. The
    /// payment happened outside this system, so a relay failure is
    /// reported but never rolls anything back.
    ///
    /// # Errors
    ///
    /// Returns the relay error when the submission failed. The flow has
    /// still completed: the cart is cleared and checkout is closed.
    pub async fn confirm_payment(
        &mut self,
        cart: &mut CartStore,
        shipping_fields: &[FormField],
    ) -> Result<(), RelayError> {
        self.step = CheckoutStep::Complete;

        let total = cart.totals().total_price;
        let result = self
            .relay
            .submit_order(shipping_fields, cart.items(), total)
            .await;

        match &result {
            Ok(()) => {
                self.notifier.notify(Notice::success(
                    "Thank you for your payment! Your order has been placed successfully.",
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "order relay submission failed");
                self.notifier.notify(Notice::error(
                    "Payment confirmed but failed to process order details. Please contact support.",
                ));
            }
        }

        tokio::time::sleep(self.delays.clear_after_confirm).await;
        cart.clear();
        self.descriptor = None;
        self.open = false;

        result
    }
}

/// Order summary lines, one per cart line.
fn order_summary(cart: &CartStore) -> Vec<String> {
    cart.items()
        .iter()
        .map(|item| format!("{} (x{}) - ₹{}", item.name, item.qty, item.line_total()))
        .collect()
}
