//! Dandiya Store Checkout - client-side cart and checkout flow.
//!
//! This crate holds everything that runs on the shopper's side of the
//! store: the cart with its local persistence, the shipping-form
//! validator, the payment-intent requester, and the three-step checkout
//! state machine with its order relay.
//!
//! Browser concerns are injected as ports so the whole flow is testable
//! headless:
//!
//! - [`storage::Storage`] - the local key-value persistence backend
//! - [`notify::Notifier`] - the toast notification sink
//! - [`flow::UpiLauncher`] - the UPI deep-link handoff
//!
//! # Modules
//!
//! - [`cart`] - Cart store with persistence and totals
//! - [`catalog`] - The product catalog and quantity controls
//! - [`customer`] - Local login and customer-info cache
//! - [`validator`] - Shipping form validation
//! - [`intent`] - Payment-intent HTTP client
//! - [`relay`] - Order-intake relay HTTP client
//! - [`flow`] - The checkout state machine
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use dandiya_store_checkout::cart::CartStore;
//! use dandiya_store_checkout::flow::CheckoutFlow;
//! use dandiya_store_checkout::intent::PaymentIntentClient;
//! use dandiya_store_checkout::notify::TracingNotifier;
//! use dandiya_store_checkout::relay::OrderRelayClient;
//! use dandiya_store_checkout::storage::MemoryStorage;
//!
//! let notifier = Arc::new(TracingNotifier);
//! let mut cart = CartStore::load(Arc::new(MemoryStorage::new()), notifier.clone());
//! cart.add_item("basic", "Basic Dandiya (Pair)", 99, 2);
//!
//! let mut flow = CheckoutFlow::new(
//!     PaymentIntentClient::new("http://localhost:3001"),
//!     OrderRelayClient::new("https://relay.example/f/orders"),
//!     notifier,
//! );
//! let summary = flow.open(&cart);
//! assert_eq!(summary, vec!["Basic Dandiya (Pair) (x2) - ₹198".to_string()]);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod customer;
pub mod flow;
pub mod intent;
pub mod notify;
pub mod relay;
pub mod storage;
pub mod validator;
