//! Cart store with local persistence.
//!
//! The cart is an ordered list of lines keyed by `(id, name)`, mirrored to
//! the storage port after every mutation. All mutations run on the one
//! logical user thread, so the store needs no internal locking.

use std::sync::Arc;

use dandiya_store_core::{CartLineItem, CartTotals, cart_totals};

use crate::notify::{Notice, Notifier};
use crate::storage::Storage;

/// Storage key under which the serialized cart lives.
pub const CART_STORAGE_KEY: &str = "cart";

/// The shopper's cart, with persistence and notification side effects.
pub struct CartStore {
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
    items: Vec<CartLineItem>,
}

impl CartStore {
    /// Load the cart from storage.
    ///
    /// Absent or unparseable stored data yields an empty cart; corruption
    /// is a debug-level event, never a user-visible error.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>, notifier: Arc<dyn Notifier>) -> Self {
        let items = match storage.get(CART_STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "stored cart unparseable, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::debug!(error = %e, "cart storage unreadable, starting empty");
                Vec::new()
            }
        };

        Self {
            storage,
            notifier,
            items,
        }
    }

    /// The current cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `qty` units of a product to the cart.
    ///
    /// Merges into an existing `(id, name)` line by incrementing its
    /// quantity, otherwise appends a new line. Quantity controls clamp at
    /// 1, so a zero quantity is treated as 1. Persists the cart and shows
    /// a confirmation notice.
    pub fn add_item(&mut self, id: &str, name: &str, price: u64, qty: u32) -> CartTotals {
        let qty = qty.max(1);

        if let Some(existing) = self.items.iter_mut().find(|item| item.matches(id, name)) {
            existing.qty += qty;
        } else {
            self.items.push(CartLineItem {
                id: id.to_string(),
                name: name.to_string(),
                price,
                qty,
            });
        }

        self.save();
        self.notifier
            .notify(Notice::success(format!("{name} added to cart!")));
        self.totals()
    }

    /// Remove every line matching `id`. Unknown ids are a no-op.
    pub fn remove_item(&mut self, id: &str) -> CartTotals {
        self.items.retain(|item| item.id != id);
        self.save();
        self.totals()
    }

    /// Empty the cart. Used after checkout completion.
    pub fn clear(&mut self) {
        self.items.clear();
        self.save();
    }

    /// Totals recomputed from the full line list.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        cart_totals(&self.items)
    }

    /// Find a line by product id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Mirror the full cart to storage.
    ///
    /// A write failure is logged and otherwise ignored; the in-memory
    /// cart stays authoritative for the rest of the session.
    fn save(&self) {
        let serialized = match serde_json::to_string(&self.items) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize cart");
                return;
            }
        };
        if let Err(e) = self.storage.set(CART_STORAGE_KEY, &serialized) {
            tracing::warn!(error = %e, "failed to persist cart");
        }
    }
}
