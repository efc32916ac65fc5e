//! Cart line items and totals.

use serde::{Deserialize, Serialize};

/// A single line in the shopping cart.
///
/// Lines are keyed by `(id, name)`: adding the same product again merges
/// into the existing line by incrementing its quantity. Quantity is always
/// at least 1 - removing the last unit removes the line itself rather than
/// leaving a zero-quantity entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product identifier (e.g., "basic", "decorative", "premium").
    pub id: String,
    /// Display name of the product.
    pub name: String,
    /// Unit price in whole rupees.
    pub price: u64,
    /// Number of units, always >= 1.
    pub qty: u32,
}

impl CartLineItem {
    /// Total price for this line (`price * qty`).
    #[must_use]
    pub const fn line_total(&self) -> u64 {
        self.price * self.qty as u64
    }

    /// Whether this line matches the given `(id, name)` merge key.
    #[must_use]
    pub fn matches(&self, id: &str, name: &str) -> bool {
        self.id == id && self.name == name
    }
}

/// Aggregate totals over a sequence of cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of quantities across all lines.
    pub total_items: u32,
    /// Sum of `price * qty` across all lines, in whole rupees.
    pub total_price: u64,
}

/// Compute totals from the full line list.
///
/// Always recomputed from scratch so the result cannot drift from the
/// lines it describes.
#[must_use]
pub fn cart_totals(items: &[CartLineItem]) -> CartTotals {
    let mut totals = CartTotals::default();
    for item in items {
        totals.total_items += item.qty;
        totals.total_price += item.line_total();
    }
    totals
}
