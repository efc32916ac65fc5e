//! The product catalog and quantity controls.

/// A product available in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    /// Stable product identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Unit price in whole rupees.
    pub price: u64,
}

/// Every product the store sells.
pub const PRODUCTS: [Product; 3] = [
    Product {
        id: "basic",
        name: "Basic Dandiya (Pair)",
        price: 99,
    },
    Product {
        id: "decorative",
        name: "Decorative Dandiya (Pair)",
        price: 149,
    },
    Product {
        id: "premium",
        name: "Premium Dandiya (Pair)",
        price: 199,
    },
];

/// Look up a product by id.
#[must_use]
pub fn product_by_id(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.id == id)
}

/// Apply a +/- step from a quantity control, clamping at a minimum of 1.
#[must_use]
pub fn adjust_quantity(qty: u32, delta: i32) -> u32 {
    let adjusted = i64::from(qty) + i64::from(delta);
    u32::try_from(adjusted.max(1)).unwrap_or(u32::MAX)
}

impl Product {
    /// Display price for `qty` units of this product.
    #[must_use]
    pub const fn line_price(&self, qty: u32) -> u64 {
        self.price * qty as u64
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_seeded_products() {
        assert_eq!(PRODUCTS.len(), 3);
        assert_eq!(product_by_id("basic").map(|p| p.price), Some(99));
        assert_eq!(product_by_id("decorative").map(|p| p.price), Some(149));
        assert_eq!(product_by_id("premium").map(|p| p.price), Some(199));
    }

    #[test]
    fn test_unknown_product() {
        assert!(product_by_id("deluxe").is_none());
    }

    #[test]
    fn test_adjust_quantity_steps() {
        assert_eq!(adjust_quantity(1, 1), 2);
        assert_eq!(adjust_quantity(3, -1), 2);
    }

    #[test]
    fn test_adjust_quantity_clamps_at_one() {
        assert_eq!(adjust_quantity(1, -1), 1);
        assert_eq!(adjust_quantity(2, -5), 1);
    }

    #[test]
    fn test_line_price() {
        let premium = product_by_id("premium").unwrap();
        assert_eq!(premium.line_price(2), 398);
    }
}
