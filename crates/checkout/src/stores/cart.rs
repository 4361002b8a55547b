//! Cart contents.

use rust_decimal::Decimal;

use quickcart_core::{CartItem, CartItemId};

/// Items in the buyer's cart, in insertion order, at most one per id.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// A cart holding `items`, with later duplicates of an id ignored.
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.add_item(item);
        }
        cart
    }

    /// Append an item unless one with the same id is already present.
    ///
    /// The first add wins; a later add with the same id does not update it.
    pub fn add_item(&mut self, item: CartItem) {
        if self.contains(item.id) {
            tracing::debug!(item_id = %item.id, "Item already in cart");
            return;
        }
        tracing::debug!(item_id = %item.id, name = %item.name, "Added item to cart");
        self.items.push(item);
    }

    /// Remove the item with `id`, if present.
    pub fn remove_item(&mut self, id: CartItemId) {
        self.items.retain(|item| item.id != id);
    }

    /// Remove every item.
    pub fn clear_cart(&mut self) {
        self.items.clear();
    }

    /// Sum of item prices.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: CartItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }
}
